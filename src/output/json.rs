use anyhow::Result;
use serde::Serialize;

pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

#[cfg(test)]
mod tests {
    use super::render_json;
    use crate::scoring::PainScores;

    #[test]
    fn renders_scores_with_snake_case_keys() {
        let scores = PainScores {
            efficiency: 0.4,
            customer_service: 0.55,
            scaling: 1.0,
        };
        let rendered = render_json(&scores).unwrap();
        assert!(rendered.contains("\"customer_service\": 0.55"));
        assert!(rendered.contains("\"scaling\": 1.0"));
    }
}
