use anyhow::Result;

use crate::roi::report::ComparisonReport;
use crate::scoring::Recommendation;

pub fn recommendations_to_csv(recommendations: &[Recommendation]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "use_case",
        "name",
        "category",
        "score",
        "industry_fit",
        "pain_relevance",
    ])?;
    for rec in recommendations {
        writer.write_record([
            rec.use_case.to_string(),
            rec.name.clone(),
            rec.category.to_string(),
            format!("{:.4}", rec.score),
            format!("{:.4}", rec.industry_fit),
            format!("{:.4}", rec.pain_relevance),
        ])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

pub fn comparison_to_csv(report: &ComparisonReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);
    writer.write_record([
        "key",
        "use_case",
        "scenario",
        "total_investment",
        "total_annual_benefit",
        "roi_percentage",
        "payback_months",
        "net_present_value",
        "effectiveness_factor",
    ])?;
    for entry in &report.entries {
        let p = &entry.projection;
        writer.write_record([
            entry.key.clone(),
            p.use_case.to_string(),
            entry.scenario.to_string(),
            format!("{:.2}", p.total_investment),
            format!("{:.2}", p.total_annual_benefit),
            p.roi_percentage
                .map(|v| format!("{v:.2}"))
                .unwrap_or_default(),
            if p.payback_months.is_finite() {
                format!("{:.2}", p.payback_months)
            } else {
                String::new()
            },
            format!("{:.2}", p.net_present_value),
            format!("{:.4}", p.effectiveness_factor),
        ])?;
    }
    let data = writer.into_inner()?;
    Ok(String::from_utf8_lossy(&data).to_string())
}

#[cfg(test)]
mod tests {
    use super::comparison_to_csv;
    use crate::catalog::{UseCaseCatalog, UseCaseId};
    use crate::config::RoiAssumptions;
    use crate::profile::{CompanyProfile, CurrentSituation};
    use crate::roi::report::generate_comparison_report;

    #[test]
    fn comparison_csv_has_one_row_per_entry() {
        let catalog = UseCaseCatalog::with_defaults();
        let report = generate_comparison_report(
            &catalog,
            &CompanyProfile::sample(),
            &CurrentSituation::sample(),
            &[UseCaseId::Chatbot],
            &RoiAssumptions::default(),
        );
        let rendered = comparison_to_csv(&report).unwrap();
        let lines: Vec<&str> = rendered.trim_end().lines().collect();
        assert_eq!(lines.len(), 1 + report.len());
        assert!(lines[1].starts_with("chatbot_conservative,chatbot,conservative,"));
    }
}
