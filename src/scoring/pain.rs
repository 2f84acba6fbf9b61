use crate::profile::CurrentSituation;
use crate::scoring::PainScores;

/// Saturation points for the normalized terms. Inputs beyond these values
/// still contribute proportionally to the raw weighted sum; only the
/// dimension total is clamped to 1.0.
pub const PROCESSING_TIME_SATURATION_MINUTES: f64 = 60.0;
pub const RESPONSE_TIME_SATURATION_HOURS: f64 = 48.0;
pub const SCALING_RESPONSE_SATURATION_HOURS: f64 = 24.0;
pub const TICKET_VOLUME_SATURATION: f64 = 1000.0;

pub fn compute_pain_scores(situation: &CurrentSituation) -> PainScores {
    let efficiency = (situation.manual_work_percentage / 100.0) * 0.4
        + (situation.processing_time_per_task / PROCESSING_TIME_SATURATION_MINUTES) * 0.3
        + (situation.error_rate / 100.0) * 0.3;

    let customer_service = (situation.avg_response_time / RESPONSE_TIME_SATURATION_HOURS) * 0.5
        + ((100.0 - situation.customer_satisfaction) / 100.0) * 0.5;

    let scaling = (f64::from(situation.support_tickets_per_month) / TICKET_VOLUME_SATURATION)
        * 0.6
        + (situation.avg_response_time / SCALING_RESPONSE_SATURATION_HOURS) * 0.4;

    PainScores {
        efficiency: efficiency.min(1.0),
        customer_service: customer_service.min(1.0),
        scaling: scaling.min(1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::compute_pain_scores;
    use crate::profile::CurrentSituation;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn scores_match_formula_for_sample_situation() {
        let situation = CurrentSituation::sample();
        let scores = compute_pain_scores(&situation);

        let expected_efficiency = (40.0 / 100.0) * 0.4 + (45.0 / 60.0) * 0.3 + (8.0 / 100.0) * 0.3;
        let expected_customer = (36.0 / 48.0) * 0.5 + ((100.0 - 65.0) / 100.0) * 0.5;

        assert!((scores.efficiency - expected_efficiency).abs() < EPSILON);
        assert!((scores.customer_service - expected_customer).abs() < EPSILON);
        // 800 tickets and 36h response push the raw scaling sum past 1.0.
        assert_eq!(scores.scaling, 1.0);
    }

    #[test]
    fn dimension_totals_are_clamped_to_one() {
        let situation = CurrentSituation {
            manual_work_percentage: 100.0,
            processing_time_per_task: 600.0,
            error_rate: 100.0,
            avg_response_time: 96.0,
            customer_satisfaction: 0.0,
            support_tickets_per_month: 10_000,
            ..CurrentSituation::default()
        };
        let scores = compute_pain_scores(&situation);
        assert_eq!(scores.efficiency, 1.0);
        assert_eq!(scores.customer_service, 1.0);
        assert_eq!(scores.scaling, 1.0);
    }

    #[test]
    fn calm_situation_scores_low() {
        let situation = CurrentSituation {
            manual_work_percentage: 5.0,
            processing_time_per_task: 5.0,
            error_rate: 1.0,
            avg_response_time: 1.0,
            customer_satisfaction: 98.0,
            support_tickets_per_month: 20,
            ..CurrentSituation::default()
        };
        let scores = compute_pain_scores(&situation);
        for (dimension, score) in scores.iter() {
            assert!(
                (0.0..=0.2).contains(&score),
                "{dimension} unexpectedly high: {score}"
            );
        }
    }
}
