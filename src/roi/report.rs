use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::catalog::{UseCaseCatalog, UseCaseId};
use crate::config::RoiAssumptions;
use crate::profile::{CompanyProfile, CurrentSituation};
use crate::roi::engine::calculate_roi;
use crate::roi::{RoiProjection, Scenario};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonEntry {
    pub key: String,
    pub use_case: UseCaseId,
    pub scenario: Scenario,
    pub projection: RoiProjection,
}

/// Ordered use-case × scenario comparison. Entries keep insertion order:
/// requested use cases first, scenarios in conservative/realistic/optimistic
/// order within each.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComparisonReport {
    pub generated_at: DateTime<Utc>,
    pub entries: Vec<ComparisonEntry>,
}

impl ComparisonReport {
    pub fn get(&self, key: &str) -> Option<&RoiProjection> {
        self.entries
            .iter()
            .find(|entry| entry.key == key)
            .map(|entry| &entry.projection)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.key.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

pub fn comparison_key(use_case: UseCaseId, scenario: Scenario) -> String {
    format!("{}_{}", use_case.as_slug(), scenario.as_slug())
}

pub fn generate_comparison_report(
    catalog: &UseCaseCatalog,
    company: &CompanyProfile,
    situation: &CurrentSituation,
    use_case_ids: &[UseCaseId],
    assumptions: &RoiAssumptions,
) -> ComparisonReport {
    let mut entries = Vec::with_capacity(use_case_ids.len() * Scenario::ALL.len());
    for id in use_case_ids {
        let Some(use_case) = catalog.by_id(*id) else {
            warn!("use case not found in catalog: {id}");
            continue;
        };
        for scenario in Scenario::ALL {
            entries.push(ComparisonEntry {
                key: comparison_key(*id, scenario),
                use_case: *id,
                scenario,
                projection: calculate_roi(company, situation, use_case, scenario, assumptions),
            });
        }
    }
    ComparisonReport {
        generated_at: Utc::now(),
        entries,
    }
}

#[cfg(test)]
mod tests {
    use super::{comparison_key, generate_comparison_report};
    use crate::catalog::{UseCaseCatalog, UseCaseId};
    use crate::config::RoiAssumptions;
    use crate::profile::{CompanyProfile, CurrentSituation};
    use crate::roi::Scenario;

    #[test]
    fn keys_follow_request_and_scenario_order() {
        let catalog = UseCaseCatalog::with_defaults();
        let report = generate_comparison_report(
            &catalog,
            &CompanyProfile::sample(),
            &CurrentSituation::sample(),
            &[UseCaseId::Chatbot, UseCaseId::DocProcessing],
            &RoiAssumptions::default(),
        );

        let keys: Vec<&str> = report.keys().collect();
        assert_eq!(
            keys,
            vec![
                "chatbot_conservative",
                "chatbot_realistic",
                "chatbot_optimistic",
                "doc_processing_conservative",
                "doc_processing_realistic",
                "doc_processing_optimistic",
            ]
        );
    }

    #[test]
    fn lookup_by_key_returns_matching_projection() {
        let catalog = UseCaseCatalog::with_defaults();
        let report = generate_comparison_report(
            &catalog,
            &CompanyProfile::sample(),
            &CurrentSituation::sample(),
            &[UseCaseId::PredictiveAnalytics],
            &RoiAssumptions::default(),
        );

        let key = comparison_key(UseCaseId::PredictiveAnalytics, Scenario::Optimistic);
        let projection = report.get(&key).unwrap();
        assert_eq!(projection.use_case, UseCaseId::PredictiveAnalytics);
        assert_eq!(projection.scenario, Scenario::Optimistic);
        assert!(report.get("chatbot_realistic").is_none());
    }

    #[test]
    fn unknown_ids_are_skipped_without_error() {
        // A trimmed catalog: only the chatbot entry survives.
        let seeded = UseCaseCatalog::with_defaults();
        let chatbot = seeded.by_id(UseCaseId::Chatbot).unwrap().clone();
        let catalog = UseCaseCatalog::new(vec![chatbot]);

        let report = generate_comparison_report(
            &catalog,
            &CompanyProfile::sample(),
            &CurrentSituation::sample(),
            &[UseCaseId::DocProcessing, UseCaseId::Chatbot],
            &RoiAssumptions::default(),
        );
        let keys: Vec<&str> = report.keys().collect();
        assert_eq!(
            keys,
            vec![
                "chatbot_conservative",
                "chatbot_realistic",
                "chatbot_optimistic",
            ]
        );
    }

    #[test]
    fn every_requested_use_case_gets_three_scenarios() {
        let catalog = UseCaseCatalog::with_defaults();
        let requested = UseCaseId::ALL;
        let report = generate_comparison_report(
            &catalog,
            &CompanyProfile::sample(),
            &CurrentSituation::sample(),
            &requested,
            &RoiAssumptions::default(),
        );
        assert_eq!(report.len(), requested.len() * Scenario::ALL.len());
    }
}
