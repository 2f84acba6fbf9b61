pub mod seed;

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::profile::Industry;

/// Fit assumed for every industry when an entry declares no explicit mapping.
pub const DEFAULT_INDUSTRY_FIT: f64 = 0.7;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum UseCaseId {
    DocProcessing,
    WorkflowAutomation,
    Chatbot,
    PredictiveAnalytics,
    PersonalizedRecommendations,
    AutomatedReporting,
}

impl UseCaseId {
    pub const ALL: [UseCaseId; 6] = [
        UseCaseId::DocProcessing,
        UseCaseId::WorkflowAutomation,
        UseCaseId::Chatbot,
        UseCaseId::PredictiveAnalytics,
        UseCaseId::PersonalizedRecommendations,
        UseCaseId::AutomatedReporting,
    ];

    pub fn as_slug(&self) -> &'static str {
        match self {
            Self::DocProcessing => "doc_processing",
            Self::WorkflowAutomation => "workflow_automation",
            Self::Chatbot => "chatbot",
            Self::PredictiveAnalytics => "predictive_analytics",
            Self::PersonalizedRecommendations => "personalized_recommendations",
            Self::AutomatedReporting => "automated_reporting",
        }
    }
}

impl Display for UseCaseId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_slug())
    }
}

#[derive(Debug, Error)]
#[error("unknown use case id: {0}")]
pub struct UseCaseIdParseError(pub String);

impl FromStr for UseCaseId {
    type Err = UseCaseIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        match normalized.as_str() {
            "doc_processing" | "document_processing" => Ok(Self::DocProcessing),
            "workflow_automation" | "workflow" => Ok(Self::WorkflowAutomation),
            "chatbot" => Ok(Self::Chatbot),
            "predictive_analytics" | "predictive" => Ok(Self::PredictiveAnalytics),
            "personalized_recommendations" | "recommendations" => {
                Ok(Self::PersonalizedRecommendations)
            }
            "automated_reporting" | "reporting" => Ok(Self::AutomatedReporting),
            _ => Err(UseCaseIdParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum UseCaseCategory {
    Automation,
    CustomerInteraction,
    DataAnalytics,
}

impl UseCaseCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Automation => "Automatisierung",
            Self::CustomerInteraction => "Kundeninteraktion",
            Self::DataAnalytics => "Datenanalyse",
        }
    }
}

impl Display for UseCaseCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BenefitProfile {
    pub time_savings_percentage: f64,
    pub error_reduction_percentage: f64,
    pub productivity_increase: f64,
    pub customer_satisfaction_increase: f64,
    pub response_time_improvement: f64,
    pub conversion_rate_increase: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiUseCase {
    pub id: UseCaseId,
    pub name: String,
    pub category: UseCaseCategory,
    pub description: String,
    pub setup_cost: f64,
    pub monthly_cost: f64,
    pub benefits: BenefitProfile,
    pub industry_fit: BTreeMap<Industry, f64>,
}

impl AiUseCase {
    pub fn new(
        id: UseCaseId,
        name: &str,
        category: UseCaseCategory,
        description: &str,
        setup_cost: f64,
        monthly_cost: f64,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            category,
            description: description.to_string(),
            setup_cost,
            monthly_cost,
            benefits: BenefitProfile::default(),
            industry_fit: Industry::ALL
                .iter()
                .map(|industry| (*industry, DEFAULT_INDUSTRY_FIT))
                .collect(),
        }
    }

    pub fn with_benefits(mut self, benefits: BenefitProfile) -> Self {
        self.benefits = benefits;
        self
    }

    pub fn with_industry_fit(
        mut self,
        entries: impl IntoIterator<Item = (Industry, f64)>,
    ) -> Self {
        self.industry_fit = entries.into_iter().collect();
        self
    }

    pub fn fit_for(&self, industry: Industry, fallback: f64) -> f64 {
        self.industry_fit.get(&industry).copied().unwrap_or(fallback)
    }

    pub fn annual_operating_cost(&self) -> f64 {
        self.monthly_cost * 12.0
    }

    pub fn total_investment(&self) -> f64 {
        self.setup_cost + self.annual_operating_cost()
    }
}

#[derive(Debug, Clone)]
pub struct UseCaseCatalog {
    use_cases: Vec<AiUseCase>,
}

impl UseCaseCatalog {
    pub fn with_defaults() -> Self {
        Self::new(seed::default_use_cases())
    }

    pub fn new(use_cases: Vec<AiUseCase>) -> Self {
        Self { use_cases }
    }

    pub fn use_cases(&self) -> &[AiUseCase] {
        &self.use_cases
    }

    pub fn by_id(&self, id: UseCaseId) -> Option<&AiUseCase> {
        self.use_cases.iter().find(|uc| uc.id == id)
    }

    pub fn len(&self) -> usize {
        self.use_cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.use_cases.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{AiUseCase, UseCaseCatalog, UseCaseCategory, UseCaseId, DEFAULT_INDUSTRY_FIT};
    use crate::profile::Industry;

    #[test]
    fn parses_use_case_slugs() {
        assert_eq!(
            UseCaseId::from_str("doc_processing").unwrap(),
            UseCaseId::DocProcessing
        );
        assert_eq!(
            UseCaseId::from_str("predictive-analytics").unwrap(),
            UseCaseId::PredictiveAnalytics
        );
        assert!(UseCaseId::from_str("fraud_detection").is_err());
    }

    #[test]
    fn new_entry_defaults_every_industry_fit() {
        let use_case = AiUseCase::new(
            UseCaseId::Chatbot,
            "Chatbot",
            UseCaseCategory::CustomerInteraction,
            "test entry",
            1000.0,
            100.0,
        );
        assert_eq!(use_case.industry_fit.len(), Industry::ALL.len());
        for industry in Industry::ALL {
            assert_eq!(use_case.fit_for(industry, 0.0), DEFAULT_INDUSTRY_FIT);
        }
    }

    #[test]
    fn lookup_by_id_round_trips() {
        let catalog = UseCaseCatalog::with_defaults();
        for id in UseCaseId::ALL {
            let entry = catalog.by_id(id).unwrap();
            assert_eq!(entry.id, id);
        }
    }
}
