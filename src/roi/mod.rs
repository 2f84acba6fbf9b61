pub mod engine;
pub mod npv;
pub mod report;

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::UseCaseId;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    Conservative,
    Realistic,
    Optimistic,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::Conservative,
        Scenario::Realistic,
        Scenario::Optimistic,
    ];

    pub fn as_slug(&self) -> &'static str {
        match self {
            Self::Conservative => "conservative",
            Self::Realistic => "realistic",
            Self::Optimistic => "optimistic",
        }
    }
}

impl Default for Scenario {
    fn default() -> Self {
        Self::Realistic
    }
}

impl Display for Scenario {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_slug())
    }
}

#[derive(Debug, Error)]
#[error("unknown scenario: {0} (expected conservative, realistic, or optimistic)")]
pub struct ScenarioParseError(pub String);

impl FromStr for Scenario {
    type Err = ScenarioParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "conservative" => Ok(Self::Conservative),
            "realistic" => Ok(Self::Realistic),
            "optimistic" => Ok(Self::Optimistic),
            _ => Err(ScenarioParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct CostSavings {
    pub time_savings: f64,
    pub error_reduction: f64,
    pub productivity_gain: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RevenueIncrease {
    pub retention_improvement: f64,
    pub conversion_improvement: f64,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoiProjection {
    pub use_case: UseCaseId,
    pub use_case_name: String,
    pub scenario: Scenario,
    pub total_investment: f64,
    pub setup_cost: f64,
    pub annual_operating_cost: f64,
    pub cost_savings: CostSavings,
    pub revenue_increase: RevenueIncrease,
    pub total_annual_benefit: f64,
    /// `None` when the total investment is zero and the ratio is undefined.
    pub roi_percentage: Option<f64>,
    /// `f64::INFINITY` when the annual benefit never repays the investment.
    pub payback_months: f64,
    pub net_present_value: f64,
    pub effectiveness_factor: f64,
}

impl RoiProjection {
    pub fn payback_is_finite(&self) -> bool {
        self.payback_months.is_finite()
    }
}
