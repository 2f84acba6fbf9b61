pub mod pain;
pub mod recommend;

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::catalog::{UseCaseCategory, UseCaseId};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum PainDimension {
    Efficiency,
    CustomerService,
    Scaling,
}

impl PainDimension {
    pub const ALL: [PainDimension; 3] = [
        PainDimension::Efficiency,
        PainDimension::CustomerService,
        PainDimension::Scaling,
    ];

    pub fn as_slug(&self) -> &'static str {
        match self {
            Self::Efficiency => "efficiency",
            Self::CustomerService => "customer_service",
            Self::Scaling => "scaling",
        }
    }
}

impl Display for PainDimension {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_slug())
    }
}

/// Normalized pressure per problem area, each in [0, 1].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PainScores {
    pub efficiency: f64,
    pub customer_service: f64,
    pub scaling: f64,
}

impl PainScores {
    pub fn get(&self, dimension: PainDimension) -> f64 {
        match dimension {
            PainDimension::Efficiency => self.efficiency,
            PainDimension::CustomerService => self.customer_service,
            PainDimension::Scaling => self.scaling,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PainDimension, f64)> + '_ {
        PainDimension::ALL
            .iter()
            .map(|dimension| (*dimension, self.get(*dimension)))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub use_case: UseCaseId,
    pub name: String,
    pub category: UseCaseCategory,
    pub score: f64,
    pub industry_fit: f64,
    pub pain_relevance: f64,
}
