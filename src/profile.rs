use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Industry {
    Manufacturing,
    Retail,
    Finance,
    Healthcare,
    Logistics,
    Services,
    It,
    Other,
}

impl Industry {
    pub const ALL: [Industry; 8] = [
        Industry::Manufacturing,
        Industry::Retail,
        Industry::Finance,
        Industry::Healthcare,
        Industry::Logistics,
        Industry::Services,
        Industry::It,
        Industry::Other,
    ];

    pub fn as_slug(&self) -> &'static str {
        match self {
            Self::Manufacturing => "manufacturing",
            Self::Retail => "retail",
            Self::Finance => "finance",
            Self::Healthcare => "healthcare",
            Self::Logistics => "logistics",
            Self::Services => "services",
            Self::It => "it",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Manufacturing => "Produktion",
            Self::Retail => "Einzelhandel",
            Self::Finance => "Finanzwesen",
            Self::Healthcare => "Gesundheitswesen",
            Self::Logistics => "Logistik",
            Self::Services => "Dienstleistungen",
            Self::It => "IT/Software",
            Self::Other => "Sonstiges",
        }
    }
}

impl Display for Industry {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Error)]
#[error("unknown industry: {0}")]
pub struct IndustryParseError(pub String);

impl FromStr for Industry {
    type Err = IndustryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "manufacturing" | "produktion" => Ok(Self::Manufacturing),
            "retail" | "einzelhandel" => Ok(Self::Retail),
            "finance" | "finanzwesen" => Ok(Self::Finance),
            "healthcare" | "gesundheitswesen" => Ok(Self::Healthcare),
            "logistics" | "logistik" => Ok(Self::Logistics),
            "services" | "dienstleistungen" => Ok(Self::Services),
            "it" | "software" | "it/software" => Ok(Self::It),
            "other" | "sonstiges" => Ok(Self::Other),
            _ => Err(IndustryParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum CompanySize {
    Small,
    Medium,
    Large,
    Enterprise,
}

impl CompanySize {
    pub const ALL: [CompanySize; 4] = [
        CompanySize::Small,
        CompanySize::Medium,
        CompanySize::Large,
        CompanySize::Enterprise,
    ];

    pub fn as_slug(&self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
            Self::Enterprise => "enterprise",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Small => "Klein (1-50 Mitarbeiter)",
            Self::Medium => "Mittel (51-250 Mitarbeiter)",
            Self::Large => "Groß (251-1000 Mitarbeiter)",
            Self::Enterprise => "Konzern (>1000 Mitarbeiter)",
        }
    }
}

impl Display for CompanySize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Error)]
#[error("unknown company size: {0}")]
pub struct CompanySizeParseError(pub String);

impl FromStr for CompanySize {
    type Err = CompanySizeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "small" | "klein" => Ok(Self::Small),
            "medium" | "mittel" => Ok(Self::Medium),
            "large" | "gross" | "groß" => Ok(Self::Large),
            "enterprise" | "konzern" => Ok(Self::Enterprise),
            _ => Err(CompanySizeParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CompanyProfile {
    pub industry: Industry,
    pub company_size: CompanySize,
    pub monthly_revenue: f64,
    pub employee_count: u32,
    pub avg_hourly_wage: f64,
}

impl CompanyProfile {
    pub fn sample() -> Self {
        Self {
            industry: Industry::Services,
            company_size: CompanySize::Medium,
            monthly_revenue: 500_000.0,
            employee_count: 100,
            avg_hourly_wage: 35.0,
        }
    }
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            industry: Industry::Other,
            company_size: CompanySize::Small,
            monthly_revenue: 0.0,
            employee_count: 0,
            avg_hourly_wage: 0.0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CurrentSituation {
    pub weekly_hours_per_employee: f64,
    pub manual_work_percentage: f64,
    pub processing_time_per_task: f64,
    pub tasks_per_day: u32,
    pub error_rate: f64,
    pub cost_per_error: f64,
    pub avg_response_time: f64,
    pub customer_satisfaction: f64,
    pub support_tickets_per_month: u32,
    pub customer_acquisition_cost: f64,
    pub avg_customer_value: f64,
    pub customer_retention_rate: f64,
}

impl CurrentSituation {
    pub fn sample() -> Self {
        Self {
            weekly_hours_per_employee: 40.0,
            manual_work_percentage: 40.0,
            processing_time_per_task: 45.0,
            tasks_per_day: 80,
            error_rate: 8.0,
            cost_per_error: 75.0,
            avg_response_time: 36.0,
            customer_satisfaction: 65.0,
            support_tickets_per_month: 800,
            customer_acquisition_cost: 250.0,
            avg_customer_value: 1500.0,
            customer_retention_rate: 75.0,
        }
    }
}

impl Default for CurrentSituation {
    fn default() -> Self {
        Self {
            weekly_hours_per_employee: 40.0,
            manual_work_percentage: 30.0,
            processing_time_per_task: 30.0,
            tasks_per_day: 50,
            error_rate: 5.0,
            cost_per_error: 50.0,
            avg_response_time: 24.0,
            customer_satisfaction: 70.0,
            support_tickets_per_month: 500,
            customer_acquisition_cost: 200.0,
            avg_customer_value: 1000.0,
            customer_retention_rate: 80.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::{CompanySize, CurrentSituation, Industry};

    #[test]
    fn parses_industry_slugs_and_labels() {
        assert_eq!(Industry::from_str("services").unwrap(), Industry::Services);
        assert_eq!(
            Industry::from_str("Dienstleistungen").unwrap(),
            Industry::Services
        );
        assert_eq!(Industry::from_str(" IT ").unwrap(), Industry::It);
        assert!(Industry::from_str("agriculture").is_err());
    }

    #[test]
    fn parses_company_sizes() {
        assert_eq!(
            CompanySize::from_str("enterprise").unwrap(),
            CompanySize::Enterprise
        );
        assert!(CompanySize::from_str("gigantic").is_err());
    }

    #[test]
    fn situation_defaults_match_baseline() {
        let situation = CurrentSituation::default();
        assert_eq!(situation.weekly_hours_per_employee, 40.0);
        assert_eq!(situation.manual_work_percentage, 30.0);
        assert_eq!(situation.tasks_per_day, 50);
        assert_eq!(situation.customer_retention_rate, 80.0);
    }
}
