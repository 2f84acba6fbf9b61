use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::profile::{CompanyProfile, CompanySize, CurrentSituation, Industry};
use crate::roi::Scenario;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub company: CompanyProfile,
    #[serde(default)]
    pub situation: CurrentSituation,
    #[serde(default)]
    pub analysis: RoiAssumptions,
}

/// Named model constants. Scenario multipliers, the NPV discount, and the two
/// industry-fit fallbacks live here so the figures are auditable in one place
/// instead of being buried in formulas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoiAssumptions {
    #[serde(default = "default_conservative_multiplier")]
    pub conservative_multiplier: f64,
    #[serde(default = "default_realistic_multiplier")]
    pub realistic_multiplier: f64,
    #[serde(default = "default_optimistic_multiplier")]
    pub optimistic_multiplier: f64,
    #[serde(default = "default_discount_rate")]
    pub discount_rate: f64,
    #[serde(default = "default_npv_horizon_years")]
    pub npv_horizon_years: u32,
    #[serde(default = "default_recommendation_limit")]
    pub recommendation_limit: usize,
    // The recommender and the ROI engine fall back to different fit values
    // when an industry is absent from a fit map. The asymmetry is inherited
    // model behavior and is kept visible here rather than unified.
    #[serde(default = "default_recommender_fit_fallback")]
    pub recommender_fit_fallback: f64,
    #[serde(default = "default_roi_fit_fallback")]
    pub roi_fit_fallback: f64,
}

impl RoiAssumptions {
    pub fn multiplier(&self, scenario: Scenario) -> f64 {
        match scenario {
            Scenario::Conservative => self.conservative_multiplier,
            Scenario::Realistic => self.realistic_multiplier,
            Scenario::Optimistic => self.optimistic_multiplier,
        }
    }
}

impl Default for RoiAssumptions {
    fn default() -> Self {
        Self {
            conservative_multiplier: default_conservative_multiplier(),
            realistic_multiplier: default_realistic_multiplier(),
            optimistic_multiplier: default_optimistic_multiplier(),
            discount_rate: default_discount_rate(),
            npv_horizon_years: default_npv_horizon_years(),
            recommendation_limit: default_recommendation_limit(),
            recommender_fit_fallback: default_recommender_fit_fallback(),
            roi_fit_fallback: default_roi_fit_fallback(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub company: ProfileOverrides,
    pub situation: SituationOverrides,
}

#[derive(Debug, Clone, Default)]
pub struct ProfileOverrides {
    pub industry: Option<Industry>,
    pub company_size: Option<CompanySize>,
    pub monthly_revenue: Option<f64>,
    pub employee_count: Option<u32>,
    pub avg_hourly_wage: Option<f64>,
}

#[derive(Debug, Clone, Default)]
pub struct SituationOverrides {
    pub weekly_hours_per_employee: Option<f64>,
    pub manual_work_percentage: Option<f64>,
    pub processing_time_per_task: Option<f64>,
    pub tasks_per_day: Option<u32>,
    pub error_rate: Option<f64>,
    pub cost_per_error: Option<f64>,
    pub avg_response_time: Option<f64>,
    pub customer_satisfaction: Option<f64>,
    pub support_tickets_per_month: Option<u32>,
    pub customer_acquisition_cost: Option<f64>,
    pub avg_customer_value: Option<f64>,
    pub customer_retention_rate: Option<f64>,
}

impl Config {
    pub fn default_path() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.join(".config/roi-oracle/config.toml")
    }

    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = path
            .map(|p| p.to_path_buf())
            .unwrap_or_else(Self::default_path);
        if !path.exists() {
            return Ok(Self::default());
        }
        let data = fs::read_to_string(&path)
            .with_context(|| format!("failed reading config: {}", path.display()))?;
        let parsed: Self = toml::from_str(&data)
            .with_context(|| format!("failed parsing TOML config: {}", path.display()))?;
        Ok(parsed)
    }

    pub fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        let ConfigOverrides { company, situation } = overrides;
        if let Some(industry) = company.industry {
            self.company.industry = industry;
        }
        if let Some(company_size) = company.company_size {
            self.company.company_size = company_size;
        }
        if let Some(monthly_revenue) = company.monthly_revenue {
            self.company.monthly_revenue = monthly_revenue;
        }
        if let Some(employee_count) = company.employee_count {
            self.company.employee_count = employee_count;
        }
        if let Some(avg_hourly_wage) = company.avg_hourly_wage {
            self.company.avg_hourly_wage = avg_hourly_wage;
        }

        if let Some(v) = situation.weekly_hours_per_employee {
            self.situation.weekly_hours_per_employee = v;
        }
        if let Some(v) = situation.manual_work_percentage {
            self.situation.manual_work_percentage = v;
        }
        if let Some(v) = situation.processing_time_per_task {
            self.situation.processing_time_per_task = v;
        }
        if let Some(v) = situation.tasks_per_day {
            self.situation.tasks_per_day = v;
        }
        if let Some(v) = situation.error_rate {
            self.situation.error_rate = v;
        }
        if let Some(v) = situation.cost_per_error {
            self.situation.cost_per_error = v;
        }
        if let Some(v) = situation.avg_response_time {
            self.situation.avg_response_time = v;
        }
        if let Some(v) = situation.customer_satisfaction {
            self.situation.customer_satisfaction = v;
        }
        if let Some(v) = situation.support_tickets_per_month {
            self.situation.support_tickets_per_month = v;
        }
        if let Some(v) = situation.customer_acquisition_cost {
            self.situation.customer_acquisition_cost = v;
        }
        if let Some(v) = situation.avg_customer_value {
            self.situation.avg_customer_value = v;
        }
        if let Some(v) = situation.customer_retention_rate {
            self.situation.customer_retention_rate = v;
        }
    }

    pub fn write_template(path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed creating config directory: {}", parent.display())
            })?;
        }
        fs::write(path, Self::default_template())
            .with_context(|| format!("failed writing config template: {}", path.display()))
    }

    pub fn default_template() -> String {
        let template = r#"[company]
industry = "services"
company_size = "medium"
monthly_revenue = 500000.0
employee_count = 100
avg_hourly_wage = 35.0

[situation]
weekly_hours_per_employee = 40.0
manual_work_percentage = 40.0
processing_time_per_task = 45.0
tasks_per_day = 80
error_rate = 8.0
cost_per_error = 75.0
avg_response_time = 36.0
customer_satisfaction = 65.0
support_tickets_per_month = 800
customer_acquisition_cost = 250.0
avg_customer_value = 1500.0
customer_retention_rate = 75.0

[analysis]
conservative_multiplier = 0.7
realistic_multiplier = 1.0
optimistic_multiplier = 1.3
discount_rate = 0.08
npv_horizon_years = 3
recommendation_limit = 3
recommender_fit_fallback = 0.5
roi_fit_fallback = 0.7
"#;
        template.to_string()
    }
}

fn default_conservative_multiplier() -> f64 {
    0.7
}

fn default_realistic_multiplier() -> f64 {
    1.0
}

fn default_optimistic_multiplier() -> f64 {
    1.3
}

fn default_discount_rate() -> f64 {
    0.08
}

fn default_npv_horizon_years() -> u32 {
    3
}

fn default_recommendation_limit() -> usize {
    3
}

fn default_recommender_fit_fallback() -> f64 {
    0.5
}

fn default_roi_fit_fallback() -> f64 {
    0.7
}

#[cfg(test)]
mod tests {
    use super::{Config, ConfigOverrides, ProfileOverrides, RoiAssumptions, SituationOverrides};
    use crate::profile::Industry;
    use crate::roi::Scenario;

    #[test]
    fn template_parses_into_config() {
        let config: Config = toml::from_str(&Config::default_template()).unwrap();
        assert_eq!(config.company.industry, Industry::Services);
        assert_eq!(config.company.employee_count, 100);
        assert_eq!(config.situation.support_tickets_per_month, 800);
        assert_eq!(config.analysis, RoiAssumptions::default());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: Config = toml::from_str("[situation]\nerror_rate = 12.5\n").unwrap();
        assert_eq!(config.situation.error_rate, 12.5);
        assert_eq!(config.situation.tasks_per_day, 50);
        assert_eq!(config.analysis.discount_rate, 0.08);
    }

    #[test]
    fn overrides_replace_only_given_fields() {
        let mut config = Config::default();
        config.apply_overrides(ConfigOverrides {
            company: ProfileOverrides {
                industry: Some(Industry::Retail),
                employee_count: Some(25),
                ..ProfileOverrides::default()
            },
            situation: SituationOverrides {
                error_rate: Some(3.0),
                ..SituationOverrides::default()
            },
        });
        assert_eq!(config.company.industry, Industry::Retail);
        assert_eq!(config.company.employee_count, 25);
        assert_eq!(config.situation.error_rate, 3.0);
        assert_eq!(config.situation.tasks_per_day, 50);
    }

    #[test]
    fn scenario_multipliers_are_ordered() {
        let assumptions = RoiAssumptions::default();
        assert!(
            assumptions.multiplier(Scenario::Conservative)
                < assumptions.multiplier(Scenario::Realistic)
        );
        assert!(
            assumptions.multiplier(Scenario::Realistic)
                < assumptions.multiplier(Scenario::Optimistic)
        );
    }
}
