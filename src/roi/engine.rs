use crate::catalog::AiUseCase;
use crate::config::RoiAssumptions;
use crate::profile::{CompanyProfile, CurrentSituation};
use crate::roi::npv::net_present_value;
use crate::roi::{CostSavings, RevenueIncrease, RoiProjection, Scenario};

const WEEKS_PER_YEAR: f64 = 52.0;
const DAYS_PER_YEAR: f64 = 365.0;
const MONTHS_PER_YEAR: f64 = 12.0;
// Share of a satisfaction gain assumed to convert into retained revenue.
const SATISFACTION_TO_RETENTION: f64 = 0.5;

/// Projects annual savings, revenue gains, and investment metrics for one use
/// case under one scenario. Pure arithmetic over its inputs.
pub fn calculate_roi(
    company: &CompanyProfile,
    situation: &CurrentSituation,
    use_case: &AiUseCase,
    scenario: Scenario,
    assumptions: &RoiAssumptions,
) -> RoiProjection {
    let multiplier = assumptions.multiplier(scenario);
    let industry_fit = use_case.fit_for(company.industry, assumptions.roi_fit_fallback);
    let effectiveness = industry_fit * multiplier;

    let annual_labor_cost = f64::from(company.employee_count)
        * situation.weekly_hours_per_employee
        * WEEKS_PER_YEAR
        * company.avg_hourly_wage;

    let time_savings_factor = (use_case.benefits.time_savings_percentage / 100.0) * effectiveness;
    let time_savings =
        annual_labor_cost * time_savings_factor * (situation.manual_work_percentage / 100.0);

    let error_reduction_factor =
        (use_case.benefits.error_reduction_percentage / 100.0) * effectiveness;
    let error_reduction = f64::from(situation.tasks_per_day)
        * DAYS_PER_YEAR
        * (situation.error_rate / 100.0)
        * error_reduction_factor
        * situation.cost_per_error;

    let productivity_factor = (use_case.benefits.productivity_increase / 100.0) * effectiveness;
    let productivity_gain = annual_labor_cost * productivity_factor;

    let satisfaction_factor =
        (use_case.benefits.customer_satisfaction_increase / 100.0) * effectiveness;
    let retention_improvement = company.monthly_revenue
        * MONTHS_PER_YEAR
        * (satisfaction_factor * SATISFACTION_TO_RETENTION)
        * (situation.customer_retention_rate / 100.0);

    let conversion_factor = (use_case.benefits.conversion_rate_increase / 100.0) * effectiveness;
    let conversion_improvement = company.monthly_revenue * MONTHS_PER_YEAR * conversion_factor;

    let cost_savings_total = time_savings + error_reduction + productivity_gain;
    let revenue_increase_total = retention_improvement + conversion_improvement;
    let total_annual_benefit = cost_savings_total + revenue_increase_total;

    let annual_operating_cost = use_case.annual_operating_cost();
    let total_investment = use_case.setup_cost + annual_operating_cost;

    let roi_percentage = if total_investment > 0.0 {
        Some((total_annual_benefit - total_investment) / total_investment * 100.0)
    } else {
        None
    };
    let payback_months = if total_annual_benefit > 0.0 {
        total_investment / (total_annual_benefit / MONTHS_PER_YEAR)
    } else {
        f64::INFINITY
    };
    let net_present_value = net_present_value(
        total_annual_benefit,
        total_investment,
        assumptions.npv_horizon_years,
        assumptions.discount_rate,
    );

    RoiProjection {
        use_case: use_case.id,
        use_case_name: use_case.name.clone(),
        scenario,
        total_investment,
        setup_cost: use_case.setup_cost,
        annual_operating_cost,
        cost_savings: CostSavings {
            time_savings,
            error_reduction,
            productivity_gain,
            total: cost_savings_total,
        },
        revenue_increase: RevenueIncrease {
            retention_improvement,
            conversion_improvement,
            total: revenue_increase_total,
        },
        total_annual_benefit,
        roi_percentage,
        payback_months,
        net_present_value,
        effectiveness_factor: effectiveness,
    }
}
