use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Row, Table};

use crate::catalog::AiUseCase;
use crate::profile::{CompanyProfile, CurrentSituation};
use crate::roi::report::ComparisonReport;
use crate::roi::RoiProjection;
use crate::scoring::{PainScores, Recommendation};

pub fn render_catalog_table(use_cases: &[AiUseCase]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Id",
        "Name",
        "Category",
        "Setup (EUR)",
        "Monthly (EUR)",
        "Description",
    ]);
    for use_case in use_cases {
        table.add_row(vec![
            use_case.id.to_string(),
            use_case.name.clone(),
            use_case.category.to_string(),
            format!("{:.0}", use_case.setup_cost),
            format!("{:.0}", use_case.monthly_cost),
            use_case.description.clone(),
        ]);
    }
    table.to_string()
}

pub fn render_pain_table(scores: &PainScores) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Dimension", "Score"]);
    for (dimension, score) in scores.iter() {
        let cell = if score >= 0.7 {
            Cell::new(format!("{score:.3}")).fg(Color::Red)
        } else if score >= 0.4 {
            Cell::new(format!("{score:.3}")).fg(Color::Yellow)
        } else {
            Cell::new(format!("{score:.3}")).fg(Color::Green)
        };
        table.add_row(Row::from(vec![Cell::new(dimension.to_string()), cell]));
    }
    table.to_string()
}

pub fn render_recommendations_table(recommendations: &[Recommendation]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Rank",
        "Use Case",
        "Category",
        "Score",
        "Industry Fit",
        "Pain Relevance",
    ]);
    for (idx, rec) in recommendations.iter().enumerate() {
        table.add_row(vec![
            (idx + 1).to_string(),
            rec.name.clone(),
            rec.category.to_string(),
            format!("{:.3}", rec.score),
            format!("{:.2}", rec.industry_fit),
            format!("{:.2}", rec.pain_relevance),
        ]);
    }
    table.to_string()
}

pub fn render_projection_table(projection: &RoiProjection) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new(projection.use_case_name.clone()),
        Cell::new(format!("{} scenario", projection.scenario)),
    ]);

    table.add_row(vec![
        "Total investment (EUR)".to_string(),
        format!("{:.0}", projection.total_investment),
    ]);
    table.add_row(vec![
        "Setup cost (EUR)".to_string(),
        format!("{:.0}", projection.setup_cost),
    ]);
    table.add_row(vec![
        "Annual operating cost (EUR)".to_string(),
        format!("{:.0}", projection.annual_operating_cost),
    ]);
    table.add_row(vec![
        "Time savings (EUR/yr)".to_string(),
        format!("{:.0}", projection.cost_savings.time_savings),
    ]);
    table.add_row(vec![
        "Error reduction (EUR/yr)".to_string(),
        format!("{:.0}", projection.cost_savings.error_reduction),
    ]);
    table.add_row(vec![
        "Productivity gain (EUR/yr)".to_string(),
        format!("{:.0}", projection.cost_savings.productivity_gain),
    ]);
    table.add_row(vec![
        "Cost savings total (EUR/yr)".to_string(),
        format!("{:.0}", projection.cost_savings.total),
    ]);
    table.add_row(vec![
        "Retention gain (EUR/yr)".to_string(),
        format!("{:.0}", projection.revenue_increase.retention_improvement),
    ]);
    table.add_row(vec![
        "Conversion gain (EUR/yr)".to_string(),
        format!("{:.0}", projection.revenue_increase.conversion_improvement),
    ]);
    table.add_row(vec![
        "Revenue increase total (EUR/yr)".to_string(),
        format!("{:.0}", projection.revenue_increase.total),
    ]);
    table.add_row(vec![
        "Total annual benefit (EUR/yr)".to_string(),
        format!("{:.0}", projection.total_annual_benefit),
    ]);
    table.add_row(vec!["ROI".to_string(), fmt_roi(projection.roi_percentage)]);
    table.add_row(vec![
        "Payback".to_string(),
        fmt_payback(projection.payback_months),
    ]);
    table.add_row(vec![
        "NPV (EUR)".to_string(),
        format!("{:.0}", projection.net_present_value),
    ]);
    table.add_row(vec![
        "Effectiveness factor".to_string(),
        format!("{:.2}", projection.effectiveness_factor),
    ]);
    table.to_string()
}

pub fn render_comparison_table(report: &ComparisonReport) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        "Use Case",
        "Scenario",
        "Investment (EUR)",
        "Annual Benefit (EUR)",
        "ROI",
        "Payback",
        "NPV (EUR)",
    ]);
    for entry in &report.entries {
        let p = &entry.projection;
        table.add_row(vec![
            p.use_case_name.clone(),
            entry.scenario.to_string(),
            format!("{:.0}", p.total_investment),
            format!("{:.0}", p.total_annual_benefit),
            fmt_roi(p.roi_percentage),
            fmt_payback(p.payback_months),
            format!("{:.0}", p.net_present_value),
        ]);
    }
    table.to_string()
}

pub fn render_profile_summary(company: &CompanyProfile, situation: &CurrentSituation) -> String {
    format!(
        "{} | {} | {} Mitarbeiter | EUR {:.0}/Monat | {} Tickets/Monat",
        company.industry,
        company.company_size,
        company.employee_count,
        company.monthly_revenue,
        situation.support_tickets_per_month,
    )
}

pub fn fmt_roi(roi_percentage: Option<f64>) -> String {
    roi_percentage
        .map(|v| format!("{v:.1}%"))
        .unwrap_or_else(|| "-".to_string())
}

pub fn fmt_payback(months: f64) -> String {
    if months.is_finite() {
        format!("{months:.1} months")
    } else {
        "never".to_string()
    }
}
