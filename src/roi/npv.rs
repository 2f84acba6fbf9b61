/// Net present value of a constant annual benefit against an upfront
/// investment, discounted yearly. Works for any horizon and rate; the engine
/// calls it with the configured 3-year / 8% assumptions.
pub fn net_present_value(
    annual_benefit: f64,
    initial_investment: f64,
    years: u32,
    discount_rate: f64,
) -> f64 {
    let mut npv = -initial_investment;
    for year in 1..=years {
        npv += annual_benefit / (1.0 + discount_rate).powi(year as i32);
    }
    npv
}

#[cfg(test)]
mod tests {
    use super::net_present_value;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn zero_rate_degenerates_to_undiscounted_sum() {
        let npv = net_present_value(1000.0, 2500.0, 4, 0.0);
        assert!((npv - (-2500.0 + 4.0 * 1000.0)).abs() < EPSILON);
    }

    #[test]
    fn three_year_horizon_discounts_each_year() {
        let benefit = 10_000.0;
        let investment = 5_000.0;
        let expected = -investment
            + benefit / 1.08_f64.powi(1)
            + benefit / 1.08_f64.powi(2)
            + benefit / 1.08_f64.powi(3);
        let npv = net_present_value(benefit, investment, 3, 0.08);
        assert!((npv - expected).abs() < EPSILON);
    }

    #[test]
    fn zero_years_is_pure_outlay() {
        let npv = net_present_value(10_000.0, 1234.0, 0, 0.08);
        assert!((npv + 1234.0).abs() < EPSILON);
    }

    #[test]
    fn negative_benefit_deepens_the_loss() {
        let npv = net_present_value(-1000.0, 500.0, 3, 0.08);
        assert!(npv < -500.0);
    }
}
