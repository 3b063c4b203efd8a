//! Annual percentage rate to monthly fraction

/// Convert an annual percentage rate (e.g. 12.0 for 12%) to a monthly decimal rate
pub fn monthly_rate(annual_percent: f64) -> f64 {
    annual_percent / 100.0 / 12.0
}
