//! Annuity (level payment) solvers
//!
//! Given any three of principal, payment, term and rate, solve for the fourth.
//! Rates are annual percentages; terms are in months.

use log::debug;

use super::rate::monthly_rate;
use super::rounding::{round_up, truncate};
use super::Solution;
use crate::error::{LoanError, Result};

/// Total paid over `months` level payments minus the principal, rounded up
pub fn overpayment(payment: f64, months: f64, principal: f64) -> Result<i64> {
    round_up(payment * months - principal)
}

/// Monthly payment for a principal repaid over `periods` months.
///
/// The payment is rounded up first and the overpayment is computed from the
/// rounded payment.
pub fn solve_payment(principal: f64, annual_percent: f64, periods: f64) -> Result<Solution> {
    let i = monthly_rate(annual_percent);
    let growth = (1.0 + i).powf(periods);
    let factor = i * growth / (growth - 1.0);
    debug!(
        "annuity payment: principal={} i={} periods={} factor={}",
        principal, i, periods, factor
    );

    if !factor.is_finite() {
        return Err(LoanError::infeasible(format!(
            "annuity factor undefined for rate {}% over {} periods",
            annual_percent, periods
        )));
    }

    let payment = round_up(principal * factor)?;
    let overpayment = overpayment(payment as f64, periods, principal)?;

    Ok(Solution {
        amount: payment,
        overpayment,
    })
}

/// Number of months needed to repay `principal` with a fixed `payment`.
///
/// Fails when the payment does not exceed the first month's interest, since
/// the balance would then never shrink.
pub fn solve_periods(principal: f64, payment: f64, annual_percent: f64) -> Result<Solution> {
    let i = monthly_rate(annual_percent);
    let first_interest = i * principal;
    if payment <= first_interest {
        return Err(LoanError::infeasible(format!(
            "payment {} does not cover monthly interest {}",
            payment, first_interest
        )));
    }

    let raw = (payment / (payment - first_interest)).ln() / (1.0 + i).ln();
    debug!(
        "annuity term: principal={} payment={} i={} raw_months={}",
        principal, payment, i, raw
    );
    if !raw.is_finite() {
        return Err(LoanError::infeasible(format!(
            "term undefined for rate {}%",
            annual_percent
        )));
    }

    let months = round_up(raw)?;
    let overpayment = overpayment(payment, months as f64, principal)?;

    Ok(Solution {
        amount: months,
        overpayment,
    })
}

/// Principal that `payment` repays over `periods` months.
///
/// The principal is truncated, not rounded up, and the overpayment comes
/// from re-solving the payment for that truncated principal.
pub fn solve_principal(payment: f64, annual_percent: f64, periods: f64) -> Result<Solution> {
    let i = monthly_rate(annual_percent);
    let raw = (payment * (1.0 - (1.0 + i).powf(-periods))) / i;
    debug!(
        "annuity principal: payment={} i={} periods={} raw_principal={}",
        payment, i, periods, raw
    );

    let principal = truncate(raw)?;
    let overpayment = solve_payment(principal as f64, annual_percent, periods)?.overpayment;

    Ok(Solution {
        amount: principal,
        overpayment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_overpayment_rounds_up() {
        assert_eq!(overpayment(100.0, 12.0, 1199.5).unwrap(), 1);
        assert_eq!(overpayment(100.0, 12.0, 1200.0).unwrap(), 0);
    }

    #[test]
    fn test_solve_payment() {
        let solved = solve_payment(1_000_000.0, 10.0, 60.0).unwrap();
        assert_eq!(solved.amount, 21248);
        assert_eq!(solved.overpayment, 274_880);
    }

    #[test]
    fn test_solve_payment_matches_raw_formula() {
        let i: f64 = 10.0 / 100.0 / 12.0;
        let raw = 1_000_000.0 * i * (1.0 + i).powi(60) / ((1.0 + i).powi(60) - 1.0);
        assert_relative_eq!(raw, 21247.0447, epsilon = 1e-3);

        let solved = solve_payment(1_000_000.0, 10.0, 60.0).unwrap();
        assert_eq!(solved.amount, raw.ceil() as i64);
        assert_eq!(solved.overpayment, (raw.ceil() * 60.0 - 1_000_000.0).ceil() as i64);
    }

    #[test]
    fn test_solve_payment_zero_periods_is_infeasible() {
        let err = solve_payment(1000.0, 10.0, 0.0).unwrap_err();
        assert!(err.is_infeasible());
    }

    #[test]
    fn test_solve_payment_zero_rate_is_infeasible() {
        let err = solve_payment(1000.0, 0.0, 12.0).unwrap_err();
        assert!(err.is_infeasible());
    }

    #[test]
    fn test_solve_periods() {
        let solved = solve_periods(500_000.0, 23_000.0, 7.8).unwrap();
        assert_eq!(solved.amount, 24);
        assert_eq!(solved.overpayment, 52_000);

        let solved = solve_periods(1_000_000.0, 15_000.0, 10.0).unwrap();
        assert_eq!(solved.amount, 98);
        assert_eq!(solved.overpayment, 470_000);
    }

    #[test]
    fn test_solve_periods_insufficient_payment() {
        // First month's interest is exactly 3250
        let err = solve_periods(500_000.0, 3_000.0, 7.8).unwrap_err();
        assert!(err.is_infeasible());

        let err = solve_periods(500_000.0, 3_250.0, 7.8).unwrap_err();
        assert!(err.is_infeasible());
    }

    #[test]
    fn test_solve_periods_zero_rate_is_infeasible() {
        let err = solve_periods(1000.0, 100.0, 0.0).unwrap_err();
        assert!(err.is_infeasible());
    }

    #[test]
    fn test_solve_principal_truncates() {
        let solved = solve_principal(8721.0, 11.7, 120.0).unwrap();
        // Raw value is 615272.57..., rounding would give 615273
        assert_eq!(solved.amount, 615_272);
        assert_eq!(solved.overpayment, 431_248);
    }

    #[test]
    fn test_solve_principal_zero_rate_is_infeasible() {
        let err = solve_principal(1000.0, 0.0, 12.0).unwrap_err();
        assert!(err.is_infeasible());
    }

    #[test]
    fn test_solve_principal_zero_periods_is_infeasible() {
        let err = solve_principal(1000.0, 10.0, 0.0).unwrap_err();
        assert!(err.is_infeasible());
    }

    #[test]
    fn test_payment_round_trip_never_needs_more_periods() {
        for &(principal, rate, periods) in &[
            (1_000_000.0, 10.0, 60.0),
            (500_000.0, 7.8, 8.0),
            (250_000.0, 4.5, 360.0),
            (12_345.0, 19.9, 7.0),
        ] {
            let payment = solve_payment(principal, rate, periods).unwrap().amount;
            let months = solve_periods(principal, payment as f64, rate).unwrap().amount;
            assert!(
                months as f64 <= periods,
                "{} over {} months at {}% came back as {} months",
                principal, periods, rate, months
            );
        }
    }
}
