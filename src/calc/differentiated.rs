//! Differentiated repayment schedule
//!
//! The principal is repaid in equal installments; interest is charged on the
//! balance still outstanding at the start of each month, so payments shrink
//! over the term.

use log::debug;
use serde::{Deserialize, Serialize};

use super::rate::monthly_rate;
use super::rounding::{round_half_even, round_up, truncate};
use crate::error::{LoanError, Result};

/// Payment due in one month of a differentiated schedule (months are 1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyPayment {
    pub month: u32,
    pub payment: i64,
}

/// Full differentiated schedule in month order plus the total overpayment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DifferentiatedSchedule {
    pub payments: Vec<MonthlyPayment>,
    pub overpayment: i64,
}

impl DifferentiatedSchedule {
    pub fn total_paid(&self) -> i64 {
        self.payments.iter().map(|p| p.payment).sum()
    }
}

/// Build the schedule for `principal` over `periods` months.
///
/// `periods` must be a whole number of months. Each payment is rounded up;
/// the overpayment is rounded half-to-even.
pub fn differentiated_schedule(
    principal: f64,
    periods: f64,
    annual_percent: f64,
) -> Result<DifferentiatedSchedule> {
    if periods.fract() != 0.0 {
        return Err(LoanError::invalid(format!(
            "differentiated periods must be whole months, got {}",
            periods
        )));
    }
    let months = truncate(periods)?;
    if months < 1 {
        return Err(LoanError::infeasible(format!(
            "differentiated schedule needs at least one whole month, got {}",
            periods
        )));
    }
    let months = u32::try_from(months)
        .map_err(|_| LoanError::infeasible(format!("{} months is too long a term", months)))?;

    let i = monthly_rate(annual_percent);
    let n = months as f64;
    debug!(
        "differentiated schedule: principal={} months={} i={}",
        principal, months, i
    );

    let payments = (1..=months)
        .map(|month| {
            let repaid = principal * (month - 1) as f64 / n;
            let payment = round_up(principal / n + i * (principal - repaid))?;
            Ok(MonthlyPayment { month, payment })
        })
        .collect::<Result<Vec<_>>>()?;

    let total: i64 = payments.iter().map(|p| p.payment).sum();
    let overpayment = round_half_even(total as f64 - principal)?;

    Ok(DifferentiatedSchedule {
        payments,
        overpayment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn amounts(schedule: &DifferentiatedSchedule) -> Vec<i64> {
        schedule.payments.iter().map(|p| p.payment).collect()
    }

    #[test]
    fn test_six_month_schedule() {
        let schedule = differentiated_schedule(500_000.0, 6.0, 7.5).unwrap();
        assert_eq!(
            amounts(&schedule),
            vec![86459, 85938, 85417, 84896, 84375, 83855]
        );
        assert_eq!(schedule.overpayment, 10_940);
        assert_eq!(schedule.total_paid(), 510_940);
    }

    #[test]
    fn test_months_are_one_indexed_and_ordered() {
        let schedule = differentiated_schedule(500_000.0, 8.0, 7.8).unwrap();
        let months: Vec<u32> = schedule.payments.iter().map(|p| p.month).collect();
        assert_eq!(months, (1..=8).collect::<Vec<_>>());
        assert_eq!(schedule.payments[0].payment, 65_750);
        assert_eq!(schedule.payments[7].payment, 62_907);
        assert_eq!(schedule.overpayment, 14_628);
    }

    #[test]
    fn test_payments_never_increase() {
        let schedule = differentiated_schedule(1_000_000.0, 10.0, 10.0).unwrap();
        for pair in schedule.payments.windows(2) {
            assert!(pair[1].payment <= pair[0].payment);
        }
        assert_eq!(schedule.overpayment, 45_837);
    }

    #[test]
    fn test_fractional_periods_rejected() {
        for periods in [6.5, 6.9, 0.5] {
            let err = differentiated_schedule(500_000.0, periods, 7.5).unwrap_err();
            assert!(err.is_invalid_parameters(), "{} periods", periods);
        }
    }

    #[test]
    fn test_zero_periods_is_infeasible() {
        let err = differentiated_schedule(500_000.0, 0.0, 7.5).unwrap_err();
        assert!(err.is_infeasible());
    }

    #[test]
    fn test_zero_rate_repays_principal_only() {
        let schedule = differentiated_schedule(1200.0, 12.0, 0.0).unwrap();
        assert!(amounts(&schedule).iter().all(|&p| p == 100));
        assert_eq!(schedule.overpayment, 0);
    }
}
