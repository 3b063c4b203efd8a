//! Loan calculator engine
//!
//! Pure closed-form formulas for the annuity and differentiated repayment
//! schemes. Each formula ends in one of the named policies from [`rounding`];
//! the policies differ between formulas and must not be unified.

pub mod rounding;
mod rate;
mod annuity;
mod differentiated;

pub use rate::monthly_rate;
pub use annuity::{overpayment, solve_payment, solve_periods, solve_principal};
pub use differentiated::{differentiated_schedule, DifferentiatedSchedule, MonthlyPayment};

/// A solved whole-number quantity together with the total overpayment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Solution {
    pub amount: i64,
    pub overpayment: i64,
}
