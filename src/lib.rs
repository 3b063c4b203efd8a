//! creditcalc - Loan calculator for annuity and differentiated repayment schemes
//!
//! This library provides:
//! - Annuity solvers for the monthly payment, the repayment term, or the principal
//! - Differentiated repayment schedules
//! - Validation of raw inputs into a single solve request
//! - Text and JSON reports of the result

pub mod error;
pub mod calc;
pub mod request;
pub mod report;

// Re-export commonly used types
pub use error::LoanError;
pub use calc::{monthly_rate, DifferentiatedSchedule, MonthlyPayment, Solution};
pub use request::{LoanInputs, LoanRequest, PaymentScheme};
pub use report::CalculationResult;

/// Validate raw inputs and solve the matching request
pub fn calculate(inputs: &LoanInputs) -> error::Result<CalculationResult> {
    LoanRequest::from_inputs(inputs)?.solve()
}
