//! Loan request construction and dispatch
//!
//! Raw [`LoanInputs`] are checked once by [`LoanRequest::from_inputs`], which
//! either yields one of the four solve variants or an error. Dispatch is then
//! a total match over that variant.

mod inputs;
mod dispatch;

pub use inputs::{parse_amount, parse_whole_months, LoanInputs, PaymentScheme};
pub use dispatch::LoanRequest;
