//! Rounding policies used by the loan formulas
//!
//! - [`round_up`]: annuity payment, term, overpayment, and every differentiated payment
//! - [`truncate`]: annuity principal
//! - [`round_half_even`]: differentiated overpayment
//!
//! All three refuse NaN, infinities, and values outside the range where an
//! `f64` still holds every whole number exactly.

use crate::error::{LoanError, Result};

/// 2^53, the largest magnitude where every integer is representable as f64
const MAX_EXACT_WHOLE: f64 = 9_007_199_254_740_992.0;

/// Round toward positive infinity
pub fn round_up(value: f64) -> Result<i64> {
    to_whole(value.ceil(), value)
}

/// Round toward zero
pub fn truncate(value: f64) -> Result<i64> {
    to_whole(value.trunc(), value)
}

/// Round to nearest, ties to the even neighbour
pub fn round_half_even(value: f64) -> Result<i64> {
    to_whole(value.round_ties_even(), value)
}

fn to_whole(rounded: f64, raw: f64) -> Result<i64> {
    if !rounded.is_finite() || rounded.abs() > MAX_EXACT_WHOLE {
        return Err(LoanError::infeasible(format!(
            "{} has no whole-number representation",
            raw
        )));
    }
    Ok(rounded as i64)
}
