//! Error taxonomy for loan calculations
//!
//! Every failure surfaces to the user as the same message. The two kinds are
//! kept apart internally so tests can tell bad input from infeasible math.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoanError {
    /// Missing, contradictory, negative or unparsable arguments
    #[error("Invalid parameters: {reason}")]
    InvalidParameters { reason: String },

    /// The arithmetic has no finite answer for these inputs
    #[error("Infeasible loan: {reason}")]
    Infeasible { reason: String },
}

impl LoanError {
    /// The only text ever shown to the user on failure
    pub const USER_MESSAGE: &'static str = "Incorrect parameters";

    pub fn invalid(reason: impl Into<String>) -> Self {
        LoanError::InvalidParameters { reason: reason.into() }
    }

    pub fn infeasible(reason: impl Into<String>) -> Self {
        LoanError::Infeasible { reason: reason.into() }
    }

    pub fn is_invalid_parameters(&self) -> bool {
        matches!(self, LoanError::InvalidParameters { .. })
    }

    pub fn is_infeasible(&self) -> bool {
        matches!(self, LoanError::Infeasible { .. })
    }
}

pub type Result<T> = std::result::Result<T, LoanError>;
