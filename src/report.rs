//! Calculation results and their human-readable report

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calc::MonthlyPayment;

/// Outcome of a solved loan request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "solve", rename_all = "snake_case")]
pub enum CalculationResult {
    Payment { payment: i64, overpayment: i64 },
    Periods { months: i64, overpayment: i64 },
    Principal { principal: i64, overpayment: i64 },
    Differentiated {
        schedule: Vec<MonthlyPayment>,
        overpayment: i64,
    },
}

impl CalculationResult {
    pub fn overpayment(&self) -> i64 {
        match self {
            CalculationResult::Payment { overpayment, .. }
            | CalculationResult::Periods { overpayment, .. }
            | CalculationResult::Principal { overpayment, .. }
            | CalculationResult::Differentiated { overpayment, .. } => *overpayment,
        }
    }

    /// Report lines in print order
    pub fn report_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        match self {
            CalculationResult::Payment { payment, .. } => {
                lines.push(format!("Your monthly payment = {}!", payment));
            }
            CalculationResult::Periods { months, .. } => {
                lines.push(format!("It will take {} to repay this loan!", format_term(*months)));
            }
            CalculationResult::Principal { principal, .. } => {
                lines.push(format!("Your loan principal = {}!", principal));
            }
            CalculationResult::Differentiated { schedule, .. } => {
                lines.extend(
                    schedule
                        .iter()
                        .map(|p| format!("Month {}: payment is {}", p.month, p.payment)),
                );
                lines.push(String::new());
            }
        }
        lines.push(format!("Overpayment = {}", self.overpayment()));
        lines
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.report_lines().join("\n"))
    }
}

/// Express a month count as months, whole years, or years and months.
///
/// No singular forms: 1 month reads "1 months", 12 months reads "1 years".
pub fn format_term(months: i64) -> String {
    let years = months / 12;
    let rest = months % 12;
    if years == 0 {
        format!("{} months", months)
    } else if rest == 0 {
        format!("{} years", years)
    } else {
        format!("{} years and {} months", years, rest)
    }
}
