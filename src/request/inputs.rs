//! Raw calculator inputs as supplied on the command line

use std::fmt;
use std::str::FromStr;

use crate::error::{LoanError, Result};

/// Repayment scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentScheme {
    /// Equal monthly payments
    Annuity,
    /// Equal principal installments plus interest on the remaining balance
    Differentiated,
}

impl FromStr for PaymentScheme {
    type Err = LoanError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "annuity" => Ok(PaymentScheme::Annuity),
            "diff" => Ok(PaymentScheme::Differentiated),
            other => Err(LoanError::invalid(format!("unknown payment scheme: {}", other))),
        }
    }
}

impl fmt::Display for PaymentScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentScheme::Annuity => write!(f, "annuity"),
            PaymentScheme::Differentiated => write!(f, "diff"),
        }
    }
}

/// Calculator inputs before validation. Any field may be absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoanInputs {
    pub principal: Option<f64>,
    pub payment: Option<f64>,
    pub periods: Option<f64>,
    /// Annual interest rate in percent
    pub interest: Option<f64>,
    pub scheme: Option<PaymentScheme>,
}

impl LoanInputs {
    /// Parse each supplied text field; absent fields stay absent.
    ///
    /// A differentiated schedule takes its periods as a whole-month integer
    /// literal, so "6.0" and "1e1" are rejected there.
    pub fn from_text(
        principal: Option<&str>,
        payment: Option<&str>,
        periods: Option<&str>,
        interest: Option<&str>,
        scheme: Option<&str>,
    ) -> Result<Self> {
        let scheme = scheme.map(|s| s.parse::<PaymentScheme>()).transpose()?;
        let periods = match (scheme, periods) {
            (Some(PaymentScheme::Differentiated), Some(text)) => {
                Some(parse_whole_months(text)? as f64)
            }
            (_, text) => text.map(|s| parse_amount("periods", s)).transpose()?,
        };

        Ok(Self {
            principal: principal.map(|s| parse_amount("principal", s)).transpose()?,
            payment: payment.map(|s| parse_amount("payment", s)).transpose()?,
            periods,
            interest: interest.map(|s| parse_amount("interest", s)).transpose()?,
            scheme,
        })
    }

    /// Supplied numeric fields paired with their names
    pub fn supplied_amounts(&self) -> Vec<(&'static str, f64)> {
        [
            ("principal", self.principal),
            ("payment", self.payment),
            ("periods", self.periods),
            ("interest", self.interest),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }
}

/// Parse a finite decimal number, surrounding whitespace allowed
pub fn parse_amount(field: &str, text: &str) -> Result<f64> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| LoanError::invalid(format!("{} is not a number: {:?}", field, text)))?;
    if !value.is_finite() {
        return Err(LoanError::invalid(format!("{} must be finite, got {}", field, text)));
    }
    Ok(value)
}

/// Parse a month count written as a plain non-negative integer
pub fn parse_whole_months(text: &str) -> Result<u32> {
    text.trim().parse().map_err(|_| {
        LoanError::invalid(format!("periods must be a whole number of months: {:?}", text))
    })
}
