//! Validation and dispatch of loan requests

use log::debug;

use super::inputs::{LoanInputs, PaymentScheme};
use crate::calc::{differentiated_schedule, solve_payment, solve_periods, solve_principal};
use crate::error::{LoanError, Result};
use crate::report::CalculationResult;

/// A validated request: which quantity to solve for, with exactly the inputs it needs.
///
/// `annual_rate` is always a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LoanRequest {
    /// Annuity: principal, term, rate -> monthly payment
    SolvePayment {
        principal: f64,
        periods: f64,
        annual_rate: f64,
    },
    /// Annuity: principal, payment, rate -> term in months
    SolvePeriods {
        principal: f64,
        payment: f64,
        annual_rate: f64,
    },
    /// Annuity: payment, term, rate -> principal
    SolvePrincipal {
        payment: f64,
        periods: f64,
        annual_rate: f64,
    },
    /// Differentiated: principal, term, rate -> schedule
    Differentiated {
        principal: f64,
        periods: f64,
        annual_rate: f64,
    },
}

impl LoanRequest {
    /// Validate raw inputs and select the single matching solve variant
    pub fn from_inputs(inputs: &LoanInputs) -> Result<Self> {
        let request = Self::select(inputs);
        if let Err(ref err) = request {
            debug!("rejected {:?}: {}", inputs, err);
        }
        request
    }

    fn select(inputs: &LoanInputs) -> Result<Self> {
        let scheme = inputs
            .scheme
            .ok_or_else(|| LoanError::invalid("payment scheme is missing"))?;

        if scheme == PaymentScheme::Differentiated && inputs.payment.is_some() {
            return Err(LoanError::invalid(
                "payment cannot be given for a differentiated schedule",
            ));
        }

        let annual_rate = inputs
            .interest
            .ok_or_else(|| LoanError::invalid("interest is missing"))?;

        if let Some((name, value)) = inputs
            .supplied_amounts()
            .into_iter()
            .find(|&(_, value)| value < 0.0)
        {
            return Err(LoanError::invalid(format!(
                "{} must not be negative, got {}",
                name, value
            )));
        }

        if let (PaymentScheme::Differentiated, Some(periods)) = (scheme, inputs.periods) {
            if periods.fract() != 0.0 {
                return Err(LoanError::invalid(format!(
                    "differentiated periods must be whole months, got {}",
                    periods
                )));
            }
        }

        match (scheme, inputs.principal, inputs.payment, inputs.periods) {
            (PaymentScheme::Annuity, Some(principal), None, Some(periods)) => {
                Ok(LoanRequest::SolvePayment {
                    principal,
                    periods,
                    annual_rate,
                })
            }
            (PaymentScheme::Annuity, Some(principal), Some(payment), None) => {
                Ok(LoanRequest::SolvePeriods {
                    principal,
                    payment,
                    annual_rate,
                })
            }
            (PaymentScheme::Annuity, None, Some(payment), Some(periods)) => {
                Ok(LoanRequest::SolvePrincipal {
                    payment,
                    periods,
                    annual_rate,
                })
            }
            (PaymentScheme::Differentiated, Some(principal), None, Some(periods)) => {
                Ok(LoanRequest::Differentiated {
                    principal,
                    periods,
                    annual_rate,
                })
            }
            (PaymentScheme::Annuity, ..) => Err(LoanError::invalid(
                "annuity needs exactly two of principal, payment and periods",
            )),
            (PaymentScheme::Differentiated, ..) => Err(LoanError::invalid(
                "differentiated schedule needs principal and periods",
            )),
        }
    }

    pub fn scheme(&self) -> PaymentScheme {
        match self {
            LoanRequest::Differentiated { .. } => PaymentScheme::Differentiated,
            _ => PaymentScheme::Annuity,
        }
    }

    /// Short name of the quantity being solved for
    pub fn target(&self) -> &'static str {
        match self {
            LoanRequest::SolvePayment { .. } => "monthly payment",
            LoanRequest::SolvePeriods { .. } => "repayment term",
            LoanRequest::SolvePrincipal { .. } => "loan principal",
            LoanRequest::Differentiated { .. } => "differentiated schedule",
        }
    }

    /// Run the matching solver
    pub fn solve(&self) -> Result<CalculationResult> {
        debug!("solving {} ({})", self.target(), self.scheme());

        match *self {
            LoanRequest::SolvePayment {
                principal,
                periods,
                annual_rate,
            } => {
                let solved = solve_payment(principal, annual_rate, periods)?;
                Ok(CalculationResult::Payment {
                    payment: solved.amount,
                    overpayment: solved.overpayment,
                })
            }
            LoanRequest::SolvePeriods {
                principal,
                payment,
                annual_rate,
            } => {
                let solved = solve_periods(principal, payment, annual_rate)?;
                Ok(CalculationResult::Periods {
                    months: solved.amount,
                    overpayment: solved.overpayment,
                })
            }
            LoanRequest::SolvePrincipal {
                payment,
                periods,
                annual_rate,
            } => {
                let solved = solve_principal(payment, annual_rate, periods)?;
                Ok(CalculationResult::Principal {
                    principal: solved.amount,
                    overpayment: solved.overpayment,
                })
            }
            LoanRequest::Differentiated {
                principal,
                periods,
                annual_rate,
            } => {
                let schedule = differentiated_schedule(principal, periods, annual_rate)?;
                Ok(CalculationResult::Differentiated {
                    schedule: schedule.payments,
                    overpayment: schedule.overpayment,
                })
            }
        }
    }
}
