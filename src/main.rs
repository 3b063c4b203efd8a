//! creditcalc CLI
//!
//! Solves for whichever of principal, payment or term is left out and prints
//! the report. Any failure prints "Incorrect parameters"; run with
//! `RUST_LOG=debug` to see why.

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;
use std::process::ExitCode;

use creditcalc::{LoanError, LoanInputs, LoanRequest};

/// Loan calculator for annuity and differentiated payments
#[derive(Parser, Debug)]
#[command(name = "creditcalc", version, about)]
struct Cli {
    /// Loan principal
    #[arg(long, allow_hyphen_values = true)]
    principal: Option<String>,

    /// Monthly payment (annuity only)
    #[arg(long, allow_hyphen_values = true)]
    payment: Option<String>,

    /// Number of monthly periods
    #[arg(long, allow_hyphen_values = true)]
    periods: Option<String>,

    /// Annual interest rate in percent, without the % sign
    #[arg(long, allow_hyphen_values = true)]
    interest: Option<String>,

    /// Payment scheme: annuity or diff
    #[arg(long = "type", value_name = "annuity|diff")]
    scheme: Option<String>,

    /// Print the result as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

impl Cli {
    fn inputs(&self) -> Result<LoanInputs, LoanError> {
        LoanInputs::from_text(
            self.principal.as_deref(),
            self.payment.as_deref(),
            self.periods.as_deref(),
            self.interest.as_deref(),
            self.scheme.as_deref(),
        )
    }
}

fn run(cli: &Cli) -> Result<String> {
    let inputs = cli.inputs().context("parsing arguments")?;
    let request = LoanRequest::from_inputs(&inputs).context("validating loan parameters")?;
    let result = request
        .solve()
        .with_context(|| format!("solving for {}", request.target()))?;

    if cli.json {
        serde_json::to_string_pretty(&result).context("serializing result")
    } else {
        Ok(result.to_string())
    }
}

fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    debug!("{:?}", cli);

    match run(&cli) {
        Ok(report) => {
            println!("{}", report);
            ExitCode::SUCCESS
        }
        Err(err) => {
            debug!("{:#}", err);
            println!("{}", LoanError::USER_MESSAGE);
            ExitCode::FAILURE
        }
    }
}
