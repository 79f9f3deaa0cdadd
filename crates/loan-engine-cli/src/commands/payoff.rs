use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_engine_core::payoff::{self, AcceleratedPayoffInput};

use crate::input;

/// Arguments for accelerated payoff simulation
#[derive(Args)]
pub struct PayoffArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long, short = 'p')]
    pub principal: Option<Decimal>,

    /// Nominal annual rate in percent
    #[arg(long, short = 'r')]
    pub rate: Option<Decimal>,

    /// Original term in months
    #[arg(long, short = 't')]
    pub term: Option<u32>,

    /// Extra amount added to every monthly payment
    #[arg(long, short = 'e', default_value = "0")]
    pub extra: Decimal,
}

pub fn run_payoff(args: PayoffArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let payoff_input: AcceleratedPayoffInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        AcceleratedPayoffInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_months: args.term.ok_or("--term is required (or provide --input)")?,
            extra_monthly: args.extra,
        }
    };

    let output = payoff::simulate_accelerated_payoff(&payoff_input)?;
    Ok(serde_json::to_value(output)?)
}
