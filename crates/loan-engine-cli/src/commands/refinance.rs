use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_engine_core::refinance::{self, RefinanceInput};

use crate::input;

/// Arguments for refinancing comparison
#[derive(Args)]
#[command(allow_hyphen_values = true)]
pub struct RefinanceArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Remaining balance on the current loan
    #[arg(long)]
    pub balance: Option<Decimal>,

    /// Current annual rate in percent
    #[arg(long)]
    pub current_rate: Option<Decimal>,

    /// Remaining term in months
    #[arg(long)]
    pub remaining_term: Option<u32>,

    /// New annual rate in percent
    #[arg(long)]
    pub new_rate: Option<Decimal>,

    /// New term in months
    #[arg(long)]
    pub new_term: Option<u32>,

    /// Upfront refinancing cost (negative for a rebate)
    #[arg(long, default_value = "0")]
    pub upfront_cost: Decimal,
}

pub fn run_refinance(args: RefinanceArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let refinance_input: RefinanceInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        RefinanceInput {
            balance: args
                .balance
                .ok_or("--balance is required (or provide --input)")?,
            current_rate: args
                .current_rate
                .ok_or("--current-rate is required (or provide --input)")?,
            remaining_term: args
                .remaining_term
                .ok_or("--remaining-term is required (or provide --input)")?,
            new_rate: args
                .new_rate
                .ok_or("--new-rate is required (or provide --input)")?,
            new_term: args
                .new_term
                .ok_or("--new-term is required (or provide --input)")?,
            upfront_cost: args.upfront_cost,
        }
    };

    let output = refinance::evaluate_refinance(&refinance_input)?;
    Ok(serde_json::to_value(output)?)
}
