use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_engine_core::amortization::payment::{self, InstallmentInput};
use loan_engine_core::amortization::schedule::{self, ScheduleInput};

use crate::input;

/// Arguments for installment calculation
#[derive(Args)]
pub struct InstallmentArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long, short = 'p')]
    pub principal: Option<Decimal>,

    /// Nominal annual rate in percent (e.g. 10.5)
    #[arg(long, short = 'r')]
    pub rate: Option<Decimal>,

    /// Term in months
    #[arg(long, short = 't')]
    pub term: Option<u32>,
}

/// Arguments for schedule generation
#[derive(Args)]
pub struct ScheduleArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Loan principal
    #[arg(long, short = 'p')]
    pub principal: Option<Decimal>,

    /// Nominal annual rate in percent
    #[arg(long, short = 'r')]
    pub rate: Option<Decimal>,

    /// Term in months
    #[arg(long, short = 't')]
    pub term: Option<u32>,
}

pub fn run_installment(args: InstallmentArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let installment_input: InstallmentInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        InstallmentInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_months: args.term.ok_or("--term is required (or provide --input)")?,
        }
    };

    let output = payment::compute_installment(&installment_input)?;
    Ok(serde_json::to_value(output)?)
}

pub fn run_schedule(args: ScheduleArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let schedule_input: ScheduleInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        ScheduleInput {
            principal: args
                .principal
                .ok_or("--principal is required (or provide --input)")?,
            annual_rate: args.rate.ok_or("--rate is required (or provide --input)")?,
            term_months: args.term.ok_or("--term is required (or provide --input)")?,
        }
    };

    let output = schedule::generate_schedule(&schedule_input)?;
    Ok(serde_json::to_value(output)?)
}
