mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::amortization::{InstallmentArgs, ScheduleArgs};
use commands::payoff::PayoffArgs;
use commands::refinance::RefinanceArgs;
use commands::tiers::{RecommendArgs, TierLookupArgs};

/// Small-business loan calculations with decimal precision
#[derive(Parser)]
#[command(
    name = "lend",
    version,
    about = "Small-business loan calculations with decimal precision",
    long_about = "A CLI for fixed-rate loan calculations: level installments, full \
                  amortization schedules, accelerated-payoff simulation, refinancing \
                  comparison, and loan-tier lookup and recommendation."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate the fixed monthly installment for a loan
    Installment(InstallmentArgs),
    /// Generate the full month-by-month amortization schedule
    Schedule(ScheduleArgs),
    /// Simulate payoff with an extra fixed monthly payment
    Payoff(PayoffArgs),
    /// Compare the current loan against a refinancing option
    Refinance(RefinanceArgs),
    /// Look up the loan tier for an amount
    TierLookup(TierLookupArgs),
    /// Recommend a loan tier from business strength
    Recommend(RecommendArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Installment(args) => commands::amortization::run_installment(args),
        Commands::Schedule(args) => commands::amortization::run_schedule(args),
        Commands::Payoff(args) => commands::payoff::run_payoff(args),
        Commands::Refinance(args) => commands::refinance::run_refinance(args),
        Commands::TierLookup(args) => commands::tiers::run_tier_lookup(args),
        Commands::Recommend(args) => commands::tiers::run_recommend(args),
        Commands::Version => {
            println!("lend {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
