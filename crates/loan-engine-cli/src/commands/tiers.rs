use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use loan_engine_core::tiers::catalog::{LoanTier, TierCatalog};
use loan_engine_core::tiers::recommend::{self, RecommendationInput};

use crate::input;

/// Arguments for tier lookup
#[derive(Args)]
pub struct TierLookupArgs {
    /// Loan amount to match against the catalog
    #[arg(long, short = 'a')]
    pub amount: Decimal,

    /// Path to a JSON file with an alternate tier catalog (array of tiers)
    #[arg(long)]
    pub catalog: Option<String>,
}

/// Arguments for tier recommendation
#[derive(Args)]
pub struct RecommendArgs {
    /// Path to JSON input file (overrides individual flags)
    #[arg(long)]
    pub input: Option<String>,

    /// Years the business has been operating
    #[arg(long)]
    pub years: Option<Decimal>,

    /// Monthly revenue
    #[arg(long)]
    pub revenue: Option<Decimal>,

    /// Requested funding amount
    #[arg(long, short = 'a')]
    pub amount: Option<Decimal>,

    /// Path to a JSON file with an alternate tier catalog (array of tiers)
    #[arg(long)]
    pub catalog: Option<String>,
}

fn load_catalog(path: &Option<String>) -> Result<TierCatalog, Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            let tiers: Vec<LoanTier> = input::file::read_json(p)?;
            Ok(TierCatalog::new(tiers)?)
        }
        None => Ok(TierCatalog::default()),
    }
}

pub fn run_tier_lookup(args: TierLookupArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let catalog = load_catalog(&args.catalog)?;
    let tier = catalog.lookup(args.amount).clone();
    Ok(serde_json::to_value(tier)?)
}

pub fn run_recommend(args: RecommendArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let catalog = load_catalog(&args.catalog)?;

    let recommendation_input: RecommendationInput = if let Some(ref path) = args.input {
        input::file::read_json(path)?
    } else if let Some(data) = input::stdin::read_stdin()? {
        serde_json::from_value(data)?
    } else {
        RecommendationInput {
            years_in_business: args
                .years
                .ok_or("--years is required (or provide --input)")?,
            monthly_revenue: args
                .revenue
                .ok_or("--revenue is required (or provide --input)")?,
            estimated_amount: args
                .amount
                .ok_or("--amount is required (or provide --input)")?,
        }
    };

    let output = recommend::recommend_tier(&catalog, &recommendation_input)?;
    Ok(serde_json::to_value(output)?)
}
