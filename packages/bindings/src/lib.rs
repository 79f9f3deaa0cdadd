use napi::Result as NapiResult;
use napi_derive::napi;
use serde::Deserialize;

use loan_engine_core::tiers::catalog::TierCatalog;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Amortization
// ---------------------------------------------------------------------------

#[napi]
pub fn compute_installment(input_json: String) -> NapiResult<String> {
    let input: loan_engine_core::amortization::payment::InstallmentInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = loan_engine_core::amortization::payment::compute_installment(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn generate_schedule(input_json: String) -> NapiResult<String> {
    let input: loan_engine_core::amortization::schedule::ScheduleInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = loan_engine_core::amortization::schedule::generate_schedule(&input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Payoff / Refinance
// ---------------------------------------------------------------------------

#[napi]
pub fn simulate_accelerated_payoff(input_json: String) -> NapiResult<String> {
    let input: loan_engine_core::payoff::AcceleratedPayoffInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        loan_engine_core::payoff::simulate_accelerated_payoff(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn evaluate_refinance(input_json: String) -> NapiResult<String> {
    let input: loan_engine_core::refinance::RefinanceInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        loan_engine_core::refinance::evaluate_refinance(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Tiers
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct LookupTierInput {
    amount: rust_decimal::Decimal,
}

#[napi]
pub fn lookup_tier(input_json: String) -> NapiResult<String> {
    let input: LookupTierInput = serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let catalog = TierCatalog::default();
    let tier = catalog.lookup(input.amount);
    serde_json::to_string(tier).map_err(to_napi_error)
}

#[napi]
pub fn recommend_tier(input_json: String) -> NapiResult<String> {
    let input: loan_engine_core::tiers::recommend::RecommendationInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let catalog = TierCatalog::default();
    let output = loan_engine_core::tiers::recommend::recommend_tier(&catalog, &input)
        .map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}
