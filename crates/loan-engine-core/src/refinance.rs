//! Refinancing trade-off: remaining schedule of the current loan versus a
//! candidate new loan at a different rate/term with an upfront cost.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::payment::monthly_installment;
use crate::types::{with_metadata, ComputationOutput, Money, Months, Percent};
use crate::LoanEngineResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinanceInput {
    /// Remaining balance on the current loan.
    pub balance: Money,
    /// Current nominal annual rate in percent.
    pub current_rate: Percent,
    /// Remaining term on the current loan, in months.
    pub remaining_term: Months,
    /// Candidate new nominal annual rate in percent.
    pub new_rate: Percent,
    /// Candidate new term in months.
    pub new_term: Months,
    /// One-off cost of refinancing (negative for a rebate).
    pub upfront_cost: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefinanceComparison {
    pub current_monthly_payment: Money,
    pub current_total_payment: Money,
    pub current_total_interest: Money,
    pub current_remaining_term: Months,

    pub new_monthly_payment: Money,
    /// New installments over the new term, plus the upfront cost.
    pub new_total_payment: Money,
    /// Interest only; excludes the upfront cost.
    pub new_total_interest: Money,
    pub new_term: Months,

    /// Positive when the new loan is cheaper per month.
    pub monthly_savings: Money,
    /// Positive when the new loan wins on total cost, upfront cost included.
    pub total_savings: Money,
    /// Months until cumulative monthly savings recover the upfront cost.
    /// None when the monthly payment does not decrease.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub break_even_months: Option<Decimal>,
    /// total_savings > 0. Independent of the sign of monthly_savings.
    pub worth_refinancing: bool,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compare the current loan's remaining schedule against a refinancing
/// candidate and derive savings and break-even.
pub fn evaluate_refinance(
    input: &RefinanceInput,
) -> LoanEngineResult<ComputationOutput<RefinanceComparison>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let current_monthly_payment =
        monthly_installment(input.balance, input.current_rate, input.remaining_term)?;
    let new_monthly_payment =
        monthly_installment(input.balance, input.new_rate, input.new_term)?;

    let current_total_payment = current_monthly_payment * Decimal::from(input.remaining_term);
    let current_total_interest = current_total_payment - input.balance;

    let new_installments = new_monthly_payment * Decimal::from(input.new_term);
    let new_total_payment = new_installments + input.upfront_cost;
    let new_total_interest = new_installments - input.balance;

    let monthly_savings = current_monthly_payment - new_monthly_payment;
    let total_savings = current_total_payment - new_total_payment;

    // Costs are only recovered by a payment that actually decreases.
    let break_even_months = if monthly_savings > Decimal::ZERO {
        Some(input.upfront_cost / monthly_savings)
    } else {
        None
    };

    let worth_refinancing = total_savings > Decimal::ZERO;
    if worth_refinancing && monthly_savings <= Decimal::ZERO {
        warnings.push(
            "Total cost improves although the monthly payment does not decrease".into(),
        );
    }

    let output = RefinanceComparison {
        current_monthly_payment,
        current_total_payment,
        current_total_interest,
        current_remaining_term: input.remaining_term,
        new_monthly_payment,
        new_total_payment,
        new_total_interest,
        new_term: input.new_term,
        monthly_savings,
        total_savings,
        break_even_months,
        worth_refinancing,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Refinance Comparison (annuity both sides)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn reference_input() -> RefinanceInput {
        RefinanceInput {
            balance: dec!(80_000),
            current_rate: dec!(12),
            remaining_term: 18,
            new_rate: dec!(9),
            new_term: 18,
            upfront_cost: dec!(2000),
        }
    }

    #[test]
    fn lower_rate_same_term_is_worth_it() {
        let out = evaluate_refinance(&reference_input()).unwrap().result;
        assert!(out.monthly_savings > Decimal::ZERO);
        assert!(out.total_savings > Decimal::ZERO);
        assert!(out.worth_refinancing);

        let be = out.break_even_months.unwrap();
        let expected = dec!(2000) / out.monthly_savings;
        assert_eq!(be, expected);
    }

    #[test]
    fn longer_term_can_lose_despite_lower_monthly() {
        let mut input = reference_input();
        input.new_term = 60;
        let out = evaluate_refinance(&input).unwrap().result;
        assert!(out.monthly_savings > Decimal::ZERO);
        assert!(out.total_savings < Decimal::ZERO);
        assert!(!out.worth_refinancing);
    }

    #[test]
    fn no_break_even_when_monthly_payment_rises() {
        let mut input = reference_input();
        input.new_rate = dec!(12);
        input.new_term = 12; // shorter term, higher monthly payment
        let out = evaluate_refinance(&input).unwrap().result;
        assert!(out.monthly_savings < Decimal::ZERO);
        assert!(out.break_even_months.is_none());
    }

    #[test]
    fn rejects_zero_balance() {
        let mut input = reference_input();
        input.balance = Decimal::ZERO;
        assert!(evaluate_refinance(&input).is_err());
    }
}
