//! Accelerated payoff simulation: balance decay under an extra fixed
//! monthly contribution on top of the original scheduled installment.
//!
//! The installment is the one priced for the original term; it is never
//! recomputed for the shorter horizon. The simulation loop is bounded by
//! [`PAYOFF_CEILING_FACTOR`] times the original term so that a contribution
//! too small to retire the balance still terminates, reporting the ceiling.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::payment::{monthly_installment, monthly_rate, validate_scenario};
use crate::error::LoanEngineError;
use crate::types::{with_metadata, ComputationOutput, Money, Months, Percent};
use crate::LoanEngineResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// The simulation runs at most this multiple of the original term.
pub const PAYOFF_CEILING_FACTOR: Months = 2;

/// Balance below this is treated as retired (one cent).
pub const BALANCE_EPSILON: Decimal = dec!(0.01);

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceleratedPayoffInput {
    /// Borrowed amount.
    pub principal: Money,
    /// Nominal annual rate in percent.
    pub annual_rate: Percent,
    /// Original term in months.
    pub term_months: Months,
    /// Extra amount added to every monthly payment.
    pub extra_monthly: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AcceleratedPayoffOutput {
    /// Months actually needed to retire the balance.
    pub months_to_payoff: Months,
    /// Interest paid over the accelerated schedule.
    pub total_interest: Money,
    /// Original term, for comparison.
    pub original_months: Months,
    /// Interest paid over the original full-term schedule.
    pub original_interest: Money,
    /// original_months - months_to_payoff.
    pub months_saved: Months,
    /// original_interest - total_interest.
    pub interest_saved: Money,
    /// True when the simulation hit the iteration ceiling before the
    /// balance reached zero.
    pub capped: bool,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Simulate payoff with an extra fixed monthly contribution and compare
/// against the original full-term schedule.
pub fn simulate_accelerated_payoff(
    input: &AcceleratedPayoffInput,
) -> LoanEngineResult<ComputationOutput<AcceleratedPayoffOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_scenario(input.principal, input.annual_rate, input.term_months)?;
    if input.extra_monthly < Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "extra_monthly".into(),
            reason: "Extra monthly contribution cannot be negative".into(),
        });
    }

    let monthly_payment =
        monthly_installment(input.principal, input.annual_rate, input.term_months)?;
    let r = monthly_rate(input.annual_rate);

    // Baseline: the original schedule run to full term, no extra payment.
    let original_interest = full_term_interest(input.principal, r, monthly_payment, input.term_months);

    // Accelerated run.
    let ceiling = input.term_months.saturating_mul(PAYOFF_CEILING_FACTOR);
    let accelerated_payment = monthly_payment + input.extra_monthly;

    let mut balance = input.principal;
    let mut total_interest = Decimal::ZERO;
    let mut months = 0u32;

    while balance > BALANCE_EPSILON && months < ceiling {
        months += 1;
        let interest = balance * r;
        let mut principal = accelerated_payment - interest;
        // Never overpay past the remaining balance.
        if principal > balance {
            principal = balance;
        }
        balance -= principal;
        if balance < Decimal::ZERO {
            balance = Decimal::ZERO;
        }
        total_interest += interest;
    }

    let capped = balance > BALANCE_EPSILON;
    if capped {
        warnings.push(format!(
            "Balance of {} remained after the {}-month ceiling; payment does not retire the loan",
            balance, ceiling
        ));
    }

    let output = AcceleratedPayoffOutput {
        months_to_payoff: months,
        total_interest,
        original_months: input.term_months,
        original_interest,
        months_saved: input.term_months.saturating_sub(months),
        interest_saved: original_interest - total_interest,
        capped,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Accelerated Payoff Simulation (bounded iteration)",
        input,
        warnings,
        elapsed,
        output,
    ))
}

/// Interest accumulated by running the level payment over the full term.
fn full_term_interest(principal: Money, r: Decimal, payment: Money, term: Months) -> Money {
    let mut balance = principal;
    let mut total = Decimal::ZERO;
    for _ in 0..term {
        let interest = balance * r;
        let principal_part = payment - interest;
        balance -= principal_part;
        if balance < Decimal::ZERO {
            balance = Decimal::ZERO;
        }
        total += interest;
    }
    total
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn base_input(extra: Decimal) -> AcceleratedPayoffInput {
        AcceleratedPayoffInput {
            principal: dec!(100_000),
            annual_rate: dec!(10),
            term_months: 12,
            extra_monthly: extra,
        }
    }

    #[test]
    fn zero_extra_reproduces_original_term() {
        let out = simulate_accelerated_payoff(&base_input(Decimal::ZERO))
            .unwrap()
            .result;
        assert_eq!(out.months_to_payoff, 12);
        let diff = (out.total_interest - out.original_interest).abs();
        assert!(diff < dec!(0.01), "interest diff = {diff}");
        assert!(!out.capped);
    }

    #[test]
    fn extra_payment_shortens_term_and_saves_interest() {
        let out = simulate_accelerated_payoff(&base_input(dec!(2000)))
            .unwrap()
            .result;
        assert!(out.months_to_payoff < 12);
        assert!(out.total_interest < out.original_interest);
        assert!(out.interest_saved > Decimal::ZERO);
    }

    #[test]
    fn huge_extra_pays_off_in_one_month_without_underflow() {
        let out = simulate_accelerated_payoff(&base_input(dec!(1_000_000)))
            .unwrap()
            .result;
        assert_eq!(out.months_to_payoff, 1);
        assert!(out.total_interest >= Decimal::ZERO);
    }

    #[test]
    fn rejects_negative_extra() {
        let err = simulate_accelerated_payoff(&base_input(dec!(-1))).unwrap_err();
        assert!(matches!(err, LoanEngineError::InvalidInput { .. }));
    }
}
