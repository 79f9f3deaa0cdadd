//! Month-by-month amortization schedule for a fixed-rate loan.
//!
//! A single forward pass: the installment is computed once and never
//! recomputed, even when terminal rounding forces the balance clamp.
//! All math in `rust_decimal::Decimal`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::amortization::payment::{monthly_installment, monthly_rate};
use crate::types::{with_metadata, ComputationOutput, Money, Months, Percent};
use crate::LoanEngineResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    /// Borrowed amount.
    pub principal: Money,
    /// Nominal annual rate in percent.
    pub annual_rate: Percent,
    /// Term in months.
    pub term_months: Months,
}

/// One month of the amortization schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Month number (1-indexed).
    pub month: Months,
    /// Payment for the month (the level installment).
    pub payment: Money,
    /// Principal component of the payment.
    pub principal: Money,
    /// Interest component of the payment.
    pub interest: Money,
    /// Remaining balance after this month, clamped at zero.
    pub balance: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleOutput {
    /// Level monthly payment used for every entry.
    pub monthly_payment: Money,
    /// One entry per month, in order.
    pub entries: Vec<ScheduleEntry>,
}

/// Column sums over a schedule. Derived by reduction, never stored
/// alongside the entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleTotals {
    pub total_payment: Money,
    pub total_principal: Money,
    pub total_interest: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Generate the full amortization schedule for a fixed-rate loan.
pub fn generate_schedule(
    input: &ScheduleInput,
) -> LoanEngineResult<ComputationOutput<ScheduleOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    let monthly_payment =
        monthly_installment(input.principal, input.annual_rate, input.term_months)?;
    let r = monthly_rate(input.annual_rate);

    let mut balance = input.principal;
    let mut entries = Vec::with_capacity(input.term_months as usize);

    for month in 1..=input.term_months {
        let interest = balance * r;
        let principal = monthly_payment - interest;

        balance -= principal;
        if balance < Decimal::ZERO {
            balance = Decimal::ZERO;
        }

        entries.push(ScheduleEntry {
            month,
            payment: monthly_payment,
            principal,
            interest,
            balance,
        });
    }

    let output = ScheduleOutput {
        monthly_payment,
        entries,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Forward-Pass Amortization Schedule",
        input,
        warnings,
        elapsed,
        output,
    ))
}

/// Reduce a schedule to its column sums.
pub fn schedule_totals(entries: &[ScheduleEntry]) -> ScheduleTotals {
    let mut totals = ScheduleTotals {
        total_payment: Decimal::ZERO,
        total_principal: Decimal::ZERO,
        total_interest: Decimal::ZERO,
    };
    for entry in entries {
        totals.total_payment += entry.payment;
        totals.total_principal += entry.principal;
        totals.total_interest += entry.interest;
    }
    totals
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
