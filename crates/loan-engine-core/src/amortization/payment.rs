//! Level monthly installment for a fixed-rate loan (standard annuity formula).

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::LoanEngineError;
use crate::types::{with_metadata, ComputationOutput, Money, Months, Percent};
use crate::LoanEngineResult;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallmentInput {
    /// Borrowed amount.
    pub principal: Money,
    /// Nominal annual rate in percent (10 = 10%).
    pub annual_rate: Percent,
    /// Term in months.
    pub term_months: Months,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InstallmentOutput {
    /// Level monthly payment that retires the principal over the term.
    pub monthly_payment: Money,
    /// monthly_payment * term_months.
    pub total_payment: Money,
    /// total_payment - principal.
    pub total_interest: Money,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Compute the fixed monthly installment and the implied totals.
pub fn compute_installment(
    input: &InstallmentInput,
) -> LoanEngineResult<ComputationOutput<InstallmentOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    let monthly_payment =
        monthly_installment(input.principal, input.annual_rate, input.term_months)?;
    let total_payment = monthly_payment * Decimal::from(input.term_months);
    let total_interest = total_payment - input.principal;

    let output = InstallmentOutput {
        monthly_payment,
        total_payment,
        total_interest,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Level-Payment Annuity Formula",
        input,
        warnings,
        elapsed,
        output,
    ))
}

/// The annuity formula itself: M = P * r * (1+r)^N / ((1+r)^N - 1),
/// or P / N when the rate is zero.
pub fn monthly_installment(
    principal: Money,
    annual_rate: Percent,
    term_months: Months,
) -> LoanEngineResult<Money> {
    validate_scenario(principal, annual_rate, term_months)?;

    let r = monthly_rate(annual_rate);
    if r.is_zero() {
        return Ok(principal / Decimal::from(term_months));
    }

    let factor = (Decimal::ONE + r).powi(term_months as i64);
    let denom = factor - Decimal::ONE;
    if denom.is_zero() {
        return Err(LoanEngineError::DivisionByZero {
            context: "annuity factor".into(),
        });
    }

    Ok(principal * r * factor / denom)
}

/// Monthly decimal rate from a nominal annual percentage.
pub fn monthly_rate(annual_rate: Percent) -> Decimal {
    annual_rate / dec!(100) / dec!(12)
}

pub(crate) fn validate_scenario(
    principal: Money,
    annual_rate: Percent,
    term_months: Months,
) -> LoanEngineResult<()> {
    if principal <= Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "principal".into(),
            reason: "Principal must be positive".into(),
        });
    }
    if annual_rate < Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "annual_rate".into(),
            reason: "Annual rate cannot be negative".into(),
        });
    }
    if term_months == 0 {
        return Err(LoanEngineError::InvalidInput {
            field: "term_months".into(),
            reason: "Term must be at least one month".into(),
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    const TOL: Decimal = dec!(0.01);

    fn assert_close(actual: Decimal, expected: Decimal, msg: &str) {
        let diff = (actual - expected).abs();
        assert!(
            diff <= TOL,
            "{}: expected ~{}, got {} (diff = {})",
            msg,
            expected,
            actual,
            diff
        );
    }

    #[test]
    fn reference_installment_100k_10pct_12m() {
        let m = monthly_installment(dec!(100_000), dec!(10), 12).unwrap();
        assert_close(m, dec!(8791.59), "monthly installment");
    }

    #[test]
    fn zero_rate_divides_principal_evenly() {
        let m = monthly_installment(dec!(12_000), Decimal::ZERO, 12).unwrap();
        assert_eq!(m, dec!(1000));
    }

    #[test]
    fn rejects_non_positive_principal() {
        let err = monthly_installment(Decimal::ZERO, dec!(10), 12).unwrap_err();
        assert!(matches!(err, LoanEngineError::InvalidInput { .. }));
    }

    #[test]
    fn rejects_zero_term() {
        let err = monthly_installment(dec!(1000), dec!(10), 0).unwrap_err();
        assert!(matches!(err, LoanEngineError::InvalidInput { .. }));
    }

    #[test]
    fn rejects_negative_rate() {
        let err = monthly_installment(dec!(1000), dec!(-1), 12).unwrap_err();
        assert!(matches!(err, LoanEngineError::InvalidInput { .. }));
    }

    #[test]
    fn installment_totals_are_consistent() {
        let input = InstallmentInput {
            principal: dec!(100_000),
            annual_rate: dec!(10),
            term_months: 12,
        };
        let out = compute_installment(&input).unwrap().result;
        assert_close(
            out.total_payment,
            out.monthly_payment * dec!(12),
            "total payment",
        );
        assert_close(out.total_interest, dec!(5499.08), "total interest");
    }
}
