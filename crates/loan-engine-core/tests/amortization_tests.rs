use loan_engine_core::amortization::payment::{self, InstallmentInput};
use loan_engine_core::amortization::schedule::{self, ScheduleInput};
use loan_engine_core::payoff::{self, AcceleratedPayoffInput};
use loan_engine_core::LoanEngineError;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn assert_close(actual: Decimal, expected: Decimal, tol: Decimal, msg: &str) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{}: expected ~{}, got {} (diff = {})",
        msg,
        expected,
        actual,
        diff
    );
}

// ===========================================================================
// Installment tests
// ===========================================================================

#[test]
fn test_reference_scenario_installment() {
    // P = 100,000 at 10% over 12 months: the canonical calculator example.
    let input = InstallmentInput {
        principal: dec!(100_000),
        annual_rate: dec!(10),
        term_months: 12,
    };
    let out = payment::compute_installment(&input).unwrap().result;

    assert_close(out.monthly_payment, dec!(8791.59), dec!(0.01), "installment");
    assert_close(out.total_interest, dec!(5499.08), dec!(0.01), "total interest");
}

#[test]
fn test_installment_rejects_invalid_scenarios() {
    let bad_principal = InstallmentInput {
        principal: dec!(-5),
        annual_rate: dec!(10),
        term_months: 12,
    };
    assert!(matches!(
        payment::compute_installment(&bad_principal).unwrap_err(),
        LoanEngineError::InvalidInput { .. }
    ));

    let bad_term = InstallmentInput {
        principal: dec!(1000),
        annual_rate: dec!(10),
        term_months: 0,
    };
    assert!(payment::compute_installment(&bad_term).is_err());
}

// ===========================================================================
// Schedule tests
// ===========================================================================

fn run_schedule(principal: Decimal, rate: Decimal, term: u32) -> schedule::ScheduleOutput {
    let input = ScheduleInput {
        principal,
        annual_rate: rate,
        term_months: term,
    };
    schedule::generate_schedule(&input).unwrap().result
}

#[test]
fn test_schedule_principal_sums_to_loan_amount() {
    for (p, r, n) in [
        (dec!(100_000), dec!(10), 12u32),
        (dec!(250_000), dec!(9.5), 36),
        (dec!(5000), dec!(0), 6),
        (dec!(999_999), dec!(8.5), 24),
    ] {
        let out = run_schedule(p, r, n);
        let totals = schedule::schedule_totals(&out.entries);
        let rel = ((totals.total_principal - p) / p).abs();
        assert!(
            rel < dec!(0.000001),
            "principal sum off by {rel} for P={p} R={r} N={n}"
        );
    }
}

#[test]
fn test_schedule_balance_never_increases() {
    let out = run_schedule(dec!(250_000), dec!(9.5), 36);
    let mut prev = dec!(250_000);
    for entry in &out.entries {
        assert!(entry.balance <= prev);
        prev = entry.balance;
    }
    assert!(out.entries.last().unwrap().balance < dec!(0.01));
}

#[test]
fn test_schedule_payment_components_add_up() {
    let out = run_schedule(dec!(100_000), dec!(10), 12);
    for entry in &out.entries {
        assert_close(
            entry.principal + entry.interest,
            entry.payment,
            dec!(0.0001),
            "payment split",
        );
    }
}

#[test]
fn test_zero_rate_schedule_has_no_interest() {
    let out = run_schedule(dec!(12_000), dec!(0), 12);
    let totals = schedule::schedule_totals(&out.entries);
    assert_eq!(totals.total_interest, Decimal::ZERO);
    assert_eq!(out.monthly_payment, dec!(1000));
}

// ===========================================================================
// Accelerated payoff tests
// ===========================================================================

#[test]
fn test_zero_extra_payment_matches_full_schedule() {
    let input = AcceleratedPayoffInput {
        principal: dec!(100_000),
        annual_rate: dec!(10),
        term_months: 12,
        extra_monthly: Decimal::ZERO,
    };
    let out = payoff::simulate_accelerated_payoff(&input).unwrap().result;

    let sched = run_schedule(dec!(100_000), dec!(10), 12);
    let totals = schedule::schedule_totals(&sched.entries);

    assert_eq!(out.months_to_payoff, 12);
    assert_close(
        out.total_interest,
        totals.total_interest,
        dec!(0.01),
        "baseline interest",
    );
}

#[test]
fn test_extra_payment_never_extends_the_loan() {
    for extra in [dec!(100), dec!(1000), dec!(5000), dec!(20_000)] {
        let input = AcceleratedPayoffInput {
            principal: dec!(100_000),
            annual_rate: dec!(10),
            term_months: 12,
            extra_monthly: extra,
        };
        let out = payoff::simulate_accelerated_payoff(&input).unwrap().result;
        assert!(out.months_to_payoff <= 12, "extra = {extra}");
        assert!(out.total_interest <= out.original_interest);
    }
}

#[test]
fn test_one_month_payoff_reports_single_month() {
    let input = AcceleratedPayoffInput {
        principal: dec!(50_000),
        annual_rate: dec!(12),
        term_months: 24,
        extra_monthly: dec!(100_000),
    };
    let out = payoff::simulate_accelerated_payoff(&input).unwrap().result;
    assert_eq!(out.months_to_payoff, 1);
    assert_eq!(out.months_saved, 23);
    assert!(!out.capped);
}
