//! Tier recommendation from a banded business-strength score.
//!
//! The score only ever downgrades the amount-matched tier by a single
//! step; it never upgrades, whatever the score.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::LoanEngineError;
use crate::tiers::catalog::{LoanTier, TierCatalog};
use crate::types::{with_metadata, ComputationOutput, Money};
use crate::LoanEngineResult;

/// Scores at or below this trigger the one-step conservative downgrade.
pub const CONSERVATIVE_SCORE_CUTOFF: u32 = 2;

/// Maximum attainable business-strength score.
pub const MAX_SCORE: u32 = 6;

// ---------------------------------------------------------------------------
// Input / Output types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationInput {
    pub years_in_business: Decimal,
    pub monthly_revenue: Money,
    /// The funding amount the business is asking for.
    pub estimated_amount: Money,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecommendationOutput {
    pub recommended_tier: LoanTier,
    /// Tier the amount alone would have matched.
    pub base_tier: LoanTier,
    /// Business-strength score, 0..=MAX_SCORE.
    pub score: u32,
    /// True when the score forced the one-step downgrade.
    pub downgraded: bool,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Recommend a tier for a stated funding need, conservatively downgrading
/// weak businesses by one tier.
pub fn recommend_tier(
    catalog: &TierCatalog,
    input: &RecommendationInput,
) -> LoanEngineResult<ComputationOutput<RecommendationOutput>> {
    let start = Instant::now();
    let warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let score = business_strength_score(input.years_in_business, input.monthly_revenue);
    let base_index = catalog.position(input.estimated_amount);

    let downgraded = score <= CONSERVATIVE_SCORE_CUTOFF && base_index > 0;
    let recommended_index = if score <= CONSERVATIVE_SCORE_CUTOFF {
        base_index.saturating_sub(1)
    } else {
        base_index
    };

    // Both indices come from position(), which is always in range.
    let base_tier = catalog.at(base_index).cloned().ok_or_else(|| {
        LoanEngineError::InvalidInput {
            field: "catalog".into(),
            reason: "Catalog resolved to an out-of-range tier index".into(),
        }
    })?;
    let recommended_tier = catalog.at(recommended_index).cloned().ok_or_else(|| {
        LoanEngineError::InvalidInput {
            field: "catalog".into(),
            reason: "Catalog resolved to an out-of-range tier index".into(),
        }
    })?;

    let output = RecommendationOutput {
        recommended_tier,
        base_tier,
        score,
        downgraded,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Banded Business-Strength Tier Recommendation",
        input,
        warnings,
        elapsed,
        output,
    ))
}

/// Banded score: years in business plus monthly revenue, 0..=6.
pub fn business_strength_score(years_in_business: Decimal, monthly_revenue: Money) -> u32 {
    let years_score = if years_in_business >= dec!(5) {
        3
    } else if years_in_business >= dec!(3) {
        2
    } else if years_in_business >= dec!(1) {
        1
    } else {
        0
    };

    let revenue_score = if monthly_revenue >= dec!(500_000) {
        3
    } else if monthly_revenue >= dec!(200_000) {
        2
    } else if monthly_revenue >= dec!(100_000) {
        1
    } else {
        0
    };

    years_score + revenue_score
}

fn validate_input(input: &RecommendationInput) -> LoanEngineResult<()> {
    if input.years_in_business < Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "years_in_business".into(),
            reason: "Years in business cannot be negative".into(),
        });
    }
    if input.monthly_revenue < Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "monthly_revenue".into(),
            reason: "Monthly revenue cannot be negative".into(),
        });
    }
    if input.estimated_amount <= Decimal::ZERO {
        return Err(LoanEngineError::InvalidInput {
            field: "estimated_amount".into(),
            reason: "Estimated amount must be positive".into(),
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

    #[test]
    fn score_bands_add_up() {
        assert_eq!(business_strength_score(dec!(6), dec!(600_000)), MAX_SCORE);
        assert_eq!(business_strength_score(dec!(3), dec!(200_000)), 4);
        assert_eq!(business_strength_score(dec!(1), dec!(100_000)), 2);
        assert_eq!(business_strength_score(dec!(0.5), dec!(50_000)), 0);
    }

    #[test]
    fn weak_business_is_downgraded_one_tier() {
        let catalog = TierCatalog::default();
        let input = RecommendationInput {
            years_in_business: dec!(1),
            monthly_revenue: dec!(100_000),
            estimated_amount: dec!(300_000), // medium band
        };
        let out = recommend_tier(&catalog, &input).unwrap().result;
        assert_eq!(out.score, 2);
        assert_eq!(out.base_tier.id, "medium");
        assert_eq!(out.recommended_tier.id, "small");
        assert!(out.downgraded);
    }

    #[test]
    fn downgrade_clamps_at_first_tier() {
        let catalog = TierCatalog::default();
        let input = RecommendationInput {
            years_in_business: Decimal::ZERO,
            monthly_revenue: Decimal::ZERO,
            estimated_amount: dec!(10_000), // already the lowest tier
        };
        let out = recommend_tier(&catalog, &input).unwrap().result;
        assert_eq!(out.recommended_tier.id, "micro");
        assert!(!out.downgraded);
    }

    #[test]
    fn strong_business_is_never_upgraded() {
        let catalog = TierCatalog::default();
        let input = RecommendationInput {
            years_in_business: dec!(10),
            monthly_revenue: dec!(1_000_000),
            estimated_amount: dec!(30_000),
        };
        let out = recommend_tier(&catalog, &input).unwrap().result;
        assert_eq!(out.recommended_tier.id, out.base_tier.id);
        assert!(!out.downgraded);
    }
}
