//! Ordered, immutable catalog of loan tiers: amount bands mapping to a
//! fixed rate and a set of permitted terms.
//!
//! The catalog is an injectable value, not module-level state; tests and
//! callers substitute alternate catalogs freely. `Default` yields the
//! production reference catalog.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::LoanEngineError;
use crate::types::{Money, Months, Percent};
use crate::LoanEngineResult;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// A single loan tier: an inclusive amount band with its rate policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanTier {
    pub id: String,
    pub name: String,
    /// Inclusive lower bound of the band.
    pub min_amount: Money,
    /// Inclusive upper bound of the band.
    pub max_amount: Money,
    /// Nominal annual rate in percent for this tier.
    pub interest_rate: Percent,
    /// Permitted terms in months, ascending.
    pub available_terms: Vec<Months>,
    pub description: String,
}

/// Ordered list of tiers. Bands are ascending and non-overlapping;
/// the first tier is the designated fallback for amounts no band contains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TierCatalog {
    tiers: Vec<LoanTier>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

impl TierCatalog {
    /// Build a catalog, validating ordering and band integrity.
    pub fn new(tiers: Vec<LoanTier>) -> LoanEngineResult<Self> {
        if tiers.is_empty() {
            return Err(LoanEngineError::InvalidInput {
                field: "tiers".into(),
                reason: "Catalog must contain at least one tier".into(),
            });
        }
        for tier in &tiers {
            if tier.min_amount > tier.max_amount {
                return Err(LoanEngineError::InvalidInput {
                    field: "tiers".into(),
                    reason: format!("Tier '{}' has min_amount above max_amount", tier.id),
                });
            }
            if tier.interest_rate < Decimal::ZERO {
                return Err(LoanEngineError::InvalidInput {
                    field: "tiers".into(),
                    reason: format!("Tier '{}' has a negative interest rate", tier.id),
                });
            }
        }
        for pair in tiers.windows(2) {
            if pair[1].min_amount <= pair[0].max_amount {
                return Err(LoanEngineError::InvalidInput {
                    field: "tiers".into(),
                    reason: format!(
                        "Tiers '{}' and '{}' overlap or are out of order",
                        pair[0].id, pair[1].id
                    ),
                });
            }
        }
        Ok(Self { tiers })
    }

    /// First tier whose inclusive band contains the amount; the lowest
    /// tier when none does. Total by construction.
    pub fn lookup(&self, amount: Money) -> &LoanTier {
        self.tiers
            .iter()
            .find(|t| amount >= t.min_amount && amount <= t.max_amount)
            .unwrap_or(&self.tiers[0])
    }

    /// Index of the tier `lookup` resolves to for this amount.
    pub fn position(&self, amount: Money) -> usize {
        self.tiers
            .iter()
            .position(|t| amount >= t.min_amount && amount <= t.max_amount)
            .unwrap_or(0)
    }

    /// Tier at a catalog index.
    pub fn at(&self, index: usize) -> Option<&LoanTier> {
        self.tiers.get(index)
    }

    pub fn tiers(&self) -> &[LoanTier] {
        &self.tiers
    }

    pub fn len(&self) -> usize {
        self.tiers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiers.is_empty()
    }
}

impl Default for TierCatalog {
    /// The production reference catalog.
    fn default() -> Self {
        Self {
            tiers: vec![
                LoanTier {
                    id: "micro".into(),
                    name: "Micro Loan".into(),
                    min_amount: dec!(1000),
                    max_amount: dec!(50_000),
                    interest_rate: dec!(12),
                    available_terms: vec![6, 12],
                    description: "Perfect for small business needs and quick cash flow solutions"
                        .into(),
                },
                LoanTier {
                    id: "small".into(),
                    name: "Small Loan".into(),
                    min_amount: dec!(50_001),
                    max_amount: dec!(200_000),
                    interest_rate: dec!(10.5),
                    available_terms: vec![6, 12, 24],
                    description: "Ideal for business expansion and moderate investments".into(),
                },
                LoanTier {
                    id: "medium".into(),
                    name: "Medium Loan".into(),
                    min_amount: dec!(200_001),
                    max_amount: dec!(500_000),
                    interest_rate: dec!(9.5),
                    available_terms: vec![12, 24, 36],
                    description:
                        "Suitable for significant business growth and equipment purchases".into(),
                },
                LoanTier {
                    id: "large".into(),
                    name: "Large Loan".into(),
                    min_amount: dec!(500_001),
                    max_amount: dec!(1_000_000),
                    interest_rate: dec!(8.5),
                    available_terms: vec![12, 24, 36],
                    description: "For major business investments and large-scale operations".into(),
                },
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn boundary_amounts_resolve_to_exactly_one_tier() {
        let catalog = TierCatalog::default();
        assert_eq!(catalog.lookup(dec!(50_000)).id, "micro");
        assert_eq!(catalog.lookup(dec!(50_001)).id, "small");
        assert_eq!(catalog.lookup(dec!(200_000)).id, "small");
        assert_eq!(catalog.lookup(dec!(200_001)).id, "medium");
    }

    #[test]
    fn out_of_range_amounts_fall_back_to_lowest_tier() {
        let catalog = TierCatalog::default();
        assert_eq!(catalog.lookup(dec!(500)).id, "micro");
        assert_eq!(catalog.lookup(dec!(5_000_000)).id, "micro");
    }

    #[test]
    fn rejects_empty_catalog() {
        assert!(TierCatalog::new(vec![]).is_err());
    }

    #[test]
    fn rejects_overlapping_bands() {
        let mut tiers = TierCatalog::default().tiers().to_vec();
        tiers[1].min_amount = dec!(40_000);
        assert!(TierCatalog::new(tiers).is_err());
    }
}
