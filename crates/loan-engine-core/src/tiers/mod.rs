//! Loan tier catalog and business-strength tier recommendation.

pub mod catalog;
pub mod recommend;
