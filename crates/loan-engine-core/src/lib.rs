pub mod amortization;
pub mod error;
pub mod types;

#[cfg(feature = "payoff")]
pub mod payoff;

#[cfg(feature = "refinance")]
pub mod refinance;

#[cfg(feature = "tiers")]
pub mod tiers;

pub use error::LoanEngineError;
pub use types::*;

/// Standard result type for all loan-engine operations
pub type LoanEngineResult<T> = Result<T, LoanEngineError>;
