use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoanEngineError {
    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Non-convergence: {function} balance still {last_balance} after {months} months")]
    NonConvergence {
        function: String,
        months: u32,
        last_balance: Decimal,
    },

    #[error("Division by zero in {context}")]
    DivisionByZero { context: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for LoanEngineError {
    fn from(e: serde_json::Error) -> Self {
        LoanEngineError::SerializationError(e.to_string())
    }
}
