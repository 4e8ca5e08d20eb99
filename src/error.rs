//! Error types for the estimation library

use thiserror::Error;

/// Errors produced while building or refreshing a payment estimate
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EstimateError {
    /// Credit tier text outside the four recognized values
    #[error("unknown credit tier: {tier}")]
    InvalidTier { tier: String },

    /// Input that would poison the arithmetic (zero term, NaN, negative money)
    #[error("invalid loan input: {reason}")]
    InvalidInput { reason: String },
}

impl EstimateError {
    /// Shorthand for an `InvalidInput` with a formatted reason
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        EstimateError::InvalidInput {
            reason: reason.into(),
        }
    }
}
