//! Error types for condition compilation

use thiserror::Error;

/// Errors raised by strict-mode compilation and the JSON ingestion boundary.
///
/// Permissive compilation (the default) never produces these; malformed
/// operand shapes degrade to an omitted fragment instead.
#[derive(Debug, Error)]
pub enum ConditionError {
    #[error("Invalid operand: {0}")]
    InvalidOperand(String),

    #[error("Unsupported condition: {0}")]
    Unsupported(String),

    #[error("Unsupported operator kind: {0}")]
    UnsupportedOperator(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConditionError {
    pub fn invalid_operand(msg: impl Into<String>) -> Self {
        Self::InvalidOperand(msg.into())
    }

    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::Unsupported(msg.into())
    }

    pub fn unsupported_operator(kind: impl Into<String>) -> Self {
        Self::UnsupportedOperator(kind.into())
    }
}

pub type Result<T> = std::result::Result<T, ConditionError>;
