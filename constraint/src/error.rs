//! Constraint error types.

use thiserror::Error;

/// Result type for constraint operations.
pub type ConstraintResult<T> = Result<T, ConstraintError>;

/// Configuration errors raised while evaluating constraints. Invalid data is
/// never reported through this type.
#[derive(Debug, Error)]
pub enum ConstraintError {
    #[error("No validator unit registered for: {name}")]
    UnknownValidator { name: String },

    #[error("Constraint {constraint} is evaluated by the graph walker, not by a validator unit")]
    NotARule { constraint: String },

    #[error("Constraint {constraint} expects {expected}, got {actual}")]
    UnexpectedType {
        constraint: String,
        expected: String,
        actual: String,
    },

    #[error("Invalid option {option} of constraint {constraint}: {reason}")]
    InvalidOption {
        constraint: String,
        option: String,
        reason: String,
    },
}

impl ConstraintError {
    pub fn unknown_validator(name: impl Into<String>) -> Self {
        Self::UnknownValidator { name: name.into() }
    }

    pub fn not_a_rule(constraint: impl Into<String>) -> Self {
        Self::NotARule {
            constraint: constraint.into(),
        }
    }

    pub fn unexpected_type(
        constraint: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::UnexpectedType {
            constraint: constraint.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_option(
        constraint: impl Into<String>,
        option: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidOption {
            constraint: constraint.into(),
            option: option.into(),
            reason: reason.into(),
        }
    }
}
