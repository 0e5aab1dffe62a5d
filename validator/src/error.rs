//! Validation error types.
//!
//! These are programmer and configuration errors. Invalid data is reported as
//! violations, never through this type.

use tenet_constraint::ConstraintError;
use tenet_metadata::MetadataError;
use tenet_registry::AccessError;
use thiserror::Error;

/// Result type for validation calls.
pub type ValidationResult<T> = Result<T, ValidationError>;

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error(transparent)]
    Metadata(#[from] MetadataError),

    #[error(transparent)]
    Constraint(#[from] ConstraintError),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("A group sequence must be validated alone, but {requested} groups were requested")]
    GroupSequenceNotAlone { requested: usize },

    #[error("Cannot cascade into {actual} at '{path}': expected {expected}")]
    UnexpectedType {
        path: String,
        expected: String,
        actual: String,
    },

    #[error("Cyclic reference to {class} at '{path}'")]
    CyclicReference { class: String, path: String },

    #[error("Cascade depth exceeds {max_depth} at '{path}'")]
    DepthExceeded { max_depth: usize, path: String },
}

impl ValidationError {
    pub fn unexpected_type(
        path: impl Into<String>,
        expected: impl Into<String>,
        actual: impl Into<String>,
    ) -> Self {
        Self::UnexpectedType {
            path: path.into(),
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn cyclic_reference(class: impl Into<String>, path: impl Into<String>) -> Self {
        Self::CyclicReference {
            class: class.into(),
            path: path.into(),
        }
    }

    pub fn depth_exceeded(max_depth: usize, path: impl Into<String>) -> Self {
        Self::DepthExceeded {
            max_depth,
            path: path.into(),
        }
    }
}
