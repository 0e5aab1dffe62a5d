//! Error types for integration scenarios.

use tenet_metadata::MetadataError;
use tenet_registry::RegistryError;
use tenet_validator::ValidationError;
use thiserror::Error;

pub type TestResult<T> = Result<T, TestError>;

#[derive(Debug, Error)]
pub enum TestError {
    #[error("[{step}] assertion failed: {message}")]
    AssertionFailed { step: String, message: String },

    #[error("[{step}] invalid assertion: {message}")]
    InvalidAssertion { step: String, message: String },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("fixture class model: {0}")]
    Registry(#[from] RegistryError),

    #[error("fixture metadata: {0}")]
    Metadata(#[from] MetadataError),
}

impl TestError {
    pub fn assertion_failed(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::AssertionFailed {
            step: step.into(),
            message: message.into(),
        }
    }

    pub fn invalid_assertion(step: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidAssertion {
            step: step.into(),
            message: message.into(),
        }
    }
}
