//! Metadata error types.

use tenet_registry::AccessError;
use thiserror::Error;

/// Result type for metadata operations.
pub type MetadataResult<T> = Result<T, MetadataError>;

/// Errors raised while declaring constraints or building class metadata.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("The options \"{}\" do not exist in constraint {constraint}", .options.join("\", \""))]
    InvalidOptions {
        constraint: String,
        options: Vec<String>,
    },

    #[error("The options \"{}\" must be set for constraint {constraint}", .options.join("\", \""))]
    MissingOptions {
        constraint: String,
        options: Vec<String>,
    },

    #[error("No default option is configured for constraint {constraint}")]
    NoDefaultOption { constraint: String },

    #[error("Option {option} of constraint {constraint} must be {expected}")]
    InvalidOptionValue {
        constraint: String,
        option: String,
        expected: String,
    },

    #[error("Unknown class: {0}")]
    UnknownClass(String),

    #[error(transparent)]
    Access(#[from] AccessError),

    #[error("Invalid group definition: {0}")]
    GroupDefinition(String),
}

impl MetadataError {
    pub fn invalid_options(constraint: impl Into<String>, options: Vec<String>) -> Self {
        Self::InvalidOptions {
            constraint: constraint.into(),
            options,
        }
    }

    pub fn missing_options(constraint: impl Into<String>, options: Vec<String>) -> Self {
        Self::MissingOptions {
            constraint: constraint.into(),
            options,
        }
    }

    pub fn invalid_option_value(
        constraint: impl Into<String>,
        option: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        Self::InvalidOptionValue {
            constraint: constraint.into(),
            option: option.into(),
            expected: expected.into(),
        }
    }

    pub fn unknown_class(name: impl Into<String>) -> Self {
        Self::UnknownClass(name.into())
    }

    pub fn group_definition(message: impl Into<String>) -> Self {
        Self::GroupDefinition(message.into())
    }
}
