//! Member access errors.

use thiserror::Error;

/// Result type for member access.
pub type AccessResult<T> = Result<T, AccessError>;

/// Errors raised when reading a member of an object.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The member exists but is not visible to validation.
    #[error("Member {class}::{member} is not public")]
    AccessDenied { class: String, member: String },

    /// Neither a field nor an accessor method exists.
    #[error("Neither field nor accessor for {member} exists on class {class}")]
    MissingMember { class: String, member: String },
}

impl AccessError {
    pub fn access_denied(class: impl Into<String>, member: impl Into<String>) -> Self {
        Self::AccessDenied {
            class: class.into(),
            member: member.into(),
        }
    }

    pub fn missing_member(class: impl Into<String>, member: impl Into<String>) -> Self {
        Self::MissingMember {
            class: class.into(),
            member: member.into(),
        }
    }
}
