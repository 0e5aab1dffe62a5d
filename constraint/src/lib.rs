//! Tenet Constraint
//!
//! Executable logic behind constraint kinds.
//!
//! Responsibilities:
//! - The validator unit contract (`is_valid` plus last message/parameters)
//! - Creating units by name and caching one instance per kind
//! - Built-in constraint definitions and their units

pub mod builtin;
mod error;
mod factory;
mod registry;
mod validator;

pub use error::{ConstraintError, ConstraintResult};
pub use factory::{DefaultValidatorFactory, ValidatorConstructor, ValidatorFactory};
pub use registry::{RuleFailure, SharedValidator, ValidatorRegistry};
pub use validator::{ConstraintValidator, LastViolation, MessageParameters};
