//! Tenet Tests
//!
//! Shared fixtures and violation assertions for the integration scenarios
//! under `tests/`.

mod error;
pub mod fixtures;

pub use assertion::ExpectViolations;
pub use error::{TestError, TestResult};

/// Everything a scenario file needs.
pub mod prelude {
    pub use crate::fixtures::{self, Shop};
    pub use crate::{ExpectViolations, TestError, TestResult};
    pub use tenet_constraint::builtin::*;
    pub use tenet_core::{fields, list, Object, ObjectRef, Value};
    pub use tenet_metadata::{ClassDeclaration, Constraint, GroupSequence, GroupSpec, StaticMetadataSource};
    pub use tenet_validator::{CyclePolicy, ValidationError, Validator, ValidatorConfig, ViolationList};
}
