//! Creating validator units by name.

use crate::builtin;
use crate::{ConstraintError, ConstraintResult, ConstraintValidator};
use std::collections::HashMap;
use std::sync::Arc;

/// Creates a fresh validator unit.
pub type ValidatorConstructor = Arc<dyn Fn() -> Box<dyn ConstraintValidator> + Send + Sync>;

/// Creates validator units for `validated_by` names.
pub trait ValidatorFactory: Send + Sync {
    fn create(&self, validated_by: &str) -> ConstraintResult<Box<dyn ConstraintValidator>>;
}

/// Factory backed by a table of constructors, pre-populated with the
/// built-in units.
#[derive(Clone)]
pub struct DefaultValidatorFactory {
    constructors: HashMap<String, ValidatorConstructor>,
}

impl DefaultValidatorFactory {
    /// Factory knowing every built-in unit.
    pub fn new() -> Self {
        let mut factory = Self::empty();
        builtin::register_all(&mut factory);
        factory
    }

    /// Factory knowing no units at all.
    pub fn empty() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Register (or replace) the unit created for `validated_by`.
    pub fn register<F>(&mut self, validated_by: impl Into<String>, constructor: F) -> &mut Self
    where
        F: Fn() -> Box<dyn ConstraintValidator> + Send + Sync + 'static,
    {
        self.constructors
            .insert(validated_by.into(), Arc::new(constructor));
        self
    }

    pub fn knows(&self, validated_by: &str) -> bool {
        self.constructors.contains_key(validated_by)
    }
}

impl Default for DefaultValidatorFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidatorFactory for DefaultValidatorFactory {
    fn create(&self, validated_by: &str) -> ConstraintResult<Box<dyn ConstraintValidator>> {
        self.constructors
            .get(validated_by)
            .map(|constructor| constructor())
            .ok_or_else(|| ConstraintError::unknown_validator(validated_by))
    }
}
