//! One cached validator unit per kind.

use crate::{ConstraintError, ConstraintResult, ConstraintValidator, MessageParameters, ValidatorFactory};
use dashmap::DashMap;
use std::sync::{Arc, Mutex, PoisonError};
use tenet_core::Value;
use tenet_metadata::{Constraint, ConstraintKind};
use tracing::debug;

/// A cached unit. The lock covers `is_valid` together with reading the
/// failure it recorded.
pub type SharedValidator = Arc<Mutex<Box<dyn ConstraintValidator>>>;

/// The message of a failed rule, copied out of the unit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleFailure {
    pub message_template: String,
    pub message_parameters: MessageParameters,
}

/// Caching decorator over a [`ValidatorFactory`]: the first lookup of a
/// `validated_by` name creates the unit, later lookups return it.
pub struct ValidatorRegistry {
    factory: Box<dyn ValidatorFactory>,
    instances: DashMap<String, SharedValidator>,
}

impl ValidatorRegistry {
    pub fn new(factory: impl ValidatorFactory + 'static) -> Self {
        Self::from_boxed(Box::new(factory))
    }

    pub fn from_boxed(factory: Box<dyn ValidatorFactory>) -> Self {
        Self {
            factory,
            instances: DashMap::new(),
        }
    }

    /// Get the unit responsible for `constraint`.
    pub fn get_instance(&self, constraint: &Constraint) -> ConstraintResult<SharedValidator> {
        if !matches!(constraint.kind(), ConstraintKind::Rule) {
            return Err(ConstraintError::not_a_rule(constraint.name()));
        }
        let name = constraint.validated_by();

        if let Some(found) = self.instances.get(name) {
            return Ok(Arc::clone(found.value()));
        }

        let instance = self
            .instances
            .entry(name.to_string())
            .or_try_insert_with(|| {
                debug!(validated_by = name, "creating validator unit");
                self.factory
                    .create(name)
                    .map(|unit| Arc::new(Mutex::new(unit)))
            })?;
        Ok(Arc::clone(instance.value()))
    }

    /// Evaluate a rule constraint against `value`, returning the recorded
    /// failure when the unit rejects it.
    pub fn check(&self, value: &Value, constraint: &Constraint) -> ConstraintResult<Option<RuleFailure>> {
        let shared = self.get_instance(constraint)?;
        let mut unit = shared.lock().unwrap_or_else(PoisonError::into_inner);

        if unit.is_valid(value, constraint)? {
            return Ok(None);
        }

        Ok(Some(RuleFailure {
            message_template: unit.message_template().to_string(),
            message_parameters: unit.message_parameters().clone(),
        }))
    }

    /// Number of units created so far.
    pub fn instance_count(&self) -> usize {
        self.instances.len()
    }
}
