//! The validator unit contract.

use std::collections::BTreeMap;
use tenet_core::Value;
use tenet_metadata::Constraint;

/// Placeholder name (e.g. `{{ limit }}`) to rendered value.
pub type MessageParameters = BTreeMap<String, String>;

/// Logic deciding whether a value satisfies one constraint kind.
///
/// After `is_valid` returns `Ok(false)` the unit must expose the message
/// template and parameters describing that failure until the next call.
/// Units hold that state, so one instance serves one call at a time; the
/// [`ValidatorRegistry`](crate::ValidatorRegistry) keeps each instance
/// behind a lock for the call plus message retrieval.
///
/// `Err` is reserved for misconfiguration (unusable options, a value type
/// the constraint cannot apply to). Invalid data is `Ok(false)`.
pub trait ConstraintValidator: Send {
    fn is_valid(&mut self, value: &Value, constraint: &Constraint) -> crate::ConstraintResult<bool>;

    /// Template of the last failure.
    fn message_template(&self) -> &str;

    /// Parameters of the last failure.
    fn message_parameters(&self) -> &MessageParameters;
}

/// Last-failure state shared by the built-in units.
#[derive(Debug, Clone, Default)]
pub struct LastViolation {
    template: String,
    parameters: MessageParameters,
}

impl LastViolation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure and return `false` for convenient tail calls.
    pub fn fail<I, K, V>(&mut self, template: impl Into<String>, parameters: I) -> bool
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.template = template.into();
        self.parameters = parameters
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        false
    }

    /// Forget the previous failure.
    pub fn clear(&mut self) {
        self.template.clear();
        self.parameters.clear();
    }

    pub fn template(&self) -> &str {
        &self.template
    }

    pub fn parameters(&self) -> &MessageParameters {
        &self.parameters
    }
}
