use crate::{ConstraintResult, ConstraintValidator, LastViolation, MessageParameters};
use tenet_core::Value;
use tenet_metadata::Constraint;

use super::format_value;

/// `NotNull`: rejects `null`.
#[derive(Debug, Default)]
pub struct NotNullValidator {
    last: LastViolation,
}

impl ConstraintValidator for NotNullValidator {
    fn is_valid(&mut self, value: &Value, constraint: &Constraint) -> ConstraintResult<bool> {
        self.last.clear();
        if value.is_null() {
            return Ok(self
                .last
                .fail(constraint.message_template(), [("{{ value }}", "null")]));
        }
        Ok(true)
    }

    fn message_template(&self) -> &str {
        self.last.template()
    }

    fn message_parameters(&self) -> &MessageParameters {
        self.last.parameters()
    }
}

/// `Null`: accepts only `null`.
#[derive(Debug, Default)]
pub struct NullValidator {
    last: LastViolation,
}

impl ConstraintValidator for NullValidator {
    fn is_valid(&mut self, value: &Value, constraint: &Constraint) -> ConstraintResult<bool> {
        self.last.clear();
        if value.is_null() {
            return Ok(true);
        }
        Ok(self
            .last
            .fail(constraint.message_template(), [("{{ value }}", format_value(value))]))
    }

    fn message_template(&self) -> &str {
        self.last.template()
    }

    fn message_parameters(&self) -> &MessageParameters {
        self.last.parameters()
    }
}
