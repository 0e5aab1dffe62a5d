use crate::{ConstraintResult, ConstraintValidator, LastViolation, MessageParameters};
use tenet_core::Value;
use tenet_metadata::Constraint;

use super::format_value;

/// Blank means `null`, `false`, an empty string or an empty collection.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(s) => s.is_empty(),
        Value::List(items) => items.is_empty(),
        Value::Map(map) => map.is_empty(),
        _ => false,
    }
}

/// `NotBlank`: rejects blank values, `null` included.
#[derive(Debug, Default)]
pub struct NotBlankValidator {
    last: LastViolation,
}

impl ConstraintValidator for NotBlankValidator {
    fn is_valid(&mut self, value: &Value, constraint: &Constraint) -> ConstraintResult<bool> {
        self.last.clear();
        if is_blank(value) {
            return Ok(self
                .last
                .fail(constraint.message_template(), [("{{ value }}", format_value(value))]));
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

/// `Blank`: accepts only blank values.
#[derive(Debug, Default)]
pub struct BlankValidator {
    last: LastViolation,
}

impl ConstraintValidator for BlankValidator {
    fn is_valid(&mut self, value: &Value, constraint: &Constraint) -> ConstraintResult<bool> {
        self.last.clear();
        if is_blank(value) {
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
