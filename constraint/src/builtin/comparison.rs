use crate::{ConstraintError, ConstraintResult, ConstraintValidator, LastViolation, MessageParameters};
use tenet_core::Value;
use tenet_metadata::Constraint;

use super::format_value;

/// `EqualTo`: value loosely equals the `value` option (numbers compare by
/// magnitude).
#[derive(Debug, Default)]
pub struct EqualToValidator {
    last: LastViolation,
}

impl ConstraintValidator for EqualToValidator {
    fn is_valid(&mut self, value: &Value, constraint: &Constraint) -> ConstraintResult<bool> {
        self.last.clear();
        let compared = constraint
            .option("value")
            .ok_or_else(|| ConstraintError::invalid_option(constraint.name(), "value", "must be set"))?;

        if value.is_null() || value.loosely_equals(compared) {
            return Ok(true);
        }
        Ok(self.last.fail(
            constraint.message_template(),
            [
                ("{{ value }}", format_value(value)),
                ("{{ compared_value }}", format_value(compared)),
                ("{{ compared_value_type }}", compared.type_name().to_string()),
            ],
        ))
    }

    fn message_template(&self) -> &str {
        self.last.template()
    }

    fn message_parameters(&self) -> &MessageParameters {
        self.last.parameters()
    }
}

fn truthy(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::Int(1) => Some(true),
        Value::Int(0) => Some(false),
        Value::String(s) if s == "1" => Some(true),
        Value::String(s) if s == "0" => Some(false),
        _ => None,
    }
}

/// `IsTrue`: `true`, `1` or `"1"`.
#[derive(Debug, Default)]
pub struct IsTrueValidator {
    last: LastViolation,
}

impl ConstraintValidator for IsTrueValidator {
    fn is_valid(&mut self, value: &Value, constraint: &Constraint) -> ConstraintResult<bool> {
        self.last.clear();
        if value.is_null() || truthy(value) == Some(true) {
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

/// `IsFalse`: `false`, `0` or `"0"`.
#[derive(Debug, Default)]
pub struct IsFalseValidator {
    last: LastViolation,
}

impl ConstraintValidator for IsFalseValidator {
    fn is_valid(&mut self, value: &Value, constraint: &Constraint) -> ConstraintResult<bool> {
        self.last.clear();
        if value.is_null() || truthy(value) == Some(false) {
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
