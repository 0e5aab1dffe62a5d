use crate::{ConstraintError, ConstraintResult, ConstraintValidator, LastViolation, MessageParameters};
use tenet_core::Value;
use tenet_metadata::Constraint;

use super::format_value;

/// `Type`: the value has the named type.
///
/// Recognized names are the value type names (`bool`, `int`, `float`,
/// `string`, `list`, `map`, `object`), `numeric`, `scalar` and `iterable`.
/// Any other name is compared against the class of an object value.
#[derive(Debug, Default)]
pub struct TypeValidator {
    last: LastViolation,
}

fn has_type(value: &Value, expected: &str) -> bool {
    match expected.to_ascii_lowercase().as_str() {
        "bool" | "boolean" => value.is_bool(),
        "int" | "integer" => value.is_int(),
        "float" | "double" => value.is_float(),
        "numeric" => value.is_numeric(),
        "string" => value.is_string(),
        "scalar" => value.is_bool() || value.is_numeric() || value.is_string(),
        "list" | "array" => matches!(value, Value::List(_)),
        "map" => matches!(value, Value::Map(_)),
        "iterable" => value.is_collection(),
        "object" => value.is_object(),
        _ => value
            .as_object()
            .is_some_and(|object| object.class() == expected),
    }
}

impl ConstraintValidator for TypeValidator {
    fn is_valid(&mut self, value: &Value, constraint: &Constraint) -> ConstraintResult<bool> {
        self.last.clear();
        let expected = constraint
            .option("type")
            .and_then(Value::as_str)
            .ok_or_else(|| ConstraintError::invalid_option(constraint.name(), "type", "expected a type name"))?;

        if value.is_null() || has_type(value, expected) {
            return Ok(true);
        }
        Ok(self.last.fail(
            constraint.message_template(),
            [("{{ value }}", format_value(value)), ("{{ type }}", expected.to_string())],
        ))
    }

    fn message_template(&self) -> &str {
        self.last.template()
    }

    fn message_parameters(&self) -> &MessageParameters {
        self.last.parameters()
    }
}
