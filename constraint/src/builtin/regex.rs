use crate::{ConstraintError, ConstraintResult, ConstraintValidator, LastViolation, MessageParameters};
use regex_lite::Regex;
use std::collections::HashMap;
use tenet_core::Value;
use tenet_metadata::Constraint;

use super::{flag_option, format_value};

/// `Regex`: the string form of the value matches `pattern` (or, with
/// `match = false`, does not).
///
/// Compiled patterns are kept for the lifetime of the unit.
#[derive(Debug, Default)]
pub struct RegexValidator {
    last: LastViolation,
    compiled: HashMap<String, Regex>,
}

impl RegexValidator {
    fn compile(&mut self, constraint: &Constraint) -> ConstraintResult<&Regex> {
        let pattern = constraint
            .option("pattern")
            .and_then(Value::as_str)
            .ok_or_else(|| ConstraintError::invalid_option(constraint.name(), "pattern", "expected a string"))?;

        if !self.compiled.contains_key(pattern) {
            let regex = Regex::new(pattern)
                .map_err(|e| ConstraintError::invalid_option(constraint.name(), "pattern", e.to_string()))?;
            self.compiled.insert(pattern.to_string(), regex);
        }
        self.compiled
            .get(pattern)
            .ok_or_else(|| ConstraintError::invalid_option(constraint.name(), "pattern", "not compiled"))
    }
}

impl ConstraintValidator for RegexValidator {
    fn is_valid(&mut self, value: &Value, constraint: &Constraint) -> ConstraintResult<bool> {
        self.last.clear();
        let should_match = flag_option(constraint, "match", true)?;

        let subject = match value {
            Value::Null => return Ok(true),
            Value::String(s) => s.clone(),
            Value::Int(_) | Value::Float(_) | Value::Bool(_) => value.to_string(),
            other => {
                return Err(ConstraintError::unexpected_type(
                    constraint.name(),
                    "String",
                    other.type_name(),
                ))
            }
        };

        let matched = self.compile(constraint)?.is_match(&subject);
        if matched == should_match {
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
