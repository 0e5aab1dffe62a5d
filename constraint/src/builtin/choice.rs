use crate::{ConstraintError, ConstraintResult, ConstraintValidator, LastViolation, MessageParameters};
use tenet_core::Value;
use tenet_metadata::Constraint;

use super::{flag_option, format_value};

const MULTIPLE_MESSAGE: &str = "One or more of the given values is invalid";

/// `Choice`: value is one of `choices`. With `multiple`, the value is a list
/// whose every element is one of `choices`.
#[derive(Debug, Default)]
pub struct ChoiceValidator {
    last: LastViolation,
}

impl ConstraintValidator for ChoiceValidator {
    fn is_valid(&mut self, value: &Value, constraint: &Constraint) -> ConstraintResult<bool> {
        self.last.clear();
        let choices = constraint
            .option("choices")
            .and_then(Value::as_list)
            .ok_or_else(|| ConstraintError::invalid_option(constraint.name(), "choices", "expected a list"))?;
        let multiple = flag_option(constraint, "multiple", false)?;

        if value.is_null() {
            return Ok(true);
        }
        let allowed = |candidate: &Value| choices.iter().any(|c| c.loosely_equals(candidate));

        if multiple {
            let items = value.as_list().ok_or_else(|| {
                ConstraintError::unexpected_type(constraint.name(), "List", value.type_name())
            })?;
            if let Some(rejected) = items.iter().find(|item| !allowed(item)) {
                return Ok(self
                    .last
                    .fail(MULTIPLE_MESSAGE, [("{{ value }}", format_value(rejected))]));
            }
            return Ok(true);
        }

        if allowed(value) {
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
