use crate::{ConstraintError, ConstraintResult, ConstraintValidator, LastViolation, MessageParameters};
use tenet_core::Value;
use tenet_metadata::Constraint;

use super::{format_limit, format_value, number_option};

const MIN_MESSAGE: &str = "This value should be {{ limit }} or more";
const MAX_MESSAGE: &str = "This value should be {{ limit }} or less";

/// `Range`: numeric value within `min..=max`.
///
/// A non-numeric value fails with the constraint's own message.
#[derive(Debug, Default)]
pub struct RangeValidator {
    last: LastViolation,
}

impl ConstraintValidator for RangeValidator {
    fn is_valid(&mut self, value: &Value, constraint: &Constraint) -> ConstraintResult<bool> {
        self.last.clear();
        let min = number_option(constraint, "min")?;
        let max = number_option(constraint, "max")?;
        if min.is_none() && max.is_none() {
            return Err(ConstraintError::invalid_option(
                constraint.name(),
                "min",
                "either min or max must be set",
            ));
        }

        if value.is_null() {
            return Ok(true);
        }
        let shown = format_value(value);
        let Some(number) = value.as_float() else {
            return Ok(self
                .last
                .fail(constraint.message_template(), [("{{ value }}", shown)]));
        };

        if let Some(min) = min.filter(|min| number < *min) {
            return Ok(self.last.fail(
                MIN_MESSAGE,
                [("{{ value }}", shown), ("{{ limit }}", format_limit(min))],
            ));
        }
        if let Some(max) = max.filter(|max| number > *max) {
            return Ok(self.last.fail(
                MAX_MESSAGE,
                [("{{ value }}", shown), ("{{ limit }}", format_limit(max))],
            ));
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
