use crate::{ConstraintError, ConstraintResult, ConstraintValidator, LastViolation, MessageParameters};
use tenet_core::Value;
use tenet_metadata::Constraint;

use super::{count_option, format_value};

/// Messages for one kind of bounded size.
struct SizeMessages {
    too_small: &'static str,
    too_large: &'static str,
}

const LENGTH_MESSAGES: SizeMessages = SizeMessages {
    too_small: "This value is too short. It should have {{ limit }} characters or more",
    too_large: "This value is too long. It should have {{ limit }} characters or less",
};

const COUNT_MESSAGES: SizeMessages = SizeMessages {
    too_small: "This collection should contain {{ limit }} elements or more",
    too_large: "This collection should contain {{ limit }} elements or less",
};

/// Shared bound check. `min == max` uses the constraint's "exactly" message.
fn check_size(
    last: &mut LastViolation,
    constraint: &Constraint,
    messages: &SizeMessages,
    size: usize,
    shown: String,
) -> ConstraintResult<bool> {
    let min = count_option(constraint, "min")?;
    let max = count_option(constraint, "max")?;

    let (template, limit) = match (min, max) {
        (None, None) => {
            return Err(ConstraintError::invalid_option(
                constraint.name(),
                "min",
                "either min or max must be set",
            ))
        }
        (Some(min), Some(max)) if min == max && size != min => (constraint.message_template(), min),
        (Some(min), _) if size < min => (messages.too_small, min),
        (_, Some(max)) if size > max => (messages.too_large, max),
        _ => return Ok(true),
    };

    Ok(last.fail(
        template,
        [
            ("{{ value }}", shown),
            ("{{ limit }}", limit.to_string()),
            ("{{ count }}", size.to_string()),
        ],
    ))
}

/// `Length`: character count of a string (numbers count their digits).
#[derive(Debug, Default)]
pub struct LengthValidator {
    last: LastViolation,
}

impl ConstraintValidator for LengthValidator {
    fn is_valid(&mut self, value: &Value, constraint: &Constraint) -> ConstraintResult<bool> {
        self.last.clear();
        let length = match value {
            Value::Null => return Ok(true),
            Value::String(s) => s.chars().count(),
            Value::Int(_) | Value::Float(_) => value.to_string().chars().count(),
            other => {
                return Err(ConstraintError::unexpected_type(
                    constraint.name(),
                    "String",
                    other.type_name(),
                ))
            }
        };
        check_size(&mut self.last, constraint, &LENGTH_MESSAGES, length, format_value(value))
    }

    fn message_template(&self) -> &str {
        self.last.template()
    }

    fn message_parameters(&self) -> &MessageParameters {
        self.last.parameters()
    }
}

/// `Count`: number of elements in a list or map.
#[derive(Debug, Default)]
pub struct CountValidator {
    last: LastViolation,
}

impl ConstraintValidator for CountValidator {
    fn is_valid(&mut self, value: &Value, constraint: &Constraint) -> ConstraintResult<bool> {
        self.last.clear();
        if value.is_null() {
            return Ok(true);
        }
        if !value.is_collection() {
            return Err(ConstraintError::unexpected_type(
                constraint.name(),
                "List or Map",
                value.type_name(),
            ));
        }
        let count = value.len().unwrap_or(0);
        check_size(&mut self.last, constraint, &COUNT_MESSAGES, count, format_value(value))
    }

    fn message_template(&self) -> &str {
        self.last.template()
    }

    fn message_parameters(&self) -> &MessageParameters {
        self.last.parameters()
    }
}
