//! Built-in constraint kinds and their validator units.
//!
//! Every kind except `NotNull`, `NotBlank` and `Blank` treats `null` as
//! valid, so absence is checked separately from shape.

mod blank;
mod choice;
mod comparison;
mod count;
mod null;
mod range;
mod regex;
mod type_check;

pub use blank::{BlankValidator, NotBlankValidator};
pub use choice::ChoiceValidator;
pub use comparison::{EqualToValidator, IsFalseValidator, IsTrueValidator};
pub use count::{CountValidator, LengthValidator};
pub use null::{NotNullValidator, NullValidator};
pub use range::RangeValidator;
pub use regex::RegexValidator;
pub use type_check::TypeValidator;

use crate::{ConstraintError, ConstraintResult, DefaultValidatorFactory};
use tenet_core::Value;
use tenet_metadata::{Constraint, ConstraintDefinition};

pub static NOT_NULL: ConstraintDefinition = ConstraintDefinition {
    name: "NotNull",
    validated_by: "not_null",
    options: &[],
    required: &[],
    default_option: None,
    message: "This value should not be null",
};

pub static NULL: ConstraintDefinition = ConstraintDefinition {
    name: "Null",
    validated_by: "null",
    options: &[],
    required: &[],
    default_option: None,
    message: "This value should be null",
};

pub static NOT_BLANK: ConstraintDefinition = ConstraintDefinition {
    name: "NotBlank",
    validated_by: "not_blank",
    options: &[],
    required: &[],
    default_option: None,
    message: "This value should not be blank",
};

pub static BLANK: ConstraintDefinition = ConstraintDefinition {
    name: "Blank",
    validated_by: "blank",
    options: &[],
    required: &[],
    default_option: None,
    message: "This value should be blank",
};

/// Numeric bounds. At least one of `min`/`max` must be set.
pub static RANGE: ConstraintDefinition = ConstraintDefinition {
    name: "Range",
    validated_by: "range",
    options: &["min", "max"],
    required: &[],
    default_option: None,
    message: "This value should be a valid number",
};

/// Character count bounds on a string.
pub static LENGTH: ConstraintDefinition = ConstraintDefinition {
    name: "Length",
    validated_by: "length",
    options: &["min", "max"],
    required: &[],
    default_option: None,
    message: "This value should have exactly {{ limit }} characters",
};

/// Element count bounds on a collection.
pub static COUNT: ConstraintDefinition = ConstraintDefinition {
    name: "Count",
    validated_by: "count",
    options: &["min", "max"],
    required: &[],
    default_option: None,
    message: "This collection should contain exactly {{ limit }} elements",
};

pub static CHOICE: ConstraintDefinition = ConstraintDefinition {
    name: "Choice",
    validated_by: "choice",
    options: &["choices", "multiple"],
    required: &["choices"],
    default_option: Some("choices"),
    message: "The value you selected is not a valid choice",
};

pub static REGEX: ConstraintDefinition = ConstraintDefinition {
    name: "Regex",
    validated_by: "regex",
    options: &["pattern", "match"],
    required: &["pattern"],
    default_option: Some("pattern"),
    message: "This value is not valid",
};

pub static TYPE: ConstraintDefinition = ConstraintDefinition {
    name: "Type",
    validated_by: "type",
    options: &["type"],
    required: &["type"],
    default_option: Some("type"),
    message: "This value should be of type {{ type }}",
};

pub static EQUAL_TO: ConstraintDefinition = ConstraintDefinition {
    name: "EqualTo",
    validated_by: "equal_to",
    options: &["value"],
    required: &["value"],
    default_option: Some("value"),
    message: "This value should be equal to {{ compared_value }}",
};

pub static IS_TRUE: ConstraintDefinition = ConstraintDefinition {
    name: "IsTrue",
    validated_by: "is_true",
    options: &[],
    required: &[],
    default_option: None,
    message: "This value should be true",
};

pub static IS_FALSE: ConstraintDefinition = ConstraintDefinition {
    name: "IsFalse",
    validated_by: "is_false",
    options: &[],
    required: &[],
    default_option: None,
    message: "This value should be false",
};

/// Register every built-in unit with `factory`.
pub fn register_all(factory: &mut DefaultValidatorFactory) {
    factory
        .register(NOT_NULL.validated_by, || Box::<NotNullValidator>::default())
        .register(NULL.validated_by, || Box::<NullValidator>::default())
        .register(NOT_BLANK.validated_by, || Box::<NotBlankValidator>::default())
        .register(BLANK.validated_by, || Box::<BlankValidator>::default())
        .register(RANGE.validated_by, || Box::<RangeValidator>::default())
        .register(LENGTH.validated_by, || Box::<LengthValidator>::default())
        .register(COUNT.validated_by, || Box::<CountValidator>::default())
        .register(CHOICE.validated_by, || Box::<ChoiceValidator>::default())
        .register(REGEX.validated_by, || Box::<RegexValidator>::default())
        .register(TYPE.validated_by, || Box::<TypeValidator>::default())
        .register(EQUAL_TO.validated_by, || Box::<EqualToValidator>::default())
        .register(IS_TRUE.validated_by, || Box::<IsTrueValidator>::default())
        .register(IS_FALSE.validated_by, || Box::<IsFalseValidator>::default());
}

/// Read a numeric bound option.
fn number_option(constraint: &Constraint, name: &str) -> ConstraintResult<Option<f64>> {
    match constraint.option(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_float()
            .map(Some)
            .ok_or_else(|| ConstraintError::invalid_option(constraint.name(), name, "expected a number")),
    }
}

/// Read a non-negative count option.
fn count_option(constraint: &Constraint, name: &str) -> ConstraintResult<Option<usize>> {
    match constraint.option(name) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Int(n)) if *n >= 0 => Ok(Some(*n as usize)),
        Some(_) => Err(ConstraintError::invalid_option(
            constraint.name(),
            name,
            "expected a non-negative integer",
        )),
    }
}

/// Read a boolean flag option.
fn flag_option(constraint: &Constraint, name: &str, default: bool) -> ConstraintResult<bool> {
    match constraint.option(name) {
        None | Some(Value::Null) => Ok(default),
        Some(Value::Bool(flag)) => Ok(*flag),
        Some(_) => Err(ConstraintError::invalid_option(constraint.name(), name, "expected a boolean")),
    }
}

/// Render a value the way message parameters show it.
fn format_value(value: &Value) -> String {
    value.to_string()
}

/// Render a bound: integral floats lose their fraction.
fn format_limit(limit: f64) -> String {
    if limit.fract() == 0.0 && limit.abs() < 1e15 {
        format!("{}", limit as i64)
    } else {
        limit.to_string()
    }
}
