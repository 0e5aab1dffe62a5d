//! Constraint violation types.

use crate::PropertyPath;
use std::fmt;
use tenet_constraint::MessageParameters;
use tenet_core::Value;

/// One recorded constraint failure.
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    /// Name of the constraint kind that failed.
    pub constraint_name: String,
    /// Message with `{{ placeholder }}` markers.
    pub message_template: String,
    /// Values for the placeholders in the template.
    pub message_parameters: MessageParameters,
    /// The value `validate` was called with, not the nested object.
    pub root: Value,
    /// Where the invalid value sits below the root.
    pub property_path: PropertyPath,
    /// The value that failed.
    pub invalid_value: Value,
}

impl Violation {
    pub fn new(
        constraint_name: impl Into<String>,
        message_template: impl Into<String>,
        message_parameters: MessageParameters,
        root: Value,
        property_path: PropertyPath,
        invalid_value: Value,
    ) -> Self {
        Self {
            constraint_name: constraint_name.into(),
            message_template: message_template.into(),
            message_parameters,
            root,
            property_path,
            invalid_value,
        }
    }

    /// The template with every parameter substituted.
    pub fn message(&self) -> String {
        self.message_parameters
            .iter()
            .fold(self.message_template.clone(), |message, (key, value)| {
                message.replace(key.as_str(), value)
            })
    }

    /// Parameter value by placeholder, e.g. `{{ limit }}`.
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.message_parameters.get(key).map(String::as_str)
    }
}

/// Root label used when printing violations: objects by class name,
/// strings unquoted.
fn root_label(root: &Value) -> String {
    match root {
        Value::Object(object) => object.class().to_string(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let root = root_label(&self.root);
        let path = self.property_path.as_str();
        if path.is_empty() {
            write!(f, "{}:", root)?;
        } else if path.starts_with('[') {
            write!(f, "{}{}:", root, path)?;
        } else {
            write!(f, "{}.{}:", root, path)?;
        }
        write!(f, "\n    {}", self.message())
    }
}

/// Ordered, append-only collection of violations.
///
/// Cloning takes a snapshot; assigning the clone back restores it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViolationList {
    violations: Vec<Violation>,
}

impl ViolationList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// Append all violations of another list.
    pub fn extend(&mut self, other: ViolationList) {
        self.violations.extend(other.violations);
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn get(&self, index: usize) -> Option<&Violation> {
        self.violations.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    pub fn all(&self) -> &[Violation] {
        &self.violations
    }

    /// Property paths in violation order.
    pub fn paths(&self) -> Vec<&str> {
        self.violations
            .iter()
            .map(|v| v.property_path.as_str())
            .collect()
    }

    /// Rendered messages in violation order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(Violation::message).collect()
    }

    /// Violations recorded at exactly `path`.
    pub fn at_path<'a>(&'a self, path: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.violations
            .iter()
            .filter(move |v| v.property_path.as_str() == path)
    }
}

impl fmt::Display for ViolationList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for violation in &self.violations {
            writeln!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl IntoIterator for ViolationList {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.into_iter()
    }
}

impl<'a> IntoIterator for &'a ViolationList {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}
