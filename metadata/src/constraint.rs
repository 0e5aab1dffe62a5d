//! Constraint value objects.
//!
//! A constraint is a declarative rule instance: a kind (described by a
//! [`ConstraintDefinition`]), the options configured for it, and the groups
//! it applies to. Constraints are assembled through [`ConstraintBuilder`],
//! which rejects undeclared options, and are read-only afterwards.

use crate::group::DEFAULT_GROUP;
use crate::{MetadataError, MetadataResult};
use std::collections::BTreeMap;
use tenet_core::Value;

/// Static description of a constraint kind.
#[derive(Debug, PartialEq, Eq)]
pub struct ConstraintDefinition {
    /// Kind name, also the identity used when merging inherited constraints.
    pub name: &'static str,
    /// Name of the validator unit that evaluates this kind.
    pub validated_by: &'static str,
    /// Option names this kind accepts.
    pub options: &'static [&'static str],
    /// Option names that must be set.
    pub required: &'static [&'static str],
    /// Option set by [`ConstraintBuilder::value`].
    pub default_option: Option<&'static str>,
    /// Message template used unless the constraint overrides it.
    pub message: &'static str,
}

impl ConstraintDefinition {
    pub fn accepts(&self, option: &str) -> bool {
        self.options.contains(&option)
    }
}

/// Cascade into a referenced object (or every element of a collection).
pub static VALID: ConstraintDefinition = ConstraintDefinition {
    name: "Valid",
    validated_by: "",
    options: &["class", "traverse"],
    required: &[],
    default_option: Some("class"),
    message: "This value should be instance of {{ type }}",
};

/// Every element of a collection must satisfy every inner constraint.
pub static ALL: ConstraintDefinition = ConstraintDefinition {
    name: "All",
    validated_by: "",
    options: &[],
    required: &[],
    default_option: None,
    message: "This value should be iterable",
};

/// At least one element of a collection must satisfy the inner constraints.
pub static ANY: ConstraintDefinition = ConstraintDefinition {
    name: "Any",
    validated_by: "",
    options: &[],
    required: &[],
    default_option: None,
    message: "This value should be iterable",
};

/// How the graph walker treats a constraint.
#[derive(Debug, Clone)]
pub enum ConstraintKind {
    /// Evaluated by the validator unit named in the definition.
    Rule,
    /// Cascading reference.
    Valid {
        /// Class (or interface) the value must be an instance of.
        class: Option<String>,
        /// Whether collections are traversed element by element.
        traverse: bool,
    },
    /// Universal collection combinator.
    All(Vec<Constraint>),
    /// Existential collection combinator.
    Any(Vec<Constraint>),
}

/// An immutable constraint instance.
#[derive(Debug, Clone)]
pub struct Constraint {
    definition: &'static ConstraintDefinition,
    kind: ConstraintKind,
    options: BTreeMap<String, Value>,
    groups: Vec<String>,
    message: String,
}

impl Constraint {
    /// Start a constraint evaluated by a validator unit.
    pub fn rule(definition: &'static ConstraintDefinition) -> ConstraintBuilder {
        ConstraintBuilder::new(definition, Pending::Rule)
    }

    /// Start a cascading reference constraint.
    pub fn valid() -> ConstraintBuilder {
        ConstraintBuilder::new(&VALID, Pending::Valid)
    }

    /// Start an "every element" combinator over the given inner constraints.
    pub fn all(inner: Vec<Constraint>) -> ConstraintBuilder {
        ConstraintBuilder::new(&ALL, Pending::All(inner))
    }

    /// Start an "at least one element" combinator over the given inner constraints.
    pub fn any(inner: Vec<Constraint>) -> ConstraintBuilder {
        ConstraintBuilder::new(&ANY, Pending::Any(inner))
    }

    /// Kind name, e.g. `NotNull`.
    pub fn name(&self) -> &'static str {
        self.definition.name
    }

    /// Name of the validator unit responsible for this constraint.
    pub fn validated_by(&self) -> &'static str {
        self.definition.validated_by
    }

    pub fn definition(&self) -> &'static ConstraintDefinition {
        self.definition
    }

    pub fn kind(&self) -> &ConstraintKind {
        &self.kind
    }

    /// Groups this constraint applies to.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    /// Value of a configured option.
    pub fn option(&self, name: &str) -> Option<&Value> {
        self.options.get(name)
    }

    pub fn options(&self) -> &BTreeMap<String, Value> {
        &self.options
    }

    /// Message template reported when this constraint fails.
    pub fn message_template(&self) -> &str {
        &self.message
    }

    /// Copy of this constraint that also belongs to `group` when it belongs
    /// to the default group. Used to give constraints the implicit group of
    /// the class they are attached to.
    pub(crate) fn with_implicit_group(&self, group: &str) -> Constraint {
        let mut copy = self.clone();
        if copy.in_group(DEFAULT_GROUP) && !copy.in_group(group) {
            copy.groups.push(group.to_string());
        }
        copy
    }
}

#[derive(Debug)]
enum Pending {
    Rule,
    Valid,
    All(Vec<Constraint>),
    Any(Vec<Constraint>),
}

/// Builder for a [`Constraint`].
#[derive(Debug)]
pub struct ConstraintBuilder {
    definition: &'static ConstraintDefinition,
    pending: Pending,
    options: BTreeMap<String, Value>,
    default_value: Option<Value>,
    groups: Vec<String>,
    message: Option<String>,
}

impl ConstraintBuilder {
    fn new(definition: &'static ConstraintDefinition, pending: Pending) -> Self {
        Self {
            definition,
            pending,
            options: BTreeMap::new(),
            default_value: None,
            groups: Vec::new(),
            message: None,
        }
    }

    /// Set a named option.
    pub fn option(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(name.into(), value.into());
        self
    }

    /// Set the definition's default option.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    /// Add a group.
    pub fn group(mut self, group: impl Into<String>) -> Self {
        let group = group.into();
        if !self.groups.contains(&group) {
            self.groups.push(group);
        }
        self
    }

    /// Add several groups.
    pub fn groups<I, G>(self, groups: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<String>,
    {
        groups.into_iter().fold(self, |b, g| b.group(g))
    }

    /// Override the message template.
    pub fn message(mut self, template: impl Into<String>) -> Self {
        self.message = Some(template.into());
        self
    }

    /// Finish building the constraint.
    pub fn build(mut self) -> MetadataResult<Constraint> {
        let name = self.definition.name;

        if let Some(value) = self.default_value.take() {
            let option = self
                .definition
                .default_option
                .ok_or_else(|| MetadataError::NoDefaultOption {
                    constraint: name.to_string(),
                })?;
            self.options.insert(option.to_string(), value);
        }

        let invalid: Vec<String> = self
            .options
            .keys()
            .filter(|k| !self.definition.accepts(k))
            .cloned()
            .collect();
        if !invalid.is_empty() {
            return Err(MetadataError::invalid_options(name, invalid));
        }

        let missing: Vec<String> = self
            .definition
            .required
            .iter()
            .filter(|r| !self.options.contains_key(**r))
            .map(|r| r.to_string())
            .collect();
        if !missing.is_empty() {
            return Err(MetadataError::missing_options(name, missing));
        }

        let kind = match self.pending {
            Pending::Rule => ConstraintKind::Rule,
            Pending::Valid => {
                let class = match self.options.get("class") {
                    None | Some(Value::Null) => None,
                    Some(Value::String(class)) => Some(class.clone()),
                    Some(_) => {
                        return Err(MetadataError::invalid_option_value(name, "class", "a class name"))
                    }
                };
                let traverse = match self.options.get("traverse") {
                    None => true,
                    Some(Value::Bool(traverse)) => *traverse,
                    Some(_) => {
                        return Err(MetadataError::invalid_option_value(name, "traverse", "a boolean"))
                    }
                };
                ConstraintKind::Valid { class, traverse }
            }
            Pending::All(inner) => ConstraintKind::All(inner),
            Pending::Any(inner) => ConstraintKind::Any(inner),
        };

        if self.groups.is_empty() {
            self.groups.push(DEFAULT_GROUP.to_string());
        }

        Ok(Constraint {
            definition: self.definition,
            kind,
            options: self.options,
            groups: self.groups,
            message: self
                .message
                .unwrap_or_else(|| self.definition.message.to_string()),
        })
    }
}
