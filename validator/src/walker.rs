//! Graph traversal.
//!
//! The walker applies the constraints selected by one group to an object
//! graph, descending into properties, cascaded references and collection
//! elements, and records every failure with the path it was found at.

use crate::{CyclePolicy, PropertyPath, ValidationError, ValidationResult, ValidatorConfig, Violation, ViolationList};
use std::collections::HashSet;
use tenet_constraint::{MessageParameters, ValidatorRegistry};
use tenet_core::{ObjectId, ObjectRef, Value};
use tenet_metadata::{ClassMetadata, Constraint, ConstraintKind, MetadataFactory, PropertyMetadata, DEFAULT_GROUP};
use tracing::{debug, trace};

/// State of one validation call.
pub struct GraphWalker<'a> {
    metadata: &'a MetadataFactory,
    validators: &'a ValidatorRegistry,
    config: &'a ValidatorConfig,
    root: Value,
    violations: ViolationList,
    /// Objects currently being walked.
    stack: Vec<ObjectId>,
    /// Number of cascades cut because they re-entered an object on the stack.
    cycles_cut: usize,
    /// Rule constraints already evaluated at a path, so a constraint in
    /// several requested groups reports once.
    evaluated: HashSet<(PropertyPath, usize)>,
    depth: usize,
}

impl<'a> GraphWalker<'a> {
    pub fn new(
        root: Value,
        metadata: &'a MetadataFactory,
        validators: &'a ValidatorRegistry,
        config: &'a ValidatorConfig,
    ) -> Self {
        Self {
            metadata,
            validators,
            config,
            root,
            violations: ViolationList::new(),
            stack: Vec::new(),
            cycles_cut: 0,
            evaluated: HashSet::new(),
            depth: 0,
        }
    }

    pub fn violations(&self) -> &ViolationList {
        &self.violations
    }

    pub fn violation_count(&self) -> usize {
        self.violations.len()
    }

    pub fn into_violations(self) -> ViolationList {
        self.violations
    }

    /// Validate `object` against the class-level and property constraints of
    /// `class` in `group`.
    pub fn walk_class(
        &mut self,
        class: &ClassMetadata,
        object: &ObjectRef,
        group: &str,
        path: &PropertyPath,
    ) -> ValidationResult<()> {
        if self.stack.contains(&object.id()) {
            return match self.config.cycle_policy {
                CyclePolicy::Skip => {
                    debug!(class = object.class(), path = %path, group, "cyclic reference skipped");
                    self.cycles_cut += 1;
                    Ok(())
                }
                CyclePolicy::Reject => Err(ValidationError::cyclic_reference(object.class(), path.as_str())),
            };
        }

        self.stack.push(object.id());
        let result = self.walk_class_members(class, object, group, path);
        self.stack.pop();
        result
    }

    fn walk_class_members(
        &mut self,
        class: &ClassMetadata,
        object: &ObjectRef,
        group: &str,
        path: &PropertyPath,
    ) -> ValidationResult<()> {
        let as_value = Value::Object(object.clone());
        for constraint in class.find_constraints(group) {
            self.walk_constraint(constraint, &as_value, group, path)?;
        }

        for property in class.properties() {
            if property.find_constraints(group).next().is_none() {
                continue;
            }
            self.walk_property(property, object, group, &path.child(property.name()))?;
        }
        Ok(())
    }

    /// Read one property of `object` and validate its value. `path` already
    /// names the property.
    pub fn walk_property(
        &mut self,
        property: &PropertyMetadata,
        object: &ObjectRef,
        group: &str,
        path: &PropertyPath,
    ) -> ValidationResult<()> {
        let value = property.read_value(self.metadata.classes(), object)?;
        self.walk_property_value(property, &value, group, path)
    }

    /// Validate a property value against the property's constraints in `group`.
    pub fn walk_property_value(
        &mut self,
        property: &PropertyMetadata,
        value: &Value,
        group: &str,
        path: &PropertyPath,
    ) -> ValidationResult<()> {
        for constraint in property.find_constraints(group) {
            self.walk_constraint(constraint, value, group, path)?;
        }
        Ok(())
    }

    /// Apply one constraint to `value`, dispatching on its kind.
    pub fn walk_constraint(
        &mut self,
        constraint: &Constraint,
        value: &Value,
        group: &str,
        path: &PropertyPath,
    ) -> ValidationResult<()> {
        trace!(constraint = constraint.name(), path = %path, group, "evaluating constraint");
        match constraint.kind() {
            ConstraintKind::Rule => self.walk_rule(constraint, value, path),
            ConstraintKind::Valid { class, traverse } => {
                self.cascade(constraint, class.as_deref(), *traverse, value, group, path)
            }
            ConstraintKind::All(inner) => self.walk_collection(constraint, inner, false, value, group, path),
            ConstraintKind::Any(inner) => self.walk_collection(constraint, inner, true, value, group, path),
        }
    }

    fn walk_rule(&mut self, constraint: &Constraint, value: &Value, path: &PropertyPath) -> ValidationResult<()> {
        let key = (path.clone(), constraint as *const Constraint as usize);
        if !self.evaluated.insert(key) {
            return Ok(());
        }

        if let Some(failure) = self.validators.check(value, constraint)? {
            self.add_violation(
                constraint,
                failure.message_template,
                failure.message_parameters,
                value,
                path,
            );
        }
        Ok(())
    }

    fn cascade(
        &mut self,
        constraint: &Constraint,
        required: Option<&str>,
        traverse: bool,
        value: &Value,
        group: &str,
        path: &PropertyPath,
    ) -> ValidationResult<()> {
        match value {
            Value::Null => Ok(()),
            Value::Object(object) => {
                if let Some(required) = required {
                    if !self.metadata.classes().is_instance_of(object.class(), required) {
                        let mut parameters = MessageParameters::new();
                        parameters.insert("{{ type }}".to_string(), required.to_string());
                        parameters.insert("{{ value }}".to_string(), object.class().to_string());
                        self.add_violation(
                            constraint,
                            constraint.message_template().to_string(),
                            parameters,
                            value,
                            path,
                        );
                        return Ok(());
                    }
                }
                self.walk_object(object, group, path)
            }
            Value::List(_) | Value::Map(_) => {
                if !traverse {
                    return Ok(());
                }
                for (key, element) in value.entries().unwrap_or_default() {
                    self.cascade(constraint, required, traverse, element, group, &path.index(&key))?;
                }
                Ok(())
            }
            scalar => Err(ValidationError::unexpected_type(
                path.as_str(),
                "an object or a collection",
                scalar.type_name(),
            )),
        }
    }

    /// Walk a referenced object with its own class metadata, at the same
    /// path as the reference.
    fn walk_object(&mut self, object: &ObjectRef, group: &str, path: &PropertyPath) -> ValidationResult<()> {
        if self.depth >= self.config.max_depth {
            return Err(ValidationError::depth_exceeded(self.config.max_depth, path.as_str()));
        }
        let class = self.metadata.get_class_metadata(object.class())?;

        self.depth += 1;
        let result = match class.group_sequence() {
            Some(sequence) if group == DEFAULT_GROUP => {
                let mut result = Ok(());
                for step in sequence.iter() {
                    let before = self.violations.len();
                    result = self.walk_class(&class, object, step, path);
                    if result.is_err() {
                        break;
                    }
                    if self.violations.len() > before {
                        debug!(class = class.name(), group = step, path = %path, "group sequence stopped");
                        break;
                    }
                }
                result
            }
            _ => self.walk_class(&class, object, group, path),
        };
        self.depth -= 1;
        result
    }

    fn walk_collection(
        &mut self,
        constraint: &Constraint,
        inner: &[Constraint],
        existential: bool,
        value: &Value,
        group: &str,
        path: &PropertyPath,
    ) -> ValidationResult<()> {
        if value.is_null() {
            return Ok(());
        }
        let Some(entries) = value.entries() else {
            let mut parameters = MessageParameters::new();
            parameters.insert("{{ value }}".to_string(), value.to_string());
            self.add_violation(
                constraint,
                constraint.message_template().to_string(),
                parameters,
                value,
                path,
            );
            return Ok(());
        };

        let snapshot = self.violations.clone();
        let mut any_passed = false;
        for (key, element) in entries {
            let before = self.violations.len();
            let cut_before = self.cycles_cut;
            let element_path = path.index(&key);
            for nested in inner {
                self.walk_constraint(nested, element, group, &element_path)?;
            }
            // an element whose walk was cut short by a cycle was not fully checked
            if self.violations.len() == before && self.cycles_cut == cut_before {
                any_passed = true;
            }
        }

        if existential && any_passed {
            self.violations = snapshot;
        }
        Ok(())
    }

    fn add_violation(
        &mut self,
        constraint: &Constraint,
        message_template: String,
        message_parameters: MessageParameters,
        invalid_value: &Value,
        path: &PropertyPath,
    ) {
        self.violations.push(Violation::new(
            constraint.name(),
            message_template,
            message_parameters,
            self.root.clone(),
            path.clone(),
            invalid_value.clone(),
        ));
    }
}
