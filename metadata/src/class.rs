//! Metadata for a class: class-level constraints, constrained properties and
//! an optional group sequence.

use crate::group::DEFAULT_GROUP;
use crate::{
    Constraint, ElementMetadata, GroupSequence, MetadataError, MetadataResult, PropertyAccessor,
    PropertyMetadata,
};
use std::collections::HashMap;
use std::sync::Arc;

/// Resolved constraint metadata of one class, inherited entries included.
/// Immutable once published by the metadata factory.
#[derive(Debug, Clone)]
pub struct ClassMetadata {
    name: String,
    element: ElementMetadata,
    /// Constrained properties in declaration/merge order.
    properties: Vec<PropertyMetadata>,
    /// Property name to position in `properties`.
    property_index: HashMap<String, usize>,
    group_sequence: Option<GroupSequence>,
}

impl ClassMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            element: ElementMetadata::new(),
            properties: Vec::new(),
            property_index: HashMap::new(),
            group_sequence: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ==================== Class-level constraints ====================

    pub fn element(&self) -> &ElementMetadata {
        &self.element
    }

    pub fn constraints(&self) -> &[Constraint] {
        self.element.constraints()
    }

    pub fn find_constraints<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Constraint> + 'a {
        self.element.find_constraints(group)
    }

    // ==================== Properties ====================

    /// Constrained properties in declaration order.
    pub fn properties(&self) -> &[PropertyMetadata] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyMetadata> {
        self.property_index.get(name).map(|&i| &self.properties[i])
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.property_index.contains_key(name)
    }

    /// Names of all constrained properties in declaration order.
    pub fn constrained_properties(&self) -> impl Iterator<Item = &str> {
        self.properties.iter().map(|p| p.name())
    }

    // ==================== Group sequence ====================

    pub fn group_sequence(&self) -> Option<&GroupSequence> {
        self.group_sequence.as_ref()
    }

    pub fn has_group_sequence(&self) -> bool {
        self.group_sequence.is_some()
    }

    /// Check whether any constraint in this metadata (class or property level)
    /// is attached at all.
    pub fn is_empty(&self) -> bool {
        self.element.is_empty() && self.properties.iter().all(|p| p.element().is_empty())
    }

    // ==================== Construction ====================

    /// Attach a class-level constraint. Default-group constraints also join
    /// the implicit group named after this class.
    pub(crate) fn add_constraint(&mut self, constraint: Constraint) {
        let constraint = constraint.with_implicit_group(&self.name);
        self.element.add_constraint(constraint);
    }

    /// Attach a constraint to a property, registering the property with
    /// `accessor` on first use.
    pub(crate) fn add_property_constraint(
        &mut self,
        property: &str,
        accessor: Arc<dyn PropertyAccessor>,
        constraint: Constraint,
    ) {
        let constraint = constraint.with_implicit_group(&self.name);
        let index = self.property_slot(property, accessor);
        self.properties[index].element_mut().add_constraint(constraint);
    }

    /// Register a property without constraints (yet).
    pub(crate) fn add_property(&mut self, property: &str, accessor: Arc<dyn PropertyAccessor>) {
        self.property_slot(property, accessor);
    }

    fn property_slot(&mut self, property: &str, accessor: Arc<dyn PropertyAccessor>) -> usize {
        if let Some(&index) = self.property_index.get(property) {
            return index;
        }
        let index = self.properties.len();
        self.properties
            .push(PropertyMetadata::new(self.name.clone(), property, accessor));
        self.property_index.insert(property.to_string(), index);
        index
    }

    pub(crate) fn set_group_sequence(&mut self, sequence: GroupSequence) -> MetadataResult<()> {
        if sequence.contains(DEFAULT_GROUP) {
            return Err(MetadataError::group_definition(format!(
                "the group \"{}\" is not allowed in the group sequence of {}",
                DEFAULT_GROUP, self.name
            )));
        }
        self.group_sequence = Some(sequence);
        Ok(())
    }

    /// Merge constraints inherited from a parent class or an interface.
    ///
    /// Entries already present win: class-level and per-property constraints
    /// of a kind this class already carries are not taken over, and
    /// properties not yet known are appended after the existing ones.
    pub(crate) fn merge(&mut self, inherited: &ClassMetadata) {
        self.element
            .merge_constraints(inherited.constraints(), &self.name);

        for property in &inherited.properties {
            match self.property_index.get(property.name()) {
                Some(&index) => {
                    self.properties[index]
                        .element_mut()
                        .merge_constraints(property.constraints(), &self.name);
                }
                None => {
                    let mut copy = property.clone();
                    let mut element = ElementMetadata::new();
                    element.merge_constraints(property.constraints(), &self.name);
                    *copy.element_mut() = element;
                    self.property_index
                        .insert(property.name().to_string(), self.properties.len());
                    self.properties.push(copy);
                }
            }
        }
    }
}
