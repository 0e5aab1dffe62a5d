//! Metadata for one constrained property or getter.

use crate::{Constraint, ElementMetadata, PropertyAccessor};
use std::sync::Arc;
use tenet_core::{Object, Value};
use tenet_registry::{AccessResult, ClassRegistry};

/// Constraints of one property together with the strategy used to read it.
#[derive(Debug, Clone)]
pub struct PropertyMetadata {
    /// Class that declared the property.
    class: String,
    /// Property name, used as the path segment.
    name: String,
    accessor: Arc<dyn PropertyAccessor>,
    element: ElementMetadata,
}

impl PropertyMetadata {
    pub(crate) fn new(
        class: impl Into<String>,
        name: impl Into<String>,
        accessor: Arc<dyn PropertyAccessor>,
    ) -> Self {
        Self {
            class: class.into(),
            name: name.into(),
            accessor,
            element: ElementMetadata::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class that declared the property.
    pub fn class_name(&self) -> &str {
        &self.class
    }

    pub fn accessor(&self) -> &dyn PropertyAccessor {
        self.accessor.as_ref()
    }

    pub fn element(&self) -> &ElementMetadata {
        &self.element
    }

    pub fn constraints(&self) -> &[Constraint] {
        self.element.constraints()
    }

    pub fn find_constraints<'a>(&'a self, group: &'a str) -> impl Iterator<Item = &'a Constraint> + 'a {
        self.element.find_constraints(group)
    }

    /// Read this property's current value from `object`.
    pub fn read_value(&self, classes: &ClassRegistry, object: &Object) -> AccessResult<Value> {
        self.accessor.read(classes, object)
    }

    pub(crate) fn element_mut(&mut self) -> &mut ElementMetadata {
        &mut self.element
    }
}
