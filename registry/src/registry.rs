//! The ClassRegistry - immutable class model lookup.

use crate::{AccessError, AccessResult, ClassDef, FieldDef, MethodDef, SubtypeIndex};
use std::collections::HashMap;
use tenet_core::{Object, Value};

/// The ClassRegistry provides runtime lookup of class definitions.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct ClassRegistry {
    /// Class definitions by name.
    classes: HashMap<String, ClassDef>,
    /// Class names in declaration order.
    order: Vec<String>,
    /// Precomputed subtype relationships.
    subtype_index: SubtypeIndex,
}

impl ClassRegistry {
    pub(crate) fn new(
        classes: HashMap<String, ClassDef>,
        order: Vec<String>,
        subtype_index: SubtypeIndex,
    ) -> Self {
        Self {
            classes,
            order,
            subtype_index,
        }
    }

    // ==================== Class Lookups ====================

    /// Get a class definition by name.
    pub fn get_class(&self, name: &str) -> Option<&ClassDef> {
        self.classes.get(name)
    }

    /// Check whether a class is known.
    pub fn contains(&self, name: &str) -> bool {
        self.classes.contains_key(name)
    }

    /// Get all class definitions in declaration order.
    pub fn all_classes(&self) -> impl Iterator<Item = &ClassDef> {
        self.order.iter().filter_map(|name| self.classes.get(name))
    }

    /// Get the number of classes.
    pub fn class_count(&self) -> usize {
        self.classes.len()
    }

    /// Parent class of a class, if any.
    pub fn parent_of(&self, name: &str) -> Option<&str> {
        self.classes.get(name).and_then(|c| c.parent.as_deref())
    }

    /// Interfaces directly implemented (or extended) by a class.
    pub fn interfaces_of(&self, name: &str) -> &[String] {
        self.classes
            .get(name)
            .map(|c| c.interfaces.as_slice())
            .unwrap_or(&[])
    }

    // ==================== Member Lookups ====================

    /// Get a field declaration, including inherited fields.
    pub fn find_field(&self, class: &str, field: &str) -> Option<&FieldDef> {
        let class_def = self.classes.get(class)?;
        if let Some(field_def) = class_def.get_field(field) {
            return Some(field_def);
        }
        class_def
            .parent
            .as_deref()
            .and_then(|parent| self.find_field(parent, field))
    }

    /// Get a method declaration, including inherited ones.
    ///
    /// Own methods win over the parent chain, the parent chain wins over
    /// interface declarations.
    pub fn find_method(&self, class: &str, method: &str) -> Option<&MethodDef> {
        let class_def = self.classes.get(class)?;
        if let Some(method_def) = class_def.get_method(method) {
            return Some(method_def);
        }
        if let Some(found) = class_def
            .parent
            .as_deref()
            .and_then(|parent| self.find_method(parent, method))
        {
            return Some(found);
        }
        class_def
            .interfaces
            .iter()
            .find_map(|iface| self.find_method(iface, method))
    }

    /// Read a field of an object. Unset declared fields read as null.
    pub fn read_field(&self, object: &Object, field: &str) -> AccessResult<Value> {
        let field_def = self
            .find_field(object.class(), field)
            .ok_or_else(|| AccessError::missing_member(object.class(), field))?;

        if !field_def.visibility.is_public() {
            return Err(AccessError::access_denied(object.class(), field));
        }

        Ok(object.get(field).unwrap_or(Value::Null))
    }

    /// Invoke a method on an object, dispatching on its concrete class.
    pub fn call_method(&self, object: &Object, method: &str) -> AccessResult<Value> {
        let method_def = self
            .find_method(object.class(), method)
            .ok_or_else(|| AccessError::missing_member(object.class(), method))?;

        if !method_def.visibility.is_public() {
            return Err(AccessError::access_denied(object.class(), method));
        }

        match &method_def.body {
            Some(body) => Ok(body(object)),
            None => Err(AccessError::missing_member(object.class(), method)),
        }
    }

    // ==================== Subtype Queries ====================

    /// Check if instances of `class` are instances of `ancestor`
    /// (same class, subclass, or implementor).
    pub fn is_instance_of(&self, class: &str, ancestor: &str) -> bool {
        self.subtype_index.is_subtype(class, ancestor)
    }

    /// Get all subtypes of a class (not including the class itself).
    pub fn get_subtypes<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.subtype_index.get_subtypes(name)
    }

    /// Get all supertypes of a class (not including the class itself).
    pub fn get_supertypes<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.subtype_index.get_supertypes(name)
    }
}
