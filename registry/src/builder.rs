//! ClassRegistryBuilder for constructing an immutable ClassRegistry.

use crate::{ClassDef, ClassKind, ClassRegistry, FieldDef, MethodDef, SubtypeIndex};
use std::collections::HashMap;
use tenet_core::{Object, Value};
use thiserror::Error;

/// Errors that can occur during registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate class name: {0}")]
    DuplicateClassName(String),

    #[error("Unknown parent class: {0}")]
    UnknownParentClass(String),

    #[error("Unknown interface: {0}")]
    UnknownInterface(String),

    #[error("Class {class} cannot extend interface {parent}")]
    ExtendsInterface { class: String, parent: String },

    #[error("{class} cannot implement {target}: not an interface")]
    ImplementsClass { class: String, target: String },
}

/// Builder for constructing an immutable ClassRegistry.
///
/// Supertypes must be declared before their subtypes, which rules out
/// inheritance cycles by construction.
#[derive(Debug, Default)]
pub struct ClassRegistryBuilder {
    /// Classes being built, by name.
    classes: HashMap<String, ClassDef>,
    /// Declaration order, for deterministic iteration.
    order: Vec<String>,
}

impl ClassRegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a concrete class definition.
    pub fn add_class(&mut self, name: impl Into<String>) -> ClassBuilder<'_> {
        ClassBuilder::new(self, name.into(), ClassKind::Class)
    }

    /// Add an interface definition.
    pub fn add_interface(&mut self, name: impl Into<String>) -> ClassBuilder<'_> {
        ClassBuilder::new(self, name.into(), ClassKind::Interface)
    }

    /// Build the immutable ClassRegistry.
    pub fn build(self) -> ClassRegistry {
        let subtype_index = SubtypeIndex::build(&self.classes);
        ClassRegistry::new(self.classes, self.order, subtype_index)
    }
}

/// Builder for a class or interface definition.
pub struct ClassBuilder<'a> {
    builder: &'a mut ClassRegistryBuilder,
    def: ClassDef,
    extends: Vec<String>,
}

impl<'a> ClassBuilder<'a> {
    fn new(builder: &'a mut ClassRegistryBuilder, name: String, kind: ClassKind) -> Self {
        Self {
            builder,
            def: ClassDef::new(name, kind),
            extends: Vec::new(),
        }
    }

    /// Set the parent class. For interfaces, add an extended interface.
    pub fn extends(mut self, parent: impl Into<String>) -> Self {
        self.extends.push(parent.into());
        self
    }

    /// Add an implemented interface.
    pub fn implements(mut self, interface: impl Into<String>) -> Self {
        self.def.interfaces.push(interface.into());
        self
    }

    /// Add a field declaration.
    pub fn field(mut self, field: FieldDef) -> Self {
        self.def.fields.push(field);
        self
    }

    /// Add a public field with default visibility.
    pub fn public_field(self, name: impl Into<String>) -> Self {
        self.field(FieldDef::new(name))
    }

    /// Add a method declaration.
    pub fn method(mut self, method: MethodDef) -> Self {
        self.def.methods.push(method);
        self
    }

    /// Add a public method.
    pub fn public_method<F>(self, name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&Object) -> Value + Send + Sync + 'static,
    {
        self.method(MethodDef::new(name, body))
    }

    /// Finish building this class.
    pub fn done(mut self) -> Result<String, RegistryError> {
        let name = self.def.name.clone();
        if self.builder.classes.contains_key(&name) {
            return Err(RegistryError::DuplicateClassName(name));
        }

        // Resolve supertypes
        for parent in std::mem::take(&mut self.extends) {
            let parent_def = self
                .builder
                .classes
                .get(&parent)
                .ok_or_else(|| RegistryError::UnknownParentClass(parent.clone()))?;

            match (self.def.kind, parent_def.kind) {
                (ClassKind::Class, ClassKind::Class) => {
                    self.def.parent = Some(parent);
                }
                (ClassKind::Interface, ClassKind::Interface) => {
                    self.def.interfaces.push(parent);
                }
                (ClassKind::Class, ClassKind::Interface) => {
                    return Err(RegistryError::ExtendsInterface {
                        class: name,
                        parent,
                    });
                }
                (ClassKind::Interface, ClassKind::Class) => {
                    return Err(RegistryError::ImplementsClass {
                        class: name,
                        target: parent,
                    });
                }
            }
        }

        for interface in &self.def.interfaces {
            match self.builder.classes.get(interface) {
                Some(def) if def.is_interface() => {}
                Some(_) => {
                    return Err(RegistryError::ImplementsClass {
                        class: name,
                        target: interface.clone(),
                    })
                }
                None => return Err(RegistryError::UnknownInterface(interface.clone())),
            }
        }

        self.builder.order.push(name.clone());
        self.builder.classes.insert(name.clone(), self.def);

        Ok(name)
    }
}
