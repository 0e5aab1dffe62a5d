//! Class model definition types.

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use tenet_core::{Object, Value};

/// Member visibility. Only public members are readable during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Public,
    Protected,
    Private,
}

impl Visibility {
    pub fn is_public(&self) -> bool {
        matches!(self, Visibility::Public)
    }
}

/// Field declaration within a class.
#[derive(Debug, Clone)]
pub struct FieldDef {
    /// Field name.
    pub name: String,
    /// Field visibility.
    pub visibility: Visibility,
}

impl FieldDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
        }
    }

    pub fn protected(mut self) -> Self {
        self.visibility = Visibility::Protected;
        self
    }

    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }
}

/// Body of a method: computes a value from the receiving instance.
pub type MethodBody = Arc<dyn Fn(&Object) -> Value + Send + Sync>;

/// Method declaration within a class or interface.
#[derive(Clone)]
pub struct MethodDef {
    /// Method name (e.g. `getCity`, `isActive`).
    pub name: String,
    /// Method visibility.
    pub visibility: Visibility,
    /// Implementation. `None` for abstract/interface declarations.
    pub body: Option<MethodBody>,
}

impl MethodDef {
    /// Declare a concrete method.
    pub fn new<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&Object) -> Value + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            body: Some(Arc::new(body)),
        }
    }

    /// Declare a method without a body.
    pub fn abstract_method(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            visibility: Visibility::Public,
            body: None,
        }
    }

    pub fn protected(mut self) -> Self {
        self.visibility = Visibility::Protected;
        self
    }

    pub fn private(mut self) -> Self {
        self.visibility = Visibility::Private;
        self
    }

    pub fn is_abstract(&self) -> bool {
        self.body.is_none()
    }
}

impl fmt::Debug for MethodDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MethodDef")
            .field("name", &self.name)
            .field("visibility", &self.visibility)
            .field("body", &self.body.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// Whether a definition is a concrete class or an interface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Class,
    Interface,
}

/// Class or interface definition.
#[derive(Debug, Clone)]
pub struct ClassDef {
    /// Class name.
    pub name: String,
    /// Class or interface.
    pub kind: ClassKind,
    /// Parent class (classes only).
    pub parent: Option<String>,
    /// Directly implemented interfaces (for interfaces: extended interfaces).
    pub interfaces: Vec<String>,
    /// Field declarations in declaration order.
    pub fields: Vec<FieldDef>,
    /// Method declarations in declaration order.
    pub methods: Vec<MethodDef>,
}

impl ClassDef {
    pub fn new(name: impl Into<String>, kind: ClassKind) -> Self {
        Self {
            name: name.into(),
            kind,
            parent: None,
            interfaces: Vec::new(),
            fields: Vec::new(),
            methods: Vec::new(),
        }
    }

    pub fn is_interface(&self) -> bool {
        matches!(self.kind, ClassKind::Interface)
    }

    /// Get a field declared directly on this class.
    pub fn get_field(&self, name: &str) -> Option<&FieldDef> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Get a method declared directly on this class.
    pub fn get_method(&self, name: &str) -> Option<&MethodDef> {
        self.methods.iter().find(|m| m.name == name)
    }

    /// Direct supertypes: the parent class followed by the interfaces.
    pub fn supertypes(&self) -> impl Iterator<Item = &str> {
        self.parent
            .iter()
            .chain(self.interfaces.iter())
            .map(|s| s.as_str())
    }
}

/// Precomputed subtype relationships.
#[derive(Debug, Default)]
pub struct SubtypeIndex {
    /// For each class, the set of all its subtypes (transitive).
    subtypes: HashMap<String, HashSet<String>>,
    /// For each class, the set of all its supertypes (transitive).
    supertypes: HashMap<String, HashSet<String>>,
}

impl SubtypeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the subtype index from class definitions.
    pub fn build(classes: &HashMap<String, ClassDef>) -> Self {
        let mut index = Self::new();

        for name in classes.keys() {
            index.subtypes.insert(name.clone(), HashSet::new());
            index.supertypes.insert(name.clone(), HashSet::new());
        }

        // Direct parents and interfaces first
        for (name, class_def) in classes {
            for super_name in class_def.supertypes() {
                if let Some(super_subtypes) = index.subtypes.get_mut(super_name) {
                    super_subtypes.insert(name.clone());
                }
                if let Some(own_supertypes) = index.supertypes.get_mut(name) {
                    own_supertypes.insert(super_name.to_string());
                }
            }
        }

        // Transitively close the relationships
        let names: Vec<String> = classes.keys().cloned().collect();

        let mut changed = true;
        while changed {
            changed = false;
            for name in &names {
                let supertypes: Vec<String> = index
                    .supertypes
                    .get(name)
                    .map(|s| s.iter().cloned().collect())
                    .unwrap_or_default();

                for super_name in supertypes {
                    let transitive: Vec<String> = index
                        .supertypes
                        .get(&super_name)
                        .map(|s| s.iter().cloned().collect())
                        .unwrap_or_default();

                    for trans_name in transitive {
                        if let Some(set) = index.supertypes.get_mut(name) {
                            if set.insert(trans_name.clone()) {
                                changed = true;
                            }
                        }
                        if let Some(set) = index.subtypes.get_mut(&trans_name) {
                            set.insert(name.clone());
                        }
                    }
                }
            }
        }

        index
    }

    /// Check if `sub` is `super_type` or one of its subtypes.
    pub fn is_subtype(&self, sub: &str, super_type: &str) -> bool {
        if sub == super_type {
            return true;
        }
        self.supertypes
            .get(sub)
            .map(|set| set.contains(super_type))
            .unwrap_or(false)
    }

    /// Get all subtypes of a class (not including the class itself).
    pub fn get_subtypes<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.subtypes
            .get(name)
            .into_iter()
            .flat_map(|set| set.iter().map(|s| s.as_str()))
    }

    /// Get all supertypes of a class (not including the class itself).
    pub fn get_supertypes<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a str> + 'a {
        self.supertypes
            .get(name)
            .into_iter()
            .flat_map(|set| set.iter().map(|s| s.as_str()))
    }
}
