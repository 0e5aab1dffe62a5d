//! Object instances.
//!
//! An object is an instance of a named class holding field values. Objects
//! are shared through [`ObjectRef`] handles that compare by identity, so a
//! graph may reference the same instance from several places (or from
//! itself).

use crate::{Fields, Value};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::{Arc, PoisonError, RwLock};

/// Identity of an object instance for the lifetime of its allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(usize);

impl ObjectId {
    /// Get the raw value.
    pub fn raw(&self) -> usize {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "o{:x}", self.0)
    }
}

/// An instance of a class.
///
/// Fields live behind a lock so references (including cyclic ones) can be
/// wired after the instances exist.
pub struct Object {
    class: String,
    fields: RwLock<Fields>,
}

impl Object {
    /// Create an object with no field values.
    pub fn new(class: impl Into<String>) -> ObjectRef {
        Self::with_fields(class, Fields::new())
    }

    /// Create an object with the given field values.
    pub fn with_fields(class: impl Into<String>, fields: Fields) -> ObjectRef {
        ObjectRef(Arc::new(Object {
            class: class.into(),
            fields: RwLock::new(fields),
        }))
    }

    /// Name of the class this object is an instance of.
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Current value of a field, if it has been set.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.fields
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    /// Set a field value, returning the previous one.
    pub fn set(&self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(name.into(), value.into())
    }

    /// Check whether a field has been set.
    pub fn has(&self, name: &str) -> bool {
        self.fields
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Names of all fields that have been set.
    pub fn field_names(&self) -> Vec<String> {
        self.fields
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect()
    }
}

/// Shared handle to an [`Object`], compared and hashed by identity.
#[derive(Clone)]
pub struct ObjectRef(Arc<Object>);

impl ObjectRef {
    /// Identity of the referenced instance.
    pub fn id(&self) -> ObjectId {
        ObjectId(Arc::as_ptr(&self.0) as usize)
    }

    /// Check whether two handles point at the same instance.
    pub fn ptr_eq(&self, other: &ObjectRef) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for ObjectRef {
    type Target = Object;

    fn deref(&self) -> &Object {
        &self.0
    }
}

impl PartialEq for ObjectRef {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for ObjectRef {}

impl Hash for ObjectRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

// Never print field values: graphs may be cyclic.
impl fmt::Debug for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.class, self.id())
    }
}

impl fmt::Display for ObjectRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.class)
    }
}
