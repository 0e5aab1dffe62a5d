//! Accessor strategies: how a property's current value is read.
//!
//! The strategy for each property is chosen once, when its class metadata is
//! built, from the members the class model declares.

use crate::{MetadataError, MetadataResult};
use std::fmt;
use std::sync::Arc;
use tenet_core::{Object, Value};
use tenet_registry::{AccessError, AccessResult, ClassRegistry};

/// Reads one property from a live object.
pub trait PropertyAccessor: fmt::Debug + Send + Sync {
    /// Name of the member this accessor reads (field or method name).
    fn member(&self) -> &str;

    /// Read the current value from `object`.
    fn read(&self, classes: &ClassRegistry, object: &Object) -> AccessResult<Value>;
}

/// Direct field access.
#[derive(Debug, Clone)]
pub struct FieldAccessor {
    field: String,
}

impl FieldAccessor {
    pub fn new(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
        }
    }
}

impl PropertyAccessor for FieldAccessor {
    fn member(&self) -> &str {
        &self.field
    }

    fn read(&self, classes: &ClassRegistry, object: &Object) -> AccessResult<Value> {
        classes.read_field(object, &self.field)
    }
}

/// `getX()` method access.
#[derive(Debug, Clone)]
pub struct GetterAccessor {
    method: String,
}

impl GetterAccessor {
    /// Accessor for `property`, calling `get<Property>`.
    pub fn for_property(property: &str) -> Self {
        Self {
            method: method_name("get", property),
        }
    }
}

impl PropertyAccessor for GetterAccessor {
    fn member(&self) -> &str {
        &self.method
    }

    fn read(&self, classes: &ClassRegistry, object: &Object) -> AccessResult<Value> {
        classes.call_method(object, &self.method)
    }
}

/// `isX()` method access.
#[derive(Debug, Clone)]
pub struct IsserAccessor {
    method: String,
}

impl IsserAccessor {
    /// Accessor for `property`, calling `is<Property>`.
    pub fn for_property(property: &str) -> Self {
        Self {
            method: method_name("is", property),
        }
    }
}

impl PropertyAccessor for IsserAccessor {
    fn member(&self) -> &str {
        &self.method
    }

    fn read(&self, classes: &ClassRegistry, object: &Object) -> AccessResult<Value> {
        classes.call_method(object, &self.method)
    }
}

/// `city` -> `getCity`
fn method_name(prefix: &str, property: &str) -> String {
    let mut chars = property.chars();
    match chars.next() {
        Some(first) => format!("{}{}{}", prefix, first.to_uppercase(), chars.as_str()),
        None => prefix.to_string(),
    }
}

/// Choose the accessor for a property declaration: field, then `getX`,
/// then `isX`. Only public members qualify; a member that exists but is not
/// public is an access error.
pub(crate) fn resolve_property(
    classes: &ClassRegistry,
    class: &str,
    property: &str,
) -> MetadataResult<Arc<dyn PropertyAccessor>> {
    let mut hidden: Option<String> = None;

    if let Some(field) = classes.find_field(class, property) {
        if field.visibility.is_public() {
            return Ok(Arc::new(FieldAccessor::new(property)));
        }
        hidden = Some(property.to_string());
    }

    resolve_methods(classes, class, property, hidden)
}

/// Choose the accessor for a getter declaration: `getX`, then `isX`.
pub(crate) fn resolve_getter(
    classes: &ClassRegistry,
    class: &str,
    property: &str,
) -> MetadataResult<Arc<dyn PropertyAccessor>> {
    resolve_methods(classes, class, property, None)
}

fn resolve_methods(
    classes: &ClassRegistry,
    class: &str,
    property: &str,
    mut hidden: Option<String>,
) -> MetadataResult<Arc<dyn PropertyAccessor>> {
    let getter = GetterAccessor::for_property(property);
    if let Some(method) = classes.find_method(class, getter.member()) {
        if method.visibility.is_public() {
            return Ok(Arc::new(getter));
        }
        hidden.get_or_insert_with(|| getter.member().to_string());
    }

    let isser = IsserAccessor::for_property(property);
    if let Some(method) = classes.find_method(class, isser.member()) {
        if method.visibility.is_public() {
            return Ok(Arc::new(isser));
        }
        hidden.get_or_insert_with(|| isser.member().to_string());
    }

    Err(MetadataError::Access(match hidden {
        Some(member) => AccessError::access_denied(class, member),
        None => AccessError::missing_member(class, property),
    }))
}
