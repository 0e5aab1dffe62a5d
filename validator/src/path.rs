//! Property paths.

use std::fmt;

/// Location of a value relative to the validation root, e.g.
/// `customer.addresses[0].city`. The root itself is the empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PropertyPath(String);

impl PropertyPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Path of a property below this one: `a` then `a.b`.
    pub fn child(&self, property: &str) -> Self {
        if self.0.is_empty() {
            return Self(property.to_string());
        }
        Self(format!("{}.{}", self.0, property))
    }

    /// Path of a collection element below this one: `a[key]`.
    pub fn index(&self, key: &str) -> Self {
        Self(format!("{}[{}]", self.0, key))
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PropertyPath {
    fn from(path: &str) -> Self {
        Self(path.to_string())
    }
}

impl PartialEq<str> for PropertyPath {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for PropertyPath {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
