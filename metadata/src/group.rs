//! Validation groups and group sequences.

/// The group every constraint belongs to unless told otherwise.
pub const DEFAULT_GROUP: &str = "Default";

/// An ordered list of groups validated one after another, stopping at the
/// first group that produces violations.
///
/// Nested sequences are flattened on construction and duplicate groups are
/// dropped (the first occurrence keeps its position).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupSequence {
    groups: Vec<String>,
}

impl GroupSequence {
    pub fn new<I, G>(items: I) -> Self
    where
        I: IntoIterator<Item = G>,
        G: Into<GroupSpec>,
    {
        let mut groups: Vec<String> = Vec::new();
        for item in items {
            match item.into() {
                GroupSpec::Name(name) => {
                    if !groups.contains(&name) {
                        groups.push(name);
                    }
                }
                GroupSpec::Sequence(nested) => {
                    for name in nested.groups {
                        if !groups.contains(&name) {
                            groups.push(name);
                        }
                    }
                }
            }
        }
        Self { groups }
    }

    /// Groups in execution order.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn contains(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.groups.iter().map(|g| g.as_str())
    }
}

/// A group requested by a caller: either a plain group name or a sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupSpec {
    Name(String),
    Sequence(GroupSequence),
}

impl GroupSpec {
    pub fn is_sequence(&self) -> bool {
        matches!(self, GroupSpec::Sequence(_))
    }

    pub fn as_name(&self) -> Option<&str> {
        match self {
            GroupSpec::Name(name) => Some(name),
            GroupSpec::Sequence(_) => None,
        }
    }
}

impl From<&str> for GroupSpec {
    fn from(name: &str) -> Self {
        GroupSpec::Name(name.to_string())
    }
}

impl From<String> for GroupSpec {
    fn from(name: String) -> Self {
        GroupSpec::Name(name)
    }
}

impl From<&String> for GroupSpec {
    fn from(name: &String) -> Self {
        GroupSpec::Name(name.clone())
    }
}

impl From<GroupSequence> for GroupSpec {
    fn from(sequence: GroupSequence) -> Self {
        GroupSpec::Sequence(sequence)
    }
}
