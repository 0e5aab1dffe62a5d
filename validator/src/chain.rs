//! Resolving requested groups into validation passes.

use crate::{ValidationError, ValidationResult};
use tenet_metadata::{GroupSequence, GroupSpec, DEFAULT_GROUP};

/// The passes of one validation call: plain groups share a single result,
/// each sequence runs its groups in order and stops at the first group that
/// adds violations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupChain {
    groups: Vec<String>,
    sequences: Vec<GroupSequence>,
}

impl GroupChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve `requested` (empty means `Default`) for a root whose class may
    /// redefine `Default` through `class_sequence`.
    pub fn resolve(
        requested: &[GroupSpec],
        class_sequence: Option<&GroupSequence>,
    ) -> ValidationResult<Self> {
        let default = [GroupSpec::from(DEFAULT_GROUP)];
        let requested = if requested.is_empty() {
            &default[..]
        } else {
            requested
        };

        let mut chain = Self::new();
        for spec in requested {
            match spec {
                GroupSpec::Name(name) if name == DEFAULT_GROUP => match class_sequence {
                    Some(sequence) => chain.add_sequence(sequence.clone()),
                    None => chain.add_group(name),
                },
                GroupSpec::Name(name) => chain.add_group(name),
                GroupSpec::Sequence(sequence) => chain.add_sequence(sequence.clone()),
            }
        }

        if !chain.sequences.is_empty() && requested.len() > 1 {
            return Err(ValidationError::GroupSequenceNotAlone {
                requested: requested.len(),
            });
        }
        Ok(chain)
    }

    pub fn add_group(&mut self, group: impl Into<String>) {
        let group = group.into();
        if !self.groups.contains(&group) {
            self.groups.push(group);
        }
    }

    pub fn add_sequence(&mut self, sequence: GroupSequence) {
        if !self.sequences.contains(&sequence) {
            self.sequences.push(sequence);
        }
    }

    /// Plain groups, validated in one pass each into the same result.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }

    pub fn sequences(&self) -> &[GroupSequence] {
        &self.sequences
    }
}
