//! Metadata sources: where directly-declared constraints come from.
//!
//! A source answers for one class at a time and never resolves inheritance;
//! merging parents and interfaces is the factory's job.

use crate::{Constraint, GroupSequence, MetadataResult};
use std::collections::HashMap;

/// How a constrained member is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberKind {
    /// Field, falling back to `getX`/`isX` accessors.
    Property,
    /// `getX`/`isX` accessor only.
    Getter,
}

/// Constraints declared on one member.
#[derive(Debug, Clone)]
pub struct MemberDeclaration {
    pub name: String,
    pub kind: MemberKind,
    pub constraints: Vec<Constraint>,
}

/// Everything declared directly on one class.
#[derive(Debug, Clone, Default)]
pub struct ClassDeclaration {
    pub constraints: Vec<Constraint>,
    pub members: Vec<MemberDeclaration>,
    pub group_sequence: Option<GroupSequence>,
}

impl ClassDeclaration {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class-level constraint.
    pub fn constraint(mut self, constraint: Constraint) -> Self {
        self.constraints.push(constraint);
        self
    }

    /// Declare constraints on a property.
    pub fn property<I>(self, name: impl Into<String>, constraints: I) -> Self
    where
        I: IntoIterator<Item = Constraint>,
    {
        self.member(name.into(), MemberKind::Property, constraints)
    }

    /// Declare constraints on a getter (`getX`/`isX`).
    pub fn getter<I>(self, name: impl Into<String>, constraints: I) -> Self
    where
        I: IntoIterator<Item = Constraint>,
    {
        self.member(name.into(), MemberKind::Getter, constraints)
    }

    /// Redefine what the default group means for this class.
    pub fn group_sequence(mut self, sequence: GroupSequence) -> Self {
        self.group_sequence = Some(sequence);
        self
    }

    fn member<I>(mut self, name: String, kind: MemberKind, constraints: I) -> Self
    where
        I: IntoIterator<Item = Constraint>,
    {
        self.members.push(MemberDeclaration {
            name,
            kind,
            constraints: constraints.into_iter().collect(),
        });
        self
    }

    /// Append another declaration for the same class. The first group
    /// sequence declared wins.
    pub fn extend(&mut self, other: ClassDeclaration) {
        self.constraints.extend(other.constraints);
        self.members.extend(other.members);
        if self.group_sequence.is_none() {
            self.group_sequence = other.group_sequence;
        }
    }
}

/// Provides the directly-declared metadata of a class.
pub trait MetadataSource: Send + Sync {
    /// Load the declaration of `class`, or `None` when this source knows
    /// nothing about it.
    fn load(&self, class: &str) -> MetadataResult<Option<ClassDeclaration>>;
}

/// In-memory source populated in code.
#[derive(Debug, Default)]
pub struct StaticMetadataSource {
    declarations: HashMap<String, ClassDeclaration>,
}

impl StaticMetadataSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare metadata for a class. Repeated declarations are appended.
    pub fn declare(&mut self, class: impl Into<String>, declaration: ClassDeclaration) -> &mut Self {
        match self.declarations.entry(class.into()) {
            std::collections::hash_map::Entry::Occupied(mut entry) => entry.get_mut().extend(declaration),
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(declaration);
            }
        }
        self
    }

    /// Builder-style [`declare`](Self::declare).
    pub fn with(mut self, class: impl Into<String>, declaration: ClassDeclaration) -> Self {
        self.declare(class, declaration);
        self
    }
}

impl MetadataSource for StaticMetadataSource {
    fn load(&self, class: &str) -> MetadataResult<Option<ClassDeclaration>> {
        Ok(self.declarations.get(class).cloned())
    }
}

/// Consults several sources in order and unions what they declare.
#[derive(Default)]
pub struct ChainSource {
    sources: Vec<Box<dyn MetadataSource>>,
}

impl ChainSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_source(mut self, source: impl MetadataSource + 'static) -> Self {
        self.sources.push(Box::new(source));
        self
    }
}

impl MetadataSource for ChainSource {
    fn load(&self, class: &str) -> MetadataResult<Option<ClassDeclaration>> {
        let mut merged: Option<ClassDeclaration> = None;
        for source in &self.sources {
            if let Some(declaration) = source.load(class)? {
                match merged.as_mut() {
                    Some(existing) => existing.extend(declaration),
                    None => merged = Some(declaration),
                }
            }
        }
        Ok(merged)
    }
}
