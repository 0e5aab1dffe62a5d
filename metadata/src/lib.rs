//! Tenet Metadata
//!
//! Declarative constraint metadata attached to classes, properties and getters.
//!
//! Responsibilities:
//! - Immutable constraint value objects with declared options and groups
//! - Group sequences
//! - Element, property and class metadata with inheritance merging
//! - Accessor strategies selected when metadata is built
//! - Metadata sources and the memoizing metadata factory

mod accessor;
mod class;
mod constraint;
mod element;
mod error;
mod factory;
mod group;
mod property;
mod source;

pub use accessor::{FieldAccessor, GetterAccessor, IsserAccessor, PropertyAccessor};
pub use class::ClassMetadata;
pub use constraint::{
    Constraint, ConstraintBuilder, ConstraintDefinition, ConstraintKind, ALL, ANY, VALID,
};
pub use element::ElementMetadata;
pub use error::{MetadataError, MetadataResult};
pub use factory::MetadataFactory;
pub use group::{GroupSequence, GroupSpec, DEFAULT_GROUP};
pub use property::PropertyMetadata;
pub use source::{
    ChainSource, ClassDeclaration, MemberDeclaration, MemberKind, MetadataSource,
    StaticMetadataSource,
};
