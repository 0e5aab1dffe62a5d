//! Tenet Registry
//!
//! Runtime class model. Single source of truth for class hierarchies,
//! implemented interfaces, declared fields and methods, and member visibility.
//! The registry is immutable after construction via ClassRegistryBuilder.

mod builder;
mod error;
mod registry;
mod types;

pub use builder::{ClassBuilder, ClassRegistryBuilder, RegistryError};
pub use error::{AccessError, AccessResult};
pub use registry::ClassRegistry;
pub use types::*;
