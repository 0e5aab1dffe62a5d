//! Tenet Validator
//!
//! Validates object graphs against constraint metadata.
//!
//! Responsibilities:
//! - Resolve requested groups and group sequences into validation passes
//! - Walk object graphs, cascading into references and collections
//! - Collect violations with their property paths
//! - Expose the `Validator` facade and its builder

mod chain;
mod config;
mod error;
mod path;
mod validator;
mod violation;
mod walker;

pub use chain::GroupChain;
pub use config::{CyclePolicy, ValidatorConfig};
pub use error::{ValidationError, ValidationResult};
pub use path::PropertyPath;
pub use validator::{Validator, ValidatorBuilder};
pub use violation::{Violation, ViolationList};
pub use walker::GraphWalker;

pub use tenet_metadata::{GroupSequence, GroupSpec, DEFAULT_GROUP};
