//! Tenet Core Types
//!
//! This crate provides the foundational types used throughout Tenet:
//! - The `Value` enum (scalars, collections and object references)
//! - Object instances (`Object`) and their identity handles (`ObjectRef`)

mod object;
mod value;

pub use object::*;
pub use value::*;
