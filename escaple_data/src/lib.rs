//! Shared data model for Escaple content.

pub mod defs;
pub mod validate;

pub use defs::*;
pub use validate::{ValidationError, lint_world, validate_world};
