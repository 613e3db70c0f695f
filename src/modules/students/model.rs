//! Student data models and DTOs.
//!
//! This module re-exports student models from the `roster-models` crate.

pub use roster_models::students::*;
