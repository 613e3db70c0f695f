//! House data models and DTOs.
//!
//! Re-exports the house models from the `roster-models` crate.

pub use roster_models::houses::*;
