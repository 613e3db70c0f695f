//! # Roster Models
//!
//! Domain models and DTOs for the Roster API.
//!
//! - [`houses`]: House entity and request bodies
//! - [`students`]: Student entity, request bodies and list filters
//! - [`serde`]: Input normalization helpers
//!
//! Both entities map one-to-one onto a table row. A student's `house_id`
//! is a plain integer; nothing checks that the house exists.

pub mod houses;
pub mod students;
pub mod serde;

// Re-export commonly used types at crate root for convenience
pub use houses::{CreateHouseDto, House, UpdateHouseDto};
pub use students::{CreateStudentDto, Student, StudentFilterParams, UpdateStudentDto};
