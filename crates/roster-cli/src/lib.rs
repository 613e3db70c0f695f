//! # Roster CLI
//!
//! Database seeding utilities for Roster testing and development.
//!
//! ## Usage
//!
//! ```ignore
//! use roster_cli::seeder::{seed_all, SeedConfig};
//!
//! seed_all(&pool, SeedConfig { houses: 4, students_per_house: 25 }).await?;
//! ```

pub mod seeder;
