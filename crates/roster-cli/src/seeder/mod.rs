//! Fake data generation and bulk inserts.
//!
//! Rows are generated in parallel with Rayon and inserted in batches of
//! multi-value `INSERT` statements inside one transaction.

pub mod houses;
pub mod models;
pub mod students;

use sqlx::PgPool;
use std::time::Instant;

pub use houses::{clear_houses, generate_houses, seed_houses};
pub use models::{HouseSeed, SeedConfig, StudentSeed};
pub use students::{clear_students, generate_students, seed_students};

pub(crate) const BATCH_SIZE: usize = 500;

/// Builds `($1, $2), ($3, $4), ...` for `rows` tuples of `columns` parameters.
pub(crate) fn values_placeholders(rows: usize, columns: usize) -> String {
    (0..rows)
        .map(|row| {
            let params: Vec<String> = (1..=columns)
                .map(|col| format!("${}", row * columns + col))
                .collect();
            format!("({})", params.join(", "))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// Seeds houses, then fills each new house with students.
pub async fn seed_all(db: &PgPool, config: SeedConfig) -> Result<(), sqlx::Error> {
    let start_time = Instant::now();

    let house_ids = seed_houses(db, config.houses).await?;
    seed_students(db, &house_ids, config.students_per_house).await?;

    println!("\n✅ Seeding finished in {:?}", start_time.elapsed());
    Ok(())
}

/// Removes every student and house.
pub async fn clear_all(db: &PgPool) -> Result<(), sqlx::Error> {
    clear_students(db).await?;
    clear_houses(db).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_values_placeholders() {
        assert_eq!(values_placeholders(1, 1), "($1)");
        assert_eq!(values_placeholders(2, 3), "($1, $2, $3), ($4, $5, $6)");
        assert_eq!(values_placeholders(0, 3), "");
    }
}
