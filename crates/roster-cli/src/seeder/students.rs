//! Student seeding functionality.

use fake::Fake;
use fake::faker::name::en::{FirstName, LastName};
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::StudentSeed;
use super::{BATCH_SIZE, values_placeholders};

const MAX_NAME_LEN: usize = 50;
const CLASSES: std::ops::Range<i32> = 1..8;

/// Generates `per_house` students for each of `house_ids` in parallel
pub fn generate_students(house_ids: &[i32], per_house: usize) -> Vec<StudentSeed> {
    house_ids
        .par_iter()
        .flat_map_iter(|&house_id| {
            (0..per_house).map(move |_| {
                let first_name: String = FirstName().fake();
                let last_name: String = LastName().fake();
                let name: String = format!("{} {}", first_name, last_name)
                    .chars()
                    .take(MAX_NAME_LEN)
                    .collect();

                StudentSeed {
                    name,
                    class: CLASSES.fake(),
                    house_id,
                }
            })
        })
        .collect()
}

/// Seeds students into the given houses
pub async fn seed_students(
    db: &PgPool,
    house_ids: &[i32],
    per_house: usize,
) -> Result<u64, sqlx::Error> {
    let start_time = Instant::now();
    println!(
        "🎓 Seeding {} students per house across {} houses...",
        per_house,
        house_ids.len()
    );

    let students = generate_students(house_ids, per_house);

    let mut tx = db.begin().await?;
    let mut inserted = 0;
    for chunk in students.chunks(BATCH_SIZE) {
        inserted += insert_students_chunk(&mut tx, chunk).await?;
    }
    tx.commit().await?;

    println!(
        "   ✓ Inserted {} students in {:?}",
        inserted,
        start_time.elapsed()
    );

    Ok(inserted)
}

async fn insert_students_chunk(
    tx: &mut Transaction<'_, Postgres>,
    students: &[StudentSeed],
) -> Result<u64, sqlx::Error> {
    if students.is_empty() {
        return Ok(0);
    }

    let query = format!(
        "INSERT INTO students (name, class, house_id) VALUES {}",
        values_placeholders(students.len(), 3)
    );

    let mut q = sqlx::query(&query);
    for student in students {
        q = q.bind(&student.name).bind(student.class).bind(student.house_id);
    }

    Ok(q.execute(&mut **tx).await?.rows_affected())
}

/// Returns the ids of every existing house
pub async fn existing_house_ids(db: &PgPool) -> Result<Vec<i32>, sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT id FROM houses ORDER BY id")
        .fetch_all(db)
        .await
}

/// Clears all students from the database
pub async fn clear_students(db: &PgPool) -> Result<u64, sqlx::Error> {
    let start_time = Instant::now();
    println!("🗑️  Clearing students...");

    let result = sqlx::query("DELETE FROM students")
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} students in {:?}",
        result,
        start_time.elapsed()
    );

    Ok(result)
}
