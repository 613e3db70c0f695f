//! House seeding functionality.

use fake::Fake;
use fake::faker::address::en::CityName;
use rayon::prelude::*;
use sqlx::{PgPool, Postgres, Transaction};
use std::time::Instant;

use super::models::HouseSeed;
use super::{BATCH_SIZE, values_placeholders};

/// Generates house data in parallel using Rayon
pub fn generate_houses(count: usize) -> Vec<HouseSeed> {
    (0..count)
        .into_par_iter()
        .map(|_| {
            let city: String = CityName().fake();
            HouseSeed {
                house_name: format!("{} House", city),
            }
        })
        .collect()
}

/// Seeds houses into the database, returning their ids
pub async fn seed_houses(db: &PgPool, count: usize) -> Result<Vec<i32>, sqlx::Error> {
    let start_time = Instant::now();
    println!("🏠 Seeding {} houses...", count);

    let houses = generate_houses(count);

    let mut tx = db.begin().await?;
    let mut ids = Vec::with_capacity(houses.len());
    for chunk in houses.chunks(BATCH_SIZE) {
        ids.extend(insert_houses_chunk(&mut tx, chunk).await?);
    }
    tx.commit().await?;

    println!(
        "   ✓ Inserted {} houses in {:?}",
        ids.len(),
        start_time.elapsed()
    );

    Ok(ids)
}

async fn insert_houses_chunk(
    tx: &mut Transaction<'_, Postgres>,
    houses: &[HouseSeed],
) -> Result<Vec<i32>, sqlx::Error> {
    if houses.is_empty() {
        return Ok(Vec::new());
    }

    let query = format!(
        "INSERT INTO houses (house_name) VALUES {} RETURNING id",
        values_placeholders(houses.len(), 1)
    );

    let mut q = sqlx::query_scalar::<_, i32>(&query);
    for house in houses {
        q = q.bind(&house.house_name);
    }

    q.fetch_all(&mut **tx).await
}

/// Clears all houses from the database
pub async fn clear_houses(db: &PgPool) -> Result<u64, sqlx::Error> {
    let start_time = Instant::now();
    println!("🗑️  Clearing houses...");

    let result = sqlx::query("DELETE FROM houses")
        .execute(db)
        .await?
        .rows_affected();

    println!(
        "   ✓ Deleted {} houses in {:?}",
        result,
        start_time.elapsed()
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_houses() {
        let houses = generate_houses(12);
        assert_eq!(houses.len(), 12);
        assert!(houses.iter().all(|h| h.house_name.ends_with(" House")));
    }
}
