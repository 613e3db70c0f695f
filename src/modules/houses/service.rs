use crate::modules::houses::model::{CreateHouseDto, House, UpdateHouseDto};
use anyhow::Context;
use roster_core::AppError;
use sqlx::PgPool;
use tracing::instrument;

pub struct HouseService;

impl HouseService {
    #[instrument(skip(db))]
    pub async fn list_houses(db: &PgPool) -> Result<Vec<House>, AppError> {
        let houses = sqlx::query_as::<_, House>(
            r#"
            SELECT id, house_name, created_at, updated_at
            FROM houses
            ORDER BY id
            "#,
        )
        .fetch_all(db)
        .await
        .context("Failed to fetch houses")
        .map_err(AppError::database)?;

        Ok(houses)
    }

    #[instrument(skip(db, dto))]
    pub async fn create_house(db: &PgPool, dto: CreateHouseDto) -> Result<House, AppError> {
        let house = sqlx::query_as::<_, House>(
            r#"
            INSERT INTO houses (house_name)
            VALUES ($1)
            RETURNING id, house_name, created_at, updated_at
            "#,
        )
        .bind(&dto.house_name)
        .fetch_one(db)
        .await
        .context("Failed to create house")
        .map_err(AppError::database)?;

        Ok(house)
    }

    #[instrument(skip(db))]
    pub async fn find_house(db: &PgPool, id: i32) -> Result<Option<House>, AppError> {
        let house = sqlx::query_as::<_, House>(
            r#"
            SELECT id, house_name, created_at, updated_at
            FROM houses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch house by ID")
        .map_err(AppError::database)?;

        Ok(house)
    }

    /// Replaces the house's writable fields. `None` when no row has `id`.
    #[instrument(skip(db, dto))]
    pub async fn update_house(
        db: &PgPool,
        id: i32,
        dto: UpdateHouseDto,
    ) -> Result<Option<House>, AppError> {
        let house = sqlx::query_as::<_, House>(
            r#"
            UPDATE houses
            SET house_name = $1, updated_at = NOW()
            WHERE id = $2
            RETURNING id, house_name, created_at, updated_at
            "#,
        )
        .bind(&dto.house_name)
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to update house")
        .map_err(AppError::database)?;

        Ok(house)
    }

    /// Deletes the house, returning whether a row was removed.
    #[instrument(skip(db))]
    pub async fn delete_house(db: &PgPool, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM houses
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(db)
        .await
        .context("Failed to delete house")
        .map_err(AppError::database)?;

        Ok(result.rows_affected() > 0)
    }
}
