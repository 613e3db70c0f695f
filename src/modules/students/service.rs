use crate::modules::students::model::{CreateStudentDto, Student, UpdateStudentDto};
use anyhow::Context;
use roster_core::AppError;
use sqlx::PgPool;
use tracing::instrument;

pub struct StudentService;

impl StudentService {
    /// Lists students ordered by id, optionally only those in `house_id`.
    #[instrument(skip(db))]
    pub async fn list_students(
        db: &PgPool,
        house_id: Option<i32>,
    ) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name, class, house_id, created_at, updated_at
            FROM students
            WHERE ($1::INTEGER IS NULL OR house_id = $1)
            ORDER BY id
            "#,
        )
        .bind(house_id)
        .fetch_all(db)
        .await
        .context("Failed to fetch students")
        .map_err(AppError::database)?;

        Ok(students)
    }

    #[instrument(skip(db, dto))]
    pub async fn create_student(db: &PgPool, dto: CreateStudentDto) -> Result<Student, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            INSERT INTO students (name, class, house_id)
            VALUES ($1, $2, $3)
            RETURNING id, name, class, house_id, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(dto.class)
        .bind(dto.house_id)
        .fetch_one(db)
        .await
        .context("Failed to create student")
        .map_err(AppError::database)?;

        Ok(student)
    }

    #[instrument(skip(db))]
    pub async fn find_student(db: &PgPool, id: i32) -> Result<Option<Student>, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            SELECT id, name, class, house_id, created_at, updated_at
            FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to fetch student by ID")
        .map_err(AppError::database)?;

        Ok(student)
    }

    /// Replaces the student's writable fields. `None` when no row has `id`.
    #[instrument(skip(db, dto))]
    pub async fn update_student(
        db: &PgPool,
        id: i32,
        dto: UpdateStudentDto,
    ) -> Result<Option<Student>, AppError> {
        let student = sqlx::query_as::<_, Student>(
            r#"
            UPDATE students
            SET name = $1, class = $2, house_id = $3, updated_at = NOW()
            WHERE id = $4
            RETURNING id, name, class, house_id, created_at, updated_at
            "#,
        )
        .bind(&dto.name)
        .bind(dto.class)
        .bind(dto.house_id)
        .bind(id)
        .fetch_optional(db)
        .await
        .context("Failed to update student")
        .map_err(AppError::database)?;

        Ok(student)
    }

    /// Deletes the student, returning whether a row was removed.
    #[instrument(skip(db))]
    pub async fn delete_student(db: &PgPool, id: i32) -> Result<bool, AppError> {
        let result = sqlx::query(
            r#"
            DELETE FROM students
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(db)
        .await
        .context("Failed to delete student")
        .map_err(AppError::database)?;

        Ok(result.rows_affected() > 0)
    }
}
