//! Student domain models and DTOs.
//!
//! This module contains the student entity, its request bodies and the
//! filter accepted by the list endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// A student in the system.
///
/// `house_id` refers to a [`House`](crate::houses::House) by convention
/// only; no referential integrity is enforced.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct Student {
    pub id: i32,
    pub name: String,
    pub class: i32,
    pub house_id: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new student.
#[derive(Deserialize, Debug, Clone, ToSchema, Validate)]
pub struct CreateStudentDto {
    #[serde(deserialize_with = "crate::serde::deserialize_trimmed")]
    #[validate(length(min = 1, max = 50, message = "name must be between 1 and 50 characters"))]
    pub name: String,
    pub class: i32,
    pub house_id: i32,
}

/// DTO for updating an existing student.
///
/// Updates replace every writable field, so all of them are required.
#[derive(Deserialize, Debug, Clone, ToSchema, Validate)]
pub struct UpdateStudentDto {
    #[serde(deserialize_with = "crate::serde::deserialize_trimmed")]
    #[validate(length(min = 1, max = 50, message = "name must be between 1 and 50 characters"))]
    pub name: String,
    pub class: i32,
    pub house_id: i32,
}

/// Query parameters for filtering students.
#[derive(Deserialize, Debug, Clone, Default, IntoParams)]
pub struct StudentFilterParams {
    /// Only return students belonging to this house
    pub house_id: Option<i32>,
}
