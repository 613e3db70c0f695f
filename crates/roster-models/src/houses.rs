//! House domain model and DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// A house students are sorted into.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, ToSchema)]
pub struct House {
    pub id: i32,
    pub house_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// DTO for creating a new house.
#[derive(Deserialize, Debug, Clone, ToSchema, Validate)]
pub struct CreateHouseDto {
    #[serde(deserialize_with = "crate::serde::deserialize_trimmed")]
    #[validate(length(min = 1, message = "house_name is required"))]
    pub house_name: String,
}

/// DTO for replacing a house's writable fields.
#[derive(Deserialize, Debug, Clone, ToSchema, Validate)]
pub struct UpdateHouseDto {
    #[serde(deserialize_with = "crate::serde::deserialize_trimmed")]
    #[validate(length(min = 1, message = "house_name is required"))]
    pub house_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_house_dto_validation() {
        let dto = CreateHouseDto {
            house_name: "Gryffindor".to_string(),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_create_house_dto_empty_name() {
        let dto = CreateHouseDto {
            house_name: String::new(),
        };
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_create_house_dto_long_name_accepted() {
        let dto = CreateHouseDto {
            house_name: "x".repeat(500),
        };
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_house_name_is_trimmed() {
        let dto: CreateHouseDto =
            serde_json::from_value(json!({ "house_name": "  Ravenclaw " })).unwrap();
        assert_eq!(dto.house_name, "Ravenclaw");
    }

    #[test]
    fn test_blank_house_name_rejected() {
        let dto: UpdateHouseDto = serde_json::from_value(json!({ "house_name": "   " })).unwrap();
        assert!(dto.validate().is_err());
    }

    #[test]
    fn test_body_id_is_ignored() {
        let dto: UpdateHouseDto =
            serde_json::from_value(json!({ "id": 99, "house_name": "Hufflepuff" })).unwrap();
        assert_eq!(dto.house_name, "Hufflepuff");
    }
}
