//! Request extraction with validation.
//!
//! [`ValidatedJson`] deserializes the request body and runs the `validator`
//! rules of the target type. Malformed bodies are answered with 400, rule
//! violations with 422, both in the usual `{"error": "..."}` shape.
//! [`ValidatedPath`] does the same for path parameters.

use anyhow::anyhow;
use axum::{
    Json,
    extract::{
        FromRequest, FromRequestParts, Path, Request,
        rejection::{JsonRejection, PathRejection},
    },
    http::request::Parts,
};
use roster_core::AppError;
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

fn format_errors(errors: &ValidationErrors) -> String {
    let mut messages: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field))
            })
        })
        .collect();
    // field_errors() is a HashMap; keep responses stable
    messages.sort();
    messages.join(", ")
}

fn rejection_to_error(rejection: JsonRejection) -> AppError {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::bad_request(anyhow!(
            "Missing 'Content-Type: application/json' header"
        ));
    }

    let error_msg = rejection.body_text();

    if let Some(rest) = error_msg.split("missing field `").nth(1) {
        let field = rest.split('`').next().unwrap_or("unknown");
        return AppError::bad_request(anyhow!("{} is required", field));
    }

    if error_msg.contains("invalid type") {
        return AppError::bad_request(anyhow!("Invalid field type in request"));
    }

    AppError::bad_request(anyhow!("Invalid request body"))
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(rejection_to_error)?;

        value
            .validate()
            .map_err(|errors| AppError::unprocessable(anyhow!("{}", format_errors(&errors))))?;

        Ok(ValidatedJson(value))
    }
}

/// Path parameters that answer a bad value with a JSON 400.
#[derive(Debug, Clone, Copy)]
pub struct ValidatedPath<T>(pub T);

fn path_rejection_to_error(rejection: PathRejection) -> AppError {
    AppError::bad_request(anyhow!(
        "Invalid path parameters: {}",
        rejection.body_text()
    ))
}

impl<T, S> FromRequestParts<S> for ValidatedPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(path_rejection_to_error)?;

        Ok(ValidatedPath(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_models::{CreateHouseDto, CreateStudentDto};

    #[test]
    fn test_format_errors_uses_rule_messages() {
        let dto = CreateStudentDto {
            name: "x".repeat(60),
            class: 1,
            house_id: 1,
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(
            format_errors(&errors),
            "name must be between 1 and 50 characters"
        );
    }

    #[test]
    fn test_format_errors_single_field() {
        let dto = CreateHouseDto {
            house_name: String::new(),
        };
        let errors = dto.validate().unwrap_err();
        assert_eq!(
            format_errors(&errors),
            "house_name is required"
        );
    }
}
