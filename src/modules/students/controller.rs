use crate::modules::students::handlers::{
    AddStudentCommand, DeleteStudentCommand, GetStudentByIdQuery, GetStudentsQuery,
    UpdateStudentCommand,
};
use crate::modules::students::model::{
    CreateStudentDto, Student, StudentFilterParams, UpdateStudentDto,
};
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};
use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use roster_core::{AppError, ErrorResponse};
use tracing::instrument;

#[utoipa::path(
    get,
    path = "/api/students",
    params(
        StudentFilterParams
    ),
    responses(
        (status = 200, description = "List of students", body = Vec<Student>),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_students(
    State(state): State<AppState>,
    params: Result<Query<StudentFilterParams>, QueryRejection>,
) -> Result<Json<Vec<Student>>, AppError> {
    let Query(params) = params
        .map_err(|e| AppError::bad_request(anyhow::anyhow!("Invalid query parameters: {}", e)))?;
    let students = state
        .mediator
        .send(GetStudentsQuery {
            house_id: params.house_id,
        })
        .await?;
    Ok(Json(students))
}

#[utoipa::path(
    post,
    path = "/api/students",
    request_body = CreateStudentDto,
    responses(
        (status = 200, description = "Student created successfully", body = Student),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn create_student(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateStudentDto>,
) -> Result<Json<Student>, AppError> {
    let student = state.mediator.send(AddStudentCommand(dto)).await?;
    Ok(Json(student))
}

#[utoipa::path(
    get,
    path = "/api/students/{id}",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student details", body = Student),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<Json<Student>, AppError> {
    let student = state.mediator.send(GetStudentByIdQuery(id)).await?;
    Ok(Json(student))
}

#[utoipa::path(
    put,
    path = "/api/students/{id}",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = UpdateStudentDto,
    responses(
        (status = 200, description = "Student updated successfully", body = Student),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn update_student(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateStudentDto>,
) -> Result<Json<Student>, AppError> {
    let student = state
        .mediator
        .send(UpdateStudentCommand { id, student: dto })
        .await?;
    Ok(Json(student))
}

#[utoipa::path(
    delete,
    path = "/api/students/{id}",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Remaining students after the deletion", body = Vec<Student>),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Students"
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = state.mediator.send(DeleteStudentCommand(id)).await?;
    Ok(Json(students))
}
