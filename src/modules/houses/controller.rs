use crate::modules::houses::handlers::{
    AddHouseCommand, DeleteHouseCommand, GetHouseByIdQuery, GetHousesQuery, UpdateHouseCommand,
};
use crate::modules::houses::model::{CreateHouseDto, House, UpdateHouseDto};
use crate::modules::students::handlers::GetStudentsQuery;
use crate::modules::students::model::Student;
use crate::state::AppState;
use crate::validator::{ValidatedJson, ValidatedPath};
use axum::{
    Json,
    extract::State,
};
use roster_core::{AppError, ErrorResponse};
use tracing::instrument;

#[utoipa::path(
    get,
    path = "/api/houses",
    responses(
        (status = 200, description = "List of houses", body = Vec<House>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Houses"
)]
#[instrument(skip(state))]
pub async fn get_houses(State(state): State<AppState>) -> Result<Json<Vec<House>>, AppError> {
    let houses = state.mediator.send(GetHousesQuery).await?;
    Ok(Json(houses))
}

#[utoipa::path(
    post,
    path = "/api/houses",
    request_body = CreateHouseDto,
    responses(
        (status = 200, description = "House created successfully", body = House),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Houses"
)]
#[instrument(skip(state))]
pub async fn create_house(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateHouseDto>,
) -> Result<Json<House>, AppError> {
    let house = state.mediator.send(AddHouseCommand(dto)).await?;
    Ok(Json(house))
}

#[utoipa::path(
    get,
    path = "/api/houses/{id}",
    params(
        ("id" = i32, Path, description = "House ID")
    ),
    responses(
        (status = 200, description = "House details", body = House),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 404, description = "House not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Houses"
)]
#[instrument(skip(state))]
pub async fn get_house(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<Json<House>, AppError> {
    let house = state.mediator.send(GetHouseByIdQuery(id)).await?;
    Ok(Json(house))
}

#[utoipa::path(
    put,
    path = "/api/houses/{id}",
    params(
        ("id" = i32, Path, description = "House ID")
    ),
    request_body = UpdateHouseDto,
    responses(
        (status = 200, description = "House updated successfully", body = House),
        (status = 400, description = "Bad request", body = ErrorResponse),
        (status = 404, description = "House not found", body = ErrorResponse),
        (status = 422, description = "Validation failed", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Houses"
)]
#[instrument(skip(state))]
pub async fn update_house(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
    ValidatedJson(dto): ValidatedJson<UpdateHouseDto>,
) -> Result<Json<House>, AppError> {
    let house = state
        .mediator
        .send(UpdateHouseCommand { id, house: dto })
        .await?;
    Ok(Json(house))
}

#[utoipa::path(
    delete,
    path = "/api/houses/{id}",
    params(
        ("id" = i32, Path, description = "House ID")
    ),
    responses(
        (status = 200, description = "Remaining houses after the deletion", body = Vec<House>),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Houses"
)]
#[instrument(skip(state))]
pub async fn delete_house(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<Json<Vec<House>>, AppError> {
    let houses = state.mediator.send(DeleteHouseCommand(id)).await?;
    Ok(Json(houses))
}

#[utoipa::path(
    get,
    path = "/api/houses/{id}/students",
    params(
        ("id" = i32, Path, description = "House ID")
    ),
    responses(
        (status = 200, description = "Students sorted into the house", body = Vec<Student>),
        (status = 400, description = "Invalid ID", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Houses"
)]
#[instrument(skip(state))]
pub async fn get_house_students(
    State(state): State<AppState>,
    ValidatedPath(id): ValidatedPath<i32>,
) -> Result<Json<Vec<Student>>, AppError> {
    let students = state
        .mediator
        .send(GetStudentsQuery { house_id: Some(id) })
        .await?;
    Ok(Json(students))
}
