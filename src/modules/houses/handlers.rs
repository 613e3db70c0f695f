//! Mediator requests and handlers for houses.
//!
//! Each request type has exactly one handler, and each handler performs a
//! single data-access call through [`HouseService`].

use async_trait::async_trait;
use roster_core::{AppError, MediatorBuilder, MediatorError, Request, RequestHandler};
use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::metrics::{track_record_created, track_record_deleted, track_record_updated};
use crate::modules::houses::model::{CreateHouseDto, House, UpdateHouseDto};
use crate::modules::houses::service::HouseService;

const ENTITY: &str = "house";

#[derive(Debug)]
pub struct GetHousesQuery;

impl Request for GetHousesQuery {
    type Response = Vec<House>;
}

#[derive(Debug)]
pub struct AddHouseCommand(pub CreateHouseDto);

impl Request for AddHouseCommand {
    type Response = House;
}

#[derive(Debug)]
pub struct GetHouseByIdQuery(pub i32);

impl Request for GetHouseByIdQuery {
    type Response = House;
}

#[derive(Debug)]
pub struct UpdateHouseCommand {
    pub id: i32,
    pub house: UpdateHouseDto,
}

impl Request for UpdateHouseCommand {
    type Response = House;
}

/// Deletes a house if present and answers with the houses that remain.
#[derive(Debug)]
pub struct DeleteHouseCommand(pub i32);

impl Request for DeleteHouseCommand {
    type Response = Vec<House>;
}

pub struct GetHousesHandler {
    db: PgPool,
}

#[async_trait]
impl RequestHandler for GetHousesHandler {
    type Request = GetHousesQuery;

    async fn handle(&self, _request: GetHousesQuery) -> Result<Vec<House>, AppError> {
        HouseService::list_houses(&self.db).await
    }
}

pub struct AddHouseHandler {
    db: PgPool,
}

#[async_trait]
impl RequestHandler for AddHouseHandler {
    type Request = AddHouseCommand;

    #[instrument(skip(self))]
    async fn handle(&self, request: AddHouseCommand) -> Result<House, AppError> {
        let house = HouseService::create_house(&self.db, request.0).await?;
        track_record_created(ENTITY);
        Ok(house)
    }
}

pub struct GetHouseByIdHandler {
    db: PgPool,
}

#[async_trait]
impl RequestHandler for GetHouseByIdHandler {
    type Request = GetHouseByIdQuery;

    async fn handle(&self, request: GetHouseByIdQuery) -> Result<House, AppError> {
        HouseService::find_house(&self.db, request.0)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("House not found")))
    }
}

pub struct UpdateHouseHandler {
    db: PgPool,
}

#[async_trait]
impl RequestHandler for UpdateHouseHandler {
    type Request = UpdateHouseCommand;

    #[instrument(skip(self))]
    async fn handle(&self, request: UpdateHouseCommand) -> Result<House, AppError> {
        let house = HouseService::update_house(&self.db, request.id, request.house)
            .await?
            .ok_or_else(|| AppError::not_found(anyhow::anyhow!("House not found")))?;
        track_record_updated(ENTITY);
        Ok(house)
    }
}

pub struct DeleteHouseHandler {
    db: PgPool,
}

#[async_trait]
impl RequestHandler for DeleteHouseHandler {
    type Request = DeleteHouseCommand;

    #[instrument(skip(self))]
    async fn handle(&self, request: DeleteHouseCommand) -> Result<Vec<House>, AppError> {
        let removed = HouseService::delete_house(&self.db, request.0).await?;
        if removed {
            track_record_deleted(ENTITY);
        } else {
            debug!(id = request.0, "No house to delete");
        }

        HouseService::list_houses(&self.db).await
    }
}

/// Registers every house handler against `db`.
pub fn register(builder: MediatorBuilder, db: &PgPool) -> Result<MediatorBuilder, MediatorError> {
    builder
        .register(GetHousesHandler { db: db.clone() })?
        .register(AddHouseHandler { db: db.clone() })?
        .register(GetHouseByIdHandler { db: db.clone() })?
        .register(UpdateHouseHandler { db: db.clone() })?
        .register(DeleteHouseHandler { db: db.clone() })
}
