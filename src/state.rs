use anyhow::Context;
use roster_config::{CorsConfig, DatabaseConfig};
use roster_core::{Mediator, MediatorError};
use roster_db::{init_db_pool, run_migrations};
use sqlx::PgPool;

use crate::modules::build_mediator;

#[derive(Clone, Debug)]
pub struct AppState {
    pub db: PgPool,
    pub mediator: Mediator,
    pub cors_config: CorsConfig,
}

impl AppState {
    /// Wires the mediator handlers to `db`.
    pub fn new(db: PgPool, cors_config: CorsConfig) -> Result<Self, MediatorError> {
        let mediator = build_mediator(&db)?;
        Ok(Self {
            db,
            mediator,
            cors_config,
        })
    }
}

/// Connects to the database, applies migrations and builds the state.
pub async fn init_app_state() -> anyhow::Result<AppState> {
    let database_config = DatabaseConfig::from_env()?;
    let db = init_db_pool(&database_config)
        .await
        .context("Failed to connect to database")?;
    run_migrations(&db)
        .await
        .context("Failed to run database migrations")?;

    Ok(AppState::new(db, CorsConfig::from_env())?)
}
