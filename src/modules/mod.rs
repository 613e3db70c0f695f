pub mod health;
pub mod houses;
pub mod students;

use roster_core::{Mediator, MediatorError};
use sqlx::PgPool;

/// Builds the mediator with the handlers of every feature module.
pub fn build_mediator(db: &PgPool) -> Result<Mediator, MediatorError> {
    let builder = Mediator::builder();
    let builder = houses::handlers::register(builder, db)?;
    let builder = students::handlers::register(builder, db)?;
    Ok(builder.build())
}
