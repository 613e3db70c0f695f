//! # Roster Core
//!
//! Core types shared by every crate in the Roster API.
//!
//! - [`errors`]: Application error type with HTTP response conversion
//! - [`mediator`]: In-process request mediator routing each request type to
//!   exactly one handler
//!
//! # Example
//!
//! ```ignore
//! use roster_core::mediator::Mediator;
//! use roster_core::errors::AppError;
//!
//! let mediator = Mediator::builder()
//!     .register(GetHousesHandler::new(db.clone()))?
//!     .build();
//!
//! let houses = mediator.send(GetHousesQuery).await?;
//! ```

pub mod errors;
pub mod mediator;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorResponse};
pub use mediator::{Mediator, MediatorBuilder, MediatorError, Request, RequestHandler};
