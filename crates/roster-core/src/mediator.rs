//! In-process request mediator.
//!
//! Controllers never talk to the database directly. They build a request
//! value (a query or a command) and hand it to the [`Mediator`], which routes
//! it to the single [`RequestHandler`] registered for that request type.
//!
//! ```text
//! controller ──send(GetHouseByIdQuery)──▶ Mediator ──▶ GetHouseByIdHandler ──▶ PgPool
//! ```
//!
//! Handlers are registered once at startup through [`MediatorBuilder`].
//! Registering two handlers for the same request type is rejected, so every
//! request has exactly one destination.
//!
//! # Example
//!
//! ```ignore
//! struct Ping;
//!
//! impl Request for Ping {
//!     type Response = &'static str;
//! }
//!
//! struct PingHandler;
//!
//! #[async_trait]
//! impl RequestHandler for PingHandler {
//!     type Request = Ping;
//!
//!     async fn handle(&self, _request: Ping) -> Result<&'static str, AppError> {
//!         Ok("pong")
//!     }
//! }
//!
//! let mediator = Mediator::builder().register(PingHandler)?.build();
//! assert_eq!(mediator.send(Ping).await?, "pong");
//! ```

use std::any::{Any, TypeId, type_name};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{Instrument, debug, debug_span};

use crate::errors::AppError;

/// A message that can be dispatched through the [`Mediator`].
pub trait Request: Send + 'static {
    type Response: Send + 'static;
}

/// Handles exactly one [`Request`] type.
#[async_trait]
pub trait RequestHandler: Send + Sync + 'static {
    type Request: Request;

    async fn handle(
        &self,
        request: Self::Request,
    ) -> Result<<Self::Request as Request>::Response, AppError>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MediatorError {
    #[error("a handler for `{0}` is already registered")]
    DuplicateHandler(&'static str),
    #[error("no handler registered for `{0}`")]
    HandlerNotFound(&'static str),
}

type DynHandler<R> = Arc<dyn RequestHandler<Request = R>>;

/// Collects handlers before the mediator is frozen.
#[derive(Default)]
pub struct MediatorBuilder {
    handlers: HashMap<TypeId, Box<dyn Any + Send + Sync>>,
}

impl MediatorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for its request type.
    ///
    /// # Errors
    ///
    /// Returns [`MediatorError::DuplicateHandler`] if the request type
    /// already has a handler.
    pub fn register<H>(mut self, handler: H) -> Result<Self, MediatorError>
    where
        H: RequestHandler,
    {
        let key = TypeId::of::<H::Request>();
        if self.handlers.contains_key(&key) {
            return Err(MediatorError::DuplicateHandler(type_name::<H::Request>()));
        }

        let handler: DynHandler<H::Request> = Arc::new(handler);
        self.handlers.insert(key, Box::new(handler));
        Ok(self)
    }

    pub fn build(self) -> Mediator {
        Mediator {
            handlers: Arc::new(self.handlers),
        }
    }
}

/// Routes requests to their registered handler.
///
/// Cloning is cheap; the handler table is shared.
#[derive(Clone)]
pub struct Mediator {
    handlers: Arc<HashMap<TypeId, Box<dyn Any + Send + Sync>>>,
}

impl Mediator {
    pub fn builder() -> MediatorBuilder {
        MediatorBuilder::new()
    }

    pub fn is_registered<R: Request>(&self) -> bool {
        self.handlers.contains_key(&TypeId::of::<R>())
    }

    /// Dispatches `request` to its handler and returns the handler's result.
    pub async fn send<R: Request>(&self, request: R) -> Result<R::Response, AppError> {
        let name = type_name::<R>();
        let handler = self
            .handlers
            .get(&TypeId::of::<R>())
            .and_then(|handler| handler.downcast_ref::<DynHandler<R>>())
            .cloned()
            .ok_or(MediatorError::HandlerNotFound(name))?;

        debug!(request = name, "Dispatching request");

        handler
            .handle(request)
            .instrument(debug_span!("mediator.send", request = name))
            .await
    }
}

impl fmt::Debug for Mediator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mediator")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct Echo(String);

    impl Request for Echo {
        type Response = String;
    }

    struct EchoHandler {
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl RequestHandler for EchoHandler {
        type Request = Echo;

        async fn handle(&self, request: Echo) -> Result<String, AppError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(request.0)
        }
    }

    struct Missing(i32);

    impl Request for Missing {
        type Response = ();
    }

    struct MissingHandler;

    #[async_trait]
    impl RequestHandler for MissingHandler {
        type Request = Missing;

        async fn handle(&self, request: Missing) -> Result<(), AppError> {
            Err(AppError::not_found(anyhow::anyhow!(
                "Record {} not found",
                request.0
            )))
        }
    }

    fn echo_handler() -> (EchoHandler, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            EchoHandler {
                calls: calls.clone(),
            },
            calls,
        )
    }

    #[tokio::test]
    async fn test_send_routes_to_registered_handler() {
        let (handler, calls) = echo_handler();
        let mediator = Mediator::builder().register(handler).unwrap().build();

        let response = mediator.send(Echo("hello".to_string())).await.unwrap();

        assert_eq!(response, "hello");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_send_routes_by_request_type() {
        let (handler, calls) = echo_handler();
        let mediator = Mediator::builder()
            .register(handler)
            .unwrap()
            .register(MissingHandler)
            .unwrap()
            .build();

        let err = mediator.send(Missing(7)).await.unwrap_err();

        assert_eq!(err.status, StatusCode::NOT_FOUND);
        assert_eq!(err.error.to_string(), "Record 7 not found");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let (first, _) = echo_handler();
        let (second, _) = echo_handler();

        let result = Mediator::builder().register(first).unwrap().register(second);

        assert!(matches!(result, Err(MediatorError::DuplicateHandler(_))));
    }

    #[tokio::test]
    async fn test_unregistered_request_is_internal_error() {
        let mediator = Mediator::builder().build();

        assert!(!mediator.is_registered::<Echo>());
        let err = mediator.send(Echo("lost".to_string())).await.unwrap_err();

        assert_eq!(err.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(err.error.to_string().contains("no handler registered"));
    }

    #[tokio::test]
    async fn test_clones_share_handlers() {
        let (handler, calls) = echo_handler();
        let mediator = Mediator::builder().register(handler).unwrap().build();
        let clone = mediator.clone();

        clone.send(Echo("a".to_string())).await.unwrap();
        mediator.send(Echo("b".to_string())).await.unwrap();

        assert!(clone.is_registered::<Echo>());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }
}
