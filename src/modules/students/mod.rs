pub mod controller;
pub mod handlers;
pub mod model;
pub mod router;
pub mod service;
