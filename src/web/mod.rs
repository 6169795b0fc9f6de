//! HTTP presentation layer built on axum.
//!
//! A thin collaborator over the library core: handlers parse and validate
//! input at the boundary, call storage operations, and map domain errors to
//! HTTP responses. No business logic lives here.

pub mod app_state;
pub mod error;
pub mod router;
pub mod routes;
