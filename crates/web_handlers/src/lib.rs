//! # Web Handlers for the Campsite Catalog Web Application
//!
//! This crate provides the web handlers, request/response types and the
//! service layer sitting between the HTTP routes and the campsite catalog.

/// Request, response and error types for the campsite API
mod api_types;
pub use api_types::*;

/// Service combining the catalog repository with the recommendation engine
mod campsite_service;
pub use campsite_service::*;

/// Handlers for the campsite API endpoints
mod campsite_handlers;
pub use campsite_handlers::*;

/// Route table shared by the server and the handler tests
mod routes;
pub use routes::*;
