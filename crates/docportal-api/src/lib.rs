//! # docportal-api
//!
//! HTTP API layer for the document portal built on Axum.
//!
//! Provides all REST endpoints, the auth extractor, role guards, DTOs,
//! and error mapping, plus the application builder that wires
//! repositories, services, and the background worker together.

pub mod app;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::run_server;
pub use state::AppState;
