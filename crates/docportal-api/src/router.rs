//! Route definitions for the portal HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`. The router
//! receives `AppState` and passes it to all handlers via Axum's `State`
//! extractor.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    // Leave room for multipart framing around the file itself.
    let max_body = state.config.storage.max_upload_size_bytes as usize + 64 * 1024;

    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(document_routes())
        .merge(alert_routes())
        .merge(dashboard_routes())
        .merge(health_routes());

    let cors = build_cors_layer(&state);

    Router::new()
        .nest("/api", api_routes)
        .layer(DefaultBodyLimit::max(max_body))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Auth endpoints: signup, login, refresh, me, employee listing.
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(handlers::auth::signup))
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/refresh", post(handlers::auth::refresh))
        .route("/auth/me", get(handlers::auth::me))
        .route("/employees", get(handlers::auth::list_employees))
}

/// Document lifecycle, upload, download, and assignment endpoints.
fn document_routes() -> Router<AppState> {
    Router::new()
        .route("/documents/pending", get(handlers::document::list_pending))
        .route(
            "/documents/assigned",
            get(handlers::document::list_assigned),
        )
        .route("/documents/upload", post(handlers::document::upload_document))
        .route("/documents/{id}", get(handlers::document::get_document))
        .route(
            "/documents/{id}/download",
            get(handlers::document::download_document),
        )
        .route(
            "/documents/{id}/approve",
            post(handlers::document::approve_document),
        )
        .route(
            "/documents/{id}/reject",
            post(handlers::document::reject_document),
        )
        .route(
            "/documents/{id}/assignees",
            get(handlers::assignment::list_assignees),
        )
        .route(
            "/documents/{id}/assignees",
            put(handlers::assignment::set_assignees),
        )
}

/// Alert endpoints.
fn alert_routes() -> Router<AppState> {
    Router::new()
        .route("/alerts", get(handlers::alert::list_alerts))
        .route("/alerts", post(handlers::alert::create_alert))
}

/// Dashboard endpoints, one per role.
fn dashboard_routes() -> Router<AppState> {
    Router::new()
        .route("/dashboard/admin", get(handlers::dashboard::admin_dashboard))
        .route(
            "/dashboard/employee",
            get(handlers::dashboard::employee_dashboard),
        )
}

/// Health check endpoints (no auth required).
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        .route("/health/detailed", get(handlers::health::detailed_health))
}

/// Build CORS layer from configuration.
fn build_cors_layer(state: &AppState) -> CorsLayer {
    use http::Method;
    use tower_http::cors::Any;

    let cors_config = &state.config.server.cors;

    let mut cors = CorsLayer::new();

    if cors_config.allowed_origins.contains(&"*".to_string()) {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<http::HeaderValue> = cors_config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        cors = cors.allow_origin(origins);
    }

    let methods: Vec<Method> = cors_config
        .allowed_methods
        .iter()
        .filter_map(|m| m.parse().ok())
        .collect();
    cors = cors.allow_methods(methods);

    if cors_config.allowed_headers.contains(&"*".to_string()) {
        cors = cors.allow_headers(Any);
    }

    cors.max_age(std::time::Duration::from_secs(cors_config.max_age_seconds))
}
