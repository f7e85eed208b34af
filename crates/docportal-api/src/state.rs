//! Application state shared across all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use docportal_auth::JwtDecoder;
use docportal_core::config::AppConfig;
use docportal_service::alert::AlertService;
use docportal_service::assignment::AssignmentService;
use docportal_service::auth::AuthService;
use docportal_service::document::{DocumentService, UploadService};
use docportal_service::report::DashboardService;
use docportal_storage::StorageManager;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. All fields are
/// `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool (health checks).
    pub db_pool: PgPool,
    /// Storage manager (health checks).
    pub storage: Arc<StorageManager>,
    /// JWT token decoder and validator.
    pub jwt_decoder: Arc<JwtDecoder>,
    /// Signup/login/refresh service.
    pub auth_service: Arc<AuthService>,
    /// Document lifecycle service.
    pub document_service: Arc<DocumentService>,
    /// Upload service.
    pub upload_service: Arc<UploadService>,
    /// Assignment ledger service.
    pub assignment_service: Arc<AssignmentService>,
    /// Alert service.
    pub alert_service: Arc<AlertService>,
    /// Dashboard statistics service.
    pub dashboard_service: Arc<DashboardService>,
}
