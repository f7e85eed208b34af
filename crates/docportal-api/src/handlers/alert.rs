//! Alert handlers.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use docportal_core::error::AppError;
use docportal_entity::alert::{Alert, AlertSeverity};

use crate::dto::request::CreateAlertRequest;
use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::middleware::rbac;
use crate::state::AppState;

/// GET /api/alerts — active alerts for any authenticated user.
pub async fn list_alerts(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<Alert>>>, AppError> {
    let alerts = state.alert_service.list_active(&auth).await?;
    Ok(Json(ApiResponse::ok(alerts)))
}

/// POST /api/alerts — publish a new alert (admin).
pub async fn create_alert(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateAlertRequest>,
) -> Result<Json<ApiResponse<Alert>>, AppError> {
    rbac::require_admin(&auth)?;
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let severity = match req.severity.to_lowercase().as_str() {
        "high" => AlertSeverity::High,
        "medium" => AlertSeverity::Medium,
        "low" => AlertSeverity::Low,
        other => {
            return Err(AppError::validation(format!(
                "Invalid severity: '{other}'. Expected one of: high, medium, low"
            )));
        }
    };

    let alert = state
        .alert_service
        .publish(&auth, req.title, req.message, severity, req.expires_at)
        .await?;

    Ok(Json(ApiResponse::ok(alert)))
}
