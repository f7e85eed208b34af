//! Health check handlers.

use axum::Json;
use axum::extract::State;
use serde_json::{Value, json};

use docportal_core::error::AppError;

use crate::state::AppState;

/// GET /api/health — liveness probe.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /api/health/detailed — checks database and storage reachability.
pub async fn detailed_health(State(state): State<AppState>) -> Result<Json<Value>, AppError> {
    let database = sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(&state.db_pool)
        .await
        .is_ok();
    let storage = state.storage.health_check().await.unwrap_or(false);

    Ok(Json(json!({
        "status": if database && storage { "ok" } else { "degraded" },
        "database": database,
        "storage": storage,
    })))
}
