//! Assignment ledger handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use docportal_core::error::AppError;

use crate::dto::request::SetAssigneesRequest;
use crate::dto::response::{ApiResponse, AssigneesResponse};
use crate::extractors::AuthUser;
use crate::middleware::rbac;
use crate::state::AppState;

/// GET /api/documents/{id}/assignees
pub async fn list_assignees(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<AssigneesResponse>>, AppError> {
    rbac::require_admin(&auth)?;

    let employee_ids = state.assignment_service.list_assignees(&auth, id).await?;

    Ok(Json(ApiResponse::ok(AssigneesResponse {
        document_id: id,
        employee_ids,
    })))
}

/// PUT /api/documents/{id}/assignees — replace the full assignment set.
pub async fn set_assignees(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<SetAssigneesRequest>,
) -> Result<Json<ApiResponse<AssigneesResponse>>, AppError> {
    rbac::require_admin(&auth)?;

    state
        .assignment_service
        .set_assignees(&auth, id, &req.employee_ids)
        .await?;

    let employee_ids = state.assignment_service.list_assignees(&auth, id).await?;

    Ok(Json(ApiResponse::ok(AssigneesResponse {
        document_id: id,
        employee_ids,
    })))
}
