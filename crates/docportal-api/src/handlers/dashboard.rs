//! Dashboard handlers — one endpoint per role.

use axum::Json;
use axum::extract::State;

use docportal_core::error::AppError;
use docportal_service::report::{AdminDashboard, EmployeeDashboard};

use crate::dto::response::ApiResponse;
use crate::extractors::AuthUser;
use crate::middleware::rbac;
use crate::state::AppState;

/// GET /api/dashboard/admin
pub async fn admin_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<AdminDashboard>>, AppError> {
    rbac::require_admin(&auth)?;

    let stats = state.dashboard_service.admin_dashboard(&auth).await?;
    Ok(Json(ApiResponse::ok(stats)))
}

/// GET /api/dashboard/employee
pub async fn employee_dashboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<EmployeeDashboard>>, AppError> {
    rbac::require_employee(&auth)?;

    let stats = state.dashboard_service.employee_dashboard(&auth).await?;
    Ok(Json(ApiResponse::ok(stats)))
}
