//! Auth handlers — signup, login, refresh, me, employee listing.

use axum::Json;
use axum::extract::State;
use validator::Validate;

use docportal_core::error::AppError;
use docportal_service::auth::service::SignupParams;

use crate::dto::request::{LoginRequest, RefreshRequest, SignupRequest};
use crate::dto::response::{ApiResponse, LoginResponse, UserResponse};
use crate::extractors::AuthUser;
use crate::middleware::rbac;
use crate::state::AppState;

/// POST /api/auth/signup
pub async fn signup(
    State(state): State<AppState>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let role = req.role.parse()?;
    let result = state
        .auth_service
        .signup(SignupParams {
            email: req.email,
            password: req.password,
            full_name: req.full_name,
            role,
            department: req.department,
        })
        .await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: result.tokens.access_token,
        refresh_token: result.tokens.refresh_token,
        access_expires_at: result.tokens.access_expires_at,
        refresh_expires_at: result.tokens.refresh_expires_at,
        user: result.user.into(),
    })))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    let result = state.auth_service.login(&req.email, &req.password).await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: result.tokens.access_token,
        refresh_token: result.tokens.refresh_token,
        access_expires_at: result.tokens.access_expires_at,
        refresh_expires_at: result.tokens.refresh_expires_at,
        user: result.user.into(),
    })))
}

/// POST /api/auth/refresh
pub async fn refresh(
    State(state): State<AppState>,
    Json(req): Json<RefreshRequest>,
) -> Result<Json<ApiResponse<LoginResponse>>, AppError> {
    let result = state.auth_service.refresh(&req.refresh_token).await?;

    Ok(Json(ApiResponse::ok(LoginResponse {
        access_token: result.tokens.access_token,
        refresh_token: result.tokens.refresh_token,
        access_expires_at: result.tokens.access_expires_at,
        refresh_expires_at: result.tokens.refresh_expires_at,
        user: result.user.into(),
    })))
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, AppError> {
    let user = state.auth_service.profile(&auth).await?;
    Ok(Json(ApiResponse::ok(user.into())))
}

/// GET /api/employees
pub async fn list_employees(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Vec<UserResponse>>>, AppError> {
    rbac::require_admin(&auth)?;

    let employees = state.auth_service.list_employees(&auth).await?;
    Ok(Json(ApiResponse::ok(
        employees.into_iter().map(UserResponse::from).collect(),
    )))
}
