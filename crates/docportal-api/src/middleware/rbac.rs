//! Role guards for route handlers.

use docportal_core::error::AppError;
use docportal_entity::user::UserRole;

use crate::extractors::AuthUser;

/// Checks that the authenticated user has the Admin role.
pub fn require_admin(auth: &AuthUser) -> Result<(), AppError> {
    if auth.role != UserRole::Admin {
        return Err(AppError::forbidden("Admin access required"));
    }
    Ok(())
}

/// Checks that the authenticated user has the Employee role.
pub fn require_employee(auth: &AuthUser) -> Result<(), AppError> {
    if auth.role != UserRole::Employee {
        return Err(AppError::forbidden("Employee access required"));
    }
    Ok(())
}
