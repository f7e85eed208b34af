//! Request context carrying the authenticated user.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use docportal_auth::Claims;
use docportal_entity::user::UserRole;

/// Context for the current authenticated request.
///
/// Built by the API layer from validated JWT claims and passed into every
/// service method so that each operation knows *who* is acting. Session
/// state lives nowhere else.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: Uuid,
    /// The user's role at the time the JWT was issued.
    pub role: UserRole,
    /// Login email (convenience field from JWT claims).
    pub email: String,
    /// Full display name (convenience field from JWT claims).
    pub full_name: String,
    /// When the request was received.
    pub request_time: DateTime<Utc>,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: Uuid, role: UserRole, email: String, full_name: String) -> Self {
        Self {
            user_id,
            role,
            email,
            full_name,
            request_time: Utc::now(),
        }
    }

    /// Builds a context from validated JWT claims.
    pub fn from_claims(claims: &Claims) -> Self {
        Self::new(
            claims.user_id(),
            claims.role,
            claims.email.clone(),
            claims.full_name.clone(),
        )
    }

    /// Returns whether the current user is an admin.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}
