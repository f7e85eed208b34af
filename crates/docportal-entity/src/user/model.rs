//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::role::UserRole;

/// A registered user of the portal.
///
/// The row carries both the identity (email + password hash) and the
/// profile (name, role, department) of an account.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Unique user identifier.
    pub id: Uuid,
    /// Unique login email address.
    pub email: String,
    /// Argon2 password hash.
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Full display name.
    pub full_name: String,
    /// Portal role.
    pub role: UserRole,
    /// Department (optional).
    pub department: Option<String>,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
    /// When the user was last updated.
    pub updated_at: DateTime<Utc>,
    /// Last successful login time.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Check if this user has admin privileges.
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Data required to create a new user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    /// Login email address.
    pub email: String,
    /// Pre-hashed password.
    pub password_hash: String,
    /// Full display name.
    pub full_name: String,
    /// Assigned role.
    pub role: UserRole,
    /// Department (optional).
    pub department: Option<String>,
}
