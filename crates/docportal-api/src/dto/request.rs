//! Request DTOs with validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Signup request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SignupRequest {
    /// Login email address.
    #[validate(email(message = "A valid email address is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,
    /// Full display name.
    #[validate(length(min = 1, message = "Full name is required"))]
    pub full_name: String,
    /// Role: "admin" or "employee".
    pub role: String,
    /// Department (optional).
    pub department: Option<String>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Login email address.
    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token refresh request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshRequest {
    /// Refresh token.
    pub refresh_token: String,
}

/// Replace the assignment set for a document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetAssigneesRequest {
    /// The complete new set of employee IDs (may be empty).
    pub employee_ids: Vec<Uuid>,
}

/// Publish an alert.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAlertRequest {
    /// Alert title.
    #[validate(length(min = 1, message = "Title is required"))]
    pub title: String,
    /// Alert body text.
    #[validate(length(min = 1, message = "Message is required"))]
    pub message: String,
    /// Severity: "high", "medium", or "low".
    pub severity: String,
    /// Optional expiry time.
    pub expires_at: Option<DateTime<Utc>>,
}

/// Query parameters for paginated document lists.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct DocumentListQuery {
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
    /// Status filter (employee list only; defaults to "approved").
    pub status: Option<String>,
}

impl DocumentListQuery {
    /// Converts the query into a page request with defaults applied.
    pub fn page_request(&self) -> docportal_core::types::pagination::PageRequest {
        docportal_core::types::pagination::PageRequest::new(
            self.page.unwrap_or(1),
            self.page_size.unwrap_or(25),
        )
    }
}
