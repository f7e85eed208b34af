//! Response DTOs.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use docportal_entity::document::Document;
use docportal_entity::user::User;

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Simple message response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message.
    pub message: String,
}

/// User summary for responses. Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: Uuid,
    /// Login email.
    pub email: String,
    /// Full display name.
    pub full_name: String,
    /// Role.
    pub role: String,
    /// Department.
    pub department: Option<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last login.
    pub last_login_at: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            email: user.email,
            full_name: user.full_name,
            role: user.role.to_string(),
            department: user.department,
            created_at: user.created_at,
            last_login_at: user.last_login_at,
        }
    }
}

/// Login/signup/refresh response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Access token.
    pub access_token: String,
    /// Refresh token.
    pub refresh_token: String,
    /// Access token expiration.
    pub access_expires_at: DateTime<Utc>,
    /// Refresh token expiration.
    pub refresh_expires_at: DateTime<Utc>,
    /// The authenticated user.
    pub user: UserResponse,
}

/// Document representation for responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentResponse {
    /// Document ID.
    pub id: Uuid,
    /// Title.
    pub title: String,
    /// Category.
    pub category: String,
    /// Description.
    pub description: Option<String>,
    /// Priority.
    pub priority: String,
    /// Lifecycle status.
    pub status: String,
    /// Original file name.
    pub file_name: String,
    /// MIME type.
    pub mime_type: Option<String>,
    /// File size in bytes.
    pub size_bytes: i64,
    /// Deadline.
    pub deadline: Option<NaiveDate>,
    /// Uploading admin.
    pub uploaded_by: Uuid,
    /// Enrichment summary, when available.
    pub summary: Option<String>,
    /// Created at.
    pub created_at: DateTime<Utc>,
    /// Last updated at.
    pub updated_at: DateTime<Utc>,
}

impl From<Document> for DocumentResponse {
    fn from(doc: Document) -> Self {
        Self {
            id: doc.id,
            title: doc.title,
            category: doc.category.to_string(),
            description: doc.description,
            priority: doc.priority.to_string(),
            status: doc.status.to_string(),
            file_name: doc.file_name,
            mime_type: doc.mime_type,
            size_bytes: doc.size_bytes,
            deadline: doc.deadline,
            uploaded_by: doc.uploaded_by,
            summary: doc.summary,
            created_at: doc.created_at,
            updated_at: doc.updated_at,
        }
    }
}

/// Upload response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadResponse {
    /// The created document.
    pub document: DocumentResponse,
    /// Number of employees assigned.
    pub assigned_count: u64,
    /// Whether enrichment was scheduled.
    pub enrichment_queued: bool,
    /// Non-fatal warning, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// Assignment set response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssigneesResponse {
    /// The document the set belongs to.
    pub document_id: Uuid,
    /// Current assignee IDs.
    pub employee_ids: Vec<Uuid>,
}
