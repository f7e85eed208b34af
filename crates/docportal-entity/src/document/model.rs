//! Document entity model.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::category::DocumentCategory;
use super::priority::DocumentPriority;
use super::status::DocumentStatus;

/// A document managed by the portal.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Document {
    /// Unique document identifier.
    pub id: Uuid,
    /// Document title.
    pub title: String,
    /// Category.
    pub category: DocumentCategory,
    /// Free-text description.
    pub description: Option<String>,
    /// Priority.
    pub priority: DocumentPriority,
    /// Current lifecycle status.
    pub status: DocumentStatus,
    /// Original file name as uploaded.
    pub file_name: String,
    /// Locator of the stored bytes within the storage provider.
    pub storage_path: String,
    /// MIME type of the file.
    pub mime_type: Option<String>,
    /// File size in bytes.
    pub size_bytes: i64,
    /// Optional deadline communicated to employees.
    pub deadline: Option<NaiveDate>,
    /// The admin who uploaded the document.
    pub uploaded_by: Uuid,
    /// Text extracted by the enrichment pipeline.
    pub parsed_text: Option<String>,
    /// Summary produced by the enrichment pipeline.
    pub summary: Option<String>,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
    /// When the document was last updated.
    pub updated_at: DateTime<Utc>,
}

impl Document {
    /// Check if the document is awaiting review.
    pub fn is_pending(&self) -> bool {
        self.status == DocumentStatus::Pending
    }

    /// Check if the enrichment pipeline has produced a summary.
    pub fn is_enriched(&self) -> bool {
        self.summary.is_some()
    }
}

/// Data required to create a new document record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateDocument {
    /// Document title.
    pub title: String,
    /// Category.
    pub category: DocumentCategory,
    /// Free-text description.
    pub description: Option<String>,
    /// Priority.
    pub priority: DocumentPriority,
    /// Original file name.
    pub file_name: String,
    /// Storage locator.
    pub storage_path: String,
    /// MIME type.
    pub mime_type: Option<String>,
    /// File size in bytes.
    pub size_bytes: i64,
    /// Optional deadline.
    pub deadline: Option<NaiveDate>,
    /// The uploading admin.
    pub uploaded_by: Uuid,
}
