//! Document repository implementation.

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use docportal_core::error::{AppError, ErrorKind};
use docportal_core::result::AppResult;
use docportal_core::types::pagination::{PageRequest, PageResponse};
use docportal_entity::document::model::{CreateDocument, Document};
use docportal_entity::document::status::DocumentStatus;

/// Repository for document CRUD and lifecycle operations.
#[derive(Debug, Clone)]
pub struct DocumentRepository {
    pool: PgPool,
}

impl DocumentRepository {
    /// Create a new document repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a document by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Document>> {
        sqlx::query_as::<_, Document>("SELECT * FROM documents WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find document", e))
    }

    /// Create a new document record in `pending` status.
    pub async fn create(&self, data: &CreateDocument) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(
            "INSERT INTO documents (title, category, description, priority, file_name, \
             storage_path, mime_type, size_bytes, deadline, uploaded_by) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) RETURNING *",
        )
        .bind(&data.title)
        .bind(data.category)
        .bind(&data.description)
        .bind(data.priority)
        .bind(&data.file_name)
        .bind(&data.storage_path)
        .bind(&data.mime_type)
        .bind(data.size_bytes)
        .bind(data.deadline)
        .bind(data.uploaded_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create document", e))
    }

    /// Transition a `pending` document to a review decision.
    ///
    /// The status guard lives in the WHERE clause so a lost race between
    /// two admins (or a repeated click) updates zero rows. `Ok(None)` means
    /// the document either does not exist or is no longer pending; the
    /// caller distinguishes the two.
    pub async fn transition_from_pending(
        &self,
        id: Uuid,
        target: DocumentStatus,
    ) -> AppResult<Option<Document>> {
        sqlx::query_as::<_, Document>(
            "UPDATE documents SET status = $2, updated_at = NOW() \
             WHERE id = $1 AND status = 'pending' RETURNING *",
        )
        .bind(id)
        .bind(target)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to transition document", e)
        })
    }

    /// Write enrichment output onto a document row.
    ///
    /// Touches only the derived columns; status and metadata are left alone.
    pub async fn set_enrichment(
        &self,
        id: Uuid,
        parsed_text: &str,
        summary: Option<&str>,
    ) -> AppResult<Document> {
        sqlx::query_as::<_, Document>(
            "UPDATE documents SET parsed_text = $2, summary = $3, updated_at = NOW() \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(parsed_text)
        .bind(summary)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to store enrichment output", e)
        })?
        .ok_or_else(|| AppError::not_found(format!("Document {id} not found")))
    }

    /// List documents in a given status with pagination, newest first.
    pub async fn find_by_status(
        &self,
        status: DocumentStatus,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Document>> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to count documents", e)
            })?;

        let documents = sqlx::query_as::<_, Document>(
            "SELECT * FROM documents WHERE status = $1 ORDER BY created_at DESC \
             LIMIT $2 OFFSET $3",
        )
        .bind(status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list documents", e))?;

        Ok(PageResponse::new(
            documents,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// List documents assigned to an employee in a given status, newest first.
    pub async fn find_assigned_to(
        &self,
        employee_id: Uuid,
        status: DocumentStatus,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Document>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM documents d \
             INNER JOIN assignments a ON a.document_id = d.id \
             WHERE a.employee_id = $1 AND d.status = $2",
        )
        .bind(employee_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count assigned documents", e)
        })?;

        let documents = sqlx::query_as::<_, Document>(
            "SELECT d.* FROM documents d \
             INNER JOIN assignments a ON a.document_id = d.id \
             WHERE a.employee_id = $1 AND d.status = $2 \
             ORDER BY d.created_at DESC LIMIT $3 OFFSET $4",
        )
        .bind(employee_id)
        .bind(status)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list assigned documents", e)
        })?;

        Ok(PageResponse::new(
            documents,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Count all documents.
    pub async fn count_all(&self) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM documents")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count documents", e))
    }

    /// Count documents in a given status.
    pub async fn count_by_status(&self, status: DocumentStatus) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM documents WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count documents", e))
    }

    /// Count documents that entered a status since a specific time.
    pub async fn count_decided_since(
        &self,
        status: DocumentStatus,
        since: DateTime<Utc>,
    ) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM documents WHERE status = $1 AND updated_at >= $2",
        )
        .bind(status)
        .bind(since)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count decisions", e))
    }

    /// Count documents assigned to an employee in a given status.
    pub async fn count_assigned_to(
        &self,
        employee_id: Uuid,
        status: DocumentStatus,
    ) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM documents d \
             INNER JOIN assignments a ON a.document_id = d.id \
             WHERE a.employee_id = $1 AND d.status = $2",
        )
        .bind(employee_id)
        .bind(status)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to count assigned documents", e)
        })
    }
}
