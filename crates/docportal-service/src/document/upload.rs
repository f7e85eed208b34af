//! Document upload flow.

use std::sync::Arc;

use bytes::Bytes;
use chrono::NaiveDate;
use tracing::{info, warn};
use uuid::Uuid;

use docportal_core::config::enrichment::EnrichmentConfig;
use docportal_core::config::storage::StorageConfig;
use docportal_core::error::AppError;
use docportal_database::repositories::document::DocumentRepository;
use docportal_database::repositories::job::JobRepository;
use docportal_entity::document::{CreateDocument, Document, DocumentCategory, DocumentPriority};
use docportal_entity::job::CreateJob;
use docportal_storage::StorageManager;

use crate::assignment::AssignmentService;
use crate::context::RequestContext;

/// Job type enqueued after each upload.
pub const ENRICHMENT_JOB_TYPE: &str = "document_enrichment";

/// Handles validated document uploads: store bytes, create the row,
/// write the assignment set, and enqueue enrichment.
#[derive(Debug, Clone)]
pub struct UploadService {
    /// Document repository.
    document_repo: Arc<DocumentRepository>,
    /// Job repository (enrichment enqueue).
    job_repo: Arc<JobRepository>,
    /// Assignment service.
    assignments: Arc<AssignmentService>,
    /// Storage manager.
    storage: Arc<StorageManager>,
    /// Storage configuration (size and type limits).
    storage_config: StorageConfig,
    /// Enrichment configuration.
    enrichment_config: EnrichmentConfig,
}

/// Parameters collected from the multipart upload request.
#[derive(Debug, Clone)]
pub struct UploadParams {
    /// Document title (required).
    pub title: String,
    /// Category (required).
    pub category: DocumentCategory,
    /// Free-text description.
    pub description: Option<String>,
    /// Priority (defaults to medium).
    pub priority: Option<DocumentPriority>,
    /// Optional deadline.
    pub deadline: Option<NaiveDate>,
    /// Original file name.
    pub file_name: String,
    /// MIME type as declared by the client.
    pub mime_type: Option<String>,
    /// File content.
    pub data: Bytes,
    /// Employees the document is assigned to.
    pub assignees: Vec<Uuid>,
}

/// Result of a successful upload.
#[derive(Debug, Clone)]
pub struct UploadOutcome {
    /// The created document (status = pending).
    pub document: Document,
    /// Number of assignment edges written.
    pub assigned_count: u64,
    /// Whether an enrichment job was enqueued.
    pub enrichment_queued: bool,
    /// Non-fatal warning (e.g. enrichment enqueue failed).
    pub warning: Option<String>,
}

impl UploadService {
    /// Creates a new upload service.
    pub fn new(
        document_repo: Arc<DocumentRepository>,
        job_repo: Arc<JobRepository>,
        assignments: Arc<AssignmentService>,
        storage: Arc<StorageManager>,
        storage_config: StorageConfig,
        enrichment_config: EnrichmentConfig,
    ) -> Self {
        Self {
            document_repo,
            job_repo,
            assignments,
            storage,
            storage_config,
            enrichment_config,
        }
    }

    /// Performs a document upload.
    ///
    /// Validation failures reject the whole operation before any write.
    /// Once the document row exists, enrichment enqueue failures downgrade
    /// to a warning; the upload itself has already succeeded.
    pub async fn upload(
        &self,
        ctx: &RequestContext,
        params: UploadParams,
    ) -> Result<UploadOutcome, AppError> {
        if !ctx.is_admin() {
            return Err(AppError::forbidden("Admin access required"));
        }
        validate_upload(&params, &self.storage_config)?;

        // Write bytes first; the locator goes onto the row.
        let document_id = Uuid::new_v4();
        let storage_path = format!("documents/{}/{}", document_id, params.file_name);
        self.storage
            .write(&storage_path, params.data.clone())
            .await?;

        let document = self
            .document_repo
            .create(&CreateDocument {
                title: params.title.trim().to_string(),
                category: params.category,
                description: params.description,
                priority: params.priority.unwrap_or_default(),
                file_name: params.file_name.clone(),
                storage_path,
                mime_type: params.mime_type,
                size_bytes: params.data.len() as i64,
                deadline: params.deadline,
                uploaded_by: ctx.user_id,
            })
            .await?;

        let assigned_count = if params.assignees.is_empty() {
            0
        } else {
            self.assignments
                .set_assignees(ctx, document.id, &params.assignees)
                .await?
        };

        info!(
            document_id = %document.id,
            title = %document.title,
            assigned = assigned_count,
            "Document uploaded"
        );

        let (enrichment_queued, warning) = self.enqueue_enrichment(&document).await;

        Ok(UploadOutcome {
            document,
            assigned_count,
            enrichment_queued,
            warning,
        })
    }

    /// Enqueues the enrichment job. Fire-and-forget: failure is reported
    /// as a warning, never as an upload error.
    async fn enqueue_enrichment(&self, document: &Document) -> (bool, Option<String>) {
        if !self.enrichment_config.enabled {
            return (false, None);
        }

        let job = CreateJob {
            job_type: ENRICHMENT_JOB_TYPE.to_string(),
            payload: serde_json::json!({
                "document_id": document.id,
                "storage_path": document.storage_path,
            }),
            max_attempts: self.enrichment_config.max_attempts,
            scheduled_at: None,
        };

        match self.job_repo.create(&job).await {
            Ok(job) => {
                info!(job_id = %job.id, document_id = %document.id, "Enrichment job enqueued");
                (true, None)
            }
            Err(e) => {
                warn!(document_id = %document.id, error = %e, "Failed to enqueue enrichment");
                (
                    false,
                    Some("Document stored, but summary generation could not be scheduled".into()),
                )
            }
        }
    }
}

/// Validates upload parameters against the storage limits.
///
/// Pure so the rules are testable without a repository or storage backend.
fn validate_upload(params: &UploadParams, config: &StorageConfig) -> Result<(), AppError> {
    if params.title.trim().is_empty() {
        return Err(AppError::validation("Title is required"));
    }
    if params.file_name.trim().is_empty() {
        return Err(AppError::validation("File name is required"));
    }
    if params.data.is_empty() {
        return Err(AppError::validation("A document file is required"));
    }
    if params.data.len() as u64 > config.max_upload_size_bytes {
        return Err(AppError::validation(format!(
            "File exceeds maximum upload size of {} bytes",
            config.max_upload_size_bytes
        )));
    }
    if let Some(mime) = &params.mime_type {
        if !config.accepts_mime_type(mime) {
            return Err(AppError::validation(format!(
                "Unsupported file type '{mime}'. Upload a PDF or Word document"
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> StorageConfig {
        StorageConfig {
            provider: "local".to_string(),
            data_root: "data".to_string(),
            max_upload_size_bytes: 1024,
            allowed_mime_types: vec!["application/pdf".to_string()],
        }
    }

    fn valid_params() -> UploadParams {
        UploadParams {
            title: "Safety Bulletin".to_string(),
            category: DocumentCategory::Safety,
            description: None,
            priority: Some(DocumentPriority::High),
            deadline: None,
            file_name: "bulletin.pdf".to_string(),
            mime_type: Some("application/pdf".to_string()),
            data: Bytes::from_static(b"%PDF-1.4"),
            assignees: vec![],
        }
    }

    #[test]
    fn test_valid_params_pass() {
        assert!(validate_upload(&valid_params(), &test_config()).is_ok());
    }

    #[test]
    fn test_missing_file_rejected() {
        let mut params = valid_params();
        params.data = Bytes::new();
        assert!(validate_upload(&params, &test_config()).is_err());
    }

    #[test]
    fn test_blank_title_rejected() {
        let mut params = valid_params();
        params.title = "   ".to_string();
        assert!(validate_upload(&params, &test_config()).is_err());
    }

    #[test]
    fn test_oversized_file_rejected() {
        let mut params = valid_params();
        params.data = Bytes::from(vec![0u8; 2048]);
        assert!(validate_upload(&params, &test_config()).is_err());
    }

    #[test]
    fn test_unsupported_mime_type_rejected() {
        let mut params = valid_params();
        params.mime_type = Some("image/png".to_string());
        assert!(validate_upload(&params, &test_config()).is_err());
    }
}
