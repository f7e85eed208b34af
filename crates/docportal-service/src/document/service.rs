//! Document lifecycle engine and role-scoped reads.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use docportal_core::error::AppError;
use docportal_core::traits::storage::ByteStream;
use docportal_core::types::pagination::{PageRequest, PageResponse};
use docportal_database::repositories::assignment::AssignmentRepository;
use docportal_database::repositories::document::DocumentRepository;
use docportal_entity::document::{Document, DocumentStatus};
use docportal_storage::StorageManager;

use crate::context::RequestContext;

/// Governs the document status field and who may read or transition it.
#[derive(Debug, Clone)]
pub struct DocumentService {
    /// Document repository.
    document_repo: Arc<DocumentRepository>,
    /// Assignment ledger repository.
    assignment_repo: Arc<AssignmentRepository>,
    /// Storage manager (for downloads).
    storage: Arc<StorageManager>,
}

impl DocumentService {
    /// Creates a new document service.
    pub fn new(
        document_repo: Arc<DocumentRepository>,
        assignment_repo: Arc<AssignmentRepository>,
        storage: Arc<StorageManager>,
    ) -> Self {
        Self {
            document_repo,
            assignment_repo,
            storage,
        }
    }

    /// Gets a single document, applying the caller's visibility predicate.
    ///
    /// Admins see any document. Employees see a document only when it is
    /// approved *and* assigned to them; anything else reads as not found
    /// so unassigned documents stay invisible.
    pub async fn get_document(
        &self,
        ctx: &RequestContext,
        document_id: Uuid,
    ) -> Result<Document, AppError> {
        let document = self
            .document_repo
            .find_by_id(document_id)
            .await?
            .ok_or_else(|| AppError::not_found("Document not found"))?;

        if ctx.is_admin() {
            return Ok(document);
        }

        let assigned = self
            .assignment_repo
            .exists(document_id, ctx.user_id)
            .await?;
        if document.status != DocumentStatus::Approved || !assigned {
            return Err(AppError::not_found("Document not found"));
        }

        Ok(document)
    }

    /// Lists the admin review queue: all pending documents, newest first.
    pub async fn list_pending(
        &self,
        ctx: &RequestContext,
        page: PageRequest,
    ) -> Result<PageResponse<Document>, AppError> {
        if !ctx.is_admin() {
            return Err(AppError::forbidden("Admin access required"));
        }
        self.document_repo
            .find_by_status(DocumentStatus::Pending, &page)
            .await
    }

    /// Lists the caller's assigned documents in the given status.
    ///
    /// Employee visibility is the intersection of an assignment edge and
    /// the requested status (approved by default at the API layer).
    pub async fn list_assigned(
        &self,
        ctx: &RequestContext,
        status: DocumentStatus,
        page: PageRequest,
    ) -> Result<PageResponse<Document>, AppError> {
        self.document_repo
            .find_assigned_to(ctx.user_id, status, &page)
            .await
    }

    /// Transitions a pending document to `approved` or `rejected`.
    ///
    /// Only the status column is written. The pending precondition is
    /// enforced by the repository's guarded UPDATE; a document that was
    /// already decided yields a conflict and no write.
    pub async fn transition(
        &self,
        ctx: &RequestContext,
        document_id: Uuid,
        target: DocumentStatus,
    ) -> Result<Document, AppError> {
        if !ctx.is_admin() {
            return Err(AppError::forbidden("Admin access required"));
        }
        if !target.is_decided() {
            return Err(AppError::validation(
                "Transition target must be 'approved' or 'rejected'",
            ));
        }

        match self
            .document_repo
            .transition_from_pending(document_id, target)
            .await?
        {
            Some(document) => {
                info!(
                    document_id = %document.id,
                    status = %document.status,
                    admin = %ctx.user_id,
                    "Document reviewed"
                );
                Ok(document)
            }
            None => {
                let existing = self
                    .document_repo
                    .find_by_id(document_id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Document not found"))?;
                Err(AppError::conflict(format!(
                    "Document is already {}",
                    existing.status
                )))
            }
        }
    }

    /// Opens a document's stored bytes for download, applying the same
    /// visibility predicate as [`Self::get_document`].
    pub async fn download(
        &self,
        ctx: &RequestContext,
        document_id: Uuid,
    ) -> Result<(Document, ByteStream), AppError> {
        let document = self.get_document(ctx, document_id).await?;
        let stream = self.storage.read(&document.storage_path).await?;
        Ok((document, stream))
    }
}
