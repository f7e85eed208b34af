//! Assignment ledger operations.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use docportal_core::error::AppError;
use docportal_database::repositories::assignment::AssignmentRepository;
use docportal_database::repositories::document::DocumentRepository;
use docportal_database::repositories::user::UserRepository;
use docportal_entity::user::UserRole;

use crate::context::RequestContext;

/// Manages the many-to-many ledger between documents and employees.
#[derive(Debug, Clone)]
pub struct AssignmentService {
    /// Assignment repository.
    assignment_repo: Arc<AssignmentRepository>,
    /// Document repository (existence checks).
    document_repo: Arc<DocumentRepository>,
    /// User repository (assignee role checks).
    user_repo: Arc<UserRepository>,
}

impl AssignmentService {
    /// Creates a new assignment service.
    pub fn new(
        assignment_repo: Arc<AssignmentRepository>,
        document_repo: Arc<DocumentRepository>,
        user_repo: Arc<UserRepository>,
    ) -> Self {
        Self {
            assignment_repo,
            document_repo,
            user_repo,
        }
    }

    /// Replaces the full assignment set for a document.
    ///
    /// The write is last-write-wins: the previous edge set is discarded
    /// and exactly `employee_ids` (deduplicated) remains. An empty set
    /// unassigns everyone. Returns the number of edges written.
    pub async fn set_assignees(
        &self,
        ctx: &RequestContext,
        document_id: Uuid,
        employee_ids: &[Uuid],
    ) -> Result<u64, AppError> {
        if !ctx.is_admin() {
            return Err(AppError::forbidden("Admin access required"));
        }

        self.document_repo
            .find_by_id(document_id)
            .await?
            .ok_or_else(|| AppError::not_found("Document not found"))?;

        let unique: Vec<Uuid> = employee_ids
            .iter()
            .copied()
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        if !unique.is_empty() {
            let employees = self
                .user_repo
                .count_role_among(&unique, UserRole::Employee)
                .await?;
            if employees as usize != unique.len() {
                return Err(AppError::validation(
                    "Every assignee must be an existing employee account",
                ));
            }
        }

        let written = self
            .assignment_repo
            .replace_for_document(document_id, &unique, ctx.user_id)
            .await?;

        info!(
            document_id = %document_id,
            assigned = written,
            admin = %ctx.user_id,
            "Assignment set replaced"
        );

        Ok(written)
    }

    /// Lists the employee IDs a document is assigned to.
    pub async fn list_assignees(
        &self,
        ctx: &RequestContext,
        document_id: Uuid,
    ) -> Result<Vec<Uuid>, AppError> {
        if !ctx.is_admin() {
            return Err(AppError::forbidden("Admin access required"));
        }

        self.document_repo
            .find_by_id(document_id)
            .await?
            .ok_or_else(|| AppError::not_found("Document not found"))?;

        self.assignment_repo.find_assignee_ids(document_id).await
    }
}
