//! Assignment ledger repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use docportal_core::error::{AppError, ErrorKind};
use docportal_core::result::AppResult;
use docportal_entity::assignment::model::Assignment;

/// Repository for the document↔employee assignment ledger.
#[derive(Debug, Clone)]
pub struct AssignmentRepository {
    pool: PgPool,
}

impl AssignmentRepository {
    /// Create a new assignment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Replace the full edge set for a document.
    ///
    /// Runs delete-then-insert inside a single transaction so a failed
    /// insert rolls the delete back and the previous edge set survives.
    /// An empty `employee_ids` unassigns everyone. Returns the number of
    /// edges written.
    pub async fn replace_for_document(
        &self,
        document_id: Uuid,
        employee_ids: &[Uuid],
        assigned_by: Uuid,
    ) -> AppResult<u64> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        sqlx::query("DELETE FROM assignments WHERE document_id = $1")
            .bind(document_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to clear assignments", e)
            })?;

        let mut written = 0u64;
        for employee_id in employee_ids {
            let result = sqlx::query(
                "INSERT INTO assignments (document_id, employee_id, assigned_by) \
                 VALUES ($1, $2, $3) ON CONFLICT (document_id, employee_id) DO NOTHING",
            )
            .bind(document_id)
            .bind(employee_id)
            .bind(assigned_by)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to insert assignment", e)
            })?;
            written += result.rows_affected();
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit assignments", e)
        })?;

        Ok(written)
    }

    /// List the employee IDs a document is assigned to.
    pub async fn find_assignee_ids(&self, document_id: Uuid) -> AppResult<Vec<Uuid>> {
        sqlx::query_scalar(
            "SELECT employee_id FROM assignments WHERE document_id = $1 ORDER BY assigned_at ASC",
        )
        .bind(document_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list assignees", e))
    }

    /// List the full assignment edges for a document.
    pub async fn find_by_document(&self, document_id: Uuid) -> AppResult<Vec<Assignment>> {
        sqlx::query_as::<_, Assignment>(
            "SELECT * FROM assignments WHERE document_id = $1 ORDER BY assigned_at ASC",
        )
        .bind(document_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list assignments", e))
    }

    /// Check whether an edge exists between a document and an employee.
    pub async fn exists(&self, document_id: Uuid, employee_id: Uuid) -> AppResult<bool> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM assignments WHERE document_id = $1 AND employee_id = $2",
        )
        .bind(document_id)
        .bind(employee_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to check assignment", e))?;
        Ok(count > 0)
    }
}
