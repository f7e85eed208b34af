//! Alert repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use docportal_core::error::{AppError, ErrorKind};
use docportal_core::result::AppResult;
use docportal_entity::alert::model::{Alert, CreateAlert};

/// Repository for operational alerts.
#[derive(Debug, Clone)]
pub struct AlertRepository {
    pool: PgPool,
}

impl AlertRepository {
    /// Create a new alert repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an alert by ID.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Alert>> {
        sqlx::query_as::<_, Alert>("SELECT * FROM alerts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find alert", e))
    }

    /// Publish a new alert.
    pub async fn create(&self, data: &CreateAlert) -> AppResult<Alert> {
        sqlx::query_as::<_, Alert>(
            "INSERT INTO alerts (title, message, severity, created_by, expires_at) \
             VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.message)
        .bind(data.severity)
        .bind(data.created_by)
        .bind(data.expires_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create alert", e))
    }

    /// List unexpired alerts, newest first.
    pub async fn find_active(&self) -> AppResult<Vec<Alert>> {
        sqlx::query_as::<_, Alert>(
            "SELECT * FROM alerts WHERE expires_at IS NULL OR expires_at > NOW() \
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list alerts", e))
    }

    /// Count unexpired alerts.
    pub async fn count_active(&self) -> AppResult<i64> {
        sqlx::query_scalar(
            "SELECT COUNT(*) FROM alerts WHERE expires_at IS NULL OR expires_at > NOW()",
        )
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count alerts", e))
    }
}
