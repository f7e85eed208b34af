//! Operational alert publishing and listing.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::info;

use docportal_core::error::AppError;
use docportal_database::repositories::alert::AlertRepository;
use docportal_entity::alert::{Alert, AlertSeverity, CreateAlert};

use crate::context::RequestContext;

/// Publishes and lists operational alerts.
#[derive(Debug, Clone)]
pub struct AlertService {
    /// Alert repository.
    alert_repo: Arc<AlertRepository>,
}

impl AlertService {
    /// Creates a new alert service.
    pub fn new(alert_repo: Arc<AlertRepository>) -> Self {
        Self { alert_repo }
    }

    /// Publishes a new alert (admin only).
    pub async fn publish(
        &self,
        ctx: &RequestContext,
        title: String,
        message: String,
        severity: AlertSeverity,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Alert, AppError> {
        if !ctx.is_admin() {
            return Err(AppError::forbidden("Admin access required"));
        }
        if title.trim().is_empty() {
            return Err(AppError::validation("Alert title is required"));
        }
        if message.trim().is_empty() {
            return Err(AppError::validation("Alert message is required"));
        }

        let alert = self
            .alert_repo
            .create(&CreateAlert {
                title: title.trim().to_string(),
                message: message.trim().to_string(),
                severity,
                created_by: ctx.user_id,
                expires_at,
            })
            .await?;

        info!(alert_id = %alert.id, severity = %alert.severity, "Alert published");
        Ok(alert)
    }

    /// Lists active alerts for any authenticated user.
    pub async fn list_active(&self, _ctx: &RequestContext) -> Result<Vec<Alert>, AppError> {
        self.alert_repo.find_active().await
    }
}
