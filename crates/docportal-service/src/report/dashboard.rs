//! Per-role dashboard statistics.
//!
//! The admin and employee dashboards are distinct views computed from the
//! same repository counts; the caller's resolved role selects which one is
//! built. Figures are computed per request and never cached.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use docportal_core::error::AppError;
use docportal_database::repositories::alert::AlertRepository;
use docportal_database::repositories::document::DocumentRepository;
use docportal_database::repositories::user::UserRepository;
use docportal_entity::document::DocumentStatus;
use docportal_entity::user::UserRole;

use crate::context::RequestContext;

/// Statistics shown on the admin landing screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminDashboard {
    /// All documents ever uploaded.
    pub total_documents: i64,
    /// Documents awaiting review.
    pub pending_review: i64,
    /// Approved documents.
    pub approved: i64,
    /// Rejected documents.
    pub rejected: i64,
    /// Documents approved since midnight UTC.
    pub approved_today: i64,
    /// Registered employee accounts.
    pub employees: i64,
    /// Currently active alerts.
    pub active_alerts: i64,
}

/// Statistics shown on the employee landing screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeDashboard {
    /// Approved documents assigned to the employee.
    pub available_documents: i64,
    /// Assigned documents still awaiting review.
    pub awaiting_review: i64,
    /// Currently active alerts.
    pub active_alerts: i64,
}

/// Computes per-role dashboard statistics.
#[derive(Debug, Clone)]
pub struct DashboardService {
    /// Document repository.
    document_repo: Arc<DocumentRepository>,
    /// User repository.
    user_repo: Arc<UserRepository>,
    /// Alert repository.
    alert_repo: Arc<AlertRepository>,
}

impl DashboardService {
    /// Creates a new dashboard service.
    pub fn new(
        document_repo: Arc<DocumentRepository>,
        user_repo: Arc<UserRepository>,
        alert_repo: Arc<AlertRepository>,
    ) -> Self {
        Self {
            document_repo,
            user_repo,
            alert_repo,
        }
    }

    /// Builds the admin dashboard.
    pub async fn admin_dashboard(&self, ctx: &RequestContext) -> Result<AdminDashboard, AppError> {
        if !ctx.is_admin() {
            return Err(AppError::forbidden("Admin access required"));
        }

        let midnight = Utc::now()
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|t| t.and_utc())
            .unwrap_or_else(Utc::now);

        Ok(AdminDashboard {
            total_documents: self.document_repo.count_all().await?,
            pending_review: self
                .document_repo
                .count_by_status(DocumentStatus::Pending)
                .await?,
            approved: self
                .document_repo
                .count_by_status(DocumentStatus::Approved)
                .await?,
            rejected: self
                .document_repo
                .count_by_status(DocumentStatus::Rejected)
                .await?,
            approved_today: self
                .document_repo
                .count_decided_since(DocumentStatus::Approved, midnight)
                .await?,
            employees: self.user_repo.count_by_role(UserRole::Employee).await?,
            active_alerts: self.alert_repo.count_active().await?,
        })
    }

    /// Builds the employee dashboard for the acting user.
    pub async fn employee_dashboard(
        &self,
        ctx: &RequestContext,
    ) -> Result<EmployeeDashboard, AppError> {
        Ok(EmployeeDashboard {
            available_documents: self
                .document_repo
                .count_assigned_to(ctx.user_id, DocumentStatus::Approved)
                .await?,
            awaiting_review: self
                .document_repo
                .count_assigned_to(ctx.user_id, DocumentStatus::Pending)
                .await?,
            active_alerts: self.alert_repo.count_active().await?,
        })
    }
}
