//! Alert entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use uuid::Uuid;

/// Severity level of an operational alert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "alert_severity", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    /// Requires immediate attention (safety drills, incident notices).
    High,
    /// Routine operational notice.
    Medium,
    /// Informational.
    Low,
}

impl AlertSeverity {
    /// Return the severity as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl fmt::Display for AlertSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An operational alert published by an admin, visible to all users.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Alert {
    /// Unique alert identifier.
    pub id: Uuid,
    /// Alert title.
    pub title: String,
    /// Alert body text.
    pub message: String,
    /// Severity level.
    pub severity: AlertSeverity,
    /// The admin who published the alert.
    pub created_by: Uuid,
    /// When the alert was published.
    pub created_at: DateTime<Utc>,
    /// When the alert stops being shown (None = never).
    pub expires_at: Option<DateTime<Utc>>,
}

impl Alert {
    /// Check if the alert has expired.
    pub fn is_expired(&self) -> bool {
        self.expires_at.map(|exp| exp <= Utc::now()).unwrap_or(false)
    }
}

/// Data required to publish a new alert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAlert {
    /// Alert title.
    pub title: String,
    /// Alert body text.
    pub message: String,
    /// Severity level.
    pub severity: AlertSeverity,
    /// The publishing admin.
    pub created_by: Uuid,
    /// Optional expiry time.
    pub expires_at: Option<DateTime<Utc>>,
}
