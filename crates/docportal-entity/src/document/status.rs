//! Document lifecycle status enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle states of a document.
///
/// A document is created in `Pending` and moves to `Approved` or
/// `Rejected` exactly once; both are terminal. There is no re-open or
/// revert transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "document_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// Uploaded, awaiting admin review.
    Pending,
    /// Approved by an admin; visible to assigned employees.
    Approved,
    /// Rejected by an admin.
    Rejected,
}

impl DocumentStatus {
    /// Check if this status is a terminal review decision.
    pub fn is_decided(&self) -> bool {
        matches!(self, Self::Approved | Self::Rejected)
    }

    /// Check whether a transition from this status to `target` is allowed.
    ///
    /// Only `Pending → Approved` and `Pending → Rejected` are legal.
    pub fn can_transition_to(&self, target: DocumentStatus) -> bool {
        matches!(self, Self::Pending) && target.is_decided()
    }

    /// Return the status as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = docportal_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "approved" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(docportal_core::AppError::validation(format!(
                "Invalid document status: '{s}'. Expected one of: pending, approved, rejected"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_pending_can_transition() {
        assert!(DocumentStatus::Pending.can_transition_to(DocumentStatus::Approved));
        assert!(DocumentStatus::Pending.can_transition_to(DocumentStatus::Rejected));
        assert!(!DocumentStatus::Approved.can_transition_to(DocumentStatus::Rejected));
        assert!(!DocumentStatus::Rejected.can_transition_to(DocumentStatus::Approved));
    }

    #[test]
    fn test_pending_is_not_a_transition_target() {
        assert!(!DocumentStatus::Pending.can_transition_to(DocumentStatus::Pending));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "approved".parse::<DocumentStatus>().unwrap(),
            DocumentStatus::Approved
        );
        assert!("archived".parse::<DocumentStatus>().is_err());
    }
}
