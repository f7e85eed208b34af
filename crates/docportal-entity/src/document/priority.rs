//! Document priority enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority assigned to a document at upload time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "document_priority", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DocumentPriority {
    /// Urgent material (safety bulletins, incident reports).
    High,
    /// Default priority.
    Medium,
    /// Informational material.
    Low,
}

impl DocumentPriority {
    /// Return the priority as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

impl Default for DocumentPriority {
    fn default() -> Self {
        Self::Medium
    }
}

impl fmt::Display for DocumentPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentPriority {
    type Err = docportal_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            _ => Err(docportal_core::AppError::validation(format!(
                "Invalid document priority: '{s}'. Expected one of: high, medium, low"
            ))),
        }
    }
}
