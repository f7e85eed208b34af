//! Document category enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of document categories used by the transit authority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "document_category", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DocumentCategory {
    /// Day-to-day operations (ridership reports, schedules).
    Operations,
    /// Safety and compliance material.
    Safety,
    /// Rolling stock and infrastructure maintenance.
    Maintenance,
    /// Human resources.
    Hr,
    /// Finance.
    Finance,
    /// Technical documentation.
    Technical,
}

impl DocumentCategory {
    /// Return the category as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operations => "operations",
            Self::Safety => "safety",
            Self::Maintenance => "maintenance",
            Self::Hr => "hr",
            Self::Finance => "finance",
            Self::Technical => "technical",
        }
    }
}

impl fmt::Display for DocumentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentCategory {
    type Err = docportal_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "operations" => Ok(Self::Operations),
            "safety" => Ok(Self::Safety),
            "maintenance" => Ok(Self::Maintenance),
            "hr" => Ok(Self::Hr),
            "finance" => Ok(Self::Finance),
            "technical" => Ok(Self::Technical),
            _ => Err(docportal_core::AppError::validation(format!(
                "Invalid document category: '{s}'. Expected one of: operations, safety, \
                 maintenance, hr, finance, technical"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!(
            "safety".parse::<DocumentCategory>().unwrap(),
            DocumentCategory::Safety
        );
        assert_eq!(
            "HR".parse::<DocumentCategory>().unwrap(),
            DocumentCategory::Hr
        );
        assert!("legal".parse::<DocumentCategory>().is_err());
    }
}
