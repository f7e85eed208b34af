//! File storage configuration.

use serde::{Deserialize, Serialize};

/// Storage settings for uploaded document files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Storage provider type. Only `"local"` is currently supported.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// Root directory for application data.
    #[serde(default = "default_data_root")]
    pub data_root: String,
    /// Maximum upload size in bytes.
    #[serde(default = "default_max_upload_size")]
    pub max_upload_size_bytes: u64,
    /// MIME types accepted for document uploads.
    #[serde(default = "default_allowed_mime_types")]
    pub allowed_mime_types: Vec<String>,
}

impl StorageConfig {
    /// Check whether a MIME type is accepted for upload.
    pub fn accepts_mime_type(&self, mime_type: &str) -> bool {
        self.allowed_mime_types.iter().any(|m| m == mime_type)
    }
}

fn default_provider() -> String {
    "local".to_string()
}

fn default_data_root() -> String {
    "data".to_string()
}

fn default_max_upload_size() -> u64 {
    10 * 1024 * 1024
}

fn default_allowed_mime_types() -> Vec<String> {
    vec![
        "application/pdf".to_string(),
        "application/msword".to_string(),
        "application/vnd.openxmlformats-officedocument.wordprocessingml.document".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_mime_types_accept_pdf_and_word() {
        let config = StorageConfig {
            provider: default_provider(),
            data_root: default_data_root(),
            max_upload_size_bytes: default_max_upload_size(),
            allowed_mime_types: default_allowed_mime_types(),
        };
        assert!(config.accepts_mime_type("application/pdf"));
        assert!(config.accepts_mime_type("application/msword"));
        assert!(!config.accepts_mime_type("image/png"));
    }
}
