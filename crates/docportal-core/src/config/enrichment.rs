//! Document enrichment configuration.

use serde::{Deserialize, Serialize};

/// Settings for the post-upload enrichment pipeline.
///
/// Enrichment extracts text from an uploaded document and asks an external
/// summarization API for a summary. When `api_key` is empty the pipeline
/// degrades to text extraction only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrichmentConfig {
    /// Whether enrichment jobs are enqueued after upload.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Base URL of the summarization API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// API key for the summarization API. Empty disables summarization.
    #[serde(default)]
    pub api_key: String,
    /// Model identifier passed to the API.
    #[serde(default = "default_model")]
    pub model: String,
    /// Request timeout in seconds for API calls.
    #[serde(default = "default_timeout")]
    pub request_timeout_seconds: u64,
    /// Maximum attempts per enrichment job.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: i32,
    /// Maximum number of extracted characters sent to the API.
    #[serde(default = "default_max_prompt_chars")]
    pub max_prompt_chars: usize,
}

fn default_enabled() -> bool {
    true
}

fn default_api_url() -> String {
    "https://generativelanguage.googleapis.com/v1beta".to_string()
}

fn default_model() -> String {
    "gemini-pro".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_max_attempts() -> i32 {
    3
}

fn default_max_prompt_chars() -> usize {
    20_000
}
