//! Document enrichment job handler.
//!
//! Reads the stored bytes of a freshly uploaded document, extracts plain
//! text, asks the configured summarization API for a summary, and writes
//! both back onto the document row. Failures here never touch the
//! document's status or metadata.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use uuid::Uuid;

use docportal_core::config::enrichment::EnrichmentConfig;
use docportal_core::error::ErrorKind;
use docportal_database::repositories::document::DocumentRepository;
use docportal_entity::job::model::Job;
use docportal_storage::StorageManager;

use crate::executor::{JobExecutionError, JobHandler};

/// Payload carried by a `document_enrichment` job.
#[derive(Debug, Deserialize)]
struct EnrichmentPayload {
    /// The document to enrich.
    document_id: Uuid,
    /// Locator of the stored bytes.
    storage_path: String,
}

/// Handles `document_enrichment` jobs.
pub struct EnrichmentJobHandler {
    /// Document repository.
    document_repo: Arc<DocumentRepository>,
    /// Storage manager.
    storage: Arc<StorageManager>,
    /// HTTP client for the summarization API.
    client: reqwest::Client,
    /// Enrichment configuration.
    config: EnrichmentConfig,
}

impl std::fmt::Debug for EnrichmentJobHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnrichmentJobHandler")
            .field("model", &self.config.model)
            .finish()
    }
}

impl EnrichmentJobHandler {
    /// Creates a new enrichment handler.
    pub fn new(
        document_repo: Arc<DocumentRepository>,
        storage: Arc<StorageManager>,
        config: EnrichmentConfig,
    ) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_seconds))
            .build()
            .unwrap_or_default();

        Self {
            document_repo,
            storage,
            client,
            config,
        }
    }

    /// Asks the summarization API for a summary of the extracted text.
    async fn summarize(&self, text: &str) -> Result<String, JobExecutionError> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.api_url.trim_end_matches('/'),
            self.config.model,
            self.config.api_key
        );

        let body = json!({
            "contents": [{
                "parts": [{
                    "text": format!(
                        "Please provide a concise summary of the following document text:\n\n{text}"
                    ),
                }],
            }],
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| JobExecutionError::Transient(format!("Summarization request failed: {e}")))?;

        if !response.status().is_success() {
            return Err(JobExecutionError::Transient(format!(
                "Summarization API returned {}",
                response.status()
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| JobExecutionError::Transient(format!("Invalid API response: {e}")))?;

        payload["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| {
                JobExecutionError::Permanent("Summarization API returned no text".to_string())
            })
    }
}

#[async_trait]
impl JobHandler for EnrichmentJobHandler {
    fn job_type(&self) -> &str {
        "document_enrichment"
    }

    async fn execute(&self, job: &Job) -> Result<Option<Value>, JobExecutionError> {
        let payload: EnrichmentPayload = serde_json::from_value(job.payload.clone())
            .map_err(|e| JobExecutionError::Permanent(format!("Invalid payload: {e}")))?;

        // A vanished document is not coming back; don't retry.
        let document = self
            .document_repo
            .find_by_id(payload.document_id)
            .await?
            .ok_or_else(|| {
                JobExecutionError::Permanent(format!(
                    "Document {} no longer exists",
                    payload.document_id
                ))
            })?;

        let data = self
            .storage
            .read_bytes(&payload.storage_path)
            .await
            .map_err(|e| match e.kind {
                ErrorKind::NotFound => {
                    JobExecutionError::Permanent(format!("Stored file missing: {e}"))
                }
                _ => JobExecutionError::Transient(format!("Storage read failed: {e}")),
            })?;

        let parsed_text = extract_text(&data, self.config.max_prompt_chars);

        let summary = if self.config.api_key.is_empty() || parsed_text.is_empty() {
            None
        } else {
            Some(self.summarize(&parsed_text).await?)
        };

        self.document_repo
            .set_enrichment(document.id, &parsed_text, summary.as_deref())
            .await?;

        tracing::info!(
            document_id = %document.id,
            extracted_chars = parsed_text.len(),
            summarized = summary.is_some(),
            "Document enriched"
        );

        Ok(Some(json!({
            "document_id": document.id,
            "extracted_text_preview": preview(&parsed_text),
            "summary_preview": summary.as_deref().map(preview),
        })))
    }
}

/// Truncates enrichment output for the job result record.
fn preview(text: &str) -> String {
    const PREVIEW_CHARS: usize = 200;
    if text.len() <= PREVIEW_CHARS {
        return text.to_string();
    }
    let cut = text
        .char_indices()
        .take_while(|(i, _)| *i < PREVIEW_CHARS)
        .last()
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    format!("{}...", &text[..cut])
}

/// Extracts readable text from raw document bytes.
///
/// Collects printable UTF-8 runs of at least four characters, which pulls
/// the text layer out of PDFs and plain documents without a full parser.
/// Output is capped at `max_chars`.
fn extract_text(data: &[u8], max_chars: usize) -> String {
    let mut out = String::new();
    let mut run = String::new();

    for chunk in String::from_utf8_lossy(data).split(|c: char| c.is_control() && c != '\n') {
        for word in chunk.split_whitespace() {
            if word.chars().all(|c| !c.is_control()) && word.len() >= 4 {
                if !run.is_empty() {
                    run.push(' ');
                }
                run.push_str(word);
            }
        }
        if !run.is_empty() {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(&run);
            run.clear();
        }
        if out.len() >= max_chars {
            break;
        }
    }

    if out.len() > max_chars {
        out.truncate(max_chars);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_text_finds_readable_runs() {
        let data = b"\x00\x01binary Safety bulletin text for metro operations\x02\x03";
        let text = extract_text(data, 1000);
        assert!(text.contains("Safety bulletin text"));
        assert!(text.contains("operations"));
    }

    #[test]
    fn test_extract_text_skips_short_noise() {
        let data = b"ab cd ef a meaningful sentence survives";
        let text = extract_text(data, 1000);
        assert!(!text.contains("ab cd"));
        assert!(text.contains("meaningful sentence survives"));
    }

    #[test]
    fn test_extract_text_respects_cap() {
        let data = "longword ".repeat(100);
        let text = extract_text(data.as_bytes(), 40);
        assert!(text.len() <= 40);
    }

    #[test]
    fn test_extract_text_empty_input() {
        assert!(extract_text(b"", 100).is_empty());
    }
}
