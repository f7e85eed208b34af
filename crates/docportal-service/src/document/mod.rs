//! Document lifecycle and upload services.

pub mod service;
pub mod upload;

pub use service::DocumentService;
pub use upload::{UploadOutcome, UploadParams, UploadService};
