//! Maps domain `AppError` to HTTP responses.
//!
//! The `IntoResponse` implementation for `AppError` lives in `docportal-core`
//! alongside the error type itself (orphan rules require the impl to be in the
//! crate that defines the type). The response body type is re-exported here so
//! existing `crate::error::ApiErrorResponse` paths keep working.

pub use docportal_core::error::ApiErrorResponse;
