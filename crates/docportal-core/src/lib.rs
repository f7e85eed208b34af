//! # docportal-core
//!
//! Core crate for the transit authority document portal. Contains the
//! unified error system, configuration schemas, pagination types, and the
//! storage provider trait.
//!
//! This crate has **no** internal dependencies on other portal crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
