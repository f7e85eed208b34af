//! # docportal-entity
//!
//! Domain entity models for the transit authority document portal. Every
//! struct in this crate represents a database table row or a domain value
//! object. All entities derive `Debug`, `Clone`, `Serialize`,
//! `Deserialize`, and database entities additionally derive
//! `sqlx::FromRow`.

pub mod alert;
pub mod assignment;
pub mod document;
pub mod job;
pub mod user;
