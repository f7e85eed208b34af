//! # docportal-service
//!
//! Business logic for the document portal: the document lifecycle engine,
//! the assignment ledger, role-scoped reads, upload handling, alerts, and
//! dashboard statistics. Every operation receives an explicit
//! [`context::RequestContext`] identifying the acting user.

pub mod alert;
pub mod assignment;
pub mod auth;
pub mod context;
pub mod document;
pub mod report;

pub use context::RequestContext;
