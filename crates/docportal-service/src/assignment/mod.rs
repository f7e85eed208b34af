//! Assignment ledger service.

pub mod service;

pub use service::AssignmentService;
