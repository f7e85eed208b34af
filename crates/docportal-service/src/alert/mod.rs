//! Alert service.

pub mod service;

pub use service::AlertService;
