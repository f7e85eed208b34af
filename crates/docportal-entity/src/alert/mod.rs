//! Alert entity.

pub mod model;

pub use model::{Alert, AlertSeverity, CreateAlert};
