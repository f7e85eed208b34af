//! # docportal-worker
//!
//! DB-backed background job processing: a queue over the `jobs` table, a
//! handler registry, a polling runner, and the document-enrichment job.

pub mod executor;
pub mod jobs;
pub mod queue;
pub mod runner;

pub use executor::{JobExecutionError, JobExecutor, JobHandler};
pub use queue::JobQueue;
pub use runner::WorkerRunner;
