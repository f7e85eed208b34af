//! Worker runner — main loop that polls for jobs and executes them.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;

use docportal_core::config::worker::WorkerConfig;

use crate::executor::{JobExecutionError, JobExecutor};
use crate::queue::JobQueue;

/// Main worker runner that polls the queue and executes jobs.
#[derive(Debug)]
pub struct WorkerRunner {
    /// Job queue for polling.
    queue: Arc<JobQueue>,
    /// Job executor for dispatching.
    executor: Arc<JobExecutor>,
    /// Worker configuration.
    config: WorkerConfig,
    /// Worker identifier.
    worker_id: String,
}

impl WorkerRunner {
    /// Create a new worker runner.
    pub fn new(
        queue: Arc<JobQueue>,
        executor: Arc<JobExecutor>,
        config: WorkerConfig,
        worker_id: String,
    ) -> Self {
        Self {
            queue,
            executor,
            config,
            worker_id,
        }
    }

    /// Start the worker runner — runs until the cancel signal is received.
    pub async fn run(&self, mut cancel: watch::Receiver<bool>) {
        tracing::info!(
            worker_id = %self.worker_id,
            concurrency = self.config.concurrency,
            poll_interval = self.config.poll_interval_seconds,
            "Worker started"
        );

        let semaphore = Arc::new(tokio::sync::Semaphore::new(
            self.config.concurrency as usize,
        ));

        let poll_interval = Duration::from_secs(self.config.poll_interval_seconds);

        loop {
            tokio::select! {
                _ = cancel.changed() => {
                    if *cancel.borrow() {
                        tracing::info!(worker_id = %self.worker_id, "Worker received shutdown signal");
                        break;
                    }
                }
                _ = self.poll_and_execute(&semaphore) => {
                    tokio::select! {
                        _ = cancel.changed() => {
                            if *cancel.borrow() {
                                tracing::info!(worker_id = %self.worker_id, "Worker shutting down");
                                break;
                            }
                        }
                        _ = time::sleep(poll_interval) => {}
                    }
                }
            }
        }

        tracing::info!(
            worker_id = %self.worker_id,
            "Waiting for in-flight jobs to complete..."
        );

        let max_permits = self.config.concurrency;
        let _ = tokio::time::timeout(Duration::from_secs(30), semaphore.acquire_many(max_permits))
            .await;

        tracing::info!(worker_id = %self.worker_id, "Worker shut down complete");
    }

    /// Poll for a job and execute it if available.
    async fn poll_and_execute(&self, semaphore: &Arc<tokio::sync::Semaphore>) {
        let permit = match semaphore.clone().try_acquire_owned() {
            Ok(p) => p,
            Err(_) => {
                tracing::trace!("All worker slots occupied, waiting...");
                return;
            }
        };

        match self.queue.dequeue().await {
            Ok(Some(job)) => {
                let queue = Arc::clone(&self.queue);
                let executor = Arc::clone(&self.executor);
                let job_id = job.id;
                let can_retry = job.can_retry();

                tokio::spawn(async move {
                    let _permit = permit;

                    match executor.execute(&job).await {
                        Ok(result) => {
                            if let Err(e) = queue.complete(job_id, result).await {
                                tracing::error!(job_id = %job_id, error = %e, "Failed to mark job completed");
                            }
                        }
                        Err(JobExecutionError::Transient(msg)) => {
                            tracing::warn!(job_id = %job_id, error = %msg, "Job failed (transient)");
                            let outcome = if can_retry {
                                queue.retry(job_id).await
                            } else {
                                queue.fail(job_id, &msg).await
                            };
                            if let Err(e) = outcome {
                                tracing::error!(job_id = %job_id, error = %e, "Failed to record job outcome");
                            }
                        }
                        Err(JobExecutionError::Permanent(msg)) => {
                            tracing::error!(job_id = %job_id, error = %msg, "Job failed permanently");
                            if let Err(e) = queue.fail(job_id, &msg).await {
                                tracing::error!(job_id = %job_id, error = %e, "Failed to mark job failed");
                            }
                        }
                        Err(JobExecutionError::Internal(err)) => {
                            let msg = err.to_string();
                            tracing::error!(job_id = %job_id, error = %msg, "Job internal error");
                            if let Err(e) = queue.fail(job_id, &msg).await {
                                tracing::error!(job_id = %job_id, error = %e, "Failed to mark job failed");
                            }
                        }
                    }
                });
            }
            Ok(None) => {
                drop(permit);
                tracing::trace!("No jobs available");
            }
            Err(e) => {
                drop(permit);
                tracing::error!(error = %e, "Failed to dequeue job");
            }
        }
    }
}
