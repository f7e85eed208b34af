//! Job queue abstraction for enqueuing and dequeuing background jobs.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use docportal_core::error::AppError;
use docportal_database::repositories::job::JobRepository;
use docportal_entity::job::model::{CreateJob, Job};
use docportal_entity::job::status::JobStatus;

/// Job queue for enqueuing and dequeuing work.
#[derive(Debug, Clone)]
pub struct JobQueue {
    /// Job repository for database persistence.
    repo: Arc<JobRepository>,
    /// Worker identifier for claiming jobs.
    worker_id: String,
}

impl JobQueue {
    /// Create a new job queue.
    pub fn new(repo: Arc<JobRepository>, worker_id: String) -> Self {
        Self { repo, worker_id }
    }

    /// Enqueue a new job.
    pub async fn enqueue(&self, params: CreateJob) -> Result<Job, AppError> {
        let job = self.repo.create(&params).await?;
        tracing::debug!(job_id = %job.id, job_type = %job.job_type, "Enqueued job");
        Ok(job)
    }

    /// Dequeue the next available job, if any.
    pub async fn dequeue(&self) -> Result<Option<Job>, AppError> {
        let job = self.repo.claim_next(&self.worker_id).await?;
        if let Some(job) = &job {
            tracing::debug!(job_id = %job.id, job_type = %job.job_type, "Dequeued job");
        }
        Ok(job)
    }

    /// Mark a job as completed successfully.
    pub async fn complete(
        &self,
        job_id: Uuid,
        result: Option<serde_json::Value>,
    ) -> Result<(), AppError> {
        self.repo.mark_completed(job_id, result.as_ref()).await?;
        tracing::debug!(job_id = %job_id, "Job completed");
        Ok(())
    }

    /// Mark a job as failed.
    pub async fn fail(&self, job_id: Uuid, error: &str) -> Result<(), AppError> {
        self.repo.mark_failed(job_id, error).await?;
        tracing::debug!(job_id = %job_id, error, "Job failed");
        Ok(())
    }

    /// Return a job to the pending state for another attempt.
    pub async fn retry(&self, job_id: Uuid) -> Result<(), AppError> {
        self.repo.retry(job_id).await?;
        tracing::debug!(job_id = %job_id, "Job requeued for retry");
        Ok(())
    }

    /// Get queue statistics.
    pub async fn stats(&self) -> Result<QueueStats, AppError> {
        Ok(QueueStats {
            pending: self.repo.count_by_status(JobStatus::Pending).await?,
            running: self.repo.count_by_status(JobStatus::Running).await?,
            failed: self.repo.count_by_status(JobStatus::Failed).await?,
            worker_id: self.worker_id.clone(),
        })
    }
}

/// Queue statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QueueStats {
    /// Number of pending jobs.
    pub pending: i64,
    /// Number of running jobs.
    pub running: i64,
    /// Number of failed jobs.
    pub failed: i64,
    /// Current worker identifier.
    pub worker_id: String,
}
