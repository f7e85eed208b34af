//! Application builder — wires repositories, services, and the worker
//! together and runs the HTTP server.

use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::watch;

use docportal_auth::{JwtDecoder, JwtEncoder, PasswordHasher};
use docportal_core::config::AppConfig;
use docportal_core::error::AppError;
use docportal_database::repositories::alert::AlertRepository;
use docportal_database::repositories::assignment::AssignmentRepository;
use docportal_database::repositories::document::DocumentRepository;
use docportal_database::repositories::job::JobRepository;
use docportal_database::repositories::user::UserRepository;
use docportal_service::alert::AlertService;
use docportal_service::assignment::AssignmentService;
use docportal_service::auth::AuthService;
use docportal_service::document::{DocumentService, UploadService};
use docportal_service::report::DashboardService;
use docportal_storage::StorageManager;
use docportal_worker::jobs::enrichment::EnrichmentJobHandler;
use docportal_worker::{JobExecutor, JobQueue, WorkerRunner};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the shared application state from configuration and a pool.
///
/// Also used by the integration test harness, which drives the router
/// directly without binding a listener.
pub async fn build_state(config: AppConfig, db_pool: PgPool) -> Result<AppState, AppError> {
    let storage = Arc::new(StorageManager::new(&config.storage).await?);

    let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
    let document_repo = Arc::new(DocumentRepository::new(db_pool.clone()));
    let assignment_repo = Arc::new(AssignmentRepository::new(db_pool.clone()));
    let alert_repo = Arc::new(AlertRepository::new(db_pool.clone()));
    let job_repo = Arc::new(JobRepository::new(db_pool.clone()));

    let password_hasher = Arc::new(PasswordHasher::new());
    let jwt_encoder = Arc::new(JwtEncoder::new(&config.auth));
    let jwt_decoder = Arc::new(JwtDecoder::new(&config.auth));

    let auth_service = Arc::new(AuthService::new(
        Arc::clone(&user_repo),
        Arc::clone(&password_hasher),
        Arc::clone(&jwt_encoder),
        Arc::clone(&jwt_decoder),
        config.auth.clone(),
    ));
    let assignment_service = Arc::new(AssignmentService::new(
        Arc::clone(&assignment_repo),
        Arc::clone(&document_repo),
        Arc::clone(&user_repo),
    ));
    let document_service = Arc::new(DocumentService::new(
        Arc::clone(&document_repo),
        Arc::clone(&assignment_repo),
        Arc::clone(&storage),
    ));
    let upload_service = Arc::new(UploadService::new(
        Arc::clone(&document_repo),
        Arc::clone(&job_repo),
        Arc::clone(&assignment_service),
        Arc::clone(&storage),
        config.storage.clone(),
        config.enrichment.clone(),
    ));
    let alert_service = Arc::new(AlertService::new(Arc::clone(&alert_repo)));
    let dashboard_service = Arc::new(DashboardService::new(
        Arc::clone(&document_repo),
        Arc::clone(&user_repo),
        Arc::clone(&alert_repo),
    ));

    Ok(AppState {
        config: Arc::new(config),
        db_pool,
        storage,
        jwt_decoder,
        auth_service,
        document_service,
        upload_service,
        assignment_service,
        alert_service,
        dashboard_service,
    })
}

/// Runs the portal server with the given configuration and database pool.
pub async fn run_server(config: AppConfig, db_pool: PgPool) -> Result<(), AppError> {
    let state = build_state(config, db_pool.clone()).await?;
    let config = Arc::clone(&state.config);

    // ── Shutdown channel & background worker ─────────────────────
    let (shutdown_tx, shutdown_rx) = watch::channel(false);

    let worker_handle = if config.worker.enabled {
        let worker_id = format!("worker-{}", &uuid::Uuid::new_v4().to_string()[..8]);

        let job_repo = Arc::new(JobRepository::new(db_pool.clone()));
        let document_repo = Arc::new(DocumentRepository::new(db_pool.clone()));
        let job_queue = Arc::new(JobQueue::new(Arc::clone(&job_repo), worker_id.clone()));

        let mut job_executor = JobExecutor::new();
        job_executor.register(Arc::new(EnrichmentJobHandler::new(
            document_repo,
            Arc::clone(&state.storage),
            config.enrichment.clone(),
        )));
        let job_executor = Arc::new(job_executor);

        let runner = WorkerRunner::new(
            job_queue,
            job_executor,
            config.worker.clone(),
            worker_id,
        );

        let worker_cancel = shutdown_rx.clone();
        tracing::info!("Background worker started");
        Some(tokio::spawn(async move {
            runner.run(worker_cancel).await;
        }))
    } else {
        tracing::info!("Background worker disabled");
        None
    };

    // ── HTTP server ──────────────────────────────────────────────
    let app = build_router(state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("Document portal listening on {}", addr);

    let server = axum::serve(listener, app).with_graceful_shutdown(async move {
        shutdown_signal().await;
        tracing::info!("Shutdown signal received, starting graceful shutdown...");
        let _ = shutdown_tx.send(true);
    });

    server
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    if let Some(handle) = worker_handle {
        let grace = std::time::Duration::from_secs(config.server.shutdown_grace_seconds);
        let _ = tokio::time::timeout(grace, handle).await;
    }

    tracing::info!("Document portal shut down gracefully");
    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
