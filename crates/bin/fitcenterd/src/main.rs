//! # fitcenterd — fitness center daemon
//!
//! Composition root that wires all adapters together and starts the server.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialize logging
//! - Build the lazy `SQLite` connection pool and bootstrap the schema
//! - Construct repository implementations (adapters)
//! - Construct application services, injecting repositories via port traits
//! - Build the axum router, injecting application services
//! - Bind to a TCP port and serve
//! - Handle graceful shutdown (SIGTERM/SIGINT)
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer: no domain logic belongs here.

mod config;

use fitcenter_adapter_http_axum::state::AppState;
use fitcenter_adapter_storage_sqlite_sqlx::{
    SqliteMemberRepository, SqliteWorkoutSessionRepository,
};
use fitcenter_app::services::member_service::MemberService;
use fitcenter_app::services::workout_session_service::WorkoutSessionService;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_new(&config.logging.filter)?)
        .init();

    // Database
    let db = config.storage().build()?;
    match db.ensure_schema().await {
        Ok(()) => tracing::info!("database schema ready"),
        Err(err) => tracing::warn!(error = %err, "schema bootstrap failed, serving anyway"),
    }
    let pool = db.pool().clone();

    // Repositories
    let member_repo = SqliteMemberRepository::new(pool.clone());
    let session_repo = SqliteWorkoutSessionRepository::new(pool);

    // Services
    let member_service = MemberService::new(member_repo);
    let session_service = WorkoutSessionService::new(session_repo);

    // HTTP
    let state = AppState::new(member_service, session_service);
    let app = fitcenter_adapter_http_axum::router::build(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("fitcenterd listening on http://{bind_addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("fitcenterd stopped");
    Ok(())
}

/// Resolve on Ctrl-C or SIGTERM.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => tracing::info!("received Ctrl-C, shutting down"),
        () = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
