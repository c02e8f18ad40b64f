use std::future::IntoFuture;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use marquee_api::config::{AppConfig, StoreBackend};
use marquee_api::router::build_app_router;
use marquee_api::state::AppState;
use marquee_db::{InMemoryMetricStore, MetricStore, PgMetricStore};
use marquee_pipeline::{MetricGateway, MovieQueryPipeline};
use marquee_tmdb::TmdbApi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marquee_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // --- Configuration ---
    let config = AppConfig::from_env()
        .inspect_err(|e| tracing::error!(error = %e, "Invalid configuration"))?;
    tracing::info!(
        host = %config.server.host,
        port = %config.server.port,
        tmdb_api_url = %config.tmdb_api_url,
        debounce_ms = config.debounce.as_millis() as u64,
        "Loaded configuration",
    );

    // --- Metric store ---
    let store: Arc<dyn MetricStore> = match &config.store {
        StoreBackend::Postgres { database_url } => {
            let pool = marquee_db::create_pool(database_url)
                .await
                .context("Failed to connect to database")?;
            tracing::info!("Database connection pool created");

            marquee_db::health_check(&pool)
                .await
                .context("Database health check failed")?;
            tracing::info!("Database health check passed");

            marquee_db::run_migrations(&pool)
                .await
                .context("Failed to run database migrations")?;
            tracing::info!("Database migrations applied");

            Arc::new(PgMetricStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("Using in-memory metric store, counts are lost on restart");
            Arc::new(InMemoryMetricStore::new())
        }
    };

    // --- Movie provider ---
    let tmdb = TmdbApi::new(config.tmdb_api_url.clone(), config.tmdb_access_token.clone());

    // --- App state ---
    let state = AppState {
        config: Arc::new(config.server.clone()),
        pipeline: MovieQueryPipeline::new(Arc::new(tmdb), MetricGateway::new(store)),
        debounce: config.debounce,
    };

    let app = build_app_router(state, &config.server);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.server.host.parse().context("Invalid HOST address")?,
        config.server.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    // Live search sockets stay open until the client leaves, so graceful
    // shutdown is bounded.
    let shutdown = CancellationToken::new();
    let server = axum::serve(listener, app).with_graceful_shutdown({
        let shutdown = shutdown.clone();
        async move {
            shutdown_signal().await;
            shutdown.cancel();
        }
    });
    let grace = Duration::from_secs(config.server.shutdown_timeout_secs);

    tokio::select! {
        result = server.into_future() => result.context("Server error")?,
        () = async {
            shutdown.cancelled().await;
            tokio::time::sleep(grace).await;
        } => {
            tracing::warn!(
                grace_secs = grace.as_secs(),
                "Connections still open after shutdown timeout, closing them",
            );
        }
    }

    tracing::info!("Graceful shutdown complete");
    Ok(())
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix) so the server
/// shuts down cleanly whether stopped interactively or by a process
/// manager.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl-C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
