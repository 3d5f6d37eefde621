use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use recipe_lab_api::app::build_router;
use recipe_lab_api::config::ServerConfig;
use recipe_lab_api::state::AppState;
use recipe_lab_db::DbConfig;

const DEFAULT_LOG_FILTER: &str = "recipe_lab_api=debug,recipe_lab_db=info,tower_http=debug";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();
    let db_config = DbConfig::from_env();
    tracing::info!(
        host = %config.host,
        port = config.port,
        timeout_secs = config.request_timeout_secs,
        db_max_connections = db_config.max_connections,
        db_min_connections = db_config.min_connections,
        "Configuration loaded"
    );

    let pool = recipe_lab_db::create_pool(&db_config)
        .await
        .expect("Failed to connect to database");
    recipe_lab_db::health_check(&pool)
        .await
        .expect("Database did not answer SELECT 1");
    recipe_lab_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database ready, migrations applied");

    let app = build_router(AppState { pool: pool.clone() }, &config)
        .expect("CORS_ORIGINS contains an invalid origin");

    let addr = config.bind_addr().expect("HOST must be an IP address");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");
    tracing::info!(%addr, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    // In-flight requests have drained; release connections before exit.
    pool.close().await;
    tracing::info!("Shutdown complete");
}

/// Resolves on Ctrl-C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let interrupt = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Ctrl-C handler unavailable");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "SIGTERM handler unavailable");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let signal = tokio::select! {
        () = interrupt => "SIGINT",
        () = terminate => "SIGTERM",
    };
    tracing::info!(signal, "Shutting down, draining in-flight requests");
}
