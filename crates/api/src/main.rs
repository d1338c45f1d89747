use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use todo_api::config::{LogFormat, ServerConfig, StorageBackend};
use todo_api::router::build_app_router;
use todo_api::state::AppState;
use todo_db::repositories::{InMemoryTodoRepo, PgTodoRepo, TodoRepository};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Configuration ---
    let config = ServerConfig::from_env().expect("Invalid server configuration");

    // --- Tracing ---
    init_tracing(config.log_format);
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Storage ---
    let repo: Arc<dyn TodoRepository> = match &config.storage {
        StorageBackend::Postgres {
            database_url,
            max_connections,
        } => {
            let pool = todo_db::create_pool(database_url, *max_connections)
                .await
                .expect("Failed to connect to database");
            tracing::info!(max_connections, "Database connection pool created");

            todo_db::health_check(&pool)
                .await
                .expect("Database health check failed");
            tracing::info!("Database health check passed");

            todo_db::run_migrations(&pool)
                .await
                .expect("Failed to run database migrations");
            tracing::info!("Database migrations applied");

            Arc::new(PgTodoRepo::new(pool))
        }
        StorageBackend::Memory => {
            tracing::warn!("Using in-memory storage; todos will not survive a restart");
            Arc::new(InMemoryTodoRepo::new())
        }
    };

    // --- App state ---
    let state = AppState { repo };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(
        config.host.parse().expect("Invalid HOST address"),
        config.port,
    );
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "todo_api=debug,todo_db=debug,tower_http=debug".into());

    let (pretty, json) = match format {
        LogFormat::Pretty => (Some(tracing_subscriber::fmt::layer()), None),
        LogFormat::Json => (None, Some(tracing_subscriber::fmt::layer().json())),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(pretty)
        .with(json)
        .init();
}

/// Wait for SIGINT or SIGTERM to initiate graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
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
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
