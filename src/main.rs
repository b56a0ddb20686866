use std::sync::Arc;

use anyhow::Context;
use dotenvy::dotenv;
use registrar::router::init_router;
use registrar::state::AppState;
use registrar::views::Views;
use registrar_config::{DatabaseConfig, MongoConfig, ServerConfig};
use registrar_db::{MongoLecturerStore, PgRecordStore};
use registrar_observability::{init_metrics, init_tracing, shutdown_tracer};
use tokio::net::TcpListener;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    init_tracing();

    let server_config = ServerConfig::from_env();
    let database_config = DatabaseConfig::from_env();
    let mongo_config = MongoConfig::from_env();

    let records = PgRecordStore::connect(&database_config)
        .await
        .context("Failed to connect to PostgreSQL")?;
    let lecturers = MongoLecturerStore::new(mongo_config);
    let views = Views::new().context("Failed to load templates")?;
    let metrics = init_metrics().context("Failed to install metrics recorder")?;

    let state = AppState::new(
        Arc::new(records.clone()),
        Arc::new(lecturers),
        views,
        server_config.static_dir.clone(),
    )
    .with_metrics(metrics);
    let app = init_router(state);

    let address = server_config.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    info!("Server running on http://{}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    records.close().await;
    shutdown_tracer().await;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
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
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
