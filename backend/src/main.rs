//! Hawaii Climate API - Server
//!
//! Serves read-only queries over the Hawaii weather station dataset.

use std::sync::Arc;

use climate_api::{
    config::Config,
    create_app,
    error::AppError,
    store::{self, ObservationStore},
    AppState,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "climate_server=debug,climate_api=debug,tower_http=debug,sqlx=warn".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Hawaii Climate API server");
    tracing::info!("Environment: {}", config.environment);

    if config.query.trailing_window_days <= 0 {
        return Err(AppError::Configuration(format!(
            "query.trailing_window_days must be positive, got {}",
            config.query.trailing_window_days
        ))
        .into());
    }
    let addr = config.bind_addr()?;

    // Open the dataset
    tracing::info!("Connecting to dataset at {}", config.database.url);
    let db_pool = store::connect(&config.database).await?;

    if let Err(e) = store::verify_schema(&db_pool).await {
        db_pool.close().await;
        return Err(e.into());
    }
    tracing::info!("Dataset connection established");

    // Create application state
    let state = AppState {
        store: ObservationStore::new(db_pool.clone()),
        config: Arc::new(config),
    };

    // Build application
    let app = create_app(state);

    // Start server
    tracing::info!("Listening on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutting down, closing dataset connections");
    db_pool.close().await;

    Ok(())
}

/// Resolves on Ctrl-C or SIGTERM
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
}
