use std::sync::Arc;
use std::time::Duration;

use remote_jobs_site::{
    config::{get_config, init_config},
    database::{pool::create_pool, PgCatalogStore},
    middleware::security::{new_security_state, security_headers_middleware},
    routes, AppState,
};
use tower_http::{services::ServeDir, timeout::TimeoutLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
    init_config()?;
    let config = get_config();

    info!("Starting remote jobs site v{}", env!("CARGO_PKG_VERSION"));

    let pool = create_pool(config).await?;
    if config.run_migrations {
        sqlx::migrate!("./migrations").run(&pool).await?;
        info!("Database migrations applied");
    }

    let app_state = AppState::new(Arc::new(PgCatalogStore::new(pool)));

    info!("Serving static files from: {}", config.static_dir);

    let app = routes::app(app_state)
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .layer(axum::middleware::from_fn_with_state(
            new_security_state(config.use_https),
            security_headers_middleware,
        ))
        .layer(TimeoutLayer::new(Duration::from_secs(config.request_timeout_secs)))
        .layer(TraceLayer::new_for_http());

    routes::serve(app, &config.server_address, shutdown_signal()).await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = ?e, "Failed to listen for ctrl+c");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => tracing::error!(error = ?e, "Failed to listen for SIGTERM"),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("Received ctrl+c, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}
