pub mod health;
pub mod pages;
pub mod path;

use std::future::Future;
use std::net::SocketAddr;

use axum::{routing::get, Router};
use tokio::net::TcpListener;

use crate::error::{Error, Result};
use crate::AppState;

/// Catalog pages plus the health probe. Static files, security headers and
/// timeouts are layered on by the binary.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .fallback(get(pages::dispatch))
        .with_state(state)
}

/// Binds `address` and serves `app` until `shutdown` resolves.
pub async fn serve<F>(app: Router, address: &str, shutdown: F) -> Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr: SocketAddr = address
        .parse()
        .map_err(|e| Error::Config(format!("Invalid server address {}: {}", address, e)))?;
    let listener = TcpListener::bind(addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}
