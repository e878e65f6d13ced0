//! HTTP surface (axum).
//!
//! | Route              | Method | Purpose                               |
//! |--------------------|--------|---------------------------------------|
//! | `/`                | GET    | welcome message                       |
//! | `/health`          | GET    | liveness, answers before training     |
//! | `/status`          | GET    | readiness and model counts            |
//! | `/recommend`       | GET    | `?product=` fuzzy lookup              |
//! | `/add_order`       | POST   | `{order_id, products}` then retrain   |

pub mod error;
pub mod handlers;

use std::net::SocketAddr;

use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tokio::signal;
use tracing::info;

use crate::error::Result;
use handlers::SharedService;

/// Build the application router over `service`.
pub fn router(service: SharedService) -> Router {
    Router::new()
        .route("/", get(handlers::home))
        .route("/health", get(handlers::health))
        .route("/status", get(handlers::status))
        .route("/recommend", get(handlers::recommend))
        .route("/add_order", post(handlers::add_order))
        .with_state(service)
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: SocketAddr, service: SharedService) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "HTTP server listening");

    axum::serve(listener, router(service))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
