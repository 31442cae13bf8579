//! HTTP exposition of the network metrics.
//!
//! A single `GET /metrics` endpoint serves the registry in the Prometheus text
//! format. The listener only ever binds loopback addresses.

pub mod config;
pub mod handlers;
pub mod router;

// Re-export commonly used items
pub use config::WebConfig;
pub use router::create_app;

use crate::error::{ExporterError, Result};
use crate::metrics::NetworkMetrics;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

/// Bind the metrics listener described by `config`.
///
/// Fails for non-loopback hosts and when the address cannot be bound.
pub async fn bind_listener(config: &WebConfig) -> Result<TcpListener> {
    let addr = config.socket_addr()?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| ExporterError::web_server_error(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Metrics available at http://{}{}", addr, crate::METRICS_PATH);
    Ok(listener)
}

/// Serve `metrics` on an already bound listener until the server stops.
pub async fn serve(listener: TcpListener, metrics: Arc<NetworkMetrics>) -> Result<()> {
    let app = create_app(metrics);

    axum::serve(listener, app)
        .await
        .map_err(|e| ExporterError::web_server_error(format!("Server error: {}", e)))
}

/// Bind according to `config` and serve `metrics`.
pub async fn start_web_server(config: WebConfig, metrics: Arc<NetworkMetrics>) -> Result<()> {
    let listener = bind_listener(&config).await?;
    serve(listener, metrics).await
}
