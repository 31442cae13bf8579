//! Web application router and middleware setup.

use crate::metrics::NetworkMetrics;
use crate::web::handlers;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Create the axum application serving `metrics`.
pub fn create_app(metrics: Arc<NetworkMetrics>) -> Router {
    Router::new()
        .route(crate::METRICS_PATH, get(handlers::get_metrics))
        .with_state(metrics)
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
}
