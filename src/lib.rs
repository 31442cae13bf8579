//! # netstat_exporter - Network Statistics Exporter
//!
//! Periodically samples per-interface network statistics and exposes them as
//! pull-based Prometheus metrics over a loopback-only HTTP endpoint.
//!
//! ## Features
//!
//! - **Interface enumeration**: every non-loopback adapter known to the OS
//! - **Prometheus exposition**: counters and gauges labelled by `interface`
//! - **Pluggable sampling**: swap the simulated sampler for a real one
//! - **Library + Binary**: use as a crate or standalone application
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use netstat_exporter::{
//!     bind_listener, serve, NetworkCollector, NetworkMetrics, SimulatedSampler,
//!     SysinfoInterfaces, WebConfig,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let metrics = Arc::new(NetworkMetrics::new()?);
//!
//!     // Bind before spawning so a bind failure stops startup.
//!     let listener = bind_listener(&WebConfig::default()).await?;
//!     tokio::spawn(serve(listener, metrics.clone()));
//!
//!     let collector = NetworkCollector::new(metrics, SysinfoInterfaces::new(), SimulatedSampler);
//!     collector.run(std::time::Duration::from_secs(10)).await;
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod metrics;
pub mod web;

// Re-export public API
pub use error::{ExporterError, Result};
pub use metrics::{
    collector::{CycleReport, NetworkCollector},
    interfaces::{is_loopback, InterfaceSource, SysinfoInterfaces},
    registry::NetworkMetrics,
    sampler::{InterfaceSample, SimulatedSampler, StatsSampler},
};

pub use web::{bind_listener, create_app, serve, start_web_server, WebConfig};

/// The default collection interval in seconds
pub const DEFAULT_INTERVAL_SECS: u64 = 10;

/// The default web server host; only loopback addresses are accepted
pub const DEFAULT_WEB_HOST: &str = "127.0.0.1";

/// The default web server port
pub const DEFAULT_WEB_PORT: u16 = 8080;

/// Path the exposition text is served on
pub const METRICS_PATH: &str = "/metrics";
