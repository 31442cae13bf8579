//! Web server configuration.

use crate::error::{ExporterError, Result};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

/// Configuration for the metrics server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    /// Host to bind the server to; must resolve to a loopback address
    pub host: String,
    /// Port to bind the server to
    pub port: u16,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: crate::DEFAULT_WEB_HOST.to_string(),
            port: crate::DEFAULT_WEB_PORT,
        }
    }
}

impl WebConfig {
    /// Create a new web configuration with custom host and port.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Set the host for the web server.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Set the port for the web server.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Get the full bind address; IPv6 hosts are bracketed.
    pub fn bind_address(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    /// Resolve the socket address to bind.
    ///
    /// Only loopback hosts are accepted so the endpoint is never reachable
    /// from other machines.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip = if self.host == "localhost" {
            IpAddr::V4(Ipv4Addr::LOCALHOST)
        } else {
            self.host
                .parse::<IpAddr>()
                .map_err(|e| ExporterError::config_error(format!("Invalid host {}: {}", self.host, e)))?
        };

        if !ip.is_loopback() {
            return Err(ExporterError::config_error(format!(
                "Refusing to bind non-loopback address {}",
                ip
            )));
        }

        Ok(SocketAddr::new(ip, self.port))
    }
}
