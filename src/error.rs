//! Error handling for the network statistics exporter.

/// A specialized `Result` type for exporter operations.
pub type Result<T> = std::result::Result<T, ExporterError>;

/// The main error type for exporter operations.
#[derive(Debug, thiserror::Error)]
pub enum ExporterError {
    /// Metric creation or registration failed
    #[error("Metric registration error: {0}")]
    Registration(#[from] prometheus::Error),

    /// Network interfaces could not be listed
    #[error("Interface enumeration error: {0}")]
    Enumeration(String),

    /// Web server error
    #[error("Web server error: {0}")]
    WebServer(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Exposition output could not be produced
    #[error("Encoding error: {0}")]
    Encoding(String),
}

impl ExporterError {
    /// Create a new enumeration error
    pub fn enumeration_error(msg: impl Into<String>) -> Self {
        Self::Enumeration(msg.into())
    }

    /// Create a new web server error
    pub fn web_server_error(msg: impl Into<String>) -> Self {
        Self::WebServer(msg.into())
    }

    /// Create a new configuration error
    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a new encoding error
    pub fn encoding_error(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }
}
