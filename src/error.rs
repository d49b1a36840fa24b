use thiserror::Error;

use crate::adapter::config::ConfigError;

/// Startup failures. Every one of these ends the process.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Configuration error: {0}")]
    ConfigurationError(#[from] ConfigError),

    #[error("Failed to bind {address}: {source}")]
    BindError {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to start server: {0}")]
    ServerError(#[source] std::io::Error),
}
