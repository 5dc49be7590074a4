//! Startup errors for the server.
//!
//! Request handling never fails with these: every issue operation resolves
//! to a JSON body. They cover configuration, binding and serving.

use std::path::PathBuf;

/// Server startup and shutdown errors.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The config file could not be read or written
    #[error("config file '{path}': {source}")]
    ConfigIo {
        /// Path of the config file
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// The config file is not valid TOML for this server
    #[error("failed to parse config file '{path}': {reason}")]
    ConfigParse {
        /// Path of the config file
        path: PathBuf,
        /// Parser message
        reason: String,
    },

    /// A config value is out of range or malformed
    #[error("invalid config: {reason}")]
    InvalidConfig {
        /// What is wrong with the value
        reason: String,
    },

    /// Binding or serving failed
    #[error("server i/o: {0}")]
    Io(#[from] std::io::Error),
}

impl ServerError {
    /// Create an InvalidConfig error
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        ServerError::InvalidConfig {
            reason: reason.into(),
        }
    }
}

/// Result type for server startup
pub type ServerResult<T> = std::result::Result<T, ServerError>;
