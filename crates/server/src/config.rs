//! Server configuration via `tracker.toml`
//!
//! A default `tracker.toml` can be written with `--init-config`. To change
//! settings, edit the file and restart.

use std::net::SocketAddr;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Default config file name, looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "tracker.toml";

/// Logging section of the config file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: `info`)
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Server configuration loaded from `tracker.toml`.
///
/// # Example
///
/// ```toml
/// listen = "0.0.0.0:3000"
/// cors = true
/// max_body_bytes = 65536
///
/// [logging]
/// level = "info"
/// json = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Socket address to listen on.
    #[serde(default = "default_listen")]
    pub listen: String,
    /// Answer cross-origin requests permissively.
    #[serde(default = "default_cors")]
    pub cors: bool,
    /// Largest accepted request body, in bytes.
    #[serde(default = "default_max_body_bytes")]
    pub max_body_bytes: usize,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

fn default_listen() -> String {
    "0.0.0.0:3000".to_string()
}

fn default_cors() -> bool {
    true
}

fn default_max_body_bytes() -> usize {
    64 * 1024
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            listen: default_listen(),
            cors: default_cors(),
            max_body_bytes: default_max_body_bytes(),
            logging: LoggingConfig::default(),
        }
    }
}

impl TrackerConfig {
    /// Parse the listen address.
    ///
    /// # Errors
    ///
    /// Returns an error if `listen` is not a `host:port` socket address.
    pub fn listen_addr(&self) -> ServerResult<SocketAddr> {
        self.listen.parse().map_err(|_| {
            ServerError::invalid_config(format!(
                "Invalid listen address '{}' in tracker.toml. Expected host:port, e.g. \"0.0.0.0:3000\".",
                self.listen
            ))
        })
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Issue tracker configuration
#
# Address and port to listen on
listen = "0.0.0.0:3000"

# Answer cross-origin requests from any origin (default: true)
cors = true

# Largest accepted request body in bytes (default: 65536)
max_body_bytes = 65536

[logging]
# Filter directive; RUST_LOG takes precedence when set
level = "info"
# Emit JSON lines instead of human-readable output
json = false
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if the
    /// listen address is malformed.
    pub fn from_file(path: &Path) -> ServerResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ServerError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        let config: TrackerConfig =
            toml::from_str(&content).map_err(|e| ServerError::ConfigParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    ///
    /// Returns `true` if the file was created.
    pub fn write_default_if_missing(path: &Path) -> ServerResult<bool> {
        if path.exists() {
            return Ok(false);
        }
        std::fs::write(path, Self::default_toml()).map_err(|source| ServerError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(true)
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> ServerResult<()> {
        self.listen_addr()?;
        if self.max_body_bytes == 0 {
            return Err(ServerError::invalid_config(
                "max_body_bytes must be greater than zero",
            ));
        }
        Ok(())
    }
}
