//! # Tracker Server
//!
//! HTTP surface for the issue tracker: the route table, request body
//! extraction, configuration and logging setup.
//!
//! ```no_run
//! use tracker_server::{Server, TrackerConfig};
//!
//! # async fn run() -> tracker_server::ServerResult<()> {
//! let config = TrackerConfig::default();
//! Server::new(config).run().await
//! # }
//! ```

#![warn(missing_docs)]

pub mod body;
pub mod config;
mod error;
pub mod logging;
pub mod routes;
mod server;

pub use config::{LoggingConfig, TrackerConfig, CONFIG_FILE_NAME};
pub use error::{ServerError, ServerResult};
pub use logging::init_logging;
pub use server::Server;
