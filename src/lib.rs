//! MLB Stats MCP Library
//!
//! Translates a small set of baseball statistics queries into requests against
//! the public MLB Stats API, adds derived statistics, and serves the results
//! both as plain HTTP endpoints and as MCP tools over a server-sent event stream.
//!
//! # Examples
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use mlb_stats_mcp::data_fetcher::MlbStatsClient;
//! use mlb_stats_mcp::endpoints::{Operation, OperationParams};
//! use mlb_stats_mcp::{AppError, Config};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let config = Config::load().await?;
//!     let api = MlbStatsClient::from_config(&config)?;
//!
//!     // Call an operation directly, without a transport
//!     let params = OperationParams::new().with("season", 2024);
//!     let standings = Operation::Standings.invoke(&api, &params).await?;
//!     println!("{standings:#}");
//!
//!     // Or serve both surfaces
//!     mlb_stats_mcp::server::serve(&config, Arc::new(api)).await
//! }
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod data_fetcher;
pub mod endpoints;
pub mod error;
pub mod logging;
pub mod lookup;
pub mod server;
pub mod stats;
pub mod testing_utils;

// Re-export commonly used types for convenience
pub use config::Config;
pub use data_fetcher::{MlbStatsClient, StatsApi};
pub use endpoints::{Operation, OperationParams};
pub use error::AppError;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
