pub mod client;
pub mod http_client;
pub mod urls;
mod fetch_utils;

pub use client::{MlbStatsClient, StatsApi};
pub use fetch_utils::status_error;
pub use http_client::create_http_client_with_timeout;
// Re-export URL utilities
pub use urls::*;
