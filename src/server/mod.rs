//! Transport surfaces sharing one [`AppState`].
//!
//! Both surfaces dispatch through [`Operation::invoke`](crate::endpoints::Operation::invoke),
//! so a query answered over HTTP and the same query made as a tool call
//! yield identical records.

pub mod http;
pub mod mcp;

use axum::{
    Router,
    routing::{get, post},
};
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::constants::mcp::{MESSAGES_PATH, SSE_PATH};
use crate::data_fetcher::StatsApi;
use crate::error::AppError;
use mcp::SessionRegistry;

/// State shared by every request handler.
#[derive(Clone)]
pub struct AppState {
    pub api: Arc<dyn StatsApi>,
    pub sessions: SessionRegistry,
    pub session_idle_timeout: Duration,
}

impl AppState {
    pub fn new(api: Arc<dyn StatsApi>, session_idle_timeout_seconds: u64) -> Self {
        Self {
            api,
            sessions: SessionRegistry::new(),
            session_idle_timeout: Duration::from_secs(session_idle_timeout_seconds),
        }
    }
}

/// Error record shared by both surfaces.
pub fn error_body(error: &AppError) -> Value {
    json!({
        "error": {
            "kind": error.kind(),
            "message": error.to_string()
        }
    })
}

/// Builds the router with the HTTP operations, the health check and the
/// streaming session endpoints.
pub fn create_router(state: AppState) -> Router {
    http::routes()
        .route(SSE_PATH, get(mcp::transport::sse_handler))
        .route(MESSAGES_PATH, post(mcp::transport::messages_handler))
        .with_state(state)
}

/// Binds the configured address and serves until Ctrl-C.
pub async fn serve(config: &Config, api: Arc<dyn StatsApi>) -> Result<(), AppError> {
    let state = AppState::new(api, config.session_idle_timeout_seconds);
    let address = config.bind_address();
    let listener = TcpListener::bind(&address).await?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, create_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
