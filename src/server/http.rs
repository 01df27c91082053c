//! Conventional surface: one GET route per operation.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::Value;
use std::collections::HashMap;
use tracing::info;

use super::{AppState, error_body};
use crate::endpoints::{Operation, OperationParams};
use crate::error::{AppError, ErrorKind};

/// Operation failure rendered as `{ "error": { "kind", "message" } }`.
#[derive(Debug)]
pub struct ApiError(AppError);

impl From<AppError> for ApiError {
    fn from(error: AppError) -> Self {
        Self(error)
    }
}

/// HTTP status for an error kind.
pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::InvalidParameter => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::UpstreamUnavailable => StatusCode::BAD_GATEWAY,
        ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (status_for(self.0.kind()), Json(error_body(&self.0))).into_response()
    }
}

/// Routes for `/mlb/*` and `/health`.
pub fn routes() -> Router<AppState> {
    let router = Router::new().route("/health", get(health_check));
    Operation::ALL.into_iter().fold(router, |router, operation| {
        router.route(
            operation.path(),
            get(
                move |State(state): State<AppState>, Query(query): Query<HashMap<String, String>>| {
                    handle_operation(operation, state, query)
                },
            ),
        )
    })
}

async fn health_check() -> &'static str {
    "OK"
}

async fn handle_operation(
    operation: Operation,
    state: AppState,
    query: HashMap<String, String>,
) -> Result<Json<Value>, ApiError> {
    info!(surface = "http", path = operation.path(), "Handling request");
    let params = OperationParams::from_query(query);
    let record = operation.invoke(state.api.as_ref(), &params).await?;
    Ok(Json(record))
}
