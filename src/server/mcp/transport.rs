//! Streaming surface: a long-lived event stream per session plus a POST
//! endpoint the client uses to send JSON-RPC messages into that session.

use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{
        IntoResponse, Response,
        sse::{Event, KeepAlive, Sse},
    },
};
use futures::stream::{self, Stream, StreamExt};
use serde::Deserialize;
use std::convert::Infallible;
use std::time::Duration;
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::jsonrpc::{JsonRpcResponse, PARSE_ERROR};
use super::protocol::{handle_request, parse_message};
use super::session::{SessionGuard, SessionSender};
use crate::constants::mcp::{KEEP_ALIVE_SECONDS, MESSAGES_PATH};
use crate::server::AppState;

#[derive(Debug, Deserialize)]
pub struct SessionQuery {
    pub session_id: Option<String>,
}

/// Opens a session and streams its responses.
///
/// The first event is `endpoint`, carrying the path the client must POST
/// to. Every later event is a `message` with one serialized JSON-RPC
/// response. The stream ends after the configured idle period without
/// outbound messages, and the session is released when it ends.
pub async fn sse_handler(
    State(state): State<AppState>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let (id, rx) = state.sessions.open();
    let guard = SessionGuard::new(id, state.sessions.clone());
    let idle = state.session_idle_timeout;
    info!("Streaming session {} started", id);

    let endpoint = Event::default()
        .event("endpoint")
        .data(format!("{MESSAGES_PATH}?session_id={id}"));

    let messages = stream::unfold((rx, guard), move |(mut rx, guard)| async move {
        match tokio::time::timeout(idle, rx.recv()).await {
            Ok(Some(message)) => {
                let event = Event::default().event("message").data(message);
                Some((Ok(event), (rx, guard)))
            }
            Ok(None) => None,
            Err(_) => {
                info!("Session {} idle for {:?}, closing", guard.id(), idle);
                None
            }
        }
    });

    Sse::new(stream::once(async move { Ok(endpoint) }).chain(messages))
        .keep_alive(KeepAlive::new().interval(Duration::from_secs(KEEP_ALIVE_SECONDS)))
}

/// Accepts one client message for an open session.
///
/// Replies 202 and delivers the JSON-RPC response on the session stream.
/// A body that is not JSON is answered directly with 400.
pub async fn messages_handler(
    State(state): State<AppState>,
    Query(query): Query<SessionQuery>,
    body: String,
) -> Response {
    let Some(raw_id) = query.session_id else {
        return (StatusCode::BAD_REQUEST, "Missing session_id").into_response();
    };
    let Some(sender) = Uuid::parse_str(&raw_id)
        .ok()
        .and_then(|id| state.sessions.sender(&id))
    else {
        debug!("Message for unknown session {}", raw_id);
        return (StatusCode::NOT_FOUND, "Unknown session").into_response();
    };

    let request = match parse_message(&body) {
        Ok(request) => request,
        Err(response) => {
            if response.error.as_ref().map(|e| e.code) == Some(PARSE_ERROR) {
                warn!("Unparseable message for session {}", raw_id);
                return (StatusCode::BAD_REQUEST, Json(response)).into_response();
            }
            deliver(sender, response).await;
            return StatusCode::ACCEPTED.into_response();
        }
    };

    let api = state.api.clone();
    tokio::spawn(async move {
        if let Some(response) = handle_request(api.as_ref(), request).await {
            deliver(sender, response).await;
        }
    });

    StatusCode::ACCEPTED.into_response()
}

async fn deliver(sender: SessionSender, response: JsonRpcResponse) {
    match serde_json::to_string(&response) {
        Ok(text) => {
            if sender.send(text).await.is_err() {
                debug!("Session closed before response could be delivered");
            }
        }
        Err(e) => warn!("Failed to serialize response: {}", e),
    }
}

#[cfg(test)]
mod tests {
    use crate::constants::mcp::{MESSAGES_PATH, SSE_PATH};
    use crate::server::{AppState, create_router};
    use crate::testing_utils::{RecordingStatsApi, StubQuery, standings_json};
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use futures::StreamExt;
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::time::Duration;
    use tower::ServiceExt;

    fn state(api: RecordingStatsApi) -> AppState {
        AppState::new(Arc::new(api), 300)
    }

    fn post(path: &str, body: String) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(path)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    type EventStream = axum::body::BodyDataStream;

    /// Reads chunks until the collected text contains `needle`.
    async fn read_until(stream: &mut EventStream, needle: &str) -> String {
        let mut collected = String::new();
        while !collected.contains(needle) {
            let chunk = tokio::time::timeout(Duration::from_secs(5), stream.next())
                .await
                .expect("timed out waiting for event")
                .expect("stream ended")
                .unwrap();
            collected.push_str(&String::from_utf8_lossy(&chunk));
        }
        collected
    }

    fn data_line<'a>(events: &'a str, event: &str) -> &'a str {
        let marker = format!("event: {event}\ndata: ");
        let start = events.find(&marker).unwrap() + marker.len();
        events[start..].lines().next().unwrap()
    }

    #[tokio::test]
    async fn test_session_roundtrip() {
        let state = state(RecordingStatsApi::new().with(StubQuery::Standings, standings_json()));
        let router = create_router(state.clone());

        let response = router
            .clone()
            .oneshot(Request::builder().uri(SSE_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let mut body = response.into_body().into_data_stream();

        let events = read_until(&mut body, "session_id=").await;
        let endpoint = data_line(&events, "endpoint").to_string();
        assert!(endpoint.starts_with(MESSAGES_PATH));
        assert_eq!(state.sessions.len(), 1);

        let call = json!({"jsonrpc": "2.0", "id": 4, "method": "tools/call",
                          "params": {"name": "get_mlb_standings", "arguments": {"season": 2024}}});
        let accepted = router
            .clone()
            .oneshot(post(&endpoint, call.to_string()))
            .await
            .unwrap();
        assert_eq!(accepted.status(), StatusCode::ACCEPTED);

        let events = read_until(&mut body, "\"id\":4").await;
        let message: Value = serde_json::from_str(data_line(&events, "message")).unwrap();
        assert_eq!(message["id"], 4);
        assert_eq!(message["result"]["structuredContent"]["season"], 2024);

        drop(body);
        assert!(state.sessions.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_session_is_not_found() {
        let router = create_router(state(RecordingStatsApi::new()));
        let path = format!("{MESSAGES_PATH}?session_id={}", uuid::Uuid::new_v4());
        let response = router
            .oneshot(post(&path, json!({"jsonrpc": "2.0", "id": 1, "method": "ping"}).to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_missing_session_is_bad_request() {
        let router = create_router(state(RecordingStatsApi::new()));
        let response = router
            .oneshot(post(MESSAGES_PATH, "{}".to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unparseable_body_is_bad_request() {
        let state = state(RecordingStatsApi::new());
        let (id, _rx) = state.sessions.open();
        let router = create_router(state);
        let response = router
            .oneshot(post(
                &format!("{MESSAGES_PATH}?session_id={id}"),
                "{not json".to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"]["code"], -32700);
        assert_eq!(body["id"], Value::Null);
    }

    #[tokio::test]
    async fn test_invalid_request_is_delivered_on_stream() {
        let state = state(RecordingStatsApi::new());
        let (id, mut rx) = state.sessions.open();
        let router = create_router(state);
        let response = router
            .oneshot(post(
                &format!("{MESSAGES_PATH}?session_id={id}"),
                json!({"id": 8, "method": "ping"}).to_string(),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::ACCEPTED);
        let message: Value = serde_json::from_str(&rx.recv().await.unwrap()).unwrap();
        assert_eq!(message["id"], 8);
        assert_eq!(message["error"]["code"], -32600);
    }

    #[tokio::test]
    async fn test_idle_session_stream_ends() {
        let state = AppState {
            session_idle_timeout: Duration::from_millis(50),
            ..state(RecordingStatsApi::new())
        };
        let router = create_router(state.clone());
        let response = router
            .oneshot(Request::builder().uri(SSE_PATH).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let bytes = tokio::time::timeout(
            Duration::from_secs(5),
            to_bytes(response.into_body(), usize::MAX),
        )
        .await
        .expect("stream did not end")
        .unwrap();
        assert!(String::from_utf8_lossy(&bytes).contains("event: endpoint"));
        assert!(state.sessions.is_empty());
    }
}
