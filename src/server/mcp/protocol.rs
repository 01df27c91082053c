//! MCP method handling: lifecycle, tool listing and tool calls.

use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use super::jsonrpc::{JsonRpcError, JsonRpcId, JsonRpcRequest, JsonRpcResponse};
use crate::constants::mcp::{PROTOCOL_VERSION, SERVER_NAME};
use crate::data_fetcher::StatsApi;
use crate::endpoints::{Operation, OperationParams};
use crate::server::error_body;

#[derive(Debug, Deserialize)]
struct ToolCallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

/// Parses one client message.
///
/// Text that is not JSON is a parse error. JSON that is not a request
/// object is an invalid request answered with whatever id could be read.
pub fn parse_message(body: &str) -> Result<JsonRpcRequest, JsonRpcResponse> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| JsonRpcResponse::failure(None, JsonRpcError::parse_error(e.to_string())))?;

    if value.get("id").is_some_and(Value::is_null) {
        return Err(JsonRpcResponse::failure(
            None,
            JsonRpcError::invalid_request("id must be a number or a string"),
        ));
    }

    let id: Option<JsonRpcId> = value
        .get("id")
        .cloned()
        .and_then(|id| serde_json::from_value(id).ok());

    let request: JsonRpcRequest = serde_json::from_value(value).map_err(|e| {
        JsonRpcResponse::failure(id.clone(), JsonRpcError::invalid_request(e.to_string()))
    })?;

    if !request.has_valid_version() {
        return Err(JsonRpcResponse::failure(
            id,
            JsonRpcError::invalid_request("jsonrpc must be \"2.0\""),
        ));
    }
    Ok(request)
}

/// Handles one request. Notifications produce no response.
pub async fn handle_request(api: &dyn StatsApi, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
    if request.is_notification() {
        debug!("Notification received: {}", request.method);
        return None;
    }

    let id = request.id.clone();
    let outcome = match request.method.as_str() {
        "initialize" => Ok(initialize_result()),
        "ping" => Ok(json!({})),
        "tools/list" => Ok(tools_list_result()),
        "tools/call" => call_tool(api, request.params).await,
        other => {
            warn!("Unknown method: {}", other);
            Err(JsonRpcError::method_not_found(other))
        }
    };

    Some(match outcome {
        Ok(result) => JsonRpcResponse::success(id, result),
        Err(error) => JsonRpcResponse::failure(id, error),
    })
}

/// Parses and handles a raw message body in one step.
pub async fn handle_message(api: &dyn StatsApi, body: &str) -> Option<JsonRpcResponse> {
    match parse_message(body) {
        Ok(request) => handle_request(api, request).await,
        Err(response) => Some(response),
    }
}

fn initialize_result() -> Value {
    json!({
        "protocolVersion": PROTOCOL_VERSION,
        "capabilities": {
            "tools": {"listChanged": false}
        },
        "serverInfo": {
            "name": SERVER_NAME,
            "version": env!("CARGO_PKG_VERSION")
        },
        "instructions": "Major League Baseball statistics. Use lookup_player and lookup_team to \
                         find ids, then query stats by id. Seasons default to the current year."
    })
}

/// Tool descriptors for every operation.
pub fn tools_list_result() -> Value {
    let tools: Vec<Value> = Operation::ALL
        .iter()
        .map(|op| {
            json!({
                "name": op.tool_name(),
                "description": op.description(),
                "inputSchema": op.input_schema()
            })
        })
        .collect();
    json!({ "tools": tools })
}

async fn call_tool(api: &dyn StatsApi, params: Option<Value>) -> Result<Value, JsonRpcError> {
    let params: ToolCallParams = params
        .ok_or_else(|| JsonRpcError::invalid_params("tools/call requires params"))
        .and_then(|p| {
            serde_json::from_value(p).map_err(|e| JsonRpcError::invalid_params(e.to_string()))
        })?;

    let operation = Operation::from_tool_name(&params.name)
        .ok_or_else(|| JsonRpcError::invalid_params(format!("Unknown tool: {}", params.name)))?;

    info!(surface = "mcp", tool = operation.tool_name(), "Handling tool call");

    // Operation failures are tool results, not protocol errors
    let result = match OperationParams::from_arguments(params.arguments) {
        Ok(arguments) => operation.invoke(api, &arguments).await,
        Err(e) => Err(e),
    };

    Ok(match result {
        Ok(record) => json!({
            "content": [{"type": "text", "text": record.to_string()}],
            "structuredContent": record,
            "isError": false
        }),
        Err(e) => json!({
            "content": [{"type": "text", "text": e.to_string()}],
            "structuredContent": error_body(&e),
            "isError": true
        }),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::server::mcp::jsonrpc::{
        INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
    };
    use crate::testing_utils::{RecordingStatsApi, StubQuery, standings_json};

    async fn roundtrip(api: &RecordingStatsApi, message: Value) -> JsonRpcResponse {
        handle_message(api, &message.to_string())
            .await
            .expect("expected a response")
    }

    #[tokio::test]
    async fn test_initialize() {
        let api = RecordingStatsApi::new();
        let response = roundtrip(
            &api,
            json!({"jsonrpc": "2.0", "id": 1, "method": "initialize",
                   "params": {"protocolVersion": "2024-11-05", "capabilities": {},
                              "clientInfo": {"name": "test", "version": "0"}}}),
        )
        .await;
        let result = response.result.unwrap();
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], SERVER_NAME);
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn test_notifications_get_no_response() {
        let api = RecordingStatsApi::new();
        let message = json!({"jsonrpc": "2.0", "method": "notifications/initialized"});
        assert!(handle_message(&api, &message.to_string()).await.is_none());
    }

    #[tokio::test]
    async fn test_tools_list_has_every_operation() {
        let api = RecordingStatsApi::new();
        let response = roundtrip(&api, json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"})).await;
        let result = response.result.unwrap();
        let names: Vec<&str> = result["tools"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "get_mlb_standings",
                "get_team_batting",
                "get_team_pitching",
                "get_mlb_roster",
                "get_player_batting",
                "get_player_pitching",
                "lookup_player",
                "lookup_team",
                "get_player_team"
            ]
        );
        assert_eq!(result["tools"][1]["inputSchema"]["required"], json!(["team_id"]));
    }

    #[tokio::test]
    async fn test_tool_call_success() {
        let api = RecordingStatsApi::new().with(StubQuery::Standings, standings_json());
        let response = roundtrip(
            &api,
            json!({"jsonrpc": "2.0", "id": "call-1", "method": "tools/call",
                   "params": {"name": "get_mlb_standings", "arguments": {"season": 2024}}}),
        )
        .await;
        assert_eq!(response.id, Some(JsonRpcId::String("call-1".to_string())));
        let result = response.result.unwrap();
        assert_eq!(result["isError"], false);
        assert_eq!(result["structuredContent"]["season"], 2024);
        let text: Value =
            serde_json::from_str(result["content"][0]["text"].as_str().unwrap()).unwrap();
        assert_eq!(text, result["structuredContent"]);
    }

    #[tokio::test]
    async fn test_tool_call_operation_error_is_tool_result() {
        let api = RecordingStatsApi::new();
        let response = roundtrip(
            &api,
            json!({"jsonrpc": "2.0", "id": 3, "method": "tools/call",
                   "params": {"name": "get_team_batting", "arguments": {"team_id": -5}}}),
        )
        .await;
        let result = response.result.unwrap();
        assert_eq!(result["isError"], true);
        assert_eq!(
            result["structuredContent"]["error"]["kind"],
            "invalid_parameter"
        );
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_protocol_errors() {
        let api = RecordingStatsApi::new();

        let response = handle_message(&api, "{not json").await.unwrap();
        assert_eq!(response.error.unwrap().code, PARSE_ERROR);

        let response = roundtrip(&api, json!({"id": 1, "method": "ping"})).await;
        assert_eq!(response.error.unwrap().code, INVALID_REQUEST);

        let response = roundtrip(&api, json!({"jsonrpc": "2.0", "id": 1})).await;
        assert_eq!(response.id, Some(JsonRpcId::Number(1)));
        assert_eq!(response.error.unwrap().code, INVALID_REQUEST);

        let response =
            roundtrip(&api, json!({"jsonrpc": "2.0", "id": 1, "method": "resources/list"})).await;
        assert_eq!(response.error.unwrap().code, METHOD_NOT_FOUND);

        let response = roundtrip(
            &api,
            json!({"jsonrpc": "2.0", "id": 1, "method": "tools/call",
                   "params": {"name": "get_nhl_standings"}}),
        )
        .await;
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);

        let response =
            roundtrip(&api, json!({"jsonrpc": "2.0", "id": 1, "method": "tools/call"})).await;
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_null_id_is_invalid_request() {
        let api = RecordingStatsApi::new().with(StubQuery::Standings, standings_json());
        let response = roundtrip(
            &api,
            json!({"jsonrpc": "2.0", "id": null, "method": "tools/call",
                   "params": {"name": "get_mlb_standings", "arguments": {"season": 2024}}}),
        )
        .await;
        assert_eq!(response.id, None);
        assert_eq!(response.error.unwrap().code, INVALID_REQUEST);
        assert_eq!(api.call_count(), 0);
    }

    #[tokio::test]
    async fn test_ping() {
        let api = RecordingStatsApi::new();
        let response = roundtrip(&api, json!({"jsonrpc": "2.0", "id": 9, "method": "ping"})).await;
        assert_eq!(response.result, Some(json!({})));
    }
}
