//! Stdio MCP server: newline-delimited JSON-RPC on stdin/stdout.
//! Diagnostics go to stderr through `tracing` so the protocol stream
//! stays clean. Every tool invocation is independent; the server keeps
//! no session state beyond the tool index built at startup.

use klaviyo_api::Tool;
use klaviyo_client::KlaviyoClient;
use klaviyo_core::ApiError;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::types::{
    InitializeResult, JsonRpcRequest, JsonRpcResponse, ListToolsResult, McpTool,
    ServerCapabilities, ServerInfo, ToolCallParams, ToolCallResult, ToolsCapability,
    INTERNAL_ERROR, INVALID_PARAMS, INVALID_REQUEST, METHOD_NOT_FOUND, PARSE_ERROR,
    PROTOCOL_VERSION,
};

pub struct McpServer {
    tools: Vec<Arc<dyn Tool>>,
    index: HashMap<String, Arc<dyn Tool>>,
}

impl McpServer {
    pub fn new(client: KlaviyoClient) -> Self {
        let tools = klaviyo_api::list_tools(&client);
        let index = tools
            .iter()
            .map(|tool| (tool.name().to_string(), tool.clone()))
            .collect();
        Self { tools, index }
    }

    /// Serve until stdin closes. One JSON-RPC message per line in, one
    /// response per line out; notifications produce no output.
    pub async fn serve_stdio(&self) -> std::io::Result<()> {
        info!(tools = self.tools.len(), "serving MCP over stdio");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            if let Some(response) = self.handle_message(&line).await {
                let mut payload = serde_json::to_vec(&response)?;
                payload.push(b'\n');
                stdout.write_all(&payload).await?;
                stdout.flush().await?;
            }
        }
        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle one raw message; `None` means nothing goes back on the
    /// wire (a notification, or a client-side response we ignore).
    pub async fn handle_message(&self, raw: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(raw) {
            Ok(request) => request,
            Err(e) => {
                warn!("unparseable message: {e}");
                return Some(JsonRpcResponse::failure(
                    Value::Null,
                    PARSE_ERROR,
                    format!("parse error: {e}"),
                ));
            }
        };

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::failure(
                request.id.unwrap_or(Value::Null),
                INVALID_REQUEST,
                format!("unsupported jsonrpc version '{}'", request.jsonrpc),
            ));
        }

        if request.is_notification() {
            debug!(method = request.method.as_str(), "notification");
            return None;
        }

        let id = request.id.unwrap_or(Value::Null);
        let params = request.params.unwrap_or(Value::Null);
        Some(match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(id, self.initialize_result()),
            "ping" => JsonRpcResponse::success(id, json!({})),
            "tools/list" => JsonRpcResponse::success(id, self.tools_list_result()),
            "tools/call" => self.handle_tools_call(id, params).await,
            other => JsonRpcResponse::failure(
                id,
                METHOD_NOT_FOUND,
                format!("method not found: {other}"),
            ),
        })
    }

    fn initialize_result(&self) -> Value {
        let result = InitializeResult {
            protocol_version: PROTOCOL_VERSION.to_string(),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: Some(false),
                }),
            },
            server_info: ServerInfo {
                name: "klaviyo-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };
        json!(result)
    }

    fn tools_list_result(&self) -> Value {
        let tools = self
            .tools
            .iter()
            .map(|tool| McpTool {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                input_schema: tool.schema(),
            })
            .collect();
        json!(ListToolsResult { tools })
    }

    async fn handle_tools_call(&self, id: Value, params: Value) -> JsonRpcResponse {
        let params: ToolCallParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                return JsonRpcResponse::failure(
                    id,
                    INVALID_PARAMS,
                    format!("invalid tools/call params: {e}"),
                )
            }
        };
        let Some(tool) = self.index.get(&params.name) else {
            return JsonRpcResponse::failure(
                id,
                INVALID_PARAMS,
                format!("unknown tool: {}", params.name),
            );
        };

        debug!(tool = params.name.as_str(), "tool call");
        let result = match tool.execute(params.arguments).await {
            Ok(value) => match serde_json::to_string_pretty(&value) {
                Ok(text) => ToolCallResult::text(text),
                Err(e) => {
                    return JsonRpcResponse::failure(
                        id,
                        INTERNAL_ERROR,
                        format!("unserializable result: {e}"),
                    )
                }
            },
            Err(e) => ToolCallResult::error(render_api_error(&e)),
        };
        JsonRpcResponse::success(id, json!(result))
    }
}

/// API failures surface as tool-level errors so the agent can read
/// them, not as protocol errors. The server's own error document is
/// appended verbatim when one was returned.
fn render_api_error(error: &ApiError) -> String {
    match error.detail() {
        Some(detail) if !detail.is_null() => format!("{error}\n{detail}"),
        _ => error.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use klaviyo_client::testing::RecordingTransport;
    use klaviyo_client::{AuthProvider, StaticTokenSource};

    fn server_with(transport: Arc<RecordingTransport>) -> McpServer {
        McpServer::new(KlaviyoClient::new(
            "https://a.klaviyo.com",
            transport,
            AuthProvider::new(Arc::new(StaticTokenSource::new("t"))),
        ))
    }

    fn result_of(response: JsonRpcResponse) -> Value {
        assert!(response.error.is_none(), "{:?}", response.error);
        response.result.unwrap()
    }

    #[tokio::test]
    async fn test_initialize_advertises_tools_capability() {
        let server = server_with(Arc::new(RecordingTransport::new()));
        let response = server
            .handle_message(r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#)
            .await
            .unwrap();
        let result = result_of(response);
        assert_eq!(result["protocolVersion"], PROTOCOL_VERSION);
        assert_eq!(result["serverInfo"]["name"], "klaviyo-mcp");
        assert!(result["capabilities"]["tools"].is_object());
    }

    #[tokio::test]
    async fn test_initialized_notification_gets_no_reply() {
        let server = server_with(Arc::new(RecordingTransport::new()));
        let response = server
            .handle_message(r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#)
            .await;
        assert!(response.is_none());
    }

    #[tokio::test]
    async fn test_tools_list_publishes_the_whole_catalog() {
        let server = server_with(Arc::new(RecordingTransport::new()));
        let response = server
            .handle_message(r#"{"jsonrpc":"2.0","id":2,"method":"tools/list"}"#)
            .await
            .unwrap();
        let result = result_of(response);
        let tools = result["tools"].as_array().unwrap();
        assert_eq!(tools.len(), klaviyo_api::count());
        let get_campaigns = tools
            .iter()
            .find(|t| t["name"] == "get_campaigns")
            .unwrap();
        assert!(get_campaigns["inputSchema"]["properties"]["fields_campaign"].is_object());
    }

    #[tokio::test]
    async fn test_tools_call_round_trip() {
        let transport = Arc::new(RecordingTransport::new());
        transport.push_response(
            200,
            HashMap::new(),
            r#"{"data": {"type": "account", "id": "A1"}}"#,
        );
        let server = server_with(transport.clone());

        let response = server
            .handle_message(
                r#"{"jsonrpc":"2.0","id":3,"method":"tools/call",
                   "params":{"name":"get_account","arguments":{"id":"A1"}}}"#,
            )
            .await
            .unwrap();
        let result = result_of(response);
        assert_ne!(result["isError"], true);
        let text = result["content"][0]["text"].as_str().unwrap();
        let decoded: Value = serde_json::from_str(text).unwrap();
        assert_eq!(decoded["data"]["id"], "A1");
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_api_failure_is_a_tool_error_not_a_protocol_error() {
        let transport = Arc::new(RecordingTransport::new());
        transport.push_response(
            404,
            HashMap::new(),
            r#"{"errors": [{"status": "404", "detail": "no such campaign"}]}"#,
        );
        let server = server_with(transport);

        let response = server
            .handle_message(
                r#"{"jsonrpc":"2.0","id":4,"method":"tools/call",
                   "params":{"name":"get_campaign","arguments":{"id":"MISSING"}}}"#,
            )
            .await
            .unwrap();
        let result = result_of(response);
        assert_eq!(result["isError"], true);
        let text = result["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("get_campaign"));
        assert!(text.contains("no such campaign"));
    }

    #[tokio::test]
    async fn test_missing_required_argument_is_a_tool_error() {
        let transport = Arc::new(RecordingTransport::new());
        let server = server_with(transport.clone());

        let response = server
            .handle_message(
                r#"{"jsonrpc":"2.0","id":5,"method":"tools/call",
                   "params":{"name":"get_campaign","arguments":{}}}"#,
            )
            .await
            .unwrap();
        let result = result_of(response);
        assert_eq!(result["isError"], true);
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_unknown_tool_is_invalid_params() {
        let server = server_with(Arc::new(RecordingTransport::new()));
        let response = server
            .handle_message(
                r#"{"jsonrpc":"2.0","id":6,"method":"tools/call",
                   "params":{"name":"frobnicate","arguments":{}}}"#,
            )
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, INVALID_PARAMS);
    }

    #[tokio::test]
    async fn test_unknown_method_and_parse_error() {
        let server = server_with(Arc::new(RecordingTransport::new()));

        let response = server
            .handle_message(r#"{"jsonrpc":"2.0","id":7,"method":"resources/list"}"#)
            .await
            .unwrap();
        assert_eq!(response.error.unwrap().code, METHOD_NOT_FOUND);

        let response = server.handle_message("{not json").await.unwrap();
        assert_eq!(response.error.unwrap().code, PARSE_ERROR);
    }

    #[tokio::test]
    async fn test_wrong_jsonrpc_version_is_invalid_request() {
        let server = server_with(Arc::new(RecordingTransport::new()));
        let response = server
            .handle_message(r#"{"jsonrpc":"1.0","id":9,"method":"tools/list"}"#)
            .await
            .unwrap();
        assert_eq!(response.id, json!(9));
        assert_eq!(response.error.unwrap().code, INVALID_REQUEST);
    }

    #[tokio::test]
    async fn test_ping_answers_empty_object() {
        let server = server_with(Arc::new(RecordingTransport::new()));
        let response = server
            .handle_message(r#"{"jsonrpc":"2.0","id":8,"method":"ping"}"#)
            .await
            .unwrap();
        assert_eq!(result_of(response), json!({}));
    }
}
