//! Tool surface: one callable handle per descriptor. The MCP layer
//! publishes the handle's name, description and input schema and
//! forwards invocations here; all execution goes through the shared
//! pipeline in `KlaviyoClient`.

use async_trait::async_trait;
use klaviyo_client::{EndpointDescriptor, KlaviyoClient, ParamSpec, Placement};
use klaviyo_core::{ApiError, Result};
use serde_json::{json, Map, Value};
use std::sync::Arc;

use crate::registry;

#[async_trait]
pub trait Tool: Send + Sync {
    fn name(&self) -> &str;
    fn description(&self) -> &str;
    fn schema(&self) -> Value;
    async fn execute(&self, args: Value) -> Result<Value>;
}

/// A descriptor bound to a client. Stateless; cloning the client is
/// cheap, so every registered tool shares one transport.
pub struct OperationTool {
    descriptor: &'static EndpointDescriptor,
    client: KlaviyoClient,
}

impl OperationTool {
    pub fn new(descriptor: &'static EndpointDescriptor, client: KlaviyoClient) -> Self {
        Self { descriptor, client }
    }
}

#[async_trait]
impl Tool for OperationTool {
    fn name(&self) -> &str {
        self.descriptor.operation_id
    }

    fn description(&self) -> &str {
        self.descriptor.description
    }

    fn schema(&self) -> Value {
        input_schema(self.descriptor)
    }

    async fn execute(&self, args: Value) -> Result<Value> {
        let args: Map<String, Value> = match args {
            Value::Object(map) => map,
            Value::Null => Map::new(),
            _ => {
                return Err(ApiError::InvalidArguments {
                    operation: self.descriptor.operation_id.to_string(),
                    message: "arguments must be a JSON object".to_string(),
                })
            }
        };
        self.client.execute(self.descriptor, &args).await
    }
}

/// The ordered sequence of callable handles, one per registered
/// descriptor.
pub fn list_tools(client: &KlaviyoClient) -> Vec<Arc<dyn Tool>> {
    registry::all()
        .iter()
        .map(|descriptor| {
            Arc::new(OperationTool::new(descriptor, client.clone())) as Arc<dyn Tool>
        })
        .collect()
}

/// JSON schema for a descriptor's argument bag, derived from the
/// parameter table. Wire spellings are surfaced in the descriptions so
/// a caller can map an argument back to the documented query key.
pub fn input_schema(descriptor: &EndpointDescriptor) -> Value {
    let mut properties = Map::new();
    let mut required = Vec::new();
    for param in &descriptor.params {
        properties.insert(param.arg_name.to_string(), param_schema(param));
        if param.required {
            required.push(Value::String(param.arg_name.to_string()));
        }
    }
    json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

fn param_schema(param: &ParamSpec) -> Value {
    if param.is_file {
        return json!({
            "type": "string",
            "description": format!("Local path of the file sent as the '{}' part.", param.wire_name),
        });
    }
    match param.placement {
        Placement::Path => json!({
            "type": "string",
            "description": format!("'{}' segment of the request path.", param.arg_name),
        }),
        Placement::Body if param.arg_name == "data" => json!({
            "description": "JSON:API 'data' member, embedded verbatim. An object for \
                            single resources, an array for relationship operations.",
        }),
        Placement::Body => json!({
            "type": "string",
            "description": format!("'{}' field of the request body.", param.wire_name),
        }),
        Placement::Query => query_schema(param),
    }
}

fn query_schema(param: &ParamSpec) -> Value {
    let wire = param.wire_name;
    let (kind, description) = if wire.starts_with("fields[") {
        (
            "string",
            format!("Sparse fieldset sent as '{wire}'; comma-separated attribute names."),
        )
    } else if wire.starts_with("additional-fields[") {
        (
            "string",
            format!("Extra computed fields sent as '{wire}'; comma-separated."),
        )
    } else if wire == "page[cursor]" {
        (
            "string",
            "Opaque pagination cursor from a previous response's links.".to_string(),
        )
    } else if wire == "page[size]" {
        (
            "integer",
            "Page size; limits are endpoint-specific and enforced server-side.".to_string(),
        )
    } else if wire == "include" {
        (
            "string",
            "Comma-separated related resources to include in the response.".to_string(),
        )
    } else if wire == "filter" {
        (
            "string",
            "Filter expression in the Klaviyo filter grammar, passed through opaquely."
                .to_string(),
        )
    } else if wire == "sort" {
        (
            "string",
            "Sort field; prefix with '-' for descending order.".to_string(),
        )
    } else if wire == "company_id" {
        (
            "string",
            "Public API key (site id) identifying the account.".to_string(),
        )
    } else {
        ("string", format!("'{wire}' query parameter."))
    };
    json!({"type": kind, "description": description})
}

#[cfg(test)]
mod tests {
    use super::*;
    use klaviyo_client::testing::RecordingTransport;
    use klaviyo_client::{AuthProvider, StaticTokenSource};
    use klaviyo_core::ApiError;

    fn client(transport: Arc<RecordingTransport>) -> KlaviyoClient {
        KlaviyoClient::new(
            "https://a.klaviyo.com",
            transport,
            AuthProvider::new(Arc::new(StaticTokenSource::new("t"))),
        )
    }

    #[test]
    fn test_every_tool_matches_a_descriptor_and_vice_versa() {
        let transport = Arc::new(RecordingTransport::new());
        let tools = list_tools(&client(transport));
        assert_eq!(tools.len(), registry::count());
        for tool in &tools {
            let descriptor = registry::find(tool.name())
                .unwrap_or_else(|| panic!("tool '{}' has no descriptor", tool.name()));
            assert_eq!(tool.description(), descriptor.description);
        }
    }

    #[test]
    fn test_schema_lists_required_arguments() {
        let descriptor = registry::find("update_campaign").unwrap();
        let schema = input_schema(descriptor);
        assert_eq!(schema["type"], "object");
        let required: Vec<&str> = schema["required"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(required, vec!["id", "data"]);
    }

    #[test]
    fn test_schema_descriptions_carry_wire_spellings() {
        let descriptor = registry::find("get_campaigns").unwrap();
        let schema = input_schema(descriptor);
        let fields = &schema["properties"]["fields_campaign"];
        assert!(fields["description"]
            .as_str()
            .unwrap()
            .contains("fields[campaign]"));
        assert_eq!(fields["type"], "string");
    }

    #[test]
    fn test_page_size_is_typed_integer() {
        let descriptor = registry::find("get_profiles").unwrap();
        let schema = input_schema(descriptor);
        assert_eq!(schema["properties"]["page_size"]["type"], "integer");
    }

    #[tokio::test]
    async fn test_execute_forwards_through_the_pipeline() {
        let transport = Arc::new(RecordingTransport::new());
        transport.push_response(
            200,
            Default::default(),
            r#"{"data": {"type": "campaign", "id": "C1"}}"#,
        );
        let tools = list_tools(&client(transport.clone()));
        let tool = tools
            .iter()
            .find(|t| t.name() == "get_campaign")
            .unwrap();

        let result = tool.execute(json!({"id": "C1"})).await.unwrap();
        assert_eq!(result["data"]["id"], "C1");
        assert_eq!(
            transport.calls()[0].url,
            "https://a.klaviyo.com/api/campaigns/C1"
        );
    }

    #[tokio::test]
    async fn test_non_object_arguments_never_reach_the_wire() {
        let transport = Arc::new(RecordingTransport::new());
        let tools = list_tools(&client(transport.clone()));
        // No required params, so a coerced empty bag would go through.
        let tool = tools
            .iter()
            .find(|t| t.name() == "get_webhook_topics")
            .unwrap();

        let err = tool.execute(json!([1, 2, 3])).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidArguments { .. }));
        assert_eq!(transport.call_count(), 0);

        // Null stays equivalent to "no arguments".
        tool.execute(Value::Null).await.unwrap();
        assert_eq!(transport.call_count(), 1);
    }

    #[tokio::test]
    async fn test_required_guard_holds_across_the_whole_table() {
        let transport = Arc::new(RecordingTransport::new());
        let client = client(transport.clone());
        for descriptor in registry::all() {
            if !descriptor.params.iter().any(|p| p.required) {
                continue;
            }
            let err = client
                .execute(descriptor, &Map::new())
                .await
                .expect_err(descriptor.operation_id);
            assert!(
                matches!(err, ApiError::MissingRequiredParameter { .. }),
                "'{}' raised {err:?}",
                descriptor.operation_id
            );
        }
        assert_eq!(transport.call_count(), 0);
    }
}
