//! Execution kernel for the Klaviyo API: one descriptor-driven
//! pipeline replaces the per-endpoint request dance. Build the plan,
//! mint headers, dispatch, classify, decode.

use klaviyo_core::{ApiError, HttpMethod, Result};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::debug;

pub mod auth;
pub mod builder;
pub mod descriptor;
pub mod testing;
pub mod transport;

pub use auth::{AuthProvider, EnvTokenSource, StaticTokenSource, TokenSource};
pub use builder::{build_plan, RequestPlan};
pub use descriptor::{AuthKind, BodyKind, EndpointDescriptor, ParamSpec, Placement};
pub use transport::{HttpTransport, MultipartField, MultipartValue, RequestBody, WireResponse};

/// Uniform executor for every endpoint the descriptor table names.
/// Holds no per-call state; clones share the transport and the token
/// source, so independent callers can issue calls concurrently.
#[derive(Clone)]
pub struct KlaviyoClient {
    base_url: String,
    transport: Arc<dyn HttpTransport>,
    auth: AuthProvider,
}

impl KlaviyoClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: Arc<dyn HttpTransport>,
        auth: AuthProvider,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            transport,
            auth,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute one operation: build the plan, attach auth and revision
    /// headers, perform the round-trip, classify failures and decode
    /// the JSON payload. An explicit no-content response decodes to
    /// `Value::Null`.
    pub async fn execute(
        &self,
        descriptor: &EndpointDescriptor,
        args: &Map<String, Value>,
    ) -> Result<Value> {
        let mut plan = build_plan(&self.base_url, descriptor, args)?;
        let has_json_body = matches!(plan.body, Some(RequestBody::Json(_)));
        plan.headers = self.auth.headers(descriptor.auth, has_json_body).await?;

        debug!(
            operation = plan.operation.as_str(),
            method = %plan.method,
            url = plan.url.as_str(),
            "dispatching request"
        );

        let response = self.dispatch(&plan).await.map_err(|e| match e {
            // The transport does not know which operation it served.
            ApiError::TransportFailure { message, .. } => ApiError::TransportFailure {
                operation: plan.operation.clone(),
                message,
            },
            other => other,
        })?;

        if !response.is_success() {
            let retry_after = response
                .header("retry-after")
                .and_then(|v| v.trim().parse::<u64>().ok());
            let detail = response.json().unwrap_or(Value::Null);
            return Err(ApiError::from_status(
                &plan.operation,
                response.status,
                retry_after,
                detail,
            ));
        }

        if response.status == 204 || response.body.trim().is_empty() {
            return Ok(Value::Null);
        }

        response.json().map_err(|e| ApiError::DecodeError {
            operation: plan.operation.clone(),
            message: e.to_string(),
        })
    }

    async fn dispatch(&self, plan: &RequestPlan) -> Result<WireResponse> {
        match plan.method {
            HttpMethod::Get => self.transport.get(&plan.url, &plan.headers).await,
            HttpMethod::Post => {
                self.transport
                    .post(&plan.url, &plan.headers, plan.body.clone())
                    .await
            }
            HttpMethod::Patch => {
                self.transport
                    .patch(&plan.url, &plan.headers, plan.body.clone())
                    .await
            }
            HttpMethod::Delete => {
                self.transport
                    .delete(&plan.url, &plan.headers, plan.body.clone())
                    .await
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingTransport;
    use klaviyo_core::API_REVISION;
    use serde_json::json;
    use std::collections::HashMap;

    fn client_with(transport: Arc<RecordingTransport>) -> KlaviyoClient {
        KlaviyoClient::new(
            "https://a.klaviyo.com",
            transport,
            AuthProvider::new(Arc::new(StaticTokenSource::new("test-token"))),
        )
    }

    fn args(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    fn get_campaign() -> EndpointDescriptor {
        EndpointDescriptor::get("get_campaign", "/api/campaigns/{id}")
            .path("id")
            .query_as("fields_campaign", "fields[campaign]")
            .query("include")
            .build()
    }

    #[tokio::test]
    async fn test_success_decodes_payload() {
        let transport = Arc::new(RecordingTransport::new());
        transport.push_response(200, HashMap::new(), r#"{"data": {"id": "01HABC"}}"#);
        let client = client_with(transport.clone());

        let result = client
            .execute(&get_campaign(), &args(json!({"id": "01HABC"})))
            .await
            .unwrap();
        assert_eq!(result["data"]["id"], "01HABC");

        let calls = transport.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].url, "https://a.klaviyo.com/api/campaigns/01HABC");
        assert_eq!(
            calls[0].headers.get("Authorization").unwrap(),
            "Bearer test-token"
        );
        assert_eq!(calls[0].headers.get("revision").unwrap(), API_REVISION);
    }

    #[tokio::test]
    async fn test_missing_required_performs_no_transport_call() {
        let transport = Arc::new(RecordingTransport::new());
        let client = client_with(transport.clone());

        let err = client
            .execute(&get_campaign(), &args(json!({"id": null})))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingRequiredParameter { .. }));
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_rate_limited_carries_retry_after() {
        let transport = Arc::new(RecordingTransport::new());
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), "7".to_string());
        transport.push_response(429, headers, r#"{"errors": [{"status": "429"}]}"#);
        let client = client_with(transport);

        let err = client
            .execute(&get_campaign(), &args(json!({"id": "01HABC"})))
            .await
            .unwrap_err();
        match err {
            ApiError::RateLimited {
                operation,
                retry_after,
                ..
            } => {
                assert_eq!(operation, "get_campaign");
                assert_eq!(retry_after, Some(7));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_status_fanout() {
        for (status, check) in [
            (400u16, "BadRequest"),
            (401, "Unauthorized"),
            (403, "Forbidden"),
            (404, "NotFound"),
            (409, "Conflict"),
            (422, "UnprocessableEntity"),
            (500, "ServerError"),
            (502, "ServerError"),
        ] {
            let transport = Arc::new(RecordingTransport::new());
            transport.push_response(status, HashMap::new(), r#"{"errors": []}"#);
            let client = client_with(transport);
            let err = client
                .execute(&get_campaign(), &args(json!({"id": "X"})))
                .await
                .unwrap_err();
            assert_eq!(err.status(), Some(status), "status {status} -> {check}");
            let matched = match (check, &err) {
                ("BadRequest", ApiError::BadRequest { .. })
                | ("Unauthorized", ApiError::Unauthorized { .. })
                | ("Forbidden", ApiError::Forbidden { .. })
                | ("NotFound", ApiError::NotFound { .. })
                | ("Conflict", ApiError::Conflict { .. })
                | ("UnprocessableEntity", ApiError::UnprocessableEntity { .. })
                | ("ServerError", ApiError::ServerError { .. }) => true,
                _ => false,
            };
            assert!(matched, "status {status} classified as {err:?}");
            assert_eq!(err.detail(), Some(&json!({"errors": []})));
        }
    }

    #[tokio::test]
    async fn test_no_content_decodes_to_null() {
        let transport = Arc::new(RecordingTransport::new());
        transport.push_response(204, HashMap::new(), "");
        let client = client_with(transport);
        let descriptor = EndpointDescriptor::delete("delete_campaign", "/api/campaigns/{id}")
            .path("id")
            .build();

        let result = client
            .execute(&descriptor, &args(json!({"id": "01HABC"})))
            .await
            .unwrap();
        assert_eq!(result, Value::Null);
    }

    #[tokio::test]
    async fn test_malformed_success_body_is_decode_error() {
        let transport = Arc::new(RecordingTransport::new());
        transport.push_response(200, HashMap::new(), "not json");
        let client = client_with(transport);

        let err = client
            .execute(&get_campaign(), &args(json!({"id": "01HABC"})))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::DecodeError { .. }));
    }

    #[tokio::test]
    async fn test_public_endpoint_has_no_bearer_header() {
        let transport = Arc::new(RecordingTransport::new());
        transport.push_response(202, HashMap::new(), "");
        let client = client_with(transport.clone());
        let descriptor = EndpointDescriptor::post("create_client_event", "/client/events")
            .public()
            .data()
            .build();

        client
            .execute(
                &descriptor,
                &args(json!({
                    "company_id": "ABCDEF",
                    "data": {"type": "event"}
                })),
            )
            .await
            .unwrap();

        let calls = transport.calls();
        assert_eq!(
            calls[0].url,
            "https://a.klaviyo.com/client/events?company_id=ABCDEF"
        );
        assert!(!calls[0].headers.contains_key("Authorization"));
        assert_eq!(calls[0].headers.get("revision").unwrap(), API_REVISION);
    }

    #[tokio::test]
    async fn test_transport_failure_names_the_operation() {
        let transport = Arc::new(RecordingTransport::failing("connection reset"));
        let client = client_with(transport);

        let err = client
            .execute(&get_campaign(), &args(json!({"id": "01HABC"})))
            .await
            .unwrap_err();
        match err {
            ApiError::TransportFailure { operation, message } => {
                assert_eq!(operation, "get_campaign");
                assert!(message.contains("connection reset"));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
