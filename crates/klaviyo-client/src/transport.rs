//! HTTP round-trip adapter. The only component that touches sockets;
//! everything above it works against the `HttpTransport` trait, which
//! is also the substitution seam for tests.

use async_trait::async_trait;
use klaviyo_core::{ApiError, HttpMethod, Result};
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

/// Request body as handed to the transport.
#[derive(Debug, Clone)]
pub enum RequestBody {
    Json(Value),
    Multipart(Vec<MultipartField>),
}

#[derive(Debug, Clone)]
pub struct MultipartField {
    pub name: String,
    pub value: MultipartValue,
}

#[derive(Debug, Clone)]
pub enum MultipartValue {
    Text(String),
    /// Local file whose bytes become the part body.
    File(PathBuf),
}

/// What came back over the wire, decoupled from any HTTP client type.
#[derive(Debug, Clone)]
pub struct WireResponse {
    pub status: u16,
    /// Header names lowercased on construction.
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl WireResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(|s| s.as_str())
    }

    pub fn json(&self) -> std::result::Result<Value, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// One method per verb, mirroring the four-operation capability set
/// the pipeline dispatches on. Implementations must be safe for
/// concurrent use.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn get(&self, url: &str, headers: &HashMap<String, String>) -> Result<WireResponse>;

    async fn post(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<RequestBody>,
    ) -> Result<WireResponse>;

    async fn patch(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<RequestBody>,
    ) -> Result<WireResponse>;

    async fn delete(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<RequestBody>,
    ) -> Result<WireResponse>;
}

/// Production transport backed by a shared `reqwest::Client`.
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::TransportFailure {
                operation: String::new(),
                message: format!("failed to build HTTP client: {e}"),
            })?;
        Ok(Self { client })
    }

    async fn execute(
        &self,
        method: HttpMethod,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<RequestBody>,
    ) -> Result<WireResponse> {
        let reqwest_method = match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };

        let mut request = self.client.request(reqwest_method, url);
        for (name, value) in headers {
            request = request.header(name, value);
        }

        match body {
            Some(RequestBody::Json(value)) => {
                request = request.json(&value);
            }
            Some(RequestBody::Multipart(fields)) => {
                let mut form = reqwest::multipart::Form::new();
                for field in fields {
                    form = match field.value {
                        MultipartValue::Text(text) => form.text(field.name, text),
                        MultipartValue::File(path) => {
                            let bytes = tokio::fs::read(&path).await?;
                            let file_name = path
                                .file_name()
                                .map(|n| n.to_string_lossy().into_owned())
                                .unwrap_or_else(|| "upload".to_string());
                            let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name);
                            form.part(field.name, part)
                        }
                    };
                }
                request = request.multipart(form);
            }
            None => {}
        }

        let response = request.send().await.map_err(transport_failure)?;
        let status = response.status().as_u16();
        let mut response_headers = HashMap::new();
        for (name, value) in response.headers() {
            if let Ok(v) = value.to_str() {
                response_headers.insert(name.as_str().to_ascii_lowercase(), v.to_string());
            }
        }
        let body = response.text().await.map_err(transport_failure)?;

        Ok(WireResponse {
            status,
            headers: response_headers,
            body,
        })
    }
}

fn transport_failure(e: reqwest::Error) -> ApiError {
    ApiError::TransportFailure {
        operation: String::new(),
        message: e.to_string(),
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &str, headers: &HashMap<String, String>) -> Result<WireResponse> {
        self.execute(HttpMethod::Get, url, headers, None).await
    }

    async fn post(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<RequestBody>,
    ) -> Result<WireResponse> {
        self.execute(HttpMethod::Post, url, headers, body).await
    }

    async fn patch(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<RequestBody>,
    ) -> Result<WireResponse> {
        self.execute(HttpMethod::Patch, url, headers, body).await
    }

    async fn delete(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<RequestBody>,
    ) -> Result<WireResponse> {
        self.execute(HttpMethod::Delete, url, headers, body).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_response_success_range() {
        let ok = WireResponse {
            status: 204,
            headers: HashMap::new(),
            body: String::new(),
        };
        assert!(ok.is_success());
        let not_found = WireResponse {
            status: 404,
            headers: HashMap::new(),
            body: String::new(),
        };
        assert!(!not_found.is_success());
    }

    #[test]
    fn test_header_lookup_is_case_insensitive() {
        let mut headers = HashMap::new();
        headers.insert("retry-after".to_string(), "7".to_string());
        let response = WireResponse {
            status: 429,
            headers,
            body: String::new(),
        };
        assert_eq!(response.header("Retry-After"), Some("7"));
    }
}
