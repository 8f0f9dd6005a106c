//! Recording transport: the substitution seam promised by the
//! transport contract. Captures every dispatch and replays queued
//! responses, so pipeline and descriptor tests never touch a socket.

use async_trait::async_trait;
use klaviyo_core::{ApiError, HttpMethod, Result};
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

use crate::transport::{HttpTransport, RequestBody, WireResponse};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub method: HttpMethod,
    pub url: String,
    pub headers: HashMap<String, String>,
    pub body: Option<RequestBody>,
}

impl RecordedCall {
    /// The JSON body, when one was sent.
    pub fn json_body(&self) -> Option<&serde_json::Value> {
        match &self.body {
            Some(RequestBody::Json(value)) => Some(value),
            _ => None,
        }
    }
}

pub struct RecordingTransport {
    calls: Mutex<Vec<RecordedCall>>,
    responses: Mutex<VecDeque<WireResponse>>,
    failure: Option<String>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
            failure: None,
        }
    }

    /// A transport whose every dispatch fails at the socket level.
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            responses: Mutex::new(VecDeque::new()),
            failure: Some(message.into()),
        }
    }

    pub fn push_response(
        &self,
        status: u16,
        headers: HashMap<String, String>,
        body: impl Into<String>,
    ) {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_ascii_lowercase(), v))
            .collect();
        self.responses.lock().unwrap().push_back(WireResponse {
            status,
            headers,
            body: body.into(),
        });
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn record(
        &self,
        method: HttpMethod,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<RequestBody>,
    ) -> Result<WireResponse> {
        if let Some(message) = &self.failure {
            return Err(ApiError::TransportFailure {
                operation: String::new(),
                message: message.clone(),
            });
        }
        self.calls.lock().unwrap().push(RecordedCall {
            method,
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
        // When no response is queued, answer with an empty success so
        // tests that only inspect the emitted request stay short.
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(WireResponse {
                status: 200,
                headers: HashMap::new(),
                body: "{\"data\": null}".to_string(),
            }))
    }
}

impl Default for RecordingTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn get(&self, url: &str, headers: &HashMap<String, String>) -> Result<WireResponse> {
        self.record(HttpMethod::Get, url, headers, None)
    }

    async fn post(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<RequestBody>,
    ) -> Result<WireResponse> {
        self.record(HttpMethod::Post, url, headers, body)
    }

    async fn patch(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<RequestBody>,
    ) -> Result<WireResponse> {
        self.record(HttpMethod::Patch, url, headers, body)
    }

    async fn delete(
        &self,
        url: &str,
        headers: &HashMap<String, String>,
        body: Option<RequestBody>,
    ) -> Result<WireResponse> {
        self.record(HttpMethod::Delete, url, headers, body)
    }
}
