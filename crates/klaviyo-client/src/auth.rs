//! Per-request authentication and platform headers. The bearer token
//! is fetched from the source at call time so a rotated credential is
//! picked up without restarting the server.

use async_trait::async_trait;
use klaviyo_core::{ApiError, Result, API_REVISION, JSON_API_MEDIA_TYPE};
use std::collections::HashMap;
use std::sync::Arc;

use crate::descriptor::AuthKind;

/// Yields the current bearer token on demand. The integration behind
/// it owns refresh and caching; this layer never stores the token.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn bearer_token(&self) -> Result<String>;
}

/// Reads the token from a named environment variable on every call.
pub struct EnvTokenSource {
    var_name: String,
}

impl EnvTokenSource {
    pub fn new(var_name: impl Into<String>) -> Self {
        Self {
            var_name: var_name.into(),
        }
    }
}

#[async_trait]
impl TokenSource for EnvTokenSource {
    async fn bearer_token(&self) -> Result<String> {
        match std::env::var(&self.var_name) {
            Ok(token) if !token.is_empty() => Ok(token),
            _ => Err(ApiError::AuthUnavailable(format!(
                "environment variable '{}' is not set",
                self.var_name
            ))),
        }
    }
}

/// A fixed token, for tests and for callers that manage credentials
/// themselves.
pub struct StaticTokenSource {
    token: String,
}

impl StaticTokenSource {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn bearer_token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}

#[derive(Clone)]
pub struct AuthProvider {
    source: Arc<dyn TokenSource>,
}

impl AuthProvider {
    pub fn new(source: Arc<dyn TokenSource>) -> Self {
        Self { source }
    }

    /// Headers for one request. Revision and accept are pinned on
    /// every call, public or not; the bearer header is only minted for
    /// private endpoints, and a missing token fails here, before any
    /// network activity. `content-type` is only set for JSON bodies —
    /// multipart bodies get their boundary from the transport.
    pub async fn headers(
        &self,
        auth: AuthKind,
        has_json_body: bool,
    ) -> Result<HashMap<String, String>> {
        let mut headers = HashMap::new();
        headers.insert("revision".to_string(), API_REVISION.to_string());
        headers.insert("accept".to_string(), JSON_API_MEDIA_TYPE.to_string());
        if has_json_body {
            headers.insert("content-type".to_string(), JSON_API_MEDIA_TYPE.to_string());
        }
        if auth == AuthKind::Private {
            let token = self.source.bearer_token().await?;
            headers.insert("Authorization".to_string(), format!("Bearer {token}"));
        }
        Ok(headers)
    }
}
