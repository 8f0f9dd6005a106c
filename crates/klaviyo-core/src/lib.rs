use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// API revision pinned on every request. Klaviyo versions response
/// shapes by this date stamp, so it must never vary per call.
pub const API_REVISION: &str = "2025-01-15";

/// Production host for both `/api/*` and `/client/*` endpoints.
pub const DEFAULT_BASE_URL: &str = "https://a.klaviyo.com";

/// JSON:API media type used in both directions.
pub const JSON_API_MEDIA_TYPE: &str = "application/vnd.api+json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HttpMethod {
    Get,
    Post,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// GET never carries a request body. DELETE can: relationship
    /// remove endpoints send `{"data": [...]}` naming what to detach.
    pub fn allows_body(&self) -> bool {
        matches!(
            self,
            HttpMethod::Post | HttpMethod::Patch | HttpMethod::Delete
        )
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure taxonomy for a single operation call. HTTP variants carry
/// the server's JSON:API error document verbatim so the agent driving
/// the tools can reason about next steps.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("operation '{operation}' is missing required parameter '{arg}'")]
    MissingRequiredParameter { operation: String, arg: String },

    #[error("operation '{operation}' received invalid arguments: {message}")]
    InvalidArguments { operation: String, message: String },

    #[error("authentication unavailable: {0}")]
    AuthUnavailable(String),

    #[error("transport failure during '{operation}': {message}")]
    TransportFailure { operation: String, message: String },

    #[error("'{operation}' failed with 400 Bad Request")]
    BadRequest { operation: String, detail: Value },

    #[error("'{operation}' failed with 401 Unauthorized")]
    Unauthorized { operation: String, detail: Value },

    #[error("'{operation}' failed with 403 Forbidden")]
    Forbidden { operation: String, detail: Value },

    #[error("'{operation}' failed with 404 Not Found")]
    NotFound { operation: String, detail: Value },

    #[error("'{operation}' failed with 409 Conflict")]
    Conflict { operation: String, detail: Value },

    #[error("'{operation}' failed with 422 Unprocessable Entity")]
    UnprocessableEntity { operation: String, detail: Value },

    #[error("'{operation}' was rate limited (retry after {retry_after:?}s)")]
    RateLimited {
        operation: String,
        retry_after: Option<u64>,
        detail: Value,
    },

    #[error("'{operation}' failed with server error {status}")]
    ServerError {
        operation: String,
        status: u16,
        detail: Value,
    },

    #[error("'{operation}' failed with unexpected status {status}")]
    UnexpectedStatus {
        operation: String,
        status: u16,
        detail: Value,
    },

    #[error("'{operation}' returned a 2xx body that is not valid JSON: {message}")]
    DecodeError { operation: String, message: String },

    #[error("configuration error: {0}")]
    ConfigError(String),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl ApiError {
    /// Classify a non-2xx response. `retry_after` is only consulted
    /// for 429 and comes from the `Retry-After` header.
    pub fn from_status(
        operation: &str,
        status: u16,
        retry_after: Option<u64>,
        detail: Value,
    ) -> Self {
        let operation = operation.to_string();
        match status {
            400 => ApiError::BadRequest { operation, detail },
            401 => ApiError::Unauthorized { operation, detail },
            403 => ApiError::Forbidden { operation, detail },
            404 => ApiError::NotFound { operation, detail },
            409 => ApiError::Conflict { operation, detail },
            422 => ApiError::UnprocessableEntity { operation, detail },
            429 => ApiError::RateLimited {
                operation,
                retry_after,
                detail,
            },
            500..=599 => ApiError::ServerError {
                operation,
                status,
                detail,
            },
            _ => ApiError::UnexpectedStatus {
                operation,
                status,
                detail,
            },
        }
    }

    /// HTTP status attached to this error, when one exists.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::BadRequest { .. } => Some(400),
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Forbidden { .. } => Some(403),
            ApiError::NotFound { .. } => Some(404),
            ApiError::Conflict { .. } => Some(409),
            ApiError::UnprocessableEntity { .. } => Some(422),
            ApiError::RateLimited { .. } => Some(429),
            ApiError::ServerError { status, .. } => Some(*status),
            ApiError::UnexpectedStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-supplied JSON:API error document, when one was attached.
    pub fn detail(&self) -> Option<&Value> {
        match self {
            ApiError::BadRequest { detail, .. }
            | ApiError::Unauthorized { detail, .. }
            | ApiError::Forbidden { detail, .. }
            | ApiError::NotFound { detail, .. }
            | ApiError::Conflict { detail, .. }
            | ApiError::UnprocessableEntity { detail, .. }
            | ApiError::RateLimited { detail, .. }
            | ApiError::ServerError { detail, .. }
            | ApiError::UnexpectedStatus { detail, .. } => Some(detail),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_classification() {
        let doc = json!({"errors": [{"status": "429", "code": "throttled"}]});
        let err = ApiError::from_status("list_profiles", 429, Some(7), doc.clone());
        match &err {
            ApiError::RateLimited {
                operation,
                retry_after,
                detail,
            } => {
                assert_eq!(operation, "list_profiles");
                assert_eq!(*retry_after, Some(7));
                assert_eq!(detail, &doc);
            }
            other => panic!("expected RateLimited, got {other:?}"),
        }
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn test_server_error_range() {
        let err = ApiError::from_status("get_account", 503, None, Value::Null);
        assert!(matches!(err, ApiError::ServerError { status: 503, .. }));
    }

    #[test]
    fn test_unlisted_status_is_unexpected() {
        let err = ApiError::from_status("get_account", 418, None, Value::Null);
        assert!(matches!(
            err,
            ApiError::UnexpectedStatus { status: 418, .. }
        ));
    }

    #[test]
    fn test_detail_accessor() {
        let doc = json!({"errors": []});
        let err = ApiError::from_status("get_flow", 404, None, doc.clone());
        assert_eq!(err.detail(), Some(&doc));
        let pre_network = ApiError::MissingRequiredParameter {
            operation: "get_flow".into(),
            arg: "id".into(),
        };
        assert!(pre_network.detail().is_none());
        assert!(pre_network.status().is_none());
    }
}
