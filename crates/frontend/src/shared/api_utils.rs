//! API utilities for frontend-backend communication
//!
//! Provides the backend base URL, a plain description of a REST call
//! (`ApiRequest`) and the `ApiGateway` seam that executes it.

use crate::config::config;
use async_trait::async_trait;
use contracts::shared::api_response::ApiResponse;
use gloo_net::http::{Request, RequestBuilder};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Get the base URL for API requests
///
/// Uses `api.base_url` from the config when set. Otherwise constructs it
/// from the current window location and the configured backend port.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let api = &config().api;
    if let Some(base_url) = &api.base_url {
        return base_url.trim_end_matches('/').to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, api.port)
}

/// Percent-encode an opaque entity id for use as a path segment
pub fn path_segment(id: &str) -> String {
    urlencoding::encode(id).into_owned()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// One REST call, built before anything touches the network
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    pub path: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    pub fn with_json<T: Serialize>(mut self, body: &T) -> Result<Self, ApiError> {
        let value = serde_json::to_value(body)
            .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?;
        self.body = Some(value);
        Ok(self)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// `status: false` in the body, or a non-2xx answer carrying a message
    #[error("Request rejected: {}", message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    /// Non-2xx answer without a readable body
    #[error("HTTP {0}")]
    Http(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Backend-supplied message, if any
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message } => message.as_deref(),
            _ => None,
        }
    }
}

/// Executes REST calls against the backend
#[async_trait(?Send)]
pub trait ApiGateway {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Browser gateway built on gloo-net
#[derive(Debug, Clone)]
pub struct HttpGateway {
    base: String,
}

impl HttpGateway {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    fn builder(&self, request: &ApiRequest) -> RequestBuilder {
        let url = format!("{}{}", self.base, request.path);
        let builder = match request.method {
            HttpMethod::Get => Request::get(&url),
            HttpMethod::Put => Request::put(&url),
            HttpMethod::Patch => Request::patch(&url),
            HttpMethod::Delete => Request::delete(&url),
        };
        builder.header("Accept", "application/json")
    }
}

impl Default for HttpGateway {
    fn default() -> Self {
        Self::new(api_base())
    }
}

#[async_trait(?Send)]
impl ApiGateway for HttpGateway {
    async fn execute(&self, request: &ApiRequest) -> Result<ApiResponse, ApiError> {
        let builder = self.builder(request);
        let prepared = match &request.body {
            Some(body) => builder
                .json(body)
                .map_err(|e| ApiError::Network(format!("Failed to serialize request: {}", e)))?,
            None => builder
                .build()
                .map_err(|e| ApiError::Network(format!("Failed to build request: {}", e)))?,
        };

        let response = prepared
            .send()
            .await
            .map_err(|e| ApiError::Network(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(format!("Failed to read response: {}", e)))?;

        decode_envelope(status, &text)
    }
}

/// Turn an HTTP answer into the `{status, message, data?}` envelope.
///
/// Both `status: false` and non-2xx codes are failures. Non-2xx bodies are
/// still read so the backend's message reaches the user.
pub fn decode_envelope(http_status: u16, text: &str) -> Result<ApiResponse, ApiError> {
    let success = (200..300).contains(&http_status);

    if !success {
        return Err(match serde_json::from_str::<ErrorBody>(text) {
            Ok(body) => match body.message.or(body.error) {
                Some(message) if !message.trim().is_empty() => ApiError::Rejected {
                    message: Some(message),
                },
                _ => ApiError::Http(http_status),
            },
            Err(_) => ApiError::Http(http_status),
        });
    }

    let envelope: ApiResponse = serde_json::from_str(text)
        .map_err(|e| ApiError::Decode(format!("Failed to parse response: {}", e)))?;

    if !envelope.is_success() {
        return Err(ApiError::Rejected {
            message: envelope.message().map(str::to_string),
        });
    }

    Ok(envelope)
}

/// Error bodies come either as the regular envelope or as `{error}`
#[derive(serde::Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_success_envelope() {
        let resp = decode_envelope(200, r#"{"status":true,"message":"Saved","data":{"id":1}}"#)
            .unwrap();
        assert_eq!(resp.message(), Some("Saved"));
        assert_eq!(resp.data, Some(json!({ "id": 1 })));
    }

    #[test]
    fn test_status_false_is_rejected_with_message() {
        let err = decode_envelope(200, r#"{"status":false,"message":"locked"}"#).unwrap_err();
        assert_eq!(
            err,
            ApiError::Rejected {
                message: Some("locked".to_string())
            }
        );
        assert_eq!(err.backend_message(), Some("locked"));
    }

    #[test]
    fn test_status_false_without_message() {
        let err = decode_envelope(200, r#"{"status":false}"#).unwrap_err();
        assert_eq!(err, ApiError::Rejected { message: None });
    }

    #[test]
    fn test_http_error_keeps_backend_message() {
        let err = decode_envelope(422, r#"{"status":false,"message":"Invalid stage"}"#)
            .unwrap_err();
        assert_eq!(err.backend_message(), Some("Invalid stage"));

        let err = decode_envelope(500, r#"{"error":"db down"}"#).unwrap_err();
        assert_eq!(err.backend_message(), Some("db down"));
    }

    #[test]
    fn test_http_error_without_body() {
        assert_eq!(decode_envelope(502, "Bad Gateway"), Err(ApiError::Http(502)));
        assert_eq!(decode_envelope(404, ""), Err(ApiError::Http(404)));
    }

    #[test]
    fn test_unparseable_success_body() {
        assert!(matches!(
            decode_envelope(200, "<html>"),
            Err(ApiError::Decode(_))
        ));
    }

    #[test]
    fn test_path_segment_is_encoded() {
        assert_eq!(path_segment("42"), "42");
        assert_eq!(path_segment("a/b c"), "a%2Fb%20c");
    }

    #[test]
    fn test_request_builders() {
        let req = ApiRequest::patch("/receipt/validate/7")
            .with_json(&json!({}))
            .unwrap();
        assert_eq!(req.method.as_str(), "PATCH");
        assert_eq!(req.body, Some(json!({})));
    }
}
