//! REST contract shared by every transport.
//!
//! SYSTEM CONTEXT
//! ==============
//! Transports (reqwest in the CLI, gloo-net in the browser) only move bytes:
//! they execute an [`ApiRequest`] and hand back `(status, body)`. Building
//! URLs and turning bodies into typed results or an [`ApiError`] happens here,
//! so both front ends report failures identically.
//!
//! ERROR HANDLING
//! ==============
//! Bodies are parsed as JSON before the status is inspected. A non-2xx
//! response yields the server's `message` when present, otherwise
//! `HTTP error! status: N`. Transport failures carry no status.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::fmt;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::query::ListQuery;
use crate::types::NewFeedback;

/// Unreserved characters (RFC 3986) stay literal; everything else is escaped.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

// =============================================================================
// ERROR
// =============================================================================

/// Uniform failure of any API operation.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable message suitable for direct display.
    pub message: String,
    /// HTTP status when a response arrived; `None` for transport failures.
    pub status: Option<u16>,
}

impl ApiError {
    /// Failure before any response was received.
    pub fn network(error: impl fmt::Display) -> Self {
        Self { message: error.to_string(), status: None }
    }

    /// Non-2xx response, using the body's `message` field when it has one.
    #[must_use]
    pub fn from_response(status: u16, body: Option<&Value>) -> Self {
        let message = body
            .and_then(|value| value.get("message"))
            .and_then(Value::as_str)
            .filter(|message| !message.is_empty())
            .map_or_else(|| http_error_message(status), ToOwned::to_owned);
        Self { message, status: Some(status) }
    }

    #[must_use]
    pub fn is_network(&self) -> bool {
        self.status.is_none()
    }
}

fn http_error_message(status: u16) -> String {
    format!("HTTP error! status: {status}")
}

// =============================================================================
// REQUESTS
// =============================================================================

/// HTTP verbs used by the feedback API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Patch,
    Delete,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        })
    }
}

/// A fully resolved request for a transport to execute.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub url: String,
    pub body: Option<Value>,
}

impl ApiRequest {
    /// `POST /feedback`.
    #[must_use]
    pub fn create(base_url: &str, payload: &NewFeedback) -> Self {
        let body = serde_json::json!({
            "feedback": payload.feedback,
            "category": payload.category.as_str(),
        });
        Self { method: Method::Post, url: join_url(base_url, "/feedback"), body: Some(body) }
    }

    /// `GET /feedback?...`; the `?` is dropped when no parameter survives.
    #[must_use]
    pub fn list(base_url: &str, query: &ListQuery) -> Self {
        let qs = query.query_string();
        let mut url = join_url(base_url, "/feedback");
        if !qs.is_empty() {
            url.push('?');
            url.push_str(&qs);
        }
        Self { method: Method::Get, url, body: None }
    }

    /// `GET /feedback/{id}`.
    #[must_use]
    pub fn get(base_url: &str, id: &str) -> Self {
        Self { method: Method::Get, url: record_url(base_url, id), body: None }
    }

    /// `PATCH /feedback/{id}/reviewed`.
    #[must_use]
    pub fn mark_reviewed(base_url: &str, id: &str) -> Self {
        Self { method: Method::Patch, url: format!("{}/reviewed", record_url(base_url, id)), body: None }
    }

    /// `DELETE /feedback/{id}`.
    #[must_use]
    pub fn delete(base_url: &str, id: &str) -> Self {
        Self { method: Method::Delete, url: record_url(base_url, id), body: None }
    }

    /// `GET /feedback/stats`.
    #[must_use]
    pub fn stats(base_url: &str) -> Self {
        Self { method: Method::Get, url: join_url(base_url, "/feedback/stats"), body: None }
    }
}

/// Join a base URL and an absolute path without doubling the slash.
#[must_use]
pub fn join_url(base_url: &str, path: &str) -> String {
    format!("{}{path}", base_url.trim_end_matches('/'))
}

fn record_url(base_url: &str, id: &str) -> String {
    join_url(base_url, &format!("/feedback/{}", encode_component(id)))
}

/// Service root probed by the connectivity check: a trailing `/api` path
/// segment becomes `/`. Other base URLs are probed as given.
#[must_use]
pub fn health_url(base_url: &str) -> String {
    base_url
        .trim_end_matches('/')
        .strip_suffix("/api")
        .map_or_else(|| base_url.to_owned(), |root| format!("{root}/"))
}

/// Percent-encode a path segment or query value.
#[must_use]
pub fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

// =============================================================================
// DECODING
// =============================================================================

/// Decode a response whose body is the payload itself.
///
/// # Errors
///
/// Returns [`ApiError`] for non-2xx statuses and for 2xx bodies that do not
/// match `T`.
pub fn decode<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let parsed = serde_json::from_str::<Value>(body);
    if !(200..300).contains(&status) {
        return Err(ApiError::from_response(status, parsed.as_ref().ok()));
    }
    let value = parsed.map_err(|e| invalid_body(status, e))?;
    serde_json::from_value(value).map_err(|e| invalid_body(status, e))
}

/// Decode a single-record response that may arrive bare or as `{data: ...}`.
///
/// # Errors
///
/// Same as [`decode`].
pub fn decode_record<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    let value: Value = decode(status, body)?;
    if let Some(data) = value.get("data") {
        if let Ok(record) = T::deserialize(data) {
            return Ok(record);
        }
    }
    // Bare-record errors name the missing or mistyped field.
    serde_json::from_value(value).map_err(|e| invalid_body(status, e))
}

fn invalid_body(status: u16, error: serde_json::Error) -> ApiError {
    ApiError { message: format!("invalid response body: {error}"), status: Some(status) }
}
