//! REST helpers for the feedback API.
//!
//! Browser (csr): real HTTP calls via `gloo-net`.
//! Native builds: every call fails with a network error, so pages still
//! compile and their pure helpers can be tested off the browser.
//!
//! ERROR HANDLING
//! ==============
//! Transport failures and non-2xx replies both surface as
//! `portal::ApiError`; decoding follows `portal::api`, so the browser reports
//! exactly what the terminal client reports for the same response.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use portal::ListQuery;
use portal::api::{self, ApiError, ApiRequest, Method};
use portal::types::{DeleteConfirmation, Feedback, FeedbackList, NewFeedback, Stats};

pub const DEFAULT_BASE_URL: &str = "/api";

/// API root, fixed at build time by `FEEDBACK_API_BASE_URL`.
pub fn base_url() -> &'static str {
    resolve_base_url(option_env!("FEEDBACK_API_BASE_URL"))
}

fn resolve_base_url(configured: Option<&'static str>) -> &'static str {
    match configured.map(str::trim) {
        Some(url) if !url.is_empty() => url,
        _ => DEFAULT_BASE_URL,
    }
}

/// Send `request` and return the status with the raw body text.
async fn execute(request: ApiRequest) -> Result<(u16, String), ApiError> {
    #[cfg(feature = "csr")]
    {
        use gloo_net::http::Request;

        log::debug!("api request: {} {}", request.method, request.url);
        let builder = match request.method {
            Method::Get => Request::get(&request.url),
            Method::Post => Request::post(&request.url),
            Method::Patch => Request::patch(&request.url),
            Method::Delete => Request::delete(&request.url),
        }
        .header("Content-Type", "application/json");
        let prepared = match &request.body {
            Some(body) => builder.json(body),
            None => builder.build(),
        }
        .map_err(ApiError::network)?;

        let response = prepared.send().await.map_err(|e| {
            log::warn!("api request to {} failed: {e}", request.url);
            ApiError::network(e)
        })?;
        let status = response.status();
        let text = response.text().await.map_err(ApiError::network)?;
        if !response.ok() {
            log::warn!("api returned {status} for {}", request.url);
        }
        Ok((status, text))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = request;
        Err(ApiError::network("not available outside the browser"))
    }
}

/// `POST /feedback`.
///
/// # Errors
///
/// Returns the server's validation message or a transport failure.
pub async fn create(payload: &NewFeedback) -> Result<Feedback, ApiError> {
    let (status, body) = execute(ApiRequest::create(base_url(), payload)).await?;
    api::decode_record(status, &body)
}

/// `GET /feedback` with the dashboard's filters.
///
/// # Errors
///
/// Returns an error on a non-2xx reply or a transport failure.
pub async fn list(query: &ListQuery) -> Result<FeedbackList, ApiError> {
    let (status, body) = execute(ApiRequest::list(base_url(), query)).await?;
    api::decode(status, &body)
}

/// `PATCH /feedback/{id}/reviewed`.
///
/// # Errors
///
/// Returns an error on a non-2xx reply or a transport failure.
pub async fn mark_reviewed(id: &str) -> Result<Feedback, ApiError> {
    let (status, body) = execute(ApiRequest::mark_reviewed(base_url(), id)).await?;
    api::decode_record(status, &body)
}

/// `DELETE /feedback/{id}`.
///
/// # Errors
///
/// Returns an error on a non-2xx reply or a transport failure.
pub async fn delete(id: &str) -> Result<DeleteConfirmation, ApiError> {
    let (status, body) = execute(ApiRequest::delete(base_url(), id)).await?;
    api::decode(status, &body)
}

/// `GET /feedback/stats`.
///
/// # Errors
///
/// Returns an error on a non-2xx reply or a transport failure.
pub async fn stats() -> Result<Stats, ApiError> {
    let (status, body) = execute(ApiRequest::stats(base_url())).await?;
    api::decode_record(status, &body)
}

/// Probe the service root. Never fails; any error reads as unreachable.
pub async fn check_connection() -> bool {
    let request = ApiRequest { method: Method::Get, url: api::health_url(base_url()), body: None };
    match execute(request).await {
        Ok((status, _)) => (200..300).contains(&status),
        Err(_) => false,
    }
}
