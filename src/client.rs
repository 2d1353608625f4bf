//! reqwest transport for the feedback REST API.
//!
//! Thin HTTP wrapper: builds the request from a [`portal::ApiRequest`], reads
//! status and body text, and leaves decoding to `portal::api` so the browser
//! client reports the same errors.

use std::time::Duration;

use async_trait::async_trait;
use portal::api::{self, ApiError, ApiRequest, Method};
use portal::types::{DeleteConfirmation, Feedback, FeedbackList, NewFeedback, Stats};
use portal::ListQuery;

use crate::api::FeedbackApi;
use crate::config::ClientConfig;

pub struct FeedbackClient {
    http: reqwest::Client,
    base_url: String,
}

impl FeedbackClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::network(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { http, base_url: config.base_url.clone() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Send `request` and return the status with the raw body text.
    async fn execute(&self, request: ApiRequest) -> Result<(u16, String), ApiError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Patch => reqwest::Method::PATCH,
            Method::Delete => reqwest::Method::DELETE,
        };
        tracing::debug!(method = %request.method, url = %request.url, "api request");

        let mut builder = self.http.request(method, &request.url).header("Content-Type", "application/json");
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::warn!(error = %e, url = %request.url, "api request failed");
            ApiError::network(e)
        })?;
        let status = response.status().as_u16();
        let text = response.text().await.map_err(ApiError::network)?;

        if !(200..300).contains(&status) {
            tracing::warn!(%status, url = %request.url, "api returned error status");
        }
        Ok((status, text))
    }
}

#[async_trait]
impl FeedbackApi for FeedbackClient {
    async fn create(&self, payload: &NewFeedback) -> Result<Feedback, ApiError> {
        let (status, body) = self.execute(ApiRequest::create(&self.base_url, payload)).await?;
        api::decode_record(status, &body)
    }

    async fn list(&self, query: &ListQuery) -> Result<FeedbackList, ApiError> {
        let (status, body) = self.execute(ApiRequest::list(&self.base_url, query)).await?;
        api::decode(status, &body)
    }

    async fn get(&self, id: &str) -> Result<Feedback, ApiError> {
        let (status, body) = self.execute(ApiRequest::get(&self.base_url, id)).await?;
        api::decode_record(status, &body)
    }

    async fn mark_reviewed(&self, id: &str) -> Result<Feedback, ApiError> {
        let (status, body) = self.execute(ApiRequest::mark_reviewed(&self.base_url, id)).await?;
        api::decode_record(status, &body)
    }

    async fn delete(&self, id: &str) -> Result<DeleteConfirmation, ApiError> {
        let (status, body) = self.execute(ApiRequest::delete(&self.base_url, id)).await?;
        api::decode(status, &body)
    }

    async fn stats(&self) -> Result<Stats, ApiError> {
        let (status, body) = self.execute(ApiRequest::stats(&self.base_url)).await?;
        api::decode_record(status, &body)
    }

    async fn health(&self) -> bool {
        let url = api::health_url(&self.base_url);
        let request = ApiRequest { method: Method::Get, url, body: None };
        match self.execute(request).await {
            Ok((status, _)) => (200..300).contains(&status),
            Err(error) => {
                tracing::warn!(%error, "health probe failed");
                false
            }
        }
    }
}
