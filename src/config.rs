//! Client configuration resolved from flags and environment.
//!
//! Values arrive through clap (`--base-url` or `FEEDBACK_API_BASE_URL`, and
//! the two timeout settings); this module turns them into a validated
//! [`ClientConfig`].

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;

pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("base URL is empty; pass --base-url or set FEEDBACK_API_BASE_URL")]
    EmptyBaseUrl,
    #[error("invalid base URL: {0} (expected http:// or https://)")]
    InvalidBaseUrl(String),
    #[error("{name} must be greater than zero")]
    ZeroTimeout { name: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self { request_secs: DEFAULT_REQUEST_TIMEOUT_SECS, connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API root, without a trailing slash.
    pub base_url: String,
    pub timeouts: Timeouts,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_owned(), timeouts: Timeouts::default() }
    }
}

impl ClientConfig {
    /// Validate raw settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an empty or non-http(s) base URL and for
    /// zero timeouts.
    pub fn new(base_url: &str, timeouts: Timeouts) -> Result<Self, ConfigError> {
        let base_url = base_url.trim().trim_end_matches('/');
        if base_url.is_empty() {
            return Err(ConfigError::EmptyBaseUrl);
        }
        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl(base_url.to_owned()));
        }
        if timeouts.request_secs == 0 {
            return Err(ConfigError::ZeroTimeout { name: "request timeout" });
        }
        if timeouts.connect_secs == 0 {
            return Err(ConfigError::ZeroTimeout { name: "connect timeout" });
        }
        Ok(Self { base_url: base_url.to_owned(), timeouts })
    }
}
