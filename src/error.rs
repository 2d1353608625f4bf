use portal::api::ApiError;

use crate::config::ConfigError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Api(#[from] ApiError),
    /// A state machine reported an error message for the action.
    #[error("{0}")]
    Rejected(String),
    #[error("feedback service unreachable at {0}")]
    Unreachable(String),
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid JSON payload: {0}")]
    Json(#[from] serde_json::Error),
}
