//! Error handling for the ReviewHub client
//!
//! Only failures with no usable server answer are errors. A server that
//! answers with a non-success status produces `ApiOutcome::Rejected`, not an
//! `Err`.

use shared::ApiErrors;
use thiserror::Error;

/// Client error types
#[derive(Error, Debug)]
pub enum ClientError {
    /// Transport failure: no response was received
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Success body did not match the entity schema
    #[error("Failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

impl ClientError {
    /// Generic message shown for unexpected failures
    pub fn user_message(&self) -> &'static str {
        "Something went wrong. Please try again."
    }
}

/// Result type alias for gateway operations
pub type ClientResult<T> = Result<T, ClientError>;

/// Result of one gateway call that reached the server
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome<T> {
    /// Success status; the store transition has been applied
    Success(T),
    /// Non-success status with the decoded `{errors}` body; store untouched
    Rejected(ApiErrors),
}

impl<T> ApiOutcome<T> {
    pub fn is_success(&self) -> bool {
        matches!(self, ApiOutcome::Success(_))
    }

    pub fn errors(&self) -> Option<&ApiErrors> {
        match self {
            ApiOutcome::Success(_) => None,
            ApiOutcome::Rejected(errors) => Some(errors),
        }
    }

    pub fn into_result(self) -> Result<T, ApiErrors> {
        match self {
            ApiOutcome::Success(value) => Ok(value),
            ApiOutcome::Rejected(errors) => Err(errors),
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiOutcome<U> {
        match self {
            ApiOutcome::Success(value) => ApiOutcome::Success(f(value)),
            ApiOutcome::Rejected(errors) => ApiOutcome::Rejected(errors),
        }
    }
}

/// Success marker returned by delete operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deleted;
