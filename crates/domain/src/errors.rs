//! Error types used throughout the connector

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::constants::DEFAULT_REQUEST_ERROR_MESSAGE;

/// Structured failure returned by the platform for a non-2xx response.
///
/// Built once per failed call. `errors` is populated on a best-effort basis
/// from the response body and is `None` when the body could not be read.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[error(
    "{} (status {status_code})",
    .message.as_deref().unwrap_or(DEFAULT_REQUEST_ERROR_MESSAGE)
)]
pub struct RequestError {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl RequestError {
    /// Error carrying only a status code.
    #[must_use]
    pub const fn from_status(status_code: u16) -> Self {
        Self { status_code, errors: None, message: None, description: None }
    }
}

/// Main error type for the connector
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "detail")]
pub enum ConnectorError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error(transparent)]
    Request(RequestError),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Geometry error: {0}")]
    Geometry(String),

    #[error("Projection error: {0}")]
    Projection(String),
}

impl ConnectorError {
    /// Shorthand for a configuration error naming a missing input.
    pub fn required(name: &str) -> Self {
        Self::Configuration(format!("{name} is required"))
    }

    /// HTTP status code for request failures.
    #[must_use]
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Request(err) => Some(err.status_code),
            _ => None,
        }
    }
}

impl From<RequestError> for ConnectorError {
    fn from(err: RequestError) -> Self {
        Self::Request(err)
    }
}

/// Result type alias for connector operations
pub type Result<T> = std::result::Result<T, ConnectorError>;
