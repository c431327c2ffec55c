//! Conversions from external infrastructure errors into connector errors.

use qbgeo_domain::ConnectorError;
use reqwest::Error as HttpError;
use serde_json::Error as JsonError;
use thiserror::Error;
use toml::de::Error as TomlError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct InfraError(pub ConnectorError);

impl From<InfraError> for ConnectorError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<ConnectorError> for InfraError {
    fn from(value: ConnectorError) -> Self {
        Self(value)
    }
}

/// Extension trait to make the conversion logic explicit in tests and within
/// this module.
trait IntoConnectorError {
    fn into_connector(self) -> ConnectorError;
}

/* -------------------------------------------------------------------------- */
/* reqwest::Error → ConnectorError */
/* -------------------------------------------------------------------------- */

impl IntoConnectorError for HttpError {
    fn into_connector(self) -> ConnectorError {
        if self.is_timeout() {
            return ConnectorError::Transport("HTTP request timed out".into());
        }

        if self.is_connect() {
            return ConnectorError::Transport(format!("HTTP connection failure: {self}"));
        }

        if self.is_builder() {
            return ConnectorError::Configuration(format!("invalid HTTP request: {self}"));
        }

        if self.is_decode() {
            return ConnectorError::Decode(self.to_string());
        }

        ConnectorError::Transport(self.to_string())
    }
}

impl From<HttpError> for InfraError {
    fn from(value: HttpError) -> Self {
        Self(value.into_connector())
    }
}

/* -------------------------------------------------------------------------- */
/* serde_json::Error → ConnectorError */
/* -------------------------------------------------------------------------- */

impl IntoConnectorError for JsonError {
    fn into_connector(self) -> ConnectorError {
        ConnectorError::Decode(format!("invalid JSON at line {}: {self}", self.line()))
    }
}

impl From<JsonError> for InfraError {
    fn from(value: JsonError) -> Self {
        Self(value.into_connector())
    }
}

/* -------------------------------------------------------------------------- */
/* toml::de::Error → ConnectorError */
/* -------------------------------------------------------------------------- */

impl IntoConnectorError for TomlError {
    fn into_connector(self) -> ConnectorError {
        ConnectorError::Configuration(format!("invalid TOML: {}", self.message()))
    }
}

impl From<TomlError> for InfraError {
    fn from(value: TomlError) -> Self {
        Self(value.into_connector())
    }
}

/* -------------------------------------------------------------------------- */
/* Tests */
/* -------------------------------------------------------------------------- */
