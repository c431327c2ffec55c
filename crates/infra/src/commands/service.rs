//! Service construction
//!
//! Entry points that turn user-supplied connection settings into a
//! [`PlatformService`].

use std::sync::Arc;

use qbgeo_core::MessageOwner;
use qbgeo_domain::constants::{TEMP_TOKEN_SCHEME, USER_TOKEN_SCHEME};
use qbgeo_domain::{ConnectorConfig, ConnectorError, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::api::{PlatformService, StaticTokenProvider};

/// Create a service that authenticates through the owning process.
///
/// Trailing slashes are trimmed from `url`. An absent or empty
/// `target_origin` falls back to `https://<host_name>`.
///
/// # Errors
/// Returns `Configuration` naming the first missing input.
pub fn create_service(
    url: &str,
    host_name: &str,
    target_origin: Option<&str>,
    owner: Option<Arc<dyn MessageOwner>>,
) -> Result<PlatformService> {
    if url.is_empty() {
        return Err(ConnectorError::required("url"));
    }
    if host_name.is_empty() {
        return Err(ConnectorError::required("hostName"));
    }

    let config = ConnectorConfig {
        target_origin: target_origin.filter(|origin| !origin.is_empty()).map(str::to_string),
        ..ConnectorConfig::new(url.trim_end_matches('/'), host_name)
    };
    info!(host_name, origin = %config.handshake_origin(), "creating platform service");
    PlatformService::from_config(&config, owner)
}

/// Connection settings authenticated by a fixed token.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppService {
    pub url: String,
    pub host_name: String,
    /// Complete `Authorization` value, `<tokenType> <accessToken>`.
    #[serde(rename = "access_token")]
    pub access_token: String,
}

impl std::fmt::Debug for AppService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppService")
            .field("url", &self.url)
            .field("host_name", &self.host_name)
            .field("access_token", &"<redacted>")
            .finish()
    }
}

impl AppService {
    /// Dispatcher that sends `access_token` on every call.
    ///
    /// # Errors
    /// Returns an error if the HTTP client cannot be built.
    pub fn into_platform_service(self) -> Result<PlatformService> {
        let tokens = Arc::new(StaticTokenProvider::from_authorization(self.access_token));
        PlatformService::new(self.url.trim_end_matches('/'), self.host_name, tokens)
    }
}

/// Build [`AppService`] settings from a user or temporary token.
///
/// # Errors
/// Returns `Configuration` naming the first missing input, or when
/// `token_type` is not one of the platform's token schemes.
pub fn create_app_service(
    url: &str,
    host_name: &str,
    access_token: &str,
    token_type: &str,
) -> Result<AppService> {
    if url.is_empty() {
        return Err(ConnectorError::required("url"));
    }
    if host_name.is_empty() {
        return Err(ConnectorError::required("hostName"));
    }
    if access_token.is_empty() {
        return Err(ConnectorError::required("accessToken"));
    }
    if token_type.is_empty() {
        return Err(ConnectorError::required("tokenType"));
    }
    if ![USER_TOKEN_SCHEME, TEMP_TOKEN_SCHEME].contains(&token_type) {
        return Err(ConnectorError::Configuration(format!(
            "tokenType must be {USER_TOKEN_SCHEME} or {TEMP_TOKEN_SCHEME}"
        )));
    }

    Ok(AppService {
        url: url.to_string(),
        host_name: host_name.to_string(),
        access_token: format!("{token_type} {access_token}"),
    })
}
