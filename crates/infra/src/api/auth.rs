//! Authorization sources for platform requests

use async_trait::async_trait;
use qbgeo_domain::{ConnectorError, Result};

use crate::auth::TokenBroker;

/// Trait for providing authorization header values
///
/// This trait allows dependency injection and testing with mock providers.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Complete `Authorization` header value for a call scoped to
    /// `entity_id`.
    async fn access_token(&self, entity_id: &str) -> Result<String>;
}

#[async_trait]
impl AccessTokenProvider for TokenBroker {
    async fn access_token(&self, entity_id: &str) -> Result<String> {
        self.get_token(entity_id).await
    }
}

/// Fixed authorization value, such as a user token, shared by every entity.
#[derive(Clone)]
pub struct StaticTokenProvider {
    authorization: String,
}

impl StaticTokenProvider {
    /// Provider for `<scheme> <token>`.
    ///
    /// # Errors
    /// Returns `Configuration` when either part is empty.
    pub fn new(scheme: &str, token: &str) -> Result<Self> {
        if scheme.is_empty() {
            return Err(ConnectorError::required("tokenType"));
        }
        if token.is_empty() {
            return Err(ConnectorError::required("accessToken"));
        }
        Ok(Self { authorization: format!("{scheme} {token}") })
    }

    /// Provider for an already formatted header value.
    pub fn from_authorization(authorization: impl Into<String>) -> Self {
        Self { authorization: authorization.into() }
    }
}

impl std::fmt::Debug for StaticTokenProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StaticTokenProvider").field("authorization", &"<redacted>").finish()
    }
}

#[async_trait]
impl AccessTokenProvider for StaticTokenProvider {
    async fn access_token(&self, _entity_id: &str) -> Result<String> {
        Ok(self.authorization.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn static_provider_formats_scheme_and_token() {
        let provider = StaticTokenProvider::new("QB-USER-TOKEN", "b1234").unwrap();
        assert_eq!(provider.access_token("any").await.unwrap(), "QB-USER-TOKEN b1234");
        assert!(!format!("{provider:?}").contains("b1234"));
    }

    #[test]
    fn static_provider_requires_both_parts() {
        assert_eq!(
            StaticTokenProvider::new("", "b1234").unwrap_err(),
            ConnectorError::required("tokenType")
        );
        assert_eq!(
            StaticTokenProvider::new("QB-USER-TOKEN", "").unwrap_err(),
            ConnectorError::required("accessToken")
        );
    }
}
