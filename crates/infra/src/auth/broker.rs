//! Token broker
//!
//! Issues authorization header values for entity ids. Credentials come from
//! the process that owns the connector's host, requested with a single
//! handshake per entity and cached until they expire.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;
use qbgeo_core::{Clock, MessageOwner, SystemClock};
use qbgeo_domain::constants::{TEMP_TOKEN_SCHEME, TOKEN_REQUEST_FAILED};
use qbgeo_domain::{ConnectorError, Credential, HandshakeReply, HandshakeRequest, Result};
use tokio::sync::oneshot;
use tracing::{debug, info, instrument, warn};

use super::cache::TokenCache;

/// Broker of temporary platform credentials.
///
/// Concurrent requests for the same entity share one handshake; requests for
/// different entities never wait on each other.
pub struct TokenBroker {
    owner: Option<Arc<dyn MessageOwner>>,
    host_name: String,
    target_origin: String,
    cache: TokenCache,
    in_flight: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
    clock: Arc<dyn Clock>,
}

impl TokenBroker {
    /// Create a broker that addresses handshakes to `https://<host_name>`.
    pub fn new(owner: Option<Arc<dyn MessageOwner>>, host_name: impl Into<String>) -> Self {
        let host_name = host_name.into();
        let target_origin = format!("https://{host_name}");
        Self {
            owner,
            host_name,
            target_origin,
            cache: TokenCache::new(),
            in_flight: Mutex::new(HashMap::new()),
            clock: Arc::new(SystemClock),
        }
    }

    /// Address handshakes to a specific origin instead of the realm host.
    pub fn with_target_origin(mut self, target_origin: impl Into<String>) -> Self {
        self.target_origin = target_origin.into();
        self
    }

    /// Replace the clock used for credential expiry.
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn host_name(&self) -> &str {
        &self.host_name
    }

    pub fn target_origin(&self) -> &str {
        &self.target_origin
    }

    /// Authorization header value for `entity_id`, formatted as
    /// `QB-TEMP-TOKEN <token>`.
    ///
    /// # Errors
    /// - `Configuration` when no owner or host name is configured
    /// - `Authentication` when the owner refuses or sends an unexpected reply
    #[instrument(skip(self))]
    pub async fn get_token(&self, entity_id: &str) -> Result<String> {
        if let Some(credential) = self.cached(entity_id).await {
            debug!("credential cache hit");
            return Ok(authorization(&credential));
        }

        let gate = self.gate(entity_id);
        let issued = self.issue(entity_id, &gate).await;
        self.release(entity_id, &gate);
        issued
    }

    async fn issue(&self, entity_id: &str, gate: &tokio::sync::Mutex<()>) -> Result<String> {
        let _guard = gate.lock().await;

        // Another task may have completed the handshake while we waited.
        if let Some(credential) = self.cached(entity_id).await {
            debug!("credential issued by concurrent handshake");
            return Ok(authorization(&credential));
        }

        debug!("credential cache miss");
        let credential = match self.handshake(entity_id).await {
            Ok(credential) => credential,
            Err(err) => {
                warn!(error = %err, "handshake failed");
                return Err(err);
            }
        };

        info!(expiration = %credential.expiration, "credential issued");
        let header = authorization(&credential);
        self.cache.insert(entity_id, credential).await;
        Ok(header)
    }

    async fn cached(&self, entity_id: &str) -> Option<Credential> {
        self.cache.get_valid(entity_id, self.clock.now()).await
    }

    fn gate(&self, entity_id: &str) -> Arc<tokio::sync::Mutex<()>> {
        self.in_flight.lock().entry(entity_id.to_string()).or_default().clone()
    }

    /// Drop the gate once no other task holds a handle to it.
    fn release(&self, entity_id: &str, gate: &Arc<tokio::sync::Mutex<()>>) {
        let mut in_flight = self.in_flight.lock();
        // One handle lives in the map, the other is ours.
        if Arc::strong_count(gate) == 2 {
            in_flight.remove(entity_id);
        }
    }

    async fn handshake(&self, entity_id: &str) -> Result<Credential> {
        let owner = self.owner.as_ref().ok_or_else(|| {
            ConnectorError::Configuration("no owner is available for authentication".into())
        })?;
        if self.host_name.is_empty() {
            return Err(ConnectorError::required("host name"));
        }

        let (reply, answer) = oneshot::channel();
        owner.post_message(HandshakeRequest::authenticate(entity_id), &self.target_origin, reply)?;

        let unexpected = || ConnectorError::Authentication(TOKEN_REQUEST_FAILED.into());
        match answer.await.map_err(|_| unexpected())? {
            HandshakeReply::Failure { error } => Err(ConnectorError::Authentication(error)),
            HandshakeReply::Issued { parameters } if !parameters.token.is_empty() => Ok(parameters),
            HandshakeReply::Issued { .. } | HandshakeReply::Unrecognized(_) => Err(unexpected()),
        }
    }
}

fn authorization(credential: &Credential) -> String {
    format!("{TEMP_TOKEN_SCHEME} {}", credential.token)
}
