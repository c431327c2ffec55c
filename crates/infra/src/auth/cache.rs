//! In-memory credential cache keyed by entity id

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use qbgeo_domain::Credential;
use tokio::sync::RwLock;

/// Credentials issued by the owner, one per entity id.
///
/// Owned by a single broker; independent brokers never share entries.
#[derive(Debug, Default)]
pub struct TokenCache {
    entries: RwLock<HashMap<String, Credential>>,
}

impl TokenCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Credential for `entity_id` if one is cached and still valid at `now`.
    pub async fn get_valid(&self, entity_id: &str, now: DateTime<Utc>) -> Option<Credential> {
        let entries = self.entries.read().await;
        entries.get(entity_id).filter(|credential| credential.is_valid_at(now)).cloned()
    }

    /// Store a credential, replacing any previous one for the entity.
    pub async fn insert(&self, entity_id: impl Into<String>, credential: Credential) {
        self.entries.write().await.insert(entity_id.into(), credential);
    }

    /// Number of cached credentials, expired ones included.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone};

    use super::*;

    fn credential(token: &str, expiration: DateTime<Utc>) -> Credential {
        Credential { token: token.into(), expiration }
    }

    #[tokio::test]
    async fn serves_credentials_until_they_expire() {
        let cache = TokenCache::new();
        let now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
        cache.insert("bqx7yz", credential("abc", now + Duration::minutes(5))).await;

        assert_eq!(cache.get_valid("bqx7yz", now).await.map(|c| c.token), Some("abc".into()));
        assert!(cache.get_valid("bqx7yz", now + Duration::minutes(5)).await.is_none());
        assert!(cache.get_valid("other", now).await.is_none());
    }

    #[tokio::test]
    async fn insert_replaces_previous_credential() {
        let cache = TokenCache::new();
        let now = Utc.timestamp_millis_opt(0).unwrap();
        cache.insert("t1", credential("old", now + Duration::minutes(1))).await;
        cache.insert("t1", credential("new", now + Duration::minutes(1))).await;

        assert_eq!(cache.len().await, 1);
        assert_eq!(cache.get_valid("t1", now).await.unwrap().token, "new");
        assert!(!cache.is_empty().await);
    }
}
