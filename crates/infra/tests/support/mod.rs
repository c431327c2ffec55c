//! Shared fixtures for infra integration tests
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use qbgeo_core::{Clock, MessageOwner};
use qbgeo_domain::{Credential, HandshakeReply};
use qbgeo_infra::{ChannelOwner, OwnerMessage};

/// Instant every test clock starts at.
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap()
}

/// Successful handshake reply.
pub fn issued(token: &str, expiration: DateTime<Utc>) -> HandshakeReply {
    HandshakeReply::Issued {
        parameters: Credential { token: token.to_string(), expiration },
    }
}

/// Clock the test moves by hand.
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Arc<Self> {
        Arc::new(Self { now: Mutex::new(now) })
    }

    pub fn advance(&self, by: chrono::Duration) {
        let mut now = self.now.lock();
        *now += by;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock()
    }
}

/// In-process owner answering every handshake with `respond`.
pub struct ScriptedOwner {
    pub owner: Arc<ChannelOwner>,
    handshakes: Arc<AtomicUsize>,
    received: Arc<Mutex<Vec<(String, String)>>>,
}

impl ScriptedOwner {
    /// Spawn the owner task. `delay` is awaited before each answer so
    /// concurrent callers overlap.
    pub fn spawn<F>(delay: Duration, respond: F) -> Self
    where
        F: Fn(usize, &OwnerMessage) -> Option<HandshakeReply> + Send + 'static,
    {
        let (owner, mut inbox) = ChannelOwner::new();
        let handshakes = Arc::new(AtomicUsize::new(0));
        let received = Arc::new(Mutex::new(Vec::new()));

        let counter = Arc::clone(&handshakes);
        let log = Arc::clone(&received);
        tokio::spawn(async move {
            while let Some(message) = inbox.recv().await {
                let index = counter.fetch_add(1, Ordering::SeqCst);
                log.lock()
                    .push((message.request.parameters.id.clone(), message.target_origin.clone()));
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                match respond(index, &message) {
                    Some(reply) => {
                        message.respond(reply);
                    }
                    None => message.abandon(),
                }
            }
        });

        Self { owner: Arc::new(owner), handshakes, received }
    }

    /// Owner that issues `token-<n>` valid for one hour after [`start_time`].
    pub fn issuing() -> Self {
        Self::spawn(Duration::ZERO, |index, _| {
            Some(issued(&format!("token-{index}"), start_time() + chrono::Duration::hours(1)))
        })
    }

    /// Owner handle as the broker takes it.
    pub fn handle(&self) -> Arc<dyn MessageOwner> {
        self.owner.clone()
    }

    pub fn handshakes(&self) -> usize {
        self.handshakes.load(Ordering::SeqCst)
    }

    /// `(entity id, target origin)` of every handshake received.
    pub fn received(&self) -> Vec<(String, String)> {
        self.received.lock().clone()
    }
}
