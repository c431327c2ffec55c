//! Port interfaces for the authentication handshake
//!
//! The connector runs inside a host owned by another process (a parent or
//! opener window in the browser embedding). Credentials are requested from
//! that owner with a single request and exactly one reply delivered on a
//! private channel.

use chrono::{DateTime, Utc};
use qbgeo_domain::{HandshakeReply, HandshakeRequest, Result};
use tokio::sync::oneshot;

/// Reply-only endpoint handed to the owner with each handshake. Dropping it
/// without sending closes the channel.
pub type ReplyPort = oneshot::Sender<HandshakeReply>;

/// Addressable owner of the connector's host process.
pub trait MessageOwner: Send + Sync {
    /// Post `message` to the owner, addressed to `target_origin`, transferring
    /// `reply` as the channel for the answer.
    ///
    /// # Errors
    /// Returns an error when the owner can no longer be reached.
    fn post_message(
        &self,
        message: HandshakeRequest,
        target_origin: &str,
        reply: ReplyPort,
    ) -> Result<()>;
}

/// Wall clock used for credential expiry.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Real system clock implementation for production use
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
