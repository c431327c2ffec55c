//! In-process owner channel
//!
//! Embedders that host the connector in the same process (and tests) answer
//! handshakes by draining an unbounded queue of [`OwnerMessage`]s.

use qbgeo_core::{MessageOwner, ReplyPort};
use qbgeo_domain::{ConnectorError, HandshakeReply, HandshakeRequest, Result};
use tokio::sync::mpsc;
use tracing::debug;

/// One handshake delivered to the owner.
#[derive(Debug)]
pub struct OwnerMessage {
    pub request: HandshakeRequest,
    pub target_origin: String,
    reply: ReplyPort,
}

impl OwnerMessage {
    /// Answer the handshake. Returns `false` when the requester has gone away.
    pub fn respond(self, reply: HandshakeReply) -> bool {
        self.reply.send(reply).is_ok()
    }

    /// Close the reply channel without answering.
    pub fn abandon(self) {
        drop(self.reply);
    }
}

/// [`MessageOwner`] backed by a tokio channel.
#[derive(Debug, Clone)]
pub struct ChannelOwner {
    sender: mpsc::UnboundedSender<OwnerMessage>,
}

impl ChannelOwner {
    /// Owner handle plus the receiving end the embedder listens on.
    #[must_use]
    pub fn new() -> (Self, mpsc::UnboundedReceiver<OwnerMessage>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { sender }, receiver)
    }
}

impl MessageOwner for ChannelOwner {
    fn post_message(
        &self,
        message: HandshakeRequest,
        target_origin: &str,
        reply: ReplyPort,
    ) -> Result<()> {
        debug!(action = %message.action, target_origin, "posting handshake to owner");
        let message =
            OwnerMessage { request: message, target_origin: target_origin.to_string(), reply };
        self.sender
            .send(message)
            .map_err(|_| ConnectorError::Authentication("owner is no longer listening".into()))
    }
}
