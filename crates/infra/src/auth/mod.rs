//! Credential brokering for platform requests
//!
//! The broker asks the owning process for temporary credentials over a
//! single-use reply channel and caches them per entity id.

pub mod broker;
pub mod cache;
pub mod channel;

pub use broker::TokenBroker;
pub use cache::TokenCache;
pub use channel::{ChannelOwner, OwnerMessage};
