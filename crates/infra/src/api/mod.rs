//! Platform REST API access
//!
//! [`PlatformService`] dispatches authenticated requests scoped to an entity
//! id. Authorization values come from an [`AccessTokenProvider`]: either the
//! [`TokenBroker`](crate::auth::TokenBroker) handshake or a fixed user token.

pub mod auth;
pub mod client;
pub mod errors;
pub mod query;

pub use auth::{AccessTokenProvider, StaticTokenProvider};
pub use client::{PlatformService, RequestOptions, ResponseBody, ResponseKind};
pub use errors::request_error;
pub use query::{append_query, query_text, Query};
