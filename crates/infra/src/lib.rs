//! # QbGeo Infrastructure
//!
//! Infrastructure implementations of the connector's ports.
//!
//! This crate contains:
//! - The token broker and its in-process owner channel
//! - The HTTP client wrapper and the authenticated request dispatcher
//! - Configuration loading from environment variables and files
//! - The command layer used by host workflows
//!
//! ## Architecture
//! - Implements traits defined in `qbgeo-core`
//! - Depends on `qbgeo-domain` and `qbgeo-core`
//! - Contains all I/O (network, environment, files)

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{
    AccessTokenProvider, PlatformService, RequestOptions, ResponseBody, ResponseKind,
    StaticTokenProvider,
};
pub use auth::{ChannelOwner, OwnerMessage, TokenBroker, TokenCache};
pub use commands::{create_app_service, create_service, AppService, PlatformCommands};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
