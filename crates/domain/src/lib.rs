//! # QbGeo Domain
//!
//! Domain types and models for the QbGeo platform connector.
//!
//! This crate contains:
//! - Platform types (field descriptors, records, query results)
//! - Host types (geometric features, geometries, host field schema)
//! - Credential and handshake message types
//! - The connector error taxonomy and Result alias
//! - Configuration structures and constants
//!
//! ## Architecture
//! - No dependencies on other QbGeo crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
