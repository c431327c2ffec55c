//! # QbGeo Core
//!
//! Pure translation logic layer - no network or host dependencies.
//!
//! This crate contains:
//! - The field type catalog
//! - Geometry field selectors
//! - Record/feature translation
//! - Host field schema construction
//! - Port interfaces (traits) for the projection engine, the handshake owner
//!   and the clock
//!
//! ## Architecture Principles
//! - Only depends on `qbgeo-domain`
//! - No HTTP or platform code
//! - All external collaborators via traits

pub mod catalog;
pub mod schema;
pub mod selector;
pub mod translate;

// Ports
pub mod auth_ports;
pub mod projection_ports;

pub use auth_ports::{Clock, MessageOwner, ReplyPort, SystemClock};
pub use catalog::{classify, classify_field, classify_tag};
pub use projection_ports::ProjectionService;
pub use schema::{to_field_infos, to_host_field, to_host_fields};
pub use selector::{FieldSelector, GeometryBinding, ResolvedBinding};
pub use translate::RecordTranslator;
