//! Connector commands
//!
//! Thin entry points for the host's workflow layer: service construction,
//! typed platform calls and the record/feature conversions.

mod platform;
mod service;

pub use platform::PlatformCommands;
pub use qbgeo_core::{to_field_infos, to_host_fields, RecordTranslator};
pub use service::{create_app_service, create_service, AppService};
