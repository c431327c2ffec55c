//! Connector constants
//!
//! Centralized location for wire-level names and fixed values shared by the
//! translation engine, the token broker and the request dispatcher.

// Spatial references
pub const WGS84_WKID: u32 = 4326;
pub const WEB_MERCATOR_WKID: u32 = 3857;

// Host feature attributes
pub const FIELD_PREFIX: &str = "_";
pub const OBJECT_ID_FIELD: &str = "objectid";
pub const OBJECT_ID_ALIAS: &str = "Object ID";

/// Field aliases that hold geometry data and are never editable on the host.
pub const READ_ONLY_ALIASES: [&str; 3] = ["geometry", "lat", "long"];

// Authentication
pub const TEMP_TOKEN_SCHEME: &str = "QB-TEMP-TOKEN";
pub const USER_TOKEN_SCHEME: &str = "QB-USER-TOKEN";
pub const AUTHENTICATE_ACTION: &str = "authenticate";
pub const TOKEN_REQUEST_FAILED: &str = "The token request failed unexpectedly.";

// HTTP
/// Must stay lower case; `HeaderName::from_static` rejects upper case.
pub const REALM_HOSTNAME_HEADER: &str = "qb-realm-hostname";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const DEFAULT_REQUEST_ERROR_MESSAGE: &str = "Quickbase request failed.";

// Configuration
pub const ENV_INSTANCE_URL: &str = "QBGEO_INSTANCE_URL";
pub const ENV_HOST_NAME: &str = "QBGEO_HOST_NAME";
pub const ENV_TARGET_ORIGIN: &str = "QBGEO_TARGET_ORIGIN";
pub const ENV_TIMEOUT_SECS: &str = "QBGEO_TIMEOUT_SECS";
