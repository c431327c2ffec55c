//! Connector domain types

pub mod auth;
pub mod feature;
pub mod field;
pub mod geometry;
pub mod platform;
pub mod record;
pub mod schema;

pub use auth::{Credential, HandshakeParameters, HandshakeReply, HandshakeRequest};
pub use feature::{attribute_key, field_key, Attributes, Feature};
pub use field::{
    CompositeField, FieldDescriptor, FieldId, FieldPermission, FieldProperties, FieldType,
    ValueKind,
};
pub use geometry::{
    EncodedGeometry, Envelope, Geometry, GeometryKind, Multipoint, Point, Polygon, Polyline,
    SpatialReference,
};
pub use platform::{
    DeleteRequest, DeleteResult, QueryRequest, Relationship, RelationshipsMetadata,
    RelationshipsPage, SortBy, Table, UpsertMetadata, UpsertRequest, UpsertResult,
};
pub use record::{FieldValue, QueryField, QueryMetadata, QueryResult, Record};
pub use schema::{FieldInfo, HostField, HostFieldType};
