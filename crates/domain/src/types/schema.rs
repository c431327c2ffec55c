//! Host field schema produced from platform field descriptors

use serde::{Deserialize, Serialize};

use super::field::ValueKind;
use crate::impl_tag_conversions;

/// Host field type. Mirrors [`ValueKind`] plus the object-id type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HostFieldType {
    Oid,
    String,
    Integer,
    Double,
    Date,
    DateOnly,
    TimeOnly,
}

impl_tag_conversions!(HostFieldType {
    Oid => "oid",
    String => "string",
    Integer => "integer",
    Double => "double",
    Date => "date",
    DateOnly => "date-only",
    TimeOnly => "time-only",
});

impl From<ValueKind> for HostFieldType {
    fn from(kind: ValueKind) -> Self {
        match kind {
            ValueKind::String => Self::String,
            ValueKind::Integer => Self::Integer,
            ValueKind::Double => Self::Double,
            ValueKind::Date => Self::Date,
            ValueKind::DateOnly => Self::DateOnly,
            ValueKind::TimeOnly => Self::TimeOnly,
        }
    }
}

/// Host field definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostField {
    pub name: String,
    pub alias: String,
    #[serde(rename = "type")]
    pub field_type: HostFieldType,
    pub editable: bool,
    pub nullable: bool,
}

/// Popup field configuration for a host layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldInfo {
    pub field_name: String,
    pub label: String,
    pub is_editable: bool,
    pub visible: bool,
}
