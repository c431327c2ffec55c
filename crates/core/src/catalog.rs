//! Field type catalog
//!
//! Classifies platform field types into the canonical value kinds understood
//! by the host. This table is the single source of truth for both
//! translation directions and for the host field schema.
//!
//! Unsupported platform types (multi-text, user lists, files, calendar and
//! vcard attachments, references, summaries, lookups, formulas, report links,
//! work dates, db links) and unknown tags classify as `None`. Callers skip
//! those fields without raising an error.

use qbgeo_domain::{FieldDescriptor, FieldType, ValueKind};

/// Canonical value kind of a platform field type.
#[must_use]
pub const fn classify(field_type: &FieldType) -> Option<ValueKind> {
    match field_type {
        FieldType::Text
        | FieldType::RichText
        | FieldType::TextMultiLine
        | FieldType::TextMultipleChoice
        | FieldType::Address
        | FieldType::Email
        | FieldType::Phone
        | FieldType::User
        | FieldType::Url
        | FieldType::Checkbox => Some(ValueKind::String),
        FieldType::Rating | FieldType::RecordId | FieldType::Duration => Some(ValueKind::Integer),
        FieldType::Numeric | FieldType::Currency | FieldType::Percent => Some(ValueKind::Double),
        FieldType::TimeOfDay => Some(ValueKind::TimeOnly),
        FieldType::Date => Some(ValueKind::DateOnly),
        FieldType::DateTime | FieldType::Timestamp => Some(ValueKind::Date),
        FieldType::MultiText
        | FieldType::UserList
        | FieldType::File
        | FieldType::ICalendar
        | FieldType::VCard
        | FieldType::Reference
        | FieldType::Summary
        | FieldType::Lookup
        | FieldType::Formula
        | FieldType::ReportLink
        | FieldType::WorkDate
        | FieldType::DbLink
        | FieldType::Other(_) => None,
    }
}

/// Canonical value kind of a field descriptor.
#[must_use]
pub const fn classify_field(field: &FieldDescriptor) -> Option<ValueKind> {
    classify(&field.field_type)
}

/// Canonical value kind of a raw wire tag.
#[must_use]
pub fn classify_tag(tag: &str) -> Option<ValueKind> {
    classify(&FieldType::from(tag))
}
