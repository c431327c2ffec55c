//! Platform field descriptors and the canonical value kinds they map to

use serde::{Deserialize, Serialize};

use crate::impl_tag_conversions;

/// Numeric platform field identifier.
pub type FieldId = u32;

/// Platform field type tag.
///
/// The platform's set of tags is closed, but unknown tags deserialize into
/// [`FieldType::Other`] so that a newly introduced type never breaks parsing
/// of a field list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Text,
    RichText,
    TextMultiLine,
    TextMultipleChoice,
    Address,
    Email,
    Phone,
    User,
    Url,
    Checkbox,
    Rating,
    RecordId,
    Duration,
    Numeric,
    Currency,
    Percent,
    TimeOfDay,
    Date,
    DateTime,
    Timestamp,
    MultiText,
    UserList,
    File,
    ICalendar,
    VCard,
    Reference,
    Summary,
    Lookup,
    Formula,
    ReportLink,
    WorkDate,
    DbLink,
    Other(String),
}

impl FieldType {
    /// Wire tag for this field type.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text => "text",
            Self::RichText => "rich-text",
            Self::TextMultiLine => "text-multi-line",
            Self::TextMultipleChoice => "text-multiple-choice",
            Self::Address => "address",
            Self::Email => "email",
            Self::Phone => "phone",
            Self::User => "user",
            Self::Url => "url",
            Self::Checkbox => "checkbox",
            Self::Rating => "rating",
            Self::RecordId => "recordid",
            Self::Duration => "duration",
            Self::Numeric => "numeric",
            Self::Currency => "currency",
            Self::Percent => "percent",
            Self::TimeOfDay => "timeofday",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Timestamp => "timestamp",
            Self::MultiText => "multitext",
            Self::UserList => "list-user",
            Self::File => "file",
            Self::ICalendar => "icalendar",
            Self::VCard => "vcard",
            Self::Reference => "reference",
            Self::Summary => "summary",
            Self::Lookup => "lookup",
            Self::Formula => "formula",
            Self::ReportLink => "report-link",
            Self::WorkDate => "workdate",
            Self::DbLink => "dblink",
            Self::Other(tag) => tag,
        }
    }
}

impl From<&str> for FieldType {
    fn from(tag: &str) -> Self {
        match tag {
            "text" => Self::Text,
            "rich-text" => Self::RichText,
            "text-multi-line" => Self::TextMultiLine,
            "text-multiple-choice" => Self::TextMultipleChoice,
            "address" => Self::Address,
            "email" => Self::Email,
            "phone" => Self::Phone,
            "user" => Self::User,
            "url" => Self::Url,
            "checkbox" => Self::Checkbox,
            "rating" => Self::Rating,
            "recordid" => Self::RecordId,
            "duration" => Self::Duration,
            "numeric" => Self::Numeric,
            "currency" => Self::Currency,
            "percent" => Self::Percent,
            "timeofday" => Self::TimeOfDay,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "timestamp" => Self::Timestamp,
            "multitext" => Self::MultiText,
            "list-user" => Self::UserList,
            "file" => Self::File,
            "icalendar" => Self::ICalendar,
            "vcard" => Self::VCard,
            "reference" => Self::Reference,
            "summary" => Self::Summary,
            "lookup" => Self::Lookup,
            "formula" => Self::Formula,
            "report-link" => Self::ReportLink,
            "workdate" => Self::WorkDate,
            "dblink" => Self::DbLink,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for FieldType {
    fn from(tag: String) -> Self {
        Self::from(tag.as_str())
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        field_type.as_str().to_string()
    }
}

impl std::fmt::Display for FieldType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Coercion target for attribute values on the host side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    String,
    Integer,
    Double,
    Date,
    DateOnly,
    TimeOnly,
}

impl ValueKind {
    /// Whether values of this kind are parsed into timestamps.
    #[must_use]
    pub const fn is_temporal(self) -> bool {
        matches!(self, Self::Date | Self::DateOnly | Self::TimeOnly)
    }
}

impl_tag_conversions!(ValueKind {
    String => "string",
    Integer => "integer",
    Double => "double",
    Date => "date",
    DateOnly => "date-only",
    TimeOnly => "time-only",
});

/// Composite field reference (address sub-fields and similar).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompositeField {
    pub id: FieldId,
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub key: String,
}

/// Type-specific field properties. Every member is optional because the
/// platform only returns the properties relevant to the field's type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldProperties {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreign_key: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub num_lines: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub append_only: Option<bool>,
    #[serde(rename = "allowHTML", skip_serializing_if = "Option::is_none")]
    pub allow_html: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_mentions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_as_given: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub carry_choices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_new_choices: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_format: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decimal_places: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub composite_fields: Option<Vec<CompositeField>>,
}

/// Role permission attached to a field when permissions are requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldPermission {
    pub permission_type: String,
    pub role: String,
    pub role_id: i64,
}

/// Field descriptor as returned by the platform's field listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub id: FieldId,
    pub label: String,
    pub field_type: FieldType,
    #[serde(default)]
    pub properties: FieldProperties,
    #[serde(default)]
    pub no_wrap: bool,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub appears_by_default: bool,
    #[serde(default)]
    pub find_enabled: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(default)]
    pub does_data_copy: bool,
    #[serde(default)]
    pub field_help: String,
    #[serde(default)]
    pub audited: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub permissions: Vec<FieldPermission>,
}

impl FieldDescriptor {
    /// Minimal descriptor with default properties and flags.
    pub fn new(id: FieldId, label: impl Into<String>, field_type: impl Into<FieldType>) -> Self {
        Self {
            id,
            label: label.into(),
            field_type: field_type.into(),
            properties: FieldProperties::default(),
            no_wrap: false,
            bold: false,
            required: false,
            appears_by_default: false,
            find_enabled: false,
            unique: false,
            does_data_copy: false,
            field_help: String::new(),
            audited: false,
            permissions: Vec::new(),
        }
    }
}
