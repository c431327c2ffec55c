//! Host field schema built from platform field descriptors

use qbgeo_domain::constants::{OBJECT_ID_ALIAS, OBJECT_ID_FIELD, READ_ONLY_ALIASES};
use qbgeo_domain::{attribute_key, FieldDescriptor, FieldInfo, HostField, HostFieldType};

use crate::catalog::classify;

/// Host field for a platform field, or `None` when the field type has no
/// host counterpart.
///
/// Fields labelled `geometry`, `lat` or `long` (any case) hold the feature's
/// location and are never editable as plain attributes.
#[must_use]
pub fn to_host_field(field: &FieldDescriptor) -> Option<HostField> {
    let kind = classify(&field.field_type)?;
    let editable = !READ_ONLY_ALIASES.iter().any(|alias| field.label.eq_ignore_ascii_case(alias));

    Some(HostField {
        name: attribute_key(field.id),
        alias: field.label.clone(),
        field_type: kind.into(),
        editable,
        nullable: true,
    })
}

/// Host fields for every convertible descriptor, followed by the object-id
/// field.
#[must_use]
pub fn to_host_fields(fields: &[FieldDescriptor]) -> Vec<HostField> {
    fields
        .iter()
        .filter_map(to_host_field)
        .chain(std::iter::once(HostField {
            name: OBJECT_ID_FIELD.to_string(),
            alias: OBJECT_ID_ALIAS.to_string(),
            field_type: HostFieldType::Oid,
            editable: false,
            nullable: false,
        }))
        .collect()
}

/// Popup field configuration for every descriptor.
#[must_use]
pub fn to_field_infos(fields: &[FieldDescriptor]) -> Vec<FieldInfo> {
    fields
        .iter()
        .map(|field| FieldInfo {
            field_name: attribute_key(field.id),
            label: field.label.clone(),
            is_editable: true,
            visible: true,
        })
        .collect()
}
