//! Geometry and coordinate field selection
//!
//! A selector names a platform field either by id or by a full descriptor.
//! Selectors are resolved once per conversion against the descriptor list;
//! an id that is not in the list resolves to nothing and the selector is
//! then treated as unset.

use qbgeo_domain::{FieldDescriptor, FieldId};
use serde::{Deserialize, Serialize};

/// Reference to a platform field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldSelector {
    ById(FieldId),
    ByDescriptor(FieldDescriptor),
}

impl FieldSelector {
    /// Concrete descriptor for this selector.
    #[must_use]
    pub fn resolve<'a>(&'a self, fields: &'a [FieldDescriptor]) -> Option<&'a FieldDescriptor> {
        match self {
            Self::ById(id) => fields.iter().find(|field| field.id == *id),
            Self::ByDescriptor(field) => Some(field),
        }
    }
}

impl From<FieldId> for FieldSelector {
    fn from(id: FieldId) -> Self {
        Self::ById(id)
    }
}

impl From<FieldDescriptor> for FieldSelector {
    fn from(field: FieldDescriptor) -> Self {
        Self::ByDescriptor(field)
    }
}

/// Where a table keeps its geometry: an encoded geometry field, a
/// latitude/longitude pair, or both (the geometry field wins).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GeometryBinding {
    pub geometry: Option<FieldSelector>,
    pub latitude: Option<FieldSelector>,
    pub longitude: Option<FieldSelector>,
}

impl GeometryBinding {
    /// Binding to an encoded geometry field.
    pub fn geometry_field(selector: impl Into<FieldSelector>) -> Self {
        Self { geometry: Some(selector.into()), ..Self::default() }
    }

    /// Binding to a latitude/longitude field pair.
    pub fn coordinates(
        latitude: impl Into<FieldSelector>,
        longitude: impl Into<FieldSelector>,
    ) -> Self {
        Self { geometry: None, latitude: Some(latitude.into()), longitude: Some(longitude.into()) }
    }

    /// Resolve every configured selector against the descriptor list.
    #[must_use]
    pub fn resolve(&self, fields: &[FieldDescriptor]) -> ResolvedBinding {
        let resolve = |selector: &Option<FieldSelector>| {
            selector.as_ref().and_then(|s| s.resolve(fields)).map(|field| field.id)
        };
        ResolvedBinding {
            geometry: resolve(&self.geometry),
            latitude: resolve(&self.latitude),
            longitude: resolve(&self.longitude),
        }
    }
}

/// Field ids a [`GeometryBinding`] resolved to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolvedBinding {
    pub geometry: Option<FieldId>,
    pub latitude: Option<FieldId>,
    pub longitude: Option<FieldId>,
}

impl ResolvedBinding {
    /// Latitude and longitude ids when both resolved.
    #[must_use]
    pub const fn coordinates(&self) -> Option<(FieldId, FieldId)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(long)) => Some((lat, long)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn fields() -> Vec<FieldDescriptor> {
        vec![
            FieldDescriptor::new(6, "Geometry", "text"),
            FieldDescriptor::new(7, "Lat", "text"),
            FieldDescriptor::new(8, "Long", "text"),
        ]
    }

    #[test]
    fn id_selector_resolves_against_the_list() {
        let fields = fields();
        assert_eq!(FieldSelector::ById(7).resolve(&fields).map(|f| f.label.as_str()), Some("Lat"));
        assert!(FieldSelector::ById(99).resolve(&fields).is_none());
    }

    #[test]
    fn descriptor_selector_resolves_to_itself() {
        let outside = FieldDescriptor::new(42, "Shape", "text");
        let selector = FieldSelector::from(outside.clone());
        assert_eq!(selector.resolve(&fields()), Some(&outside));
    }

    #[test]
    fn selectors_deserialize_from_either_shape() {
        let by_id: FieldSelector = serde_json::from_value(json!(6)).unwrap();
        assert_eq!(by_id, FieldSelector::ById(6));

        let by_descriptor: FieldSelector =
            serde_json::from_value(json!({ "id": 6, "label": "Geometry", "fieldType": "text" }))
                .unwrap();
        assert!(matches!(by_descriptor, FieldSelector::ByDescriptor(ref f) if f.id == 6));
    }

    #[test]
    fn binding_needs_both_coordinates() {
        let fields = fields();
        let resolved = GeometryBinding::coordinates(7, 99).resolve(&fields);
        assert_eq!(resolved.latitude, Some(7));
        assert_eq!(resolved.coordinates(), None);

        let resolved = GeometryBinding::coordinates(7, 8).resolve(&fields);
        assert_eq!(resolved.coordinates(), Some((7, 8)));
        assert_eq!(resolved.geometry, None);
    }

    #[test]
    fn unresolved_geometry_selector_leaves_the_slot_empty() {
        let resolved = GeometryBinding::geometry_field(99).resolve(&fields());
        assert_eq!(resolved, ResolvedBinding::default());
    }
}
