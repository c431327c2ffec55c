//! Host geometric features

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::field::FieldId;
use super::geometry::Geometry;
use crate::constants::FIELD_PREFIX;

/// Attribute table of a feature.
pub type Attributes = BTreeMap<String, Value>;

/// Attribute key for a platform field id (`_<id>`).
#[must_use]
pub fn attribute_key(id: FieldId) -> String {
    format!("{FIELD_PREFIX}{id}")
}

/// Platform field key carried by a prefixed attribute key, if any.
#[must_use]
pub fn field_key(attribute: &str) -> Option<&str> {
    attribute.strip_prefix(FIELD_PREFIX)
}

/// One spatial entity on the host: attributes plus an optional geometry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub attributes: Attributes,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<Geometry>,
}

impl Feature {
    #[must_use]
    pub fn new(geometry: Option<Geometry>) -> Self {
        Self { attributes: Attributes::new(), geometry }
    }

    /// Attribute stored for a platform field.
    #[must_use]
    pub fn field_attribute(&self, id: FieldId) -> Option<&Value> {
        self.attributes.get(&attribute_key(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attribute_keys_carry_the_prefix() {
        assert_eq!(attribute_key(7), "_7");
        assert_eq!(field_key("_7"), Some("7"));
        assert_eq!(field_key("objectid"), None);
    }
}
