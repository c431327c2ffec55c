//! Platform records and query results

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::field::FieldId;

/// Single cell of a platform record.
///
/// The platform wraps every value in an object so that scalars, nested
/// objects (users, addresses) and arrays of nested objects share one shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldValue {
    pub value: Value,
}

impl FieldValue {
    pub fn new(value: impl Into<Value>) -> Self {
        Self { value: value.into() }
    }

    /// Whether the cell carries something usable (not null, not an empty
    /// string).
    #[must_use]
    pub fn is_present(&self) -> bool {
        match &self.value {
            Value::Null => false,
            Value::String(text) => !text.is_empty(),
            _ => true,
        }
    }
}

/// Platform record keyed by field id rendered as a string.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(pub BTreeMap<String, FieldValue>);

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cell for the given field id.
    #[must_use]
    pub fn get(&self, id: FieldId) -> Option<&FieldValue> {
        self.0.get(&id.to_string())
    }

    /// Cell for an already-stringified key.
    #[must_use]
    pub fn get_key(&self, key: &str) -> Option<&FieldValue> {
        self.0.get(key)
    }

    /// Store a value, replacing any previous value for the field.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.0.insert(key.into(), FieldValue::new(value));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &FieldValue)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(key, value)| (key.into(), FieldValue::new(value))).collect())
    }
}

/// Field summary returned alongside query results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryField {
    pub id: FieldId,
    pub label: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

/// Pagination metadata of a record query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QueryMetadata {
    pub total_records: u64,
    pub num_records: u64,
    pub num_fields: u64,
    pub skip: u64,
}

/// Result of a record query.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    #[serde(default)]
    pub data: Vec<Record>,
    #[serde(default)]
    pub fields: Vec<QueryField>,
    #[serde(default)]
    pub metadata: QueryMetadata,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn record_deserializes_wrapped_values() {
        let record: Record = serde_json::from_value(json!({
            "3": { "value": 17 },
            "6": { "value": "Depot" },
            "9": { "value": { "email": "ops@example.com", "name": "Ops" } }
        }))
        .unwrap();

        assert_eq!(record.len(), 3);
        assert_eq!(record.get(3).unwrap().value, json!(17));
        assert_eq!(record.get_key("6").unwrap().value, json!("Depot"));
        assert!(record.get(12).is_none());
    }

    #[test]
    fn presence_ignores_null_and_empty_strings() {
        assert!(!FieldValue::new(Value::Null).is_present());
        assert!(!FieldValue::new("").is_present());
        assert!(FieldValue::new(0).is_present());
        assert!(FieldValue::new("0").is_present());
    }

    #[test]
    fn query_result_tolerates_missing_sections() {
        let result: QueryResult = serde_json::from_value(json!({
            "data": [{ "3": { "value": 1 } }],
            "metadata": { "totalRecords": 1, "numRecords": 1, "numFields": 1, "skip": 0 }
        }))
        .unwrap();

        assert_eq!(result.data.len(), 1);
        assert!(result.fields.is_empty());
        assert_eq!(result.metadata.total_records, 1);
    }
}
