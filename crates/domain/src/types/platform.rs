//! Request and response payloads of the platform's table, relationship and
//! record endpoints

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::field::FieldId;
use super::record::{QueryField, Record};

/// Table metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Table {
    pub id: String,
    pub name: String,
    pub alias: String,
    pub description: String,
    pub created: String,
    pub updated: String,
    pub next_record_id: u64,
    pub next_field_id: u64,
    pub default_sort_field_id: u64,
    pub default_sort_order: String,
    pub key_field_id: u64,
    pub single_record_name: String,
    pub plural_record_name: String,
    pub size_limit: String,
    pub space_used: String,
    pub space_remaining: String,
}

/// Table relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Relationship {
    pub id: u64,
    pub parent_table_id: String,
    pub child_table_id: String,
    #[serde(default)]
    pub is_cross_app: bool,
    pub foreign_key_field: QueryField,
    #[serde(default)]
    pub lookup_fields: Vec<QueryField>,
    #[serde(default)]
    pub summary_fields: Vec<QueryField>,
}

/// Pagination metadata of a relationship listing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RelationshipsMetadata {
    pub num_relationships: u64,
    pub skip: u64,
    pub total_relationships: u64,
}

/// One page of relationships.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelationshipsPage {
    pub metadata: RelationshipsMetadata,
    pub relationships: Vec<Relationship>,
}

/// Sort instruction of a record query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SortBy {
    pub field_id: FieldId,
    pub order: String,
}

/// Body of a record query. `where` is passed through untouched in the
/// platform's query language.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryRequest {
    pub from: String,
    pub select: Vec<FieldId>,
    #[serde(rename = "where", default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group_by: Option<Vec<Value>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<Vec<SortBy>>,
}

/// Body of an upsert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpsertRequest {
    pub to: String,
    pub data: Vec<Record>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub merge_field_id: Option<FieldId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields_to_return: Option<Vec<FieldId>>,
}

/// Upsert outcome metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpsertMetadata {
    pub created_record_ids: Vec<u64>,
    pub updated_record_ids: Vec<u64>,
    pub unchanged_record_ids: Vec<u64>,
    pub total_number_of_records_processed: u64,
}

/// Result of an upsert.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UpsertResult {
    pub data: Vec<Record>,
    pub metadata: UpsertMetadata,
}

/// Body of a record deletion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteRequest {
    pub from: String,
    #[serde(rename = "where")]
    pub filter: String,
}

/// Result of a record deletion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteResult {
    pub number_deleted: u64,
}
