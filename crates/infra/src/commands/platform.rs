//! Table, field, relationship and record commands
//!
//! Each command checks its required inputs and issues one dispatcher call
//! scoped to the table or app it targets.

use std::sync::Arc;

use qbgeo_domain::{
    ConnectorError, DeleteRequest, DeleteResult, FieldDescriptor, QueryRequest, QueryResult,
    RelationshipsPage, Result, Table, UpsertRequest, UpsertResult,
};
use serde_json::json;
use tracing::{debug, instrument};
use urlencoding::encode;

use crate::api::{PlatformService, Query};

/// Typed platform operations on top of a [`PlatformService`].
#[derive(Clone)]
pub struct PlatformCommands {
    service: Arc<PlatformService>,
}

impl PlatformCommands {
    pub fn new(service: Arc<PlatformService>) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &PlatformService {
        &self.service
    }

    // === Tables ===

    /// List the tables of an app.
    ///
    /// # Errors
    /// Returns `Configuration` when `app_id` is empty, or any dispatcher
    /// error.
    #[instrument(skip(self))]
    pub async fn get_tables(&self, app_id: &str) -> Result<Vec<Table>> {
        require("appId", app_id)?;
        let query = params([("appId", json!(app_id))]);
        let tables: Vec<Table> = self.service.get_json(app_id, "/tables", Some(query)).await?;

        debug!(count = tables.len(), "Tables listed");
        Ok(tables)
    }

    /// Properties of one table of an app.
    ///
    /// # Errors
    /// Returns `Configuration` when an id is empty, or any dispatcher error.
    #[instrument(skip(self))]
    pub async fn get_table(&self, app_id: &str, table_id: &str) -> Result<Table> {
        require("tableId", table_id)?;
        require("appId", app_id)?;
        let path = format!("/{}", encode(table_id));
        let query = params([("appId", json!(app_id))]);
        self.service.get_json(table_id, &path, Some(query)).await
    }

    // === Fields ===

    /// Field descriptors of a table.
    ///
    /// # Errors
    /// Returns `Configuration` when `table_id` is empty, or any dispatcher
    /// error.
    #[instrument(skip(self))]
    pub async fn get_fields(
        &self,
        table_id: &str,
        include_field_perms: bool,
    ) -> Result<Vec<FieldDescriptor>> {
        require("tableId", table_id)?;
        let query = params([
            ("tableId", json!(table_id)),
            ("includeFieldPerms", json!(include_field_perms)),
        ]);
        let fields: Vec<FieldDescriptor> =
            self.service.get_json(table_id, "/fields", Some(query)).await?;

        debug!(count = fields.len(), "Fields listed");
        Ok(fields)
    }

    // === Relationships ===

    /// One page of the relationships where `table_id` is the child table.
    ///
    /// # Errors
    /// Returns `Configuration` when `table_id` is empty, or any dispatcher
    /// error.
    #[instrument(skip(self))]
    pub async fn get_relationships(
        &self,
        table_id: &str,
        skip: Option<u64>,
    ) -> Result<RelationshipsPage> {
        require("tableId", table_id)?;
        let path = format!("/tables/{}/relationships", encode(table_id));
        let query = params([("skip", json!(skip))]);
        self.service.get_json(table_id, &path, Some(query)).await
    }

    // === Records ===

    /// Run a record query.
    ///
    /// # Errors
    /// Returns `Configuration` when `from` or `select` is empty, or any
    /// dispatcher error.
    #[instrument(skip(self, request), fields(from = %request.from))]
    pub async fn query_records(&self, request: &QueryRequest) -> Result<QueryResult> {
        require("from", &request.from)?;
        if request.select.is_empty() {
            return Err(ConnectorError::required("select"));
        }

        let result: QueryResult =
            self.service.post_json(&request.from, "/records/query", request).await?;
        debug!(count = result.data.len(), "Records queried");
        Ok(result)
    }

    /// Insert and/or update records.
    ///
    /// # Errors
    /// Returns `Configuration` when `to` is empty, or any dispatcher error.
    #[instrument(skip(self, request), fields(to = %request.to, count = request.data.len()))]
    pub async fn upsert_records(&self, request: &UpsertRequest) -> Result<UpsertResult> {
        require("to", &request.to)?;

        let result: UpsertResult = self.service.post_json(&request.to, "/records", request).await?;
        debug!(
            created = result.metadata.created_record_ids.len(),
            updated = result.metadata.updated_record_ids.len(),
            "Records upserted"
        );
        Ok(result)
    }

    /// Delete the records matching a filter.
    ///
    /// # Errors
    /// Returns `Configuration` when `from` or `where` is empty, or any
    /// dispatcher error.
    #[instrument(skip(self, request), fields(from = %request.from))]
    pub async fn delete_records(&self, request: &DeleteRequest) -> Result<DeleteResult> {
        require("from", &request.from)?;
        require("where", &request.filter)?;

        let result: DeleteResult =
            self.service.delete_json(&request.from, "/records", request).await?;
        debug!(deleted = result.number_deleted, "Records deleted");
        Ok(result)
    }
}

fn require(name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(ConnectorError::required(name));
    }
    Ok(())
}

fn params<const N: usize>(pairs: [(&str, serde_json::Value); N]) -> Query {
    pairs.into_iter().map(|(key, value)| (key.to_string(), value)).collect()
}
