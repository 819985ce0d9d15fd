//! Null database adapter.
//!
//! Presents the full storage-driver contract while performing no storage:
//! schema-definition calls populate an in-memory registry, and every data
//! operation is recorded in the statement log and answered with a neutral
//! result of the shape a real driver would return.

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info};

use crate::config::NullDbConfig;
use crate::interfaces::{ConnectionAdapter, ExecResult, Result, Row, SchemaStatements};
use crate::loader::SchemaLoader;
use crate::schema::{
    Column, ColumnType, ForeignKeyConstraint, IndexDefinition, PrimaryKeyConstraint,
    SchemaDefinition, SchemaRegistry, Table,
};
use crate::storage::{EntryPoint, IdGenerator, Statement, StatementLog};

/// Driver name reported by `adapter_name`.
pub const ADAPTER_NAME: &str = "NullDB";

/// Bookkeeping table that is always reported present, with its default
/// columns, even after a schema drops it.
pub const SCHEMA_INFO_TABLE: &str = "schema_info";

fn schema_info_table() -> Table {
    Table::new(
        SCHEMA_INFO_TABLE,
        vec![Column::new("version", ColumnType::Integer)],
        false,
    )
}

/// Null database adapter.
///
/// All methods take `&self`; share one instance across callers with `Arc`.
#[derive(Debug)]
pub struct NullDbAdapter {
    config: NullDbConfig,
    registry: SchemaRegistry,
    ids: IdGenerator,
    log: StatementLog,
}

impl Default for NullDbAdapter {
    fn default() -> Self {
        Self::new()
    }
}

impl NullDbAdapter {
    /// Adapter with default configuration and no external schema.
    pub fn new() -> Self {
        Self::with_config(NullDbConfig::default())
    }

    /// Adapter built from `config` without running the schema loader.
    pub fn with_config(config: NullDbConfig) -> Self {
        Self {
            registry: SchemaRegistry::with_tables([schema_info_table()]),
            ids: IdGenerator::with_floor(config.initial_id),
            log: StatementLog::new(),
            config,
        }
    }

    /// Build an adapter from `config` and load the configured schema file,
    /// if any.
    pub async fn establish(config: NullDbConfig) -> Result<Self> {
        let loader = SchemaLoader::resolve(&config)?;
        let adapter = Self::with_config(config);
        if let Some(loader) = loader {
            loader.load(&adapter).await?;
        }
        info!(
            adapter = %adapter.config.adapter,
            schema = ?adapter.config.schema,
            "NullDB connection established"
        );
        Ok(adapter)
    }

    /// Replay a schema definition against this adapter.
    pub async fn define_schema(&self, definition: &SchemaDefinition) -> Result<()> {
        definition.apply(self).await
    }

    pub fn config(&self) -> &NullDbConfig {
        &self.config
    }

    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Scope subsequent log assertions to statements recorded from now on.
    pub async fn checkpoint(&self) {
        let marker = self.log.checkpoint().await;
        debug!(marker, "Execution log checkpoint");
    }

    pub async fn execution_log(&self) -> Vec<Statement> {
        self.log.full_log().await
    }

    pub async fn execution_log_since_checkpoint(&self) -> Vec<Statement> {
        self.log.log_since_checkpoint().await
    }

    /// Whether a statement with `entry_point` was recorded since the last
    /// checkpoint.
    pub async fn contains_since_checkpoint(&self, entry_point: EntryPoint) -> bool {
        self.log.contains_since_checkpoint(entry_point).await
    }

    /// Discard the execution log and its checkpoint.
    pub async fn reset_log(&self) {
        self.log.reset().await;
    }

    async fn record(&self, entry_point: EntryPoint, sql: &str, name: Option<&str>) {
        let sequence = self.log.record(entry_point, sql, name).await;
        debug!(
            entry_point = %entry_point,
            sequence,
            name = name.unwrap_or_default(),
            "Intercepted statement"
        );
    }
}

#[async_trait]
impl ConnectionAdapter for NullDbAdapter {
    fn adapter_name(&self) -> &str {
        ADAPTER_NAME
    }

    fn supports_migrations(&self) -> bool {
        true
    }

    async fn tables(&self) -> Result<Vec<String>> {
        let mut tables = self.registry.table_names().await;
        if !tables.iter().any(|t| t == SCHEMA_INFO_TABLE) {
            tables.push(SCHEMA_INFO_TABLE.to_string());
            tables.sort();
        }
        Ok(tables)
    }

    async fn columns(&self, table_name: &str) -> Result<Vec<Column>> {
        if table_name == SCHEMA_INFO_TABLE && !self.registry.contains(table_name).await {
            return Ok(schema_info_table().columns().to_vec());
        }
        Ok(self.registry.columns_for(table_name).await)
    }

    async fn primary_key(&self, table_name: &str) -> Result<Option<String>> {
        Ok(self.registry.primary_key_for(table_name).await)
    }

    async fn insert(
        &self,
        sql: &str,
        name: Option<&str>,
        _pk: Option<&str>,
        id_value: Option<i64>,
        _sequence_name: Option<&str>,
    ) -> Result<i64> {
        self.record(EntryPoint::Insert, sql, name).await;
        Ok(self.ids.next_id(id_value))
    }

    async fn update(&self, sql: &str, name: Option<&str>) -> Result<u64> {
        self.record(EntryPoint::Update, sql, name).await;
        Ok(0)
    }

    async fn delete(&self, sql: &str, name: Option<&str>) -> Result<u64> {
        self.record(EntryPoint::Delete, sql, name).await;
        Ok(0)
    }

    async fn select_all(&self, sql: &str, name: Option<&str>) -> Result<Vec<Row>> {
        self.record(EntryPoint::SelectAll, sql, name).await;
        Ok(Vec::new())
    }

    async fn select_value(&self, sql: &str, name: Option<&str>) -> Result<Option<Value>> {
        self.record(EntryPoint::SelectValue, sql, name).await;
        Ok(None)
    }

    async fn select_rows(&self, sql: &str, name: Option<&str>) -> Result<Vec<Vec<Value>>> {
        self.record(EntryPoint::SelectRows, sql, name).await;
        Ok(Vec::new())
    }

    async fn execute(&self, sql: &str, name: Option<&str>) -> Result<ExecResult> {
        self.record(EntryPoint::Execute, sql, name).await;
        Ok(ExecResult::empty())
    }

    async fn begin_transaction(&self) -> Result<()> {
        self.record(EntryPoint::Other, "BEGIN", None).await;
        Ok(())
    }

    async fn commit_transaction(&self) -> Result<()> {
        self.record(EntryPoint::Other, "COMMIT", None).await;
        Ok(())
    }

    async fn rollback_transaction(&self) -> Result<()> {
        self.record(EntryPoint::Other, "ROLLBACK", None).await;
        Ok(())
    }
}

#[async_trait]
impl SchemaStatements for NullDbAdapter {
    async fn define_table(
        &self,
        name: &str,
        columns: Vec<Column>,
        has_primary_key: bool,
    ) -> Result<()> {
        self.registry
            .define_table(name, columns, has_primary_key)
            .await;
        Ok(())
    }

    async fn drop_table(&self, name: &str) -> Result<()> {
        self.registry.drop_table(name).await;
        Ok(())
    }

    async fn add_index(&self, index: &IndexDefinition) -> Result<()> {
        self.registry.add_index(index);
        Ok(())
    }

    async fn add_foreign_key_constraint(&self, constraint: &ForeignKeyConstraint) -> Result<()> {
        self.registry.add_foreign_key_constraint(constraint);
        Ok(())
    }

    async fn add_primary_key_constraint(&self, constraint: &PrimaryKeyConstraint) -> Result<()> {
        self.registry.add_primary_key_constraint(constraint);
        Ok(())
    }
}
