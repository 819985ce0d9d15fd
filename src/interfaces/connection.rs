//! Storage driver interface.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use serde_json::Value;

use crate::schema::Column;

/// Result type for adapter operations.
pub type Result<T> = std::result::Result<T, AdapterError>;

/// A single result row, keyed by column name.
pub type Row = BTreeMap<String, Value>;

/// Errors that can occur while building or configuring an adapter.
///
/// Data operations on the null engine never produce these; the variants
/// exist for configuration and schema loading, and for real engines
/// implementing the same traits.
#[derive(Debug, thiserror::Error)]
pub enum AdapterError {
    #[error("NullDB not configured: missing {0}")]
    ConfigurationMissing(&'static str),

    #[error("Failed to read schema {path}: {source}")]
    SchemaIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse schema {path}: {source}")]
    SchemaParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),
}

/// Outcome of `execute`.
///
/// Real drivers hand back a cursor or statement handle here. The only
/// capability callers may rely on is `finish`, which releases it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecResult {
    rows_affected: u64,
    rows: Vec<Row>,
}

impl ExecResult {
    pub fn new(rows_affected: u64, rows: Vec<Row>) -> Self {
        Self {
            rows_affected,
            rows,
        }
    }

    /// No rows returned, none affected.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn rows_affected(&self) -> u64 {
        self.rows_affected
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Release the handle. Never fails.
    pub fn finish(self) {}
}

/// Interface for query execution and table metadata.
///
/// The argument shapes follow what an ORM passes to a real driver: raw
/// SQL text plus an optional statement name used for logging
/// (e.g. `"Employee Create"`).
///
/// Implementations:
/// - `NullDbAdapter`: records every call, performs no I/O
#[async_trait]
pub trait ConnectionAdapter: Send + Sync {
    /// Constant naming the driver (e.g. `"NullDB"`).
    fn adapter_name(&self) -> &str;

    /// Whether schema-definition statements are accepted.
    fn supports_migrations(&self) -> bool {
        false
    }

    /// Names of all known tables.
    async fn tables(&self) -> Result<Vec<String>>;

    /// Column definitions for a table, in declaration order.
    async fn columns(&self, table_name: &str) -> Result<Vec<Column>>;

    /// Primary key column name, or `None` for tables without one.
    async fn primary_key(&self, table_name: &str) -> Result<Option<String>>;

    /// Insert a row and return its identifier.
    ///
    /// When `id_value` is supplied the record already has an identifier
    /// and it is returned as-is.
    async fn insert(
        &self,
        sql: &str,
        name: Option<&str>,
        pk: Option<&str>,
        id_value: Option<i64>,
        sequence_name: Option<&str>,
    ) -> Result<i64>;

    /// Update rows, returning the number affected.
    async fn update(&self, sql: &str, name: Option<&str>) -> Result<u64>;

    /// Delete rows, returning the number affected.
    async fn delete(&self, sql: &str, name: Option<&str>) -> Result<u64>;

    /// Run a query returning every row.
    async fn select_all(&self, sql: &str, name: Option<&str>) -> Result<Vec<Row>>;

    /// Run a query returning the first row only.
    async fn select_one(&self, sql: &str, name: Option<&str>) -> Result<Option<Row>> {
        Ok(self.select_all(sql, name).await?.into_iter().next())
    }

    /// Run a query returning the first column of the first row.
    async fn select_value(&self, sql: &str, name: Option<&str>) -> Result<Option<Value>>;

    /// Run a query returning rows as positional value lists.
    async fn select_rows(&self, sql: &str, name: Option<&str>) -> Result<Vec<Vec<Value>>>;

    /// Execute arbitrary SQL.
    async fn execute(&self, sql: &str, name: Option<&str>) -> Result<ExecResult>;

    async fn begin_transaction(&self) -> Result<()>;

    async fn commit_transaction(&self) -> Result<()>;

    async fn rollback_transaction(&self) -> Result<()>;
}
