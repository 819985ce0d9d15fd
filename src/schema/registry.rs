//! In-memory table registry.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::debug;

use super::column::Column;
use super::constraints::{ForeignKeyConstraint, IndexDefinition, PrimaryKeyConstraint};
use super::table::Table;

/// Registry of table definitions, keyed by table name.
///
/// Populated during schema definition and read afterwards. Lookups for an
/// unknown table never fail: they yield no columns and no primary key.
#[derive(Debug, Default)]
pub struct SchemaRegistry {
    tables: RwLock<HashMap<String, Table>>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with the given tables.
    pub fn with_tables(tables: impl IntoIterator<Item = Table>) -> Self {
        let tables = tables
            .into_iter()
            .map(|t| (t.name().to_string(), t))
            .collect();
        Self {
            tables: RwLock::new(tables),
        }
    }

    /// Register a table, replacing any existing table of the same name.
    pub async fn define_table(&self, name: &str, columns: Vec<Column>, has_primary_key: bool) {
        let table = Table::new(name, columns, has_primary_key);
        if self
            .tables
            .write()
            .await
            .insert(name.to_string(), table)
            .is_some()
        {
            debug!(table = %name, "Replaced existing table definition");
        }
    }

    pub async fn drop_table(&self, name: &str) {
        self.tables.write().await.remove(name);
    }

    /// Columns of a table in declaration order; empty for unknown tables.
    pub async fn columns_for(&self, table_name: &str) -> Vec<Column> {
        self.tables
            .read()
            .await
            .get(table_name)
            .map(|t| t.columns().to_vec())
            .unwrap_or_default()
    }

    pub async fn column(&self, table_name: &str, column_name: &str) -> Option<Column> {
        self.tables
            .read()
            .await
            .get(table_name)
            .and_then(|t| t.column(column_name).cloned())
    }

    /// `"id"` for tables registered with a primary key, `None` otherwise.
    pub async fn primary_key_for(&self, table_name: &str) -> Option<String> {
        self.tables
            .read()
            .await
            .get(table_name)
            .and_then(Table::primary_key)
            .map(str::to_string)
    }

    pub async fn table(&self, table_name: &str) -> Option<Table> {
        self.tables.read().await.get(table_name).cloned()
    }

    pub async fn contains(&self, table_name: &str) -> bool {
        self.tables.read().await.contains_key(table_name)
    }

    /// Registered table names, sorted.
    pub async fn table_names(&self) -> Vec<String> {
        let mut names: Vec<_> = self.tables.read().await.keys().cloned().collect();
        names.sort();
        names
    }

    /// Accepted and ignored.
    pub fn add_foreign_key_constraint(&self, constraint: &ForeignKeyConstraint) {
        debug!(
            from_table = ?constraint.from_table,
            to_table = ?constraint.to_table,
            "Ignoring foreign key constraint"
        );
    }

    /// Accepted and ignored.
    pub fn add_primary_key_constraint(&self, constraint: &PrimaryKeyConstraint) {
        debug!(
            table = ?constraint.table,
            columns = ?constraint.columns,
            "Ignoring primary key constraint"
        );
    }

    /// Accepted and ignored.
    pub fn add_index(&self, index: &IndexDefinition) {
        debug!(table = ?index.table, columns = ?index.columns, "Ignoring index");
    }
}
