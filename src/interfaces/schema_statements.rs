//! Schema-definition interface.

use async_trait::async_trait;

use super::connection::Result;
use crate::schema::{Column, ForeignKeyConstraint, IndexDefinition, PrimaryKeyConstraint};

/// Interface for the statements a schema script replays.
///
/// Constraint and index registration take typed records whose fields are
/// all optional. Engines that do not enforce constraints accept them
/// without validation.
#[async_trait]
pub trait SchemaStatements: Send + Sync {
    /// Register a table. Re-defining an existing name replaces it.
    async fn define_table(
        &self,
        name: &str,
        columns: Vec<Column>,
        has_primary_key: bool,
    ) -> Result<()>;

    /// Remove a table definition. Unknown names are ignored.
    async fn drop_table(&self, name: &str) -> Result<()>;

    async fn add_index(&self, index: &IndexDefinition) -> Result<()>;

    async fn add_foreign_key_constraint(&self, constraint: &ForeignKeyConstraint) -> Result<()>;

    async fn add_primary_key_constraint(&self, constraint: &PrimaryKeyConstraint) -> Result<()>;
}
