//! Schema metadata.
//!
//! Column and table definitions, the registry holding them, and the
//! DSL schema scripts use to populate it.

pub mod column;
pub mod constraints;
pub mod definition;
pub mod registry;
pub mod table;

pub use column::{Column, ColumnDefinition, ColumnType};
pub use constraints::{ForeignKeyConstraint, IndexDefinition, PrimaryKeyConstraint};
pub use definition::{SchemaDefinition, TableDefinition, TableOptions};
pub use registry::SchemaRegistry;
pub use table::{Table, PRIMARY_KEY_COLUMN};
