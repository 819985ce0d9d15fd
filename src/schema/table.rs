//! Table definitions.

use super::column::Column;

/// Conventional primary key column name.
pub const PRIMARY_KEY_COLUMN: &str = "id";

/// A registered table.
///
/// Primary key presence is explicit: a table registered without one
/// (a habtm join table) answers `None` from `primary_key` regardless of
/// which columns it carries.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    name: String,
    columns: Vec<Column>,
    has_primary_key: bool,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<Column>, has_primary_key: bool) -> Self {
        Self {
            name: name.into(),
            columns,
            has_primary_key,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn has_primary_key(&self) -> bool {
        self.has_primary_key
    }

    pub fn primary_key(&self) -> Option<&'static str> {
        self.has_primary_key.then_some(PRIMARY_KEY_COLUMN)
    }
}
