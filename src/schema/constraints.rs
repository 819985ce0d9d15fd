//! Constraint and index records.
//!
//! Schema scripts written for a real engine declare these with loosely
//! structured arguments. Every field is optional so any such declaration
//! can be represented; engines that do not enforce constraints accept
//! them without looking inside.
//!
//! In a schema file each record may be written as a mapping of named
//! fields, as a positional list, or as a bare scalar. Whatever the shape,
//! deserialization never fails: recognizable parts are kept and the rest
//! is dropped.

use serde::Deserialize;
use serde_yaml::Value;

/// Scalar rendered as text; `None` for mappings, lists and null.
fn scalar_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Tagged(tagged) => scalar_string(&tagged.value),
        Value::Null | Value::Sequence(_) | Value::Mapping(_) => None,
    }
}

/// A single column name or a list of them.
fn column_list(value: &Value) -> Vec<String> {
    match value {
        Value::Sequence(items) => items.iter().filter_map(scalar_string).collect(),
        other => scalar_string(other).into_iter().collect(),
    }
}

fn field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(scalar_string)
}

fn positional(items: &[Value], index: usize) -> Option<String> {
    items.get(index).and_then(scalar_string)
}

/// Foreign key declaration.
///
/// Positional form: `[from_table, to_table, from_column, to_column, name]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "serde_yaml::Value")]
pub struct ForeignKeyConstraint {
    pub name: Option<String>,
    pub from_table: Option<String>,
    pub from_column: Option<String>,
    pub to_table: Option<String>,
    pub to_column: Option<String>,
    pub on_delete: Option<String>,
    pub on_update: Option<String>,
}

impl ForeignKeyConstraint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn from_table(mut self, table: impl Into<String>) -> Self {
        self.from_table = Some(table.into());
        self
    }

    pub fn from_column(mut self, column: impl Into<String>) -> Self {
        self.from_column = Some(column.into());
        self
    }

    pub fn to_table(mut self, table: impl Into<String>) -> Self {
        self.to_table = Some(table.into());
        self
    }

    pub fn to_column(mut self, column: impl Into<String>) -> Self {
        self.to_column = Some(column.into());
        self
    }
}

impl From<Value> for ForeignKeyConstraint {
    fn from(value: Value) -> Self {
        match &value {
            Value::Mapping(_) => Self {
                name: field(&value, "name"),
                from_table: field(&value, "from_table"),
                from_column: field(&value, "from_column"),
                to_table: field(&value, "to_table"),
                to_column: field(&value, "to_column"),
                on_delete: field(&value, "on_delete"),
                on_update: field(&value, "on_update"),
            },
            Value::Sequence(items) => Self {
                from_table: positional(items, 0),
                to_table: positional(items, 1),
                from_column: positional(items, 2),
                to_column: positional(items, 3),
                name: positional(items, 4),
                ..Self::default()
            },
            other => Self {
                from_table: scalar_string(other),
                ..Self::default()
            },
        }
    }
}

/// Composite or explicit primary key declaration.
///
/// Positional form: `[table, columns, options]`, where `columns` is a name
/// or a list and `options` may carry `name`. Later entries are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "serde_yaml::Value")]
pub struct PrimaryKeyConstraint {
    pub name: Option<String>,
    pub table: Option<String>,
    pub columns: Vec<String>,
}

impl PrimaryKeyConstraint {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.columns.push(column.into());
        self
    }
}

impl From<Value> for PrimaryKeyConstraint {
    fn from(value: Value) -> Self {
        match &value {
            Value::Mapping(_) => Self {
                name: field(&value, "name"),
                table: field(&value, "table"),
                columns: value.get("columns").map(column_list).unwrap_or_default(),
            },
            Value::Sequence(items) => Self {
                table: positional(items, 0),
                columns: items.get(1).map(column_list).unwrap_or_default(),
                name: items.get(2).and_then(|options| field(options, "name")),
            },
            other => Self {
                table: scalar_string(other),
                ..Self::default()
            },
        }
    }
}

/// Index declaration.
///
/// Positional form: `[table, columns, options]`, where `options` may carry
/// `name` and `unique`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "serde_yaml::Value")]
pub struct IndexDefinition {
    pub name: Option<String>,
    pub table: Option<String>,
    pub columns: Vec<String>,
    pub unique: bool,
}

impl IndexDefinition {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: Some(table.into()),
            ..Default::default()
        }
    }

    pub fn column(mut self, column: impl Into<String>) -> Self {
        self.columns.push(column.into());
        self
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }
}

fn unique_flag(options: &Value) -> bool {
    options
        .get("unique")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

impl From<Value> for IndexDefinition {
    fn from(value: Value) -> Self {
        match &value {
            Value::Mapping(_) => Self {
                name: field(&value, "name"),
                table: field(&value, "table"),
                columns: value.get("columns").map(column_list).unwrap_or_default(),
                unique: unique_flag(&value),
            },
            Value::Sequence(items) => {
                let options = items.get(2);
                Self {
                    table: positional(items, 0),
                    columns: items.get(1).map(column_list).unwrap_or_default(),
                    name: options.and_then(|o| field(o, "name")),
                    unique: options.map(unique_flag).unwrap_or(false),
                }
            }
            other => Self {
                table: scalar_string(other),
                ..Self::default()
            },
        }
    }
}
