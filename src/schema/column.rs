//! Column definitions.

use std::fmt;

use serde::Deserialize;
use serde_json::Value;

/// Declared column type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    #[serde(alias = "varchar")]
    String,
    Text,
    Integer,
    #[serde(alias = "bigint")]
    BigInteger,
    Float,
    Decimal,
    Date,
    Datetime,
    Timestamp,
    Time,
    #[serde(alias = "blob")]
    Binary,
    #[serde(alias = "bool")]
    Boolean,
}

impl ColumnType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Text => "text",
            Self::Integer => "integer",
            Self::BigInteger => "big_integer",
            Self::Float => "float",
            Self::Decimal => "decimal",
            Self::Date => "date",
            Self::Datetime => "datetime",
            Self::Timestamp => "timestamp",
            Self::Time => "time",
            Self::Binary => "binary",
            Self::Boolean => "boolean",
        }
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A registered column. Immutable once added to a table.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    column_type: ColumnType,
    null: bool,
    default: Option<Value>,
    limit: Option<u32>,
    precision: Option<u32>,
    scale: Option<u32>,
}

impl Column {
    /// Nullable column with no default.
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            null: true,
            default: None,
            limit: None,
            precision: None,
            scale: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn column_type(&self) -> ColumnType {
        self.column_type
    }

    pub fn is_nullable(&self) -> bool {
        self.null
    }

    pub fn default(&self) -> Option<&Value> {
        self.default.as_ref()
    }

    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    pub fn precision(&self) -> Option<u32> {
        self.precision
    }

    pub fn scale(&self) -> Option<u32> {
        self.scale
    }
}

fn default_null() -> bool {
    true
}

/// Mutable column description used while a table is being defined.
///
/// This is also the on-disk shape of a column in a schema file.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ColumnDefinition {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    #[serde(default = "default_null")]
    pub null: bool,
    #[serde(default)]
    pub default: Option<Value>,
    #[serde(default)]
    pub limit: Option<u32>,
    #[serde(default)]
    pub precision: Option<u32>,
    #[serde(default)]
    pub scale: Option<u32>,
}

impl ColumnDefinition {
    pub fn new(name: impl Into<String>, column_type: ColumnType) -> Self {
        Self {
            name: name.into(),
            column_type,
            null: true,
            default: None,
            limit: None,
            precision: None,
            scale: None,
        }
    }

    pub fn null(&mut self, null: bool) -> &mut Self {
        self.null = null;
        self
    }

    pub fn default(&mut self, value: impl Into<Value>) -> &mut Self {
        self.default = Some(value.into());
        self
    }

    pub fn limit(&mut self, limit: u32) -> &mut Self {
        self.limit = Some(limit);
        self
    }

    pub fn precision(&mut self, precision: u32) -> &mut Self {
        self.precision = Some(precision);
        self
    }

    pub fn scale(&mut self, scale: u32) -> &mut Self {
        self.scale = Some(scale);
        self
    }
}

impl From<ColumnDefinition> for Column {
    fn from(def: ColumnDefinition) -> Self {
        Self {
            name: def.name,
            column_type: def.column_type,
            null: def.null,
            default: def.default,
            limit: def.limit,
            precision: def.precision,
            scale: def.scale,
        }
    }
}
