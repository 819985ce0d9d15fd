//! Schema-definition DSL.
//!
//! A `SchemaDefinition` collects the statements a schema script would
//! issue (`create_table`, `add_index`, constraint declarations) and
//! replays them against any `SchemaStatements` implementation. The same
//! structure deserializes from YAML, which is the schema file format the
//! loader reads.

use serde::Deserialize;
use tracing::{info, trace};

use super::column::{Column, ColumnDefinition, ColumnType};
use super::constraints::{ForeignKeyConstraint, IndexDefinition, PrimaryKeyConstraint};
use super::table::PRIMARY_KEY_COLUMN;
use crate::interfaces::{Result, SchemaStatements};

fn default_id() -> bool {
    true
}

/// Options for `create_table_with`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableOptions {
    /// Add an implicit `id` primary key column.
    pub id: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self { id: true }
    }
}

/// A table being defined.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TableDefinition {
    pub name: String,
    /// When true the table gets an implicit `id` primary key.
    #[serde(default = "default_id")]
    pub id: bool,
    #[serde(default)]
    pub columns: Vec<ColumnDefinition>,
}

impl TableDefinition {
    pub fn new(name: impl Into<String>, options: TableOptions) -> Self {
        Self {
            name: name.into(),
            id: options.id,
            columns: Vec::new(),
        }
    }

    /// Add a column of any type.
    pub fn column(&mut self, name: impl Into<String>, column_type: ColumnType) -> &mut ColumnDefinition {
        self.columns.push(ColumnDefinition::new(name, column_type));
        let last = self.columns.len() - 1;
        &mut self.columns[last]
    }

    pub fn string(&mut self, name: impl Into<String>) -> &mut ColumnDefinition {
        self.column(name, ColumnType::String)
    }

    pub fn text(&mut self, name: impl Into<String>) -> &mut ColumnDefinition {
        self.column(name, ColumnType::Text)
    }

    pub fn integer(&mut self, name: impl Into<String>) -> &mut ColumnDefinition {
        self.column(name, ColumnType::Integer)
    }

    pub fn big_integer(&mut self, name: impl Into<String>) -> &mut ColumnDefinition {
        self.column(name, ColumnType::BigInteger)
    }

    pub fn float(&mut self, name: impl Into<String>) -> &mut ColumnDefinition {
        self.column(name, ColumnType::Float)
    }

    pub fn decimal(&mut self, name: impl Into<String>) -> &mut ColumnDefinition {
        self.column(name, ColumnType::Decimal)
    }

    pub fn date(&mut self, name: impl Into<String>) -> &mut ColumnDefinition {
        self.column(name, ColumnType::Date)
    }

    pub fn datetime(&mut self, name: impl Into<String>) -> &mut ColumnDefinition {
        self.column(name, ColumnType::Datetime)
    }

    pub fn timestamp(&mut self, name: impl Into<String>) -> &mut ColumnDefinition {
        self.column(name, ColumnType::Timestamp)
    }

    pub fn time(&mut self, name: impl Into<String>) -> &mut ColumnDefinition {
        self.column(name, ColumnType::Time)
    }

    pub fn binary(&mut self, name: impl Into<String>) -> &mut ColumnDefinition {
        self.column(name, ColumnType::Binary)
    }

    pub fn boolean(&mut self, name: impl Into<String>) -> &mut ColumnDefinition {
        self.column(name, ColumnType::Boolean)
    }

    /// Add non-null `created_at` and `updated_at` datetime columns.
    pub fn timestamps(&mut self) {
        self.datetime("created_at").null(false);
        self.datetime("updated_at").null(false);
    }

    /// Final column list, with the implicit `id` column first when enabled.
    pub fn to_columns(&self) -> Vec<Column> {
        let implicit_id = self.id.then(|| {
            let mut id = ColumnDefinition::new(PRIMARY_KEY_COLUMN, ColumnType::Integer);
            id.null(false);
            Column::from(id)
        });
        implicit_id
            .into_iter()
            .chain(self.columns.iter().cloned().map(Column::from))
            .collect()
    }
}

/// Collected schema statements.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SchemaDefinition {
    pub tables: Vec<TableDefinition>,
    pub indexes: Vec<IndexDefinition>,
    pub foreign_keys: Vec<ForeignKeyConstraint>,
    pub primary_keys: Vec<PrimaryKeyConstraint>,
    /// Log each statement at info level as it is applied.
    #[serde(skip)]
    pub verbose: bool,
}

impl SchemaDefinition {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Define a table with an implicit `id` primary key.
    pub fn create_table<F>(&mut self, name: impl Into<String>, f: F) -> &mut Self
    where
        F: FnOnce(&mut TableDefinition),
    {
        self.create_table_with(name, TableOptions::default(), f)
    }

    pub fn create_table_with<F>(
        &mut self,
        name: impl Into<String>,
        options: TableOptions,
        f: F,
    ) -> &mut Self
    where
        F: FnOnce(&mut TableDefinition),
    {
        let mut table = TableDefinition::new(name, options);
        f(&mut table);
        self.tables.push(table);
        self
    }

    pub fn add_index(&mut self, index: IndexDefinition) -> &mut Self {
        self.indexes.push(index);
        self
    }

    pub fn add_fk_constraint(&mut self, constraint: ForeignKeyConstraint) -> &mut Self {
        self.foreign_keys.push(constraint);
        self
    }

    pub fn add_pk_constraint(&mut self, constraint: PrimaryKeyConstraint) -> &mut Self {
        self.primary_keys.push(constraint);
        self
    }

    /// Replay every collected statement against `target`.
    ///
    /// Tables are applied in definition order, then indexes and constraints.
    pub async fn apply<S>(&self, target: &S) -> Result<()>
    where
        S: SchemaStatements + ?Sized,
    {
        for table in &self.tables {
            self.announce(&format!("create_table({})", table.name));
            target
                .define_table(&table.name, table.to_columns(), table.id)
                .await?;
        }
        for index in &self.indexes {
            self.announce(&format!("add_index({})", index.table.as_deref().unwrap_or("")));
            target.add_index(index).await?;
        }
        for constraint in &self.foreign_keys {
            self.announce("add_fk_constraint");
            target.add_foreign_key_constraint(constraint).await?;
        }
        for constraint in &self.primary_keys {
            self.announce("add_pk_constraint");
            target.add_primary_key_constraint(constraint).await?;
        }
        Ok(())
    }

    fn announce(&self, statement: &str) {
        if self.verbose {
            info!("-- {}", statement);
        } else {
            trace!("-- {}", statement);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_table_prepends_id() {
        let mut schema = SchemaDefinition::new();
        schema.create_table("employees", |t| {
            t.string("name");
            t.date("hire_date");
        });

        let columns = schema.tables[0].to_columns();
        let names: Vec<_> = columns.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["id", "name", "hire_date"]);
        assert_eq!(columns[0].column_type(), ColumnType::Integer);
        assert!(!columns[0].is_nullable());
    }

    #[test]
    fn test_create_table_without_id() {
        let mut schema = SchemaDefinition::new();
        schema.create_table_with("employees_widgets", TableOptions { id: false }, |t| {
            t.integer("employee_id");
            t.integer("widget_id");
        });

        let table = &schema.tables[0];
        assert!(!table.id);
        let names: Vec<_> = table.to_columns().iter().map(|c| c.name().to_string()).collect();
        assert_eq!(names, vec!["employee_id", "widget_id"]);
    }

    #[test]
    fn test_create_table_with_empty_block() {
        let mut schema = SchemaDefinition::new();
        schema.create_table("employees", |_| {});

        assert_eq!(schema.tables.len(), 1);
        assert_eq!(schema.tables[0].to_columns().len(), 1);
    }

    #[test]
    fn test_timestamps() {
        let mut table = TableDefinition::new("audits", TableOptions::default());
        table.timestamps();

        let columns = table.to_columns();
        assert_eq!(columns[1].name(), "created_at");
        assert_eq!(columns[2].name(), "updated_at");
        assert!(columns.iter().skip(1).all(|c| c.column_type() == ColumnType::Datetime));
        assert!(columns.iter().all(|c| !c.is_nullable()));
    }

    #[test]
    fn test_deserialize_schema_yaml() {
        let yaml = r#"
tables:
  - name: employees
    columns:
      - { name: name, type: string, limit: 255 }
      - { name: salary, type: decimal, precision: 10, scale: 2, null: false, default: 0 }
  - name: employees_widgets
    id: false
    columns:
      - { name: employee_id, type: integer }
indexes:
  - { table: employees, columns: [name], unique: true }
foreign_keys:
  - { from_table: employees_widgets, to_table: employees }
  - {}
primary_keys:
  - { table: employees_widgets, columns: [employee_id, widget_id] }
"#;
        let schema: SchemaDefinition = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(schema.tables.len(), 2);
        assert!(schema.tables[0].id);
        assert!(!schema.tables[1].id);
        assert_eq!(schema.tables[0].columns[0].limit, Some(255));
        assert!(!schema.tables[0].columns[1].null);
        assert_eq!(schema.indexes.len(), 1);
        assert_eq!(schema.foreign_keys.len(), 2);
        assert_eq!(schema.foreign_keys[1], ForeignKeyConstraint::default());
        assert_eq!(schema.primary_keys[0].columns.len(), 2);
        assert!(!schema.verbose);
    }

    #[test]
    fn test_deserialize_empty_document() {
        let schema: SchemaDefinition = serde_yaml::from_str("{}").unwrap();
        assert!(schema.tables.is_empty());
    }
}
