//! SchemaStatements interface tests.
//!
//! These tests verify schema metadata round-trips through an adapter
//! the way an ORM reads it back.

use nulldb::schema::{Column, ColumnType, ForeignKeyConstraint, IndexDefinition, PrimaryKeyConstraint};
use nulldb::test_utils::employees_schema;
use nulldb::{ConnectionAdapter, SchemaStatements};

fn column<'a>(columns: &'a [Column], name: &str) -> &'a Column {
    columns
        .iter()
        .find(|c| c.name() == name)
        .unwrap_or_else(|| panic!("column {} should exist", name))
}

// =============================================================================
// Column metadata
// =============================================================================

pub async fn test_columns_remembered<A: ConnectionAdapter + SchemaStatements>(adapter: &A) {
    employees_schema()
        .apply(adapter)
        .await
        .expect("schema should apply");

    let columns = adapter
        .columns("employees")
        .await
        .expect("columns should succeed");
    assert_eq!(column(&columns, "name").column_type(), ColumnType::String);
    assert_eq!(column(&columns, "hire_date").column_type(), ColumnType::Date);
    assert_eq!(
        column(&columns, "employee_number").column_type(),
        ColumnType::Integer
    );
    assert_eq!(column(&columns, "salary").column_type(), ColumnType::Decimal);
}

pub async fn test_unknown_table_columns_empty<A: ConnectionAdapter>(adapter: &A) {
    let columns = adapter
        .columns("test_never_defined")
        .await
        .expect("unknown table lookup should not fail");
    assert!(columns.is_empty(), "unknown table should have no columns");
}

// =============================================================================
// Primary keys
// =============================================================================

pub async fn test_primary_key_conventions<A: ConnectionAdapter + SchemaStatements>(adapter: &A) {
    employees_schema()
        .apply(adapter)
        .await
        .expect("schema should apply");

    assert_eq!(
        adapter.primary_key("employees").await.unwrap().as_deref(),
        Some("id"),
        "table with primary key should report id"
    );
    assert_eq!(
        adapter.primary_key("employees_widgets").await.unwrap(),
        None,
        "habtm table should report no primary key"
    );
}

// =============================================================================
// Constraint and index declarations
// =============================================================================

pub async fn test_constraints_accepted<A: ConnectionAdapter + SchemaStatements>(adapter: &A) {
    let before = adapter.tables().await.unwrap();

    adapter
        .add_foreign_key_constraint(&ForeignKeyConstraint::default())
        .await
        .expect("empty foreign key should be accepted");
    adapter
        .add_primary_key_constraint(&PrimaryKeyConstraint::new().name("pk_nowhere"))
        .await
        .expect("primary key on unknown table should be accepted");
    adapter
        .add_index(&IndexDefinition::new("test_missing").column("x").unique(true))
        .await
        .expect("index on unknown table should be accepted");

    assert_eq!(adapter.tables().await.unwrap(), before);
}

pub async fn test_define_table_directly<A: ConnectionAdapter + SchemaStatements>(adapter: &A) {
    adapter
        .define_table(
            "test_direct",
            vec![Column::new("flag", ColumnType::Boolean)],
            true,
        )
        .await
        .expect("define_table should succeed");

    assert!(adapter
        .tables()
        .await
        .unwrap()
        .contains(&"test_direct".to_string()));
    let columns = adapter.columns("test_direct").await.unwrap();
    assert_eq!(columns.len(), 1);
    assert_eq!(
        adapter.primary_key("test_direct").await.unwrap().as_deref(),
        Some("id")
    );
}
