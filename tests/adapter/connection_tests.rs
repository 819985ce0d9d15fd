//! ConnectionAdapter interface tests.
//!
//! These tests verify the return shapes a calling ORM layer relies on.
//! They hold for any adapter that starts with an empty identifier floor.

use nulldb::ConnectionAdapter;

// =============================================================================
// ConnectionAdapter::insert tests
// =============================================================================

pub async fn test_insert_sequential_ids<A: ConnectionAdapter>(adapter: &A) {
    let first = adapter
        .insert("INSERT INTO employees", Some("Employee Create"), Some("id"), None, None)
        .await
        .expect("insert should succeed");
    let second = adapter
        .insert("INSERT INTO employees", Some("Employee Create"), Some("id"), None, None)
        .await
        .expect("insert should succeed");

    assert_eq!(first, 1, "first generated id should be 1");
    assert_eq!(second, 2, "second generated id should be 2");
}

pub async fn test_insert_explicit_id<A: ConnectionAdapter>(adapter: &A) {
    let id = adapter
        .insert("INSERT", None, Some("id"), Some(23), None)
        .await
        .expect("insert should succeed");
    assert_eq!(id, 23, "explicit id should be returned unchanged");

    let next = adapter
        .insert("INSERT", None, Some("id"), None, None)
        .await
        .expect("insert should succeed");
    assert!(next > 23, "generated id should exceed explicit id");
}

// =============================================================================
// Query result shapes
// =============================================================================

pub async fn test_select_all_empty<A: ConnectionAdapter>(adapter: &A) {
    let rows = adapter
        .select_all("who cares", Some("blah"))
        .await
        .expect("select_all should succeed");
    assert!(rows.is_empty());
}

pub async fn test_select_value_absent<A: ConnectionAdapter>(adapter: &A) {
    let value = adapter
        .select_value("SELECT COUNT(*) FROM employees", None)
        .await
        .expect("select_value should succeed");
    assert!(value.is_none());
}

pub async fn test_modifications_affect_nothing<A: ConnectionAdapter>(adapter: &A) {
    assert_eq!(adapter.update("UPDATE employees", None).await.unwrap(), 0);
    assert_eq!(adapter.delete("DELETE FROM employees", None).await.unwrap(), 0);
}

pub async fn test_execute_finish<A: ConnectionAdapter>(adapter: &A) {
    adapter
        .execute("blah", None)
        .await
        .expect("execute should succeed")
        .finish();
}

// =============================================================================
// Metadata
// =============================================================================

pub async fn test_supports_migrations<A: ConnectionAdapter>(adapter: &A) {
    assert!(adapter.supports_migrations());
}

pub async fn test_tables_include<A: ConnectionAdapter>(adapter: &A, table: &str) {
    let tables = adapter.tables().await.expect("tables should succeed");
    assert!(
        tables.iter().any(|t| t == table),
        "tables {:?} should include {}",
        tables,
        table
    );
}
