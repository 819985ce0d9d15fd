//! Test utilities and schema fixtures.
//!
//! Canned schemas for exercising code that talks to the null adapter
//! without writing a schema file.

use crate::adapter::NullDbAdapter;
use crate::schema::{ForeignKeyConstraint, PrimaryKeyConstraint, SchemaDefinition, TableOptions};

/// Employees schema: an `employees` table with an implicit primary key,
/// an `employees_widgets` join table without one, and a pair of
/// constraint declarations that must be accepted and ignored.
pub fn employees_schema() -> SchemaDefinition {
    let mut schema = SchemaDefinition::new();
    schema
        .create_table("employees", |t| {
            t.string("name");
            t.date("hire_date");
            t.integer("employee_number");
            t.decimal("salary");
        })
        .create_table_with("employees_widgets", TableOptions { id: false }, |t| {
            t.integer("employee_id");
            t.integer("widget_id");
        })
        .add_fk_constraint(
            ForeignKeyConstraint::new()
                .from_table("foo")
                .to_table("bar")
                .from_column("baz")
                .to_column("buz")
                .name("bungle"),
        )
        .add_pk_constraint(PrimaryKeyConstraint::new().table("foo").column("bar"));
    schema
}

/// Adapter with `employees_schema` already applied.
pub async fn employees_adapter() -> NullDbAdapter {
    let adapter = NullDbAdapter::new();
    adapter
        .define_schema(&employees_schema())
        .await
        .expect("schema definition against the null adapter is infallible");
    adapter
}
