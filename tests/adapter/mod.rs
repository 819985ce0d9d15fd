//! Shared adapter contract tests.
//!
//! Tests the ConnectionAdapter and SchemaStatements interfaces. Each
//! implementation module imports these test functions and runs them.

pub mod connection_tests;
pub mod schema_tests;
