//! Abstract interfaces for storage drivers.
//!
//! These traits define the contracts for:
//! - Query execution and table metadata (what an ORM calls at runtime)
//! - Schema definition (what a schema script replays at load time)
//!
//! The null engine implements both alongside any real engine, so callers
//! depend on the interface rather than on the concrete driver.

pub mod connection;
pub mod schema_statements;

pub use connection::{AdapterError, ConnectionAdapter, ExecResult, Result, Row};
pub use schema_statements::SchemaStatements;
