//! NullDB - null database adapter
//!
//! A storage-driver-shaped backend that remembers schema metadata and
//! records every attempted data operation, without any storage engine
//! or network connection behind it. Intended for exercising ORM-backed
//! code in unit tests at full speed.

pub mod adapter;
pub mod config;
pub mod interfaces;
pub mod loader;
pub mod schema;
pub mod storage;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use adapter::{NullDbAdapter, ADAPTER_NAME, SCHEMA_INFO_TABLE};
pub use config::NullDbConfig;
pub use interfaces::{AdapterError, ConnectionAdapter, ExecResult, Result, Row, SchemaStatements};
pub use schema::{Column, ColumnType, SchemaDefinition, SchemaRegistry, Table};
pub use storage::{EntryPoint, IdGenerator, Statement, StatementLog};
