//! In-memory bookkeeping for the null engine.
//!
//! Nothing here persists data. The identifier generator hands out
//! surrogate keys and the statement log records what would have been
//! executed.

pub mod id_generator;
pub mod statement_log;

pub use id_generator::IdGenerator;
pub use statement_log::{EntryPoint, Statement, StatementLog};
