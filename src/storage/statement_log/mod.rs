//! Execution log of intercepted statements.

use std::fmt;

use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

/// Semantic category of an intercepted data operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryPoint {
    Insert,
    Update,
    Delete,
    SelectAll,
    SelectValue,
    SelectRows,
    Execute,
    Other,
}

impl EntryPoint {
    pub fn all() -> &'static [EntryPoint] {
        &[
            Self::Insert,
            Self::Update,
            Self::Delete,
            Self::SelectAll,
            Self::SelectValue,
            Self::SelectRows,
            Self::Execute,
            Self::Other,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
            Self::SelectAll => "select_all",
            Self::SelectValue => "select_value",
            Self::SelectRows => "select_rows",
            Self::Execute => "execute",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded statement.
///
/// Equality compares the entry point only. Content, name, sequence and
/// timestamp are informational, so `Statement::new(EntryPoint::Insert)`
/// matches any logged insert.
#[derive(Debug, Clone)]
pub struct Statement {
    pub entry_point: EntryPoint,
    pub content: String,
    pub name: Option<String>,
    /// Position in the full log, starting at 0.
    pub sequence: u64,
    pub recorded_at: DateTime<Utc>,
}

impl Statement {
    /// Probe statement for membership checks.
    pub fn new(entry_point: EntryPoint) -> Self {
        Self {
            entry_point,
            content: String::new(),
            name: None,
            sequence: 0,
            recorded_at: Utc::now(),
        }
    }
}

impl PartialEq for Statement {
    fn eq(&self, other: &Self) -> bool {
        self.entry_point == other.entry_point
    }
}

impl Eq for Statement {}

#[derive(Debug, Default)]
struct LogState {
    statements: Vec<Statement>,
    checkpoint: usize,
}

/// Append-only statement log with a checkpoint marker.
///
/// The statements and the marker sit behind one lock, so a checkpoint is
/// ordered with respect to every concurrent `record`: each statement lands
/// either before the marker or after it, never both and never neither.
#[derive(Debug, Default)]
pub struct StatementLog {
    state: RwLock<LogState>,
}

impl StatementLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a statement, returning its sequence position.
    pub async fn record(&self, entry_point: EntryPoint, content: &str, name: Option<&str>) -> u64 {
        let mut state = self.state.write().await;
        let sequence = state.statements.len() as u64;
        state.statements.push(Statement {
            entry_point,
            content: content.to_string(),
            name: name.map(str::to_string),
            sequence,
            recorded_at: Utc::now(),
        });
        sequence
    }

    /// Full history, oldest first.
    pub async fn full_log(&self) -> Vec<Statement> {
        self.state.read().await.statements.clone()
    }

    pub async fn len(&self) -> usize {
        self.state.read().await.statements.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.state.read().await.statements.is_empty()
    }

    /// Move the marker to the current tail. Returns the new marker.
    pub async fn checkpoint(&self) -> usize {
        let mut state = self.state.write().await;
        state.checkpoint = state.statements.len();
        state.checkpoint
    }

    /// Statements recorded after the last checkpoint, or all of them if no
    /// checkpoint has been set.
    pub async fn log_since_checkpoint(&self) -> Vec<Statement> {
        let state = self.state.read().await;
        state.statements[state.checkpoint..].to_vec()
    }

    pub async fn contains_since_checkpoint(&self, entry_point: EntryPoint) -> bool {
        let probe = Statement::new(entry_point);
        let state = self.state.read().await;
        state.statements[state.checkpoint..].contains(&probe)
    }

    /// Clear history and the checkpoint.
    pub async fn reset(&self) {
        let mut state = self.state.write().await;
        state.statements.clear();
        state.checkpoint = 0;
    }
}

#[cfg(test)]
mod tests;
