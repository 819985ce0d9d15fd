//! Surrogate identifier generation.

use std::sync::atomic::{AtomicI64, Ordering};

use tracing::warn;

/// Issues sequential surrogate keys for new records.
///
/// The floor is the highest identifier generated or observed so far.
/// Generated identifiers are always `floor + 1`; explicit identifiers are
/// returned unchanged and raise the floor when they exceed it. Both paths
/// are single atomic operations, so concurrent callers never receive the
/// same generated value.
///
/// Once the floor reaches `i64::MAX` the generator saturates: every further
/// generated identifier is `i64::MAX` and a warning is logged.
#[derive(Debug, Default)]
pub struct IdGenerator {
    floor: AtomicI64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start generating above `floor`.
    pub fn with_floor(floor: i64) -> Self {
        Self {
            floor: AtomicI64::new(floor),
        }
    }

    /// Return `explicit_id` if given, otherwise the next identifier.
    pub fn next_id(&self, explicit_id: Option<i64>) -> i64 {
        match explicit_id {
            Some(id) => {
                self.floor.fetch_max(id, Ordering::SeqCst);
                id
            }
            None => {
                let advanced = self
                    .floor
                    .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |floor| {
                        floor.checked_add(1)
                    });
                match advanced {
                    Ok(previous) => previous + 1,
                    Err(ceiling) => {
                        warn!(ceiling, "Identifier space exhausted, reusing ceiling");
                        ceiling
                    }
                }
            }
        }
    }

    /// Highest identifier generated or observed.
    pub fn current(&self) -> i64 {
        self.floor.load(Ordering::SeqCst)
    }
}
