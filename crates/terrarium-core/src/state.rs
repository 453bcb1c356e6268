//! Process-wide shared state with shallow-merge updates.
//!
//! [`StateStore`] is created once at process start with a fixed initial key
//! set and lives until exit. It replaces an implicit module-level singleton
//! with an explicit handle that callers pass by `Arc`, but keeps the same
//! contract: whole-map shallow merge on write, full-snapshot copy on read,
//! last write wins for overlapping keys. Nothing is ever persisted to disk.

use parking_lot::RwLock;
use serde_json::{Map, Value};

/// Shared mutable key/value state.
///
/// `update` and `get` are each atomic with respect to the map they touch:
/// no caller ever observes a half-merged state. No ordering is guaranteed
/// between two concurrent `update` calls -- whichever merge completes last
/// wins for overlapping keys.
#[derive(Debug, Default)]
pub struct StateStore {
    state: RwLock<Map<String, Value>>,
}

impl StateStore {
    /// Create a store seeded with the given initial keys.
    pub fn new(initial: Map<String, Value>) -> Self {
        Self {
            state: RwLock::new(initial),
        }
    }

    /// Shallow-merge `partial` into the current state.
    ///
    /// New keys are added, existing keys overwritten, untouched keys
    /// persist. The merge is applied under a single write lock.
    pub fn update(&self, partial: Map<String, Value>) {
        let mut state = self.state.write();
        for (key, value) in partial {
            state.insert(key, value);
        }
    }

    /// Return a full snapshot of the current state.
    pub fn get(&self) -> Map<String, Value> {
        self.state.read().clone()
    }
}
