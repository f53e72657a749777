use crate::core::history::snapshot::Snapshot;
use log::debug;

/// Linear undo/redo over a bounded list of snapshots
///
/// `entries[cursor]` is the snapshot matching the live state. Undo and redo
/// only move the cursor; a new commit drops everything after it.
pub struct HistoryManager {
    entries: Vec<Snapshot>,
    cursor: usize,
    limit: usize,
}

impl HistoryManager {
    /// Create an empty history keeping at most `limit` snapshots
    pub fn new(limit: usize) -> Self {
        let limit = limit.max(1);
        Self {
            entries: Vec::with_capacity(limit),
            cursor: 0,
            limit,
        }
    }

    /// Record the state after a completed edit
    ///
    /// Identical consecutive states are skipped, except that the very first
    /// commit is always stored. Returns whether a snapshot was added.
    pub fn commit(&mut self, snapshot: Snapshot) -> bool {
        if self.current() == Some(&snapshot) {
            return false;
        }

        if !self.entries.is_empty() {
            self.entries.truncate(self.cursor + 1);
        }
        self.entries.push(snapshot);
        self.cursor = self.entries.len() - 1;

        if self.entries.len() > self.limit {
            self.entries.remove(0);
            self.cursor -= 1;
        }

        debug!(
            "History commit: {} snapshot(s), cursor at {}",
            self.entries.len(),
            self.cursor
        );
        true
    }

    /// Step back one snapshot and return it for the caller to restore
    pub fn undo(&mut self) -> Option<Snapshot> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor).cloned()
    }

    /// Step forward one snapshot and return it for the caller to restore
    pub fn redo(&mut self) -> Option<Snapshot> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.entries.get(self.cursor).cloned()
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Snapshot matching the live state, if anything was committed
    pub fn current(&self) -> Option<&Snapshot> {
        self.entries.get(self.cursor)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}

impl Default for HistoryManager {
    fn default() -> Self {
        Self::new(crate::core::config::EditorConfig::default().history_limit)
    }
}
