//! Snapshot-based linear undo/redo.
//!
//! Each commit stores a full `Session` value. Snapshots share structure
//! through `im`, so a commit costs a handful of pointer copies rather than
//! a deep copy, but every stored snapshot is still an independent value.
//!
//! ```text
//! commit A, commit B, commit C      [A B C]   cursor = 2
//! undo                              [A B C]   cursor = 1   (live = B)
//! commit D                          [A B D]   cursor = 2   (C discarded)
//! ```

use im::Vector;

use crate::core::Session;

/// Linear history of session snapshots.
#[derive(Clone, Debug, Default)]
pub struct History {
    snapshots: Vector<Session>,

    /// Index of the snapshot matching the live session.
    /// `None` only while the history is empty.
    cursor: Option<usize>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored snapshots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Current cursor position.
    #[must_use]
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Snapshot at the cursor.
    #[must_use]
    pub fn current(&self) -> Option<&Session> {
        self.cursor.and_then(|i| self.snapshots.get(i))
    }

    /// Check if `undo` would move.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(i) if i > 0)
    }

    /// Check if `redo` would move.
    #[must_use]
    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(i) if i + 1 < self.snapshots.len())
    }

    /// Record the live session, discarding any redo branch.
    pub fn commit(&mut self, session: &Session) {
        if let Some(cursor) = self.cursor {
            self.snapshots.truncate(cursor + 1);
        }
        self.snapshots.push_back(session.clone());
        self.cursor = Some(self.snapshots.len() - 1);
    }

    /// Step back one snapshot and restore it into `live`.
    ///
    /// Returns false (and leaves `live` alone) at the first snapshot.
    pub fn undo(&mut self, live: &mut Session) -> bool {
        match self.cursor {
            Some(i) if i > 0 => self.restore(i - 1, live),
            _ => false,
        }
    }

    /// Step forward one snapshot and restore it into `live`.
    ///
    /// Returns false (and leaves `live` alone) at the latest snapshot.
    pub fn redo(&mut self, live: &mut Session) -> bool {
        match self.cursor {
            Some(i) if i + 1 < self.snapshots.len() => self.restore(i + 1, live),
            _ => false,
        }
    }

    /// Drop every snapshot.
    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = None;
    }

    fn restore(&mut self, index: usize, live: &mut Session) -> bool {
        match self.snapshots.get(index) {
            Some(snapshot) => {
                *live = snapshot.clone();
                self.cursor = Some(index);
                true
            }
            None => false,
        }
    }
}
