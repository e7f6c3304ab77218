//! # History Timeline
//!
//! Linear undo/redo over immutable snapshots.
//!
//! ## Design
//!
//! - The timeline is an arena: entry `i`'s previous state is `i - 1` and its
//!   next state is `i + 1`; the cursor is an index into it
//! - Committing after an undo truncates everything past the cursor, so there
//!   is never more than one future and it is always the most recent one
//! - Undo and redo only move the cursor; snapshots are never rebuilt
//! - Hitting either end is a reported outcome, not a failure of the timeline
//!
//! ## Example
//!
//! ```rust
//! use strata_history::{History, HistoryError};
//!
//! let mut history = History::new("s0");
//! history.commit("s1");
//! history.commit("s2");
//!
//! assert_eq!(history.undo(), Ok(&"s1"));
//! history.commit("s3");
//! assert_eq!(history.redo(), Err(HistoryError::NoFuture));
//! ```

use tracing::debug;

use crate::{HistoryError, Snapshot};

/// One point in time
#[derive(Debug, Clone)]
struct Entry<S> {
    state: S,

    /// Optional description of the change that produced this state
    label: Option<String>,
}

/// Single-cursor undo/redo timeline
#[derive(Debug, Clone)]
pub struct History<S> {
    /// Oldest first; never empty
    entries: Vec<Entry<S>>,

    /// Index of the current entry
    cursor: usize,
}

impl<S> History<S> {
    /// Create a timeline holding only the seed state
    pub fn new(seed: S) -> Self {
        Self {
            entries: vec![Entry {
                state: seed,
                label: None,
            }],
            cursor: 0,
        }
    }

    /// The state under the cursor
    pub fn current(&self) -> &S {
        &self.entries[self.cursor].state
    }

    /// Record a new state after the current one and make it current.
    ///
    /// Any states that could have been redone are discarded.
    pub fn commit(&mut self, state: S) {
        self.push(Entry { state, label: None });
    }

    /// Like [`commit`](Self::commit), with a description for the change
    pub fn commit_labeled(&mut self, state: S, label: impl Into<String>) {
        self.push(Entry {
            state,
            label: Some(label.into()),
        });
    }

    fn push(&mut self, entry: Entry<S>) {
        let pruned = self.redo_levels();
        self.entries.truncate(self.cursor + 1);
        self.entries.push(entry);
        self.cursor = self.entries.len() - 1;

        debug!(
            position = self.cursor,
            pruned,
            label = self.current_description().unwrap_or(""),
            "Committed snapshot"
        );
    }

    /// Step back one state
    pub fn undo(&mut self) -> Result<&S, HistoryError> {
        if self.cursor == 0 {
            debug!("Undo requested at start of history");
            return Err(HistoryError::NoHistory);
        }

        self.cursor -= 1;
        debug!(position = self.cursor, "Undo");
        Ok(self.current())
    }

    /// Step forward one state
    pub fn redo(&mut self) -> Result<&S, HistoryError> {
        if self.cursor + 1 >= self.entries.len() {
            debug!("Redo requested at end of history");
            return Err(HistoryError::NoFuture);
        }

        self.cursor += 1;
        debug!(position = self.cursor, "Redo");
        Ok(self.current())
    }

    /// Check if undo is available
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    /// Check if redo is available
    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    /// Number of states before the current one
    pub fn undo_levels(&self) -> usize {
        self.cursor
    }

    /// Number of states after the current one
    pub fn redo_levels(&self) -> usize {
        self.entries.len() - self.cursor - 1
    }

    /// Number of states in the timeline, current one included
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false; a timeline holds at least its seed
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of the cursor, 0 being the seed
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Description of the change that produced the current state
    pub fn current_description(&self) -> Option<&str> {
        self.entries[self.cursor].label.as_deref()
    }

    /// Description of the change the next undo would revert
    pub fn undo_description(&self) -> Option<&str> {
        if self.can_undo() {
            self.current_description()
        } else {
            None
        }
    }

    /// Description of the change the next redo would reapply
    pub fn redo_description(&self) -> Option<&str> {
        self.entries
            .get(self.cursor + 1)
            .and_then(|entry| entry.label.as_deref())
    }

    /// Every state with its description, oldest first
    pub fn iter(&self) -> impl Iterator<Item = (&S, Option<&str>)> + '_ {
        self.entries
            .iter()
            .map(|entry| (&entry.state, entry.label.as_deref()))
    }
}

impl<S: Snapshot> History<S> {
    /// Move the cursor to `target` if it is the current state or an earlier one.
    ///
    /// States are matched by identity, searching backward from the cursor;
    /// states after the cursor are not considered. Returns `false` and leaves
    /// the cursor alone when nothing matches.
    pub fn go_to(&mut self, target: &S) -> bool {
        let found = self.entries[..=self.cursor]
            .iter()
            .rposition(|entry| entry.state.same_snapshot(target));

        match found {
            Some(position) => {
                debug!(from = self.cursor, to = position, "Jumped to snapshot");
                self.cursor = position;
                true
            }
            None => false,
        }
    }

    /// [`go_to`](Self::go_to), reporting a miss as [`HistoryError::StateNotFound`]
    pub fn try_go_to(&mut self, target: &S) -> Result<&S, HistoryError> {
        if self.go_to(target) {
            Ok(self.current())
        } else {
            Err(HistoryError::StateNotFound)
        }
    }
}
