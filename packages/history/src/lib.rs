//! # Strata History
//!
//! Undo/redo for anything that can be captured as an immutable snapshot.
//!
//! The caller produces a new snapshot for every change (for the block editor,
//! a new `PersistentList` version) and commits it. Undo and redo move a cursor
//! along the committed snapshots; committing after an undo drops the redo
//! branch.

mod errors;
mod history;
mod snapshot;

pub use errors::HistoryError;
pub use history::History;
pub use snapshot::Snapshot;
