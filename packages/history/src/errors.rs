//! Error types for the history timeline

use thiserror::Error;

/// Boundary outcomes of cursor movement.
///
/// None of these leave the timeline in a different state than before the
/// call; they exist so callers can grey out an undo or redo control.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryError {
    #[error("Nothing to undo")]
    NoHistory,

    #[error("Nothing to redo")]
    NoFuture,

    #[error("Snapshot not found in history")]
    StateNotFound,
}
