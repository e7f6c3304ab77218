//! Error types for the editor

use strata_history::HistoryError;
use strata_list::ListError;
use thiserror::Error;

use crate::BlockId;

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("List error: {0}")]
    List(#[from] ListError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("Block not found: {0}")]
    BlockNotFound(BlockId),

    #[error("Block {0} is not a text block")]
    NotText(BlockId),

    #[error("Cannot delete the last block")]
    LastBlock,

    #[error("Document has no blocks")]
    EmptyDocument,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),
}
