//! # Block Edits
//!
//! The operations a user can perform on a document.
//!
//! ## Edit Semantics
//!
//! Every edit reads one document and produces the next; the input document is
//! never changed. Each successful edit reports the block it affected.
//!
//! ### AppendBlock / AddBlockAfter
//! - Insert a fresh, empty text block with a new id
//! - `AddBlockAfter { index }` places it at `index + 1`
//!
//! ### UpdateContent
//! - Atomic replacement of a text block's content (not a character diff)
//! - Fails on component blocks
//!
//! ### InsertComponent
//! - Replaces the block in place with a component block
//! - The component block gets a new id; the old id no longer resolves
//!
//! ### DeleteBlock
//! - Removes the block
//! - Refuses to remove the last block unless the document may be empty

use crate::{Block, BlockId, BlockIds, BlockKind, Document, EditorError};

/// Semantic edits on a document
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
    /// Add an empty text block at the end
    AppendBlock,

    /// Add an empty text block right after `index`
    AddBlockAfter { index: usize },

    /// Replace the content of a text block
    UpdateContent { block_id: BlockId, content: String },

    /// Turn a block into an embedded component
    InsertComponent {
        block_id: BlockId,
        component_type: String,
    },

    /// Remove a block
    DeleteBlock { block_id: BlockId },
}

/// Result of applying an edit
#[derive(Debug, Clone)]
pub struct Applied {
    /// The document after the edit
    pub document: Document,

    /// Block created, changed or removed by the edit
    pub block_id: BlockId,
}

impl Edit {
    /// Compute the document that results from this edit
    pub fn apply(
        &self,
        doc: &Document,
        ids: &mut BlockIds,
        allow_empty_document: bool,
    ) -> Result<Applied, EditorError> {
        match self {
            Edit::AppendBlock => Ok(Self::append(doc, ids)),

            Edit::AddBlockAfter { index } => {
                if doc.is_empty() {
                    return Err(EditorError::EmptyDocument);
                }
                // Validate before taking an id
                doc.get(*index)?;

                let block_id = ids.next_id();
                let document = doc.with_inserted(index + 1, Block::text(block_id, ""))?;
                Ok(Applied { document, block_id })
            }

            Edit::UpdateContent { block_id, content } => {
                let (index, block) = find(doc, *block_id)?;
                if !matches!(block.kind, BlockKind::Text { .. }) {
                    return Err(EditorError::NotText(*block_id));
                }

                let document = doc.with_replaced(index, Block::text(*block_id, content.clone()))?;
                Ok(Applied {
                    document,
                    block_id: *block_id,
                })
            }

            Edit::InsertComponent {
                block_id,
                component_type,
            } => {
                let (index, _) = find(doc, *block_id)?;

                let new_id = ids.next_id();
                let document =
                    doc.with_replaced(index, Block::component(new_id, component_type.clone()))?;
                Ok(Applied {
                    document,
                    block_id: new_id,
                })
            }

            Edit::DeleteBlock { block_id } => {
                let (index, _) = find(doc, *block_id)?;
                if doc.len() == 1 && !allow_empty_document {
                    return Err(EditorError::LastBlock);
                }

                let document = doc.with_removed(index)?;
                Ok(Applied {
                    document,
                    block_id: *block_id,
                })
            }
        }
    }

    /// `AppendBlock`, which cannot fail
    pub(crate) fn append(doc: &Document, ids: &mut BlockIds) -> Applied {
        let block_id = ids.next_id();
        let document = doc.with_appended(Block::text(block_id, ""));
        Applied { document, block_id }
    }

    /// Short description used as the history label
    pub fn describe(&self) -> String {
        match self {
            Edit::AppendBlock => "append block".to_string(),
            Edit::AddBlockAfter { index } => format!("add block after {}", index),
            Edit::UpdateContent { block_id, .. } => format!("edit block {}", block_id),
            Edit::InsertComponent {
                block_id,
                component_type,
            } => format!("insert {} at block {}", component_type, block_id),
            Edit::DeleteBlock { block_id } => format!("delete block {}", block_id),
        }
    }
}

fn find(doc: &Document, block_id: BlockId) -> Result<(usize, &Block), EditorError> {
    doc.find(block_id)
        .ok_or(EditorError::BlockNotFound(block_id))
}
