//! # Document Snapshot
//!
//! An immutable, ordered sequence of blocks. A document is one point in an
//! edit session's history: edits never modify a document, they build the next
//! one, sharing every block they did not touch.
//!
//! ## Identity
//!
//! Two documents are the *same snapshot* only if one was cloned from the other.
//! Every constructor and edit mints a fresh version token, so documents with
//! equal blocks built by different edits (two empty documents included)
//! compare equal with `==` but are different snapshots; history navigation
//! relies on the latter.

use std::sync::Arc;
use strata_history::Snapshot;
use strata_list::{Iter, ListError, PersistentList};

use crate::{Block, BlockId};

/// Ordered blocks of a document, in display order
#[derive(Debug, Clone)]
pub struct Document {
    blocks: PersistentList<Block>,

    /// Shared by clones only
    version: Arc<()>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::from_blocks(PersistentList::new())
    }

    fn from_blocks(blocks: PersistentList<Block>) -> Self {
        Self {
            blocks,
            version: Arc::new(()),
        }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn get(&self, index: usize) -> Result<&Block, ListError> {
        self.blocks.get(index)
    }

    /// Blocks in display order
    pub fn blocks(&self) -> Iter<'_, Block> {
        self.blocks.iter()
    }

    /// Locate a block by id
    pub fn find(&self, id: BlockId) -> Option<(usize, &Block)> {
        self.blocks.iter().enumerate().find(|(_, block)| block.id == id)
    }

    /// New document with `block` placed at `index`
    pub fn with_inserted(&self, index: usize, block: Block) -> Result<Self, ListError> {
        Ok(Self::from_blocks(self.blocks.insert(index, block)?))
    }

    /// New document with `block` added at the end
    pub fn with_appended(&self, block: Block) -> Self {
        Self::from_blocks(self.blocks.push_back(block))
    }

    /// New document with the block at `index` replaced
    pub fn with_replaced(&self, index: usize, block: Block) -> Result<Self, ListError> {
        Ok(Self::from_blocks(self.blocks.set(index, block)?))
    }

    /// New document without the block at `index`
    pub fn with_removed(&self, index: usize) -> Result<Self, ListError> {
        Ok(Self::from_blocks(self.blocks.remove(index)?))
    }
}

impl FromIterator<Block> for Document {
    fn from_iter<I: IntoIterator<Item = Block>>(iter: I) -> Self {
        Self::from_blocks(iter.into_iter().collect())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.blocks == other.blocks
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks()
    }
}

impl Snapshot for Document {
    fn same_snapshot(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.version, &other.version)
    }
}
