//! # Blocks
//!
//! The elements a document is made of. A block is either editable text or a
//! placeholder for an embedded component (chart, image, ...), looked up by
//! type name in a [`ComponentRegistry`](crate::ComponentRegistry) when
//! rendering.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Stable identity of a block across edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BlockId(pub u64);

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for BlockId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(BlockId)
    }
}

/// Hands out block ids in increasing order
#[derive(Debug, Clone, Default)]
pub struct BlockIds {
    next: u64,
}

impl BlockIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue numbering after the highest id already in use
    pub fn after<'a>(ids: impl IntoIterator<Item = &'a BlockId>) -> Self {
        let next = ids.into_iter().map(|id| id.0 + 1).max().unwrap_or(0);
        Self { next }
    }

    pub fn next_id(&mut self) -> BlockId {
        let id = BlockId(self.next);
        self.next += 1;
        id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockKind {
    /// Editable text
    Text { content: String },

    /// Embedded component, rendered through the registry
    Component { component_type: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub id: BlockId,
    pub kind: BlockKind,
}

impl Block {
    pub fn text(id: BlockId, content: impl Into<String>) -> Self {
        Self {
            id,
            kind: BlockKind::Text {
                content: content.into(),
            },
        }
    }

    pub fn component(id: BlockId, component_type: impl Into<String>) -> Self {
        Self {
            id,
            kind: BlockKind::Component {
                component_type: component_type.into(),
            },
        }
    }

    /// Text content, if this is a text block
    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            BlockKind::Text { content } => Some(content),
            BlockKind::Component { .. } => None,
        }
    }

    pub fn is_empty_text(&self) -> bool {
        self.content().is_some_and(str::is_empty)
    }
}
