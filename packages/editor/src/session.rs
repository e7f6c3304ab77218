//! # Edit Session
//!
//! One user's editing state for a document.
//!
//! An EditSession owns the document history: every successful edit builds a
//! new [`Document`] snapshot and commits it, and undo/redo move between the
//! committed snapshots. Failed edits commit nothing.

use strata_history::History;
use tracing::{debug, info};

use crate::{
    Applied, Block, BlockId, BlockIds, ComponentRegistry, Document, Edit, EditorConfig,
    EditorError,
};

/// Single-user edit session with undo/redo
#[derive(Debug)]
pub struct EditSession {
    /// Committed document snapshots
    history: History<Document>,

    /// Source of ids for new blocks
    ids: BlockIds,

    config: EditorConfig,
}

impl EditSession {
    /// Create a session for a new document
    pub fn new(config: EditorConfig) -> Self {
        let mut ids = BlockIds::new();
        let document = if config.seed_block {
            std::iter::once(Block::text(ids.next_id(), "")).collect()
        } else {
            Document::new()
        };

        Self::with_ids(document, ids, config)
    }

    /// Create a session that starts from an existing document
    pub fn with_document(document: Document, config: EditorConfig) -> Self {
        let ids = BlockIds::after(document.blocks().map(|block| &block.id));
        Self::with_ids(document, ids, config)
    }

    fn with_ids(document: Document, ids: BlockIds, config: EditorConfig) -> Self {
        info!(blocks = document.len(), "Starting edit session");
        Self {
            history: History::new(document),
            ids,
            config,
        }
    }

    /// The current document
    pub fn document(&self) -> &Document {
        self.history.current()
    }

    pub fn history(&self) -> &History<Document> {
        &self.history
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Apply an edit and record the resulting document
    pub fn apply(&mut self, edit: Edit) -> Result<BlockId, EditorError> {
        let applied = edit.apply(
            self.history.current(),
            &mut self.ids,
            self.config.allow_empty_document,
        )?;

        Ok(self.record(&edit, applied))
    }

    /// Add an empty text block at the end
    pub fn append_block(&mut self) -> BlockId {
        let applied = Edit::append(self.history.current(), &mut self.ids);
        self.record(&Edit::AppendBlock, applied)
    }

    fn record(&mut self, edit: &Edit, applied: Applied) -> BlockId {
        let label = edit.describe();
        debug!(
            block_id = %applied.block_id,
            blocks = applied.document.len(),
            edit = %label,
            "Applied edit"
        );
        self.history.commit_labeled(applied.document, label);

        applied.block_id
    }

    /// Add an empty text block after `index`
    pub fn add_block_after(&mut self, index: usize) -> Result<BlockId, EditorError> {
        self.apply(Edit::AddBlockAfter { index })
    }

    /// Replace the content of a text block
    pub fn update_block_content(
        &mut self,
        block_id: BlockId,
        content: impl Into<String>,
    ) -> Result<(), EditorError> {
        self.apply(Edit::UpdateContent {
            block_id,
            content: content.into(),
        })
        .map(|_| ())
    }

    /// Replace a block with a component, returning the component block's id
    pub fn insert_component(
        &mut self,
        block_id: BlockId,
        component_type: impl Into<String>,
    ) -> Result<BlockId, EditorError> {
        self.apply(Edit::InsertComponent {
            block_id,
            component_type: component_type.into(),
        })
    }

    /// Remove a block
    pub fn delete_block(&mut self, block_id: BlockId) -> Result<(), EditorError> {
        self.apply(Edit::DeleteBlock { block_id }).map(|_| ())
    }

    /// Go back to the previous document
    pub fn undo(&mut self) -> Result<&Document, EditorError> {
        Ok(self.history.undo()?)
    }

    /// Reapply the most recently undone edit
    pub fn redo(&mut self) -> Result<&Document, EditorError> {
        Ok(self.history.redo()?)
    }

    /// Jump back to an earlier snapshot of this session
    pub fn restore(&mut self, snapshot: &Document) -> bool {
        self.history.go_to(snapshot)
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    pub fn undo_description(&self) -> Option<&str> {
        self.history.undo_description()
    }

    pub fn redo_description(&self) -> Option<&str> {
        self.history.redo_description()
    }

    /// Display form of the current document
    pub fn render(&self, registry: &ComponentRegistry) -> Vec<String> {
        registry.render(self.document())
    }
}

impl Default for EditSession {
    fn default() -> Self {
        Self::new(EditorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strata_history::HistoryError;

    fn contents(session: &EditSession) -> Vec<String> {
        session.render(&ComponentRegistry::builtin())
    }

    #[test]
    fn test_session_creation() {
        let session = EditSession::default();
        assert_eq!(session.document().len(), 1);
        assert!(session.document().get(0).unwrap().is_empty_text());
        assert!(!session.can_undo());
        assert!(!session.can_redo());
    }

    #[test]
    fn test_session_without_seed_block() {
        let config = EditorConfig {
            seed_block: false,
            ..EditorConfig::default()
        };
        let mut session = EditSession::new(config);
        assert!(session.document().is_empty());

        assert!(matches!(
            session.add_block_after(0),
            Err(EditorError::EmptyDocument)
        ));
        let id = session.append_block();
        assert_eq!(session.document().get(0).unwrap().id, id);
        assert_eq!(session.undo_description(), Some("append block"));
        assert_eq!(session.history().len(), 2);
    }

    #[test]
    fn test_edit_and_undo() {
        let mut session = EditSession::default();
        let first = session.document().get(0).unwrap().id;

        session.update_block_content(first, "Hello").unwrap();
        let second = session.add_block_after(0).unwrap();
        session.update_block_content(second, "World").unwrap();
        assert_eq!(contents(&session), vec!["Hello", "World"]);
        assert_eq!(session.undo_description(), Some("edit block 1"));

        session.undo().unwrap();
        assert_eq!(contents(&session), vec!["Hello", ""]);
        session.undo().unwrap();
        assert_eq!(contents(&session), vec!["Hello"]);

        session.redo().unwrap();
        assert_eq!(contents(&session), vec!["Hello", ""]);
    }

    #[test]
    fn test_failed_edit_commits_nothing() {
        let mut session = EditSession::default();
        let only = session.document().get(0).unwrap().id;

        assert!(matches!(
            session.delete_block(only),
            Err(EditorError::LastBlock)
        ));
        assert!(matches!(
            session.update_block_content(BlockId(99), "x"),
            Err(EditorError::BlockNotFound(BlockId(99)))
        ));
        assert_eq!(session.history().len(), 1);
    }

    #[test]
    fn test_undo_at_start_reports_history_error() {
        let mut session = EditSession::default();
        assert!(matches!(
            session.undo(),
            Err(EditorError::History(HistoryError::NoHistory))
        ));
        assert!(matches!(
            session.redo(),
            Err(EditorError::History(HistoryError::NoFuture))
        ));
    }

    #[test]
    fn test_restore_earlier_snapshot() {
        let mut session = EditSession::default();
        let first = session.document().get(0).unwrap().id;
        let start = session.document().clone();

        session.update_block_content(first, "one").unwrap();
        session.update_block_content(first, "two").unwrap();

        assert!(session.restore(&start));
        assert!(session.document().get(0).unwrap().is_empty_text());
        assert_eq!(session.history().redo_levels(), 2);
    }
}
