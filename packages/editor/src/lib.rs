//! # Strata Editor
//!
//! Block document model and undoable editing for Strata.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ list: PersistentList<Block>                 │
//! │  - immutable, structurally shared versions  │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: Document snapshots + EditSession    │
//! │  - Edits build the next Document            │
//! │  - Each Document is committed to History    │
//! │  - Undo/redo move between Documents         │
//! │  - Components render through a registry     │
//! └─────────────────────────────────────────────┘
//!                     ↑
//! ┌─────────────────────────────────────────────┐
//! │ history: linear timeline with a cursor      │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Snapshots are values**: a Document never changes once built
//! 2. **One edit, one history entry**: failed edits leave history untouched
//! 3. **No ambient state**: component lookup goes through an injected registry
//!
//! ## Usage
//!
//! ```rust
//! use strata_editor::{ComponentRegistry, EditSession, EditorConfig};
//!
//! let mut session = EditSession::new(EditorConfig::default());
//! let first = session.document().get(0).unwrap().id;
//!
//! session.update_block_content(first, "Hello")?;
//! let next = session.add_block_after(0)?;
//! session.insert_component(next, "Component1")?;
//!
//! let registry = ComponentRegistry::builtin();
//! assert_eq!(session.render(&registry), vec!["Hello", "📊 Chart Component"]);
//!
//! session.undo()?;
//! assert_eq!(session.render(&registry), vec!["Hello", ""]);
//! # Ok::<(), strata_editor::EditorError>(())
//! ```

mod block;
mod config;
mod document;
mod edits;
mod errors;
mod registry;
mod session;

pub use block::{Block, BlockId, BlockIds, BlockKind};
pub use config::{ComponentEntry, EditorConfig, DEFAULT_CONFIG_NAME};
pub use document::Document;
pub use edits::{Applied, Edit};
pub use errors::EditorError;
pub use registry::{ComponentRegistry, ComponentRenderer, Label};
pub use session::EditSession;

// Re-export core types for convenience
pub use strata_history::{History, HistoryError, Snapshot};
pub use strata_list::{ListError, PersistentList};
