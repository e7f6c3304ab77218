//! # Strata List
//!
//! Persistent, rank-indexed ordered list for the Strata block editor.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ list: PersistentList<T>                     │
//! │  - add / insert / get / set / remove        │
//! │  - every operation returns a new version    │
//! │  - versions share untouched subtrees        │
//! └─────────────────────────────────────────────┘
//!                     ↓ snapshots
//! ┌─────────────────────────────────────────────┐
//! │ history: linear undo/redo timeline          │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use strata_list::PersistentList;
//!
//! let v1 = PersistentList::new().add("a").add("b");
//! let v2 = v1.set(1, "c").unwrap();
//!
//! assert_eq!(v1.iter().copied().collect::<Vec<_>>(), vec!["b", "a"]);
//! assert_eq!(v2.iter().copied().collect::<Vec<_>>(), vec!["b", "c"]);
//! ```

mod errors;
mod iter;
mod list;
mod node;

pub use errors::ListError;
pub use iter::Iter;
pub use list::PersistentList;
