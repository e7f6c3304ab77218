//! # Persistent List
//!
//! An immutable, rank-indexed sequence. Every "mutating" operation returns a
//! new list and leaves the receiver untouched; the two share every subtree the
//! operation did not need to rebuild.
//!
//! ## Ordering
//!
//! Index 0 is the front of the list. [`PersistentList::add`] inserts at the
//! front, so after adding `v1..vn`, `get(0)` is `vn` and `get(n - 1)` is `v1`.
//!
//! ## Costs
//!
//! | operation                    | time       | new nodes  |
//! |------------------------------|------------|------------|
//! | `len`, `is_empty`, `clone`   | O(1)       | 0          |
//! | `get`                        | O(log n)   | 0          |
//! | `set`                        | O(log n)   | depth + 1  |
//! | `add`, `insert`, `remove`    | O(log n)   | O(log n)   |
//! | `iter` (full pass)           | O(n)       | 0          |

use std::fmt;
use std::sync::Arc;

use crate::iter::Iter;
use crate::node::{self, Link};
use crate::ListError;

/// Persistent ordered list with structural sharing
pub struct PersistentList<T> {
    root: Link<T>,
}

impl<T> PersistentList<T> {
    /// Create an empty list
    pub const fn new() -> Self {
        Self { root: None }
    }

    /// Number of elements (cached in the root)
    pub fn len(&self) -> usize {
        node::weight(&self.root)
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Insert `value` at the front (index 0)
    pub fn add(&self, value: T) -> Self {
        self.insert_unchecked(0, value)
    }

    /// Insert `value` at the back (index `len`)
    pub fn push_back(&self, value: T) -> Self {
        self.insert_unchecked(self.len(), value)
    }

    /// Insert `value` so that it ends up at `index`.
    ///
    /// Elements from `index` onward shift up by one. `index == len` appends.
    pub fn insert(&self, index: usize, value: T) -> Result<Self, ListError> {
        let len = self.len();
        if index > len {
            return Err(ListError::IndexOutOfRange { index, len });
        }
        Ok(self.insert_unchecked(index, value))
    }

    fn insert_unchecked(&self, index: usize, value: T) -> Self {
        Self {
            root: Some(node::insert_at(&self.root, index, Arc::new(value))),
        }
    }

    /// Get the element at `index`
    pub fn get(&self, index: usize) -> Result<&T, ListError> {
        self.root
            .as_ref()
            .and_then(|root| node::get_at(root, index))
            .ok_or(ListError::IndexOutOfRange {
                index,
                len: self.len(),
            })
    }

    /// Replace the element at `index`.
    ///
    /// Only the path from the root to `index` is copied; the new list shares
    /// every other node, and every other element, with `self`.
    pub fn set(&self, index: usize, value: T) -> Result<Self, ListError> {
        let root = self.root_for(index)?;
        Ok(Self {
            root: Some(node::replace_at(root, index, Arc::new(value))),
        })
    }

    /// Remove the element at `index`; later elements shift down by one.
    pub fn remove(&self, index: usize) -> Result<Self, ListError> {
        let root = self.root_for(index)?;
        Ok(Self {
            root: node::remove_at(root, index),
        })
    }

    /// Root of a non-empty list that contains `index`
    fn root_for(&self, index: usize) -> Result<&Arc<node::Node<T>>, ListError> {
        match &self.root {
            Some(root) if index < root.size => Ok(root),
            _ => Err(ListError::IndexOutOfRange {
                index,
                len: self.len(),
            }),
        }
    }

    pub fn first(&self) -> Option<&T> {
        self.get(0).ok()
    }

    pub fn last(&self) -> Option<&T> {
        self.len().checked_sub(1).and_then(|index| self.get(index).ok())
    }

    /// Index of the first element matching `predicate`
    pub fn position<F>(&self, predicate: F) -> Option<usize>
    where
        F: FnMut(&T) -> bool,
    {
        self.iter().position(predicate)
    }

    /// Iterate elements in index order
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root.as_ref(), self.len())
    }

    /// Whether both lists are the same version (share their root).
    ///
    /// Two empty lists are always the same version.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        match (&self.root, &other.root) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn root(&self) -> &Link<T> {
        &self.root
    }
}

impl<T> Clone for PersistentList<T> {
    fn clone(&self) -> Self {
        Self {
            root: self.root.clone(),
        }
    }
}

impl<T> Default for PersistentList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for PersistentList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let items: Vec<T> = iter.into_iter().collect();
        let len = items.len();
        Self {
            root: node::build(&mut items.into_iter(), len),
        }
    }
}

impl<'a, T> IntoIterator for &'a PersistentList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: PartialEq> PartialEq for PersistentList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || (self.len() == other.len() && self.iter().eq(other.iter()))
    }
}

impl<T: Eq> Eq for PersistentList<T> {}

impl<T: fmt::Debug> fmt::Debug for PersistentList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}
