//! # Tree Nodes
//!
//! Immutable nodes of a weight-balanced binary tree, navigated by rank.
//!
//! ## Design
//!
//! - Every node caches the size of its subtree
//! - Navigation reads the *left child's cached size* to decide where rank `k`
//!   lives; it never assumes the tree is split at a midpoint
//! - Rebuilding produces new nodes along one root-to-leaf path; every sibling
//!   subtree is reused through its `Arc`
//! - `insert` and `remove` rebalance with single/double rotations so that
//!   depth stays logarithmic
//!
//! Balance parameters are the ones proven correct for single-element updates
//! (Hirai & Yamamoto): a node is balanced when neither side is more than
//! `DELTA` times heavier than the other.

use std::cmp::Ordering;
use std::sync::Arc;

/// Maximum weight ratio between two siblings
pub(crate) const DELTA: usize = 3;

/// Picks a single rotation over a double one
const GAMMA: usize = 2;

pub(crate) type Link<T> = Option<Arc<Node<T>>>;

#[derive(Debug)]
pub(crate) struct Node<T> {
    /// Element stored behind its own `Arc` so rebuilt nodes share it
    pub(crate) value: Arc<T>,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
    /// Number of nodes in this subtree, this node included
    pub(crate) size: usize,
}

/// Subtree size of a possibly absent link
pub(crate) fn weight<T>(link: &Link<T>) -> usize {
    link.as_ref().map_or(0, |node| node.size)
}

impl<T> Node<T> {
    pub(crate) fn new(value: Arc<T>, left: Link<T>, right: Link<T>) -> Arc<Self> {
        let size = weight(&left) + weight(&right) + 1;
        Arc::new(Self {
            value,
            left,
            right,
            size,
        })
    }

    fn leaf(value: Arc<T>) -> Arc<Self> {
        Self::new(value, None, None)
    }

    pub(crate) fn left_size(&self) -> usize {
        weight(&self.left)
    }
}

/// Build a node from parts whose weights differ by at most one update,
/// rotating if the result would be out of balance.
fn balance<T>(value: Arc<T>, left: Link<T>, right: Link<T>) -> Arc<Node<T>> {
    let (ls, rs) = (weight(&left), weight(&right));

    if ls + rs <= 1 {
        Node::new(value, left, right)
    } else if rs > DELTA * ls {
        rotate_left(value, left, right)
    } else if ls > DELTA * rs {
        rotate_right(value, left, right)
    } else {
        Node::new(value, left, right)
    }
}

fn rotate_left<T>(value: Arc<T>, left: Link<T>, right: Link<T>) -> Arc<Node<T>> {
    let Some(r) = right else {
        return Node::new(value, left, None);
    };

    match &r.left {
        Some(rl) if weight(&r.left) >= GAMMA * weight(&r.right) => Node::new(
            rl.value.clone(),
            Some(Node::new(value, left, rl.left.clone())),
            Some(Node::new(r.value.clone(), rl.right.clone(), r.right.clone())),
        ),
        _ => Node::new(
            r.value.clone(),
            Some(Node::new(value, left, r.left.clone())),
            r.right.clone(),
        ),
    }
}

fn rotate_right<T>(value: Arc<T>, left: Link<T>, right: Link<T>) -> Arc<Node<T>> {
    let Some(l) = left else {
        return Node::new(value, None, right);
    };

    match &l.right {
        Some(lr) if weight(&l.right) >= GAMMA * weight(&l.left) => Node::new(
            lr.value.clone(),
            Some(Node::new(l.value.clone(), l.left.clone(), lr.left.clone())),
            Some(Node::new(value, lr.right.clone(), right)),
        ),
        _ => Node::new(
            l.value.clone(),
            l.left.clone(),
            Some(Node::new(value, l.right.clone(), right)),
        ),
    }
}

/// Find the element at `index`. `None` only if `index >= node.size`.
pub(crate) fn get_at<T>(mut node: &Arc<Node<T>>, mut index: usize) -> Option<&T> {
    loop {
        let ls = node.left_size();
        match index.cmp(&ls) {
            Ordering::Less => node = node.left.as_ref()?,
            Ordering::Equal => return Some(node.value.as_ref()),
            Ordering::Greater => {
                index -= ls + 1;
                node = node.right.as_ref()?;
            }
        }
    }
}

/// Insert `value` so that it ends up at rank `index` (`index <= weight(link)`).
pub(crate) fn insert_at<T>(link: &Link<T>, index: usize, value: Arc<T>) -> Arc<Node<T>> {
    let Some(node) = link else {
        return Node::leaf(value);
    };

    let ls = node.left_size();
    if index <= ls {
        balance(
            node.value.clone(),
            Some(insert_at(&node.left, index, value)),
            node.right.clone(),
        )
    } else {
        balance(
            node.value.clone(),
            node.left.clone(),
            Some(insert_at(&node.right, index - ls - 1, value)),
        )
    }
}

/// Replace the element at `index`, copying only the path to it.
/// Shape and sizes are unchanged, so no rebalancing happens.
pub(crate) fn replace_at<T>(node: &Arc<Node<T>>, index: usize, value: Arc<T>) -> Arc<Node<T>> {
    let ls = node.left_size();
    match index.cmp(&ls) {
        Ordering::Less => Node::new(
            node.value.clone(),
            node.left.as_ref().map(|left| replace_at(left, index, value)),
            node.right.clone(),
        ),
        Ordering::Equal => Node::new(value, node.left.clone(), node.right.clone()),
        Ordering::Greater => Node::new(
            node.value.clone(),
            node.left.clone(),
            node.right
                .as_ref()
                .map(|right| replace_at(right, index - ls - 1, value)),
        ),
    }
}

/// Remove the element at `index` (`index < node.size`).
pub(crate) fn remove_at<T>(node: &Arc<Node<T>>, index: usize) -> Link<T> {
    let ls = node.left_size();
    match index.cmp(&ls) {
        Ordering::Less => Some(balance(
            node.value.clone(),
            node.left.as_ref().and_then(|left| remove_at(left, index)),
            node.right.clone(),
        )),
        Ordering::Equal => glue(&node.left, &node.right),
        Ordering::Greater => Some(balance(
            node.value.clone(),
            node.left.clone(),
            node.right
                .as_ref()
                .and_then(|right| remove_at(right, index - ls - 1)),
        )),
    }
}

/// Join two balanced siblings whose parent was removed.
/// The replacement root is taken from the heavier side.
fn glue<T>(left: &Link<T>, right: &Link<T>) -> Link<T> {
    match (left, right) {
        (None, _) => right.clone(),
        (_, None) => left.clone(),
        (Some(l), Some(r)) => {
            if l.size > r.size {
                let (max, rest) = take_max(l);
                Some(balance(max, rest, right.clone()))
            } else {
                let (min, rest) = take_min(r);
                Some(balance(min, left.clone(), rest))
            }
        }
    }
}

fn take_min<T>(node: &Arc<Node<T>>) -> (Arc<T>, Link<T>) {
    match &node.left {
        None => (node.value.clone(), node.right.clone()),
        Some(left) => {
            let (min, rest) = take_min(left);
            (min, Some(balance(node.value.clone(), rest, node.right.clone())))
        }
    }
}

fn take_max<T>(node: &Arc<Node<T>>) -> (Arc<T>, Link<T>) {
    match &node.right {
        None => (node.value.clone(), node.left.clone()),
        Some(right) => {
            let (max, rest) = take_max(right);
            (max, Some(balance(node.value.clone(), node.left.clone(), rest)))
        }
    }
}

/// Build a perfectly balanced tree holding the next `len` items in order.
pub(crate) fn build<T>(items: &mut impl Iterator<Item = T>, len: usize) -> Link<T> {
    if len == 0 {
        return None;
    }

    let left_len = len / 2;
    let left = build(items, left_len);
    let value = items.next()?;
    let right = build(items, len - left_len - 1);

    Some(Node::new(Arc::new(value), left, right))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(value: i32) -> Arc<Node<i32>> {
        Node::leaf(Arc::new(value))
    }

    fn collect(link: &Link<i32>, out: &mut Vec<i32>) {
        if let Some(node) = link {
            collect(&node.left, out);
            out.push(*node.value);
            collect(&node.right, out);
        }
    }

    #[test]
    fn test_node_caches_subtree_size() {
        let node = Node::new(Arc::new(2), Some(leaf(1)), Some(leaf(3)));
        assert_eq!(node.size, 3);
        assert_eq!(node.left_size(), 1);
    }

    #[test]
    fn test_get_uses_actual_left_size() {
        // Left spine: 0 <- 1 <- 2 <- 3, the shape repeated front inserts
        // would produce without rebalancing.
        let mut root = leaf(0);
        for value in 1..4 {
            root = Node::new(Arc::new(value), Some(root), None);
        }

        assert_eq!(get_at(&root, 0), Some(&0));
        assert_eq!(get_at(&root, 2), Some(&2));
        assert_eq!(get_at(&root, 3), Some(&3));
        assert_eq!(get_at(&root, 4), None);
    }

    #[test]
    fn test_right_heavy_insert_rotates() {
        let mut link = None;
        for index in 0..3 {
            link = Some(insert_at(&link, index, Arc::new(index as i32)));
        }

        let root = link.clone().unwrap();
        assert_eq!(*root.value, 1);
        assert_eq!(root.left_size(), 1);

        let mut values = Vec::new();
        collect(&link, &mut values);
        assert_eq!(values, vec![0, 1, 2]);
    }

    #[test]
    fn test_glue_takes_from_heavier_side() {
        let left = Some(Node::new(Arc::new(1), Some(leaf(0)), None));
        let right = Some(leaf(3));

        let joined = glue(&left, &right).unwrap();
        assert_eq!(*joined.value, 1);

        let mut values = Vec::new();
        collect(&Some(joined), &mut values);
        assert_eq!(values, vec![0, 1, 3]);
    }

    #[test]
    fn test_build_is_balanced_and_ordered() {
        let link = build(&mut (0..10), 10);
        assert_eq!(weight(&link), 10);

        let mut values = Vec::new();
        collect(&link, &mut values);
        assert_eq!(values, (0..10).collect::<Vec<_>>());
    }
}
