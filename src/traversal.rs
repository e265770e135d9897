//! Helpers that walk a tree from a [`Node`] and copy out its values in in-order, pre-order or
//! post-order. They never modify the tree and each walk keeps its own stack instead of
//! recursing, so list-like trees are as safe to walk as balanced ones.
//!
//! # Examples
//!
//! ```
//! use binary_tree::{traversal, Tree};
//!
//! let mut tree = Tree::new();
//! for x in [5, 3, 7, 2, 4, 6, 8] {
//!     tree.add(x).unwrap();
//! }
//!
//! let mut pre = Vec::new();
//! traversal::pre_order(tree.root(), &mut pre);
//! assert_eq!(pre, vec![5, 3, 2, 4, 7, 6, 8]);
//!
//! // Values are appended, whatever was already there stays.
//! traversal::in_order(tree.root(), &mut pre);
//! assert_eq!(pre.len(), 14);
//! ```

use std::iter::FusedIterator;

use crate::tree::Node;

/// Appends the values of the subtree at `node` to `out` in ascending order (left, node, right).
pub fn in_order<T>(node: Option<&Node<T>>, out: &mut Vec<T>)
where
    T: Clone,
{
    out.extend(Iter::new(node).cloned());
}

/// Appends the values of the subtree at `node` to `out`, visiting each node before its left and
/// then its right subtree.
pub fn pre_order<T>(node: Option<&Node<T>>, out: &mut Vec<T>)
where
    T: Clone,
{
    let mut stack: Vec<&Node<T>> = node.into_iter().collect();
    while let Some(node) = stack.pop() {
        out.push(node.value().clone());
        // Right goes on first so left comes off first.
        stack.extend(node.right());
        stack.extend(node.left());
    }
}

/// Appends the values of the subtree at `node` to `out`, visiting each node after its left and
/// then its right subtree.
pub fn post_order<T>(node: Option<&Node<T>>, out: &mut Vec<T>)
where
    T: Clone,
{
    // Walk node, right, left and flip the appended run: that's left, right, node.
    let start = out.len();
    let mut stack: Vec<&Node<T>> = node.into_iter().collect();
    while let Some(node) = stack.pop() {
        out.push(node.value().clone());
        stack.extend(node.left());
        stack.extend(node.right());
    }
    out[start..].reverse();
}

/// An iterator over references to a subtree's values in ascending order. Created by
/// [`Tree::iter`][crate::Tree::iter].
pub struct Iter<'a, T> {
    /// Nodes whose left subtree has been visited but which haven't been yielded yet.
    stack: Vec<&'a Node<T>>,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(root: Option<&'a Node<T>>) -> Self {
        let mut iter = Self { stack: Vec::new() };
        iter.push_left_spine(root);
        iter
    }

    fn push_left_spine(&mut self, mut node: Option<&'a Node<T>>) {
        while let Some(n) = node {
            self.stack.push(n);
            node = n.left();
        }
    }
}

impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Self {
        Self {
            stack: self.stack.clone(),
        }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right());
        Some(node.value())
    }
}

impl<T> FusedIterator for Iter<'_, T> {}
