//! This crate exposes an unbalanced Binary Search Tree (BST) of unique values along with helpers
//! for walking it, mostly for educational purposes.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree is a data structure supporting operations to
//! add, find, and remove stored values. BSTs are typically defined
//! recursively using the notion of a `Node`. A `Node` will typically store
//! some sort of value (the value that was added, for example) and will
//! sometimes have child `Node`s. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! The benefits of these invariants are many. For instance, searching for
//! values in the tree takes `O(height)` (where `height` is defined as the longest
//! path from the root `Node` to a leaf `Node`). Nothing here limits that height, so adding
//! values in sorted order builds a tree that looks like a linked list. BSTs also naturally
//! support sorted iteration by visiting the left subtree, then the subtree root, then the right
//! subtree. See [`traversal`] for that and the other two classic orders.
//!
//! On top of the two invariants above, no two `Node`s in this tree hold equal values. Adding a
//! value that's already stored fails with [`TreeError::DuplicateKey`] and removing one that
//! isn't fails with [`TreeError::NotFound`].

#![deny(missing_docs)]
#![forbid(unsafe_code)]

mod error;
pub mod traversal;
mod tree;

pub use error::{Result, TreeError};
pub use traversal::Iter;
pub use tree::{Node, Tree};
