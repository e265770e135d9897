//! An unbalanced BST storing unique values. Every `Node` exclusively owns its children through a
//! `Box`, so removing a node is a matter of moving boxes between parent slots.
//!
//! # Examples
//!
//! ```
//! use binary_tree::{Tree, TreeError};
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(!tree.contains(&1));
//!
//! tree.add(1).unwrap();
//! assert!(tree.contains(&1));
//!
//! // Adding an equal value is refused and leaves the tree alone.
//! assert_eq!(tree.add(1), Err(TreeError::DuplicateKey));
//! assert_eq!(tree.count(), 1);
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&1), Ok(1));
//! assert_eq!(tree.remove(&1), Err(TreeError::NotFound));
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::mem;

use log::{debug, trace};

use crate::error::{Result, TreeError};
use crate::traversal::{self, Iter};

/// An owned, possibly empty, subtree.
type Link<T> = Option<Box<Node<T>>>;

/// A single stored value and the subtrees hanging off of it. Values in the left subtree compare
/// less than `value`, values in the right subtree compare greater.
pub struct Node<T> {
    value: T,
    left: Link<T>,
    right: Link<T>,
}

impl<T> Node<T> {
    fn new_boxed(value: T) -> Box<Self> {
        Box::new(Self {
            value,
            left: None,
            right: None,
        })
    }

    /// The value stored in this node.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// The root of this node's left subtree, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The root of this node's right subtree, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }
}

/// A Binary Search Tree of unique values. Nothing keeps it balanced so its height depends on the
/// order values are added in, but no operation recurses on that height.
pub struct Tree<T> {
    root: Link<T>,
    count: usize,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> fmt::Debug for Tree<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a, T> IntoIterator for &'a Tree<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Tree<T> {
    /// Generate a new, empty `Tree`.
    pub fn new() -> Self {
        Self {
            root: None,
            count: 0,
        }
    }

    /// Adds `value` to the tree as a new leaf.
    ///
    /// # Errors
    ///
    /// [`TreeError::DuplicateKey`] if an equal value is already stored. The tree is unchanged and
    /// `value` is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::{Tree, TreeError};
    ///
    /// let mut tree = Tree::new();
    ///
    /// assert_eq!(tree.add(5), Ok(()));
    /// assert_eq!(tree.add(3), Ok(()));
    /// assert_eq!(tree.add(5), Err(TreeError::DuplicateKey));
    /// assert_eq!(tree.count(), 2);
    /// ```
    pub fn add(&mut self, value: T) -> Result<()>
    where
        T: Ord,
    {
        let slot = find_slot(&mut self.root, &value);
        if slot.is_some() {
            debug!("refusing to add a value already stored in the tree");
            return Err(TreeError::DuplicateKey);
        }

        *slot = Some(Node::new_boxed(value));
        self.count += 1;
        trace!("added value, tree now holds {} values", self.count);
        Ok(())
    }

    /// Removes the value equal to `value` from the tree and returns it.
    ///
    /// A node with two children takes the value of its in-order successor (the smallest value of
    /// its right subtree) and the successor's node is unlinked instead. The in-order predecessor
    /// is never used.
    ///
    /// # Errors
    ///
    /// [`TreeError::NotFound`] if no equal value is stored. The tree is unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use binary_tree::Tree;
    ///
    /// let mut tree = Tree::new();
    /// for x in [10, 5, 15] {
    ///     tree.add(x).unwrap();
    /// }
    ///
    /// assert_eq!(tree.remove(&10), Ok(10));
    /// assert_eq!(tree.in_order(), vec![5, 15]);
    /// assert_eq!(tree.root().map(|n| *n.value()), Some(15));
    /// ```
    pub fn remove(&mut self, value: &T) -> Result<T>
    where
        T: Ord,
    {
        match unlink(find_slot(&mut self.root, value)) {
            Some(removed) => {
                self.count -= 1;
                trace!("removed value, tree now holds {} values", self.count);
                Ok(removed)
            }
            None => {
                debug!("refusing to remove a value not stored in the tree");
                Err(TreeError::NotFound)
            }
        }
    }

    /// Returns whether a value equal to `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool
    where
        T: Ord,
    {
        let mut cur = self.root();
        while let Some(node) = cur {
            cur = match value.cmp(&node.value) {
                Ordering::Less => node.left(),
                Ordering::Greater => node.right(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    /// How many values are stored in the tree.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Whether the tree stores no values at all.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Drops every stored value. Clearing an empty tree does nothing.
    pub fn clear(&mut self) {
        // Detach children before each node drops so dropping never recurses down the tree.
        let mut pending: Vec<Box<Node<T>>> = self.root.take().into_iter().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.left.take());
            pending.extend(node.right.take());
        }

        if self.count > 0 {
            trace!("cleared {} values from tree", self.count);
        }
        self.count = 0;
    }

    /// The root node, for walking the tree with the helpers in [`traversal`].
    pub fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    /// Iterates over the stored values in ascending order.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.root())
    }

    /// Clones the stored values in ascending order.
    pub fn in_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.count);
        traversal::in_order(self.root(), &mut values);
        values
    }

    /// Clones the stored values, each node before its left then right subtree.
    pub fn pre_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.count);
        traversal::pre_order(self.root(), &mut values);
        values
    }

    /// Clones the stored values, each node after its left then right subtree.
    pub fn post_order(&self) -> Vec<T>
    where
        T: Clone,
    {
        let mut values = Vec::with_capacity(self.count);
        traversal::post_order(self.root(), &mut values);
        values
    }
}

/// Walks down from `slot` comparing against `value`. The returned slot either holds the node
/// equal to `value` or is the empty slot where such a node belongs.
fn find_slot<'a, T>(mut slot: &'a mut Link<T>, value: &T) -> &'a mut Link<T>
where
    T: Ord,
{
    // Compare through a shared borrow first so the mutable one below always moves `slot` on.
    while let Some(ord) = slot
        .as_deref()
        .map(|node| value.cmp(&node.value))
        .filter(|ord| *ord != Ordering::Equal)
    {
        match slot {
            Some(node) => {
                slot = match ord {
                    Ordering::Less => &mut node.left,
                    _ => &mut node.right,
                }
            }
            None => break,
        }
    }
    slot
}

/// The slot holding the leftmost node of the subtree in `slot`.
fn min_slot<T>(mut slot: &mut Link<T>) -> &mut Link<T> {
    while slot.as_ref().map_or(false, |node| node.left.is_some()) {
        match slot {
            Some(node) => slot = &mut node.left,
            None => break,
        }
    }
    slot
}

/// Unlinks the node held in `slot` and returns its value, or `None` if `slot` is empty.
fn unlink<T>(slot: &mut Link<T>) -> Option<T> {
    let mut node = slot.take()?;
    match (node.left.take(), node.right.take()) {
        (None, None) => Some(node.value),
        (Some(child), None) | (None, Some(child)) => {
            *slot = Some(child);
            Some(node.value)
        }
        (Some(left), Some(right)) => {
            node.left = Some(left);
            node.right = Some(right);
            // The successor has no left child so this unlink never reaches this arm again.
            let removed = unlink(min_slot(&mut node.right))
                .map(|successor| mem::replace(&mut node.value, successor));
            *slot = Some(node);
            removed
        }
    }
}
