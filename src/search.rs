//! A plain (unbalanced) Binary Search Tree with set semantics: each value is stored at most once.
//!
//! Values go left of any node they are less than and right of any node they are greater than.
//! Inserting a value that is already present leaves the tree alone.
//!
//! Nothing here rebalances. Inserting values in ascending order builds a tree as tall as it is
//! large, and every operation is `O(height)`.
//!
//! # Examples
//!
//! ```
//! use bintree::BinaryTree;
//! use bintree::search::Tree;
//!
//! let mut tree = Tree::new();
//!
//! // Nothing in here yet.
//! assert!(tree.search(&1).is_none());
//!
//! assert!(tree.insert(1));
//! assert_eq!(tree.search(&1).map(|n| *n.payload()), Some(1));
//!
//! // The same value again is turned away.
//! assert!(!tree.insert(1));
//! assert_eq!(tree.size(), 1);
//!
//! // Removing a value hands it back.
//! assert_eq!(tree.remove(&1), Some(1));
//! assert!(tree.is_empty());
//! ```

use std::cmp::Ordering;

use crate::binary::BinaryTree;
use crate::invariant::{self, Duplicates, InvariantError};
use crate::node::{self, Link, Node};

/// A Binary Search Tree holding distinct values.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tree<T> {
    root: Link<T>,
}

impl<T> Default for Tree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for Tree<T> {
    fn drop(&mut self) {
        node::dismantle(self.root.take());
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        node::dismantle(self.root.take());
    }
}

impl<T: Ord> Tree<T> {
    /// Finds the node holding `value`, if there is one.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::search::Tree;
    ///
    /// let tree: Tree<_> = [5, 3, 8].into_iter().collect();
    ///
    /// let node = tree.search(&5).unwrap();
    /// assert_eq!(node.left().map(|n| *n.payload()), Some(3));
    /// assert!(tree.search(&42).is_none());
    /// ```
    pub fn search(&self, value: &T) -> Option<&Node<T>> {
        find(self.root.as_deref(), value)
    }

    /// Whether `value` is stored in the tree.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Inserts `value`, returning `false` (and leaving the tree untouched) if it was already
    /// present.
    pub fn insert(&mut self, value: T) -> bool {
        insert(&mut self.root, value, Duplicates::Rejected)
    }

    /// Removes `value` from the tree and returns it. Removing a value that isn't there does
    /// nothing and returns `None`.
    ///
    /// A node with two children takes on the value of its in-order successor, which is then
    /// removed from the right subtree in its place.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::BinaryTree;
    /// use bintree::search::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();
    /// assert_eq!(tree.remove(&5), Some(5));
    ///
    /// let mut values = Vec::new();
    /// tree.in_order(|x| values.push(*x));
    /// assert_eq!(values, [1, 3, 4, 7, 8, 9]);
    /// assert_eq!(tree.root().map(|n| *n.payload()), Some(7));
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        remove(&mut self.root, value, Duplicates::Rejected)
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        leftmost(self.root.as_deref()).map(Node::payload)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        rightmost(self.root.as_deref()).map(Node::payload)
    }

    /// Whether every left subtree holds only smaller values and every right subtree only larger
    /// ones. Only a tree whose root was replaced through [`BinaryTree::set_root`] can fail this.
    pub fn validate(&self) -> bool {
        self.check().is_ok()
    }

    /// Like [`validate`][Self::validate] but reports the first node out of place.
    pub fn check(&self) -> Result<(), InvariantError> {
        invariant::check_root(self.root.as_deref(), Duplicates::Rejected)
    }
}

impl<T> BinaryTree<T> for Tree<T> {
    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    fn set_root(&mut self, root: Option<Node<T>>) {
        log::trace!("Replacing search tree root");
        node::dismantle(std::mem::replace(&mut self.root, root.map(Box::new)));
    }
}

impl<T: Ord> Extend<T> for Tree<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<T: Ord> FromIterator<T> for Tree<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut tree = Self::new();
        tree.extend(iter);
        tree
    }
}

/// Descends from `current` towards `value`, returning the first node equal to it.
pub(crate) fn find<'a, T: Ord>(
    mut current: Option<&'a Node<T>>,
    value: &T,
) -> Option<&'a Node<T>> {
    while let Some(node) = current {
        current = match value.cmp(&node.payload) {
            Ordering::Less => node.left(),
            Ordering::Equal => return Some(node),
            Ordering::Greater => node.right(),
        };
    }
    None
}

/// Places `value` in the empty slot its descent ends at. Under [`Duplicates::Left`] an equal
/// payload sends `value` left as if it were smaller; under [`Duplicates::Rejected`] it stops the
/// insert.
pub(crate) fn insert<T: Ord>(root: &mut Link<T>, value: T, duplicates: Duplicates) -> bool {
    let mut slot = root;
    while let Some(node) = slot {
        slot = match (value.cmp(&node.payload), duplicates) {
            (Ordering::Less, _) | (Ordering::Equal, Duplicates::Left) => &mut node.left,
            (Ordering::Greater, _) => &mut node.right,
            (Ordering::Equal, Duplicates::Rejected) => {
                log::trace!("Insert found an equal value, leaving tree unchanged");
                return false;
            }
        };
    }
    *slot = Some(Box::new(Node::new(value)));
    log::trace!("Inserted a new node");
    true
}

/// Unlinks the first node equal to `value` and returns its payload.
///
/// Leaves are simply dropped and a node with one child is replaced by that child. A node with two
/// children swaps payloads with an heir pulled out of one subtree: the in-order successor when
/// duplicates are rejected, the in-order predecessor when they live on the left. The successor of
/// a duplicate chain can be another copy of the same value further down, and promoting it would
/// leave an equal value in the right subtree.
pub(crate) fn remove<T: Ord>(root: &mut Link<T>, value: &T, duplicates: Duplicates) -> Option<T> {
    let slot = locate(root, value);
    let Some(mut node) = slot.take() else {
        log::trace!("Remove found nothing to remove");
        return None;
    };
    match (node.left.take(), node.right.take()) {
        (None, None) => {}
        (Some(child), None) | (None, Some(child)) => *slot = Some(child),
        (Some(left), Some(right)) => {
            node.left = Some(left);
            node.right = Some(right);
            let heir = match duplicates {
                Duplicates::Rejected => detach_min(&mut node.right),
                Duplicates::Left => detach_max(&mut node.left),
            };
            let Some(mut heir) = heir else {
                unreachable!("A node with two children always has an heir");
            };
            std::mem::swap(&mut node.payload, &mut heir.payload);
            *slot = Some(node);
            log::trace!("Removed a node with two children");
            return Some((*heir).into_payload());
        }
    }
    log::trace!("Removed a node with at most one child");
    Some((*node).into_payload())
}

/// Walks down from `slot` and returns the link holding the first node equal to `value`, or the
/// empty link where it would be.
fn locate<'a, T: Ord>(mut slot: &'a mut Link<T>, value: &T) -> &'a mut Link<T> {
    while let Some(ordering) = slot.as_deref().map(|node| value.cmp(&node.payload)) {
        // Moving `slot` into the match lets the found link be returned with its full lifetime.
        slot = match (ordering, slot) {
            (Ordering::Less, Some(node)) => &mut node.left,
            (Ordering::Greater, Some(node)) => &mut node.right,
            (_, found) => return found,
        };
    }
    slot
}

/// Unlinks the smallest node under `slot`, splicing its right child into its place.
fn detach_min<T>(mut slot: &mut Link<T>) -> Link<T> {
    while slot.as_ref().is_some_and(|node| node.left.is_some()) {
        slot = &mut slot.as_mut()?.left;
    }
    let mut min = slot.take()?;
    *slot = min.right.take();
    Some(min)
}

/// Unlinks the largest node under `slot`, splicing its left child into its place.
fn detach_max<T>(mut slot: &mut Link<T>) -> Link<T> {
    while slot.as_ref().is_some_and(|node| node.right.is_some()) {
        slot = &mut slot.as_mut()?.right;
    }
    let mut max = slot.take()?;
    *slot = max.left.take();
    Some(max)
}

pub(crate) fn leftmost<T>(mut current: Option<&Node<T>>) -> Option<&Node<T>> {
    while let Some(left) = current.and_then(Node::left) {
        current = Some(left);
    }
    current
}

pub(crate) fn rightmost<T>(mut current: Option<&Node<T>>) -> Option<&Node<T>> {
    while let Some(right) = current.and_then(Node::right) {
        current = Some(right);
    }
    current
}
