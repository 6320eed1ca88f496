//! A Binary Search Tree that keeps every copy of a value it is given.
//!
//! A value equal to a node's payload is routed into that node's left subtree, so copies of the
//! same value form a chain hanging to the left of the first one inserted. Everything in a left
//! subtree is less than *or equal to* its parent; everything in a right subtree is still strictly
//! greater. That asymmetry is what lets [`Tree::count_occurrences`] stop looking right as soon as
//! it meets an equal value.
//!
//! # Examples
//!
//! ```
//! use bintree::BinaryTree;
//! use bintree::duplicates::Tree;
//!
//! let mut tree = Tree::new();
//! tree.insert(3);
//! tree.insert(3);
//! tree.insert(1);
//!
//! assert_eq!(tree.size(), 3);
//! assert_eq!(tree.count_occurrences(&3), 2);
//!
//! // Removing takes out a single copy.
//! assert_eq!(tree.remove(&3), Some(3));
//! assert_eq!(tree.count_occurrences(&3), 1);
//! ```

use std::cmp::Ordering;

use crate::binary::BinaryTree;
use crate::invariant::{self, Duplicates, InvariantError};
use crate::node::{self, Link, Node};
use crate::search;

/// A Binary Search Tree that accepts repeated values.
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
    /// Finds the shallowest node holding `value`. Any further copies are in its left subtree.
    pub fn search(&self, value: &T) -> Option<&Node<T>> {
        search::find(self.root.as_deref(), value)
    }

    /// Whether at least one copy of `value` is stored.
    pub fn contains(&self, value: &T) -> bool {
        self.search(value).is_some()
    }

    /// Inserts `value`. This always adds a node, even if equal values are already present.
    pub fn insert(&mut self, value: T) {
        search::insert(&mut self.root, value, Duplicates::Left);
    }

    /// Removes one copy of `value` and returns it, or returns `None` if there are none.
    ///
    /// A node with two children takes on the value of its in-order predecessor (the largest value
    /// in its left subtree) which is then removed from the left subtree.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::duplicates::Tree;
    ///
    /// let mut tree: Tree<_> = [5, 5, 8, 5].into_iter().collect();
    ///
    /// assert_eq!(tree.remove(&5), Some(5));
    /// assert_eq!(tree.count_occurrences(&5), 2);
    /// assert!(tree.validate());
    /// ```
    pub fn remove(&mut self, value: &T) -> Option<T> {
        search::remove(&mut self.root, value, Duplicates::Left)
    }

    /// How many copies of `value` the tree holds.
    ///
    /// Descends like a search. On an equal payload it counts the node and keeps going left only:
    /// no right subtree ever holds a value equal to its parent.
    ///
    /// # Examples
    ///
    /// ```
    /// use bintree::duplicates::Tree;
    ///
    /// let tree: Tree<_> = [4, 2, 4, 6, 4, 1].into_iter().collect();
    ///
    /// assert_eq!(tree.count_occurrences(&4), 3);
    /// assert_eq!(tree.count_occurrences(&1), 1);
    /// assert_eq!(tree.count_occurrences(&5), 0);
    /// ```
    pub fn count_occurrences(&self, value: &T) -> usize {
        let mut count = 0;
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match value.cmp(&node.payload) {
                Ordering::Less => node.left(),
                Ordering::Equal => {
                    count += 1;
                    node.left()
                }
                Ordering::Greater => node.right(),
            };
        }
        count
    }

    /// The smallest value in the tree.
    pub fn min(&self) -> Option<&T> {
        search::leftmost(self.root.as_deref()).map(Node::payload)
    }

    /// The largest value in the tree.
    pub fn max(&self) -> Option<&T> {
        search::rightmost(self.root.as_deref()).map(Node::payload)
    }

    /// Whether every left subtree holds only values less than or equal to its parent and every
    /// right subtree only strictly greater ones.
    pub fn validate(&self) -> bool {
        self.check().is_ok()
    }

    /// Like [`validate`][Self::validate] but reports the first node out of place.
    pub fn check(&self) -> Result<(), InvariantError> {
        invariant::check_root(self.root.as_deref(), Duplicates::Left)
    }
}

impl<T> BinaryTree<T> for Tree<T> {
    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    fn set_root(&mut self, root: Option<Node<T>>) {
        log::trace!("Replacing duplicate tree root");
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
