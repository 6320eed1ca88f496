//! A binary tree with no ordering rules at all.
//!
//! The shape is whatever the caller builds out of [`Node`]s. It is useful on its own for
//! expression-tree-like data, and for payloads that can't be ordered.
//!
//! A payload that may be missing is modelled as `Tree<Option<U>>`: looking up the level of `None`
//! finds the first node with no value.
//!
//! # Examples
//!
//! ```
//! use bintree::{BinaryTree, Node};
//! use bintree::plain::Tree;
//!
//! let mut tree = Tree::new();
//! assert_eq!(tree.height(), -1);
//!
//! tree.set_root(Some(Node::new("root")));
//! if let Some(root) = tree.root_mut() {
//!     root.set_right(Some(Node::new("right")));
//! }
//!
//! assert_eq!(tree.height(), 1);
//! assert_eq!(tree.level_of(&"right"), Some(1));
//! ```

use crate::binary::BinaryTree;
use crate::node::{self, Link, Node};

/// A binary tree whose shape is set by hand.
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

impl<T> From<Node<T>> for Tree<T> {
    fn from(root: Node<T>) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }
}

impl<T> Tree<T> {
    /// Generates a new, empty `Tree`.
    pub fn new() -> Self {
        Self { root: None }
    }

    /// Mutable access to the root, for attaching or detaching subtrees.
    pub fn root_mut(&mut self) -> Option<&mut Node<T>> {
        self.root.as_deref_mut()
    }

    /// Detaches the whole tree, leaving it empty.
    pub fn take_root(&mut self) -> Option<Node<T>> {
        self.root.take().map(|root| *root)
    }
}

impl<T> BinaryTree<T> for Tree<T> {
    fn root(&self) -> Option<&Node<T>> {
        self.root.as_deref()
    }

    fn set_root(&mut self, root: Option<Node<T>>) {
        log::trace!("Replacing plain tree root");
        node::dismantle(std::mem::replace(&mut self.root, root.map(Box::new)));
    }
}
