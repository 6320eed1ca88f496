//! The vertex every tree in this crate is built from.
//!
//! A [`Node`] owns its payload and up to two children. There are no parent pointers and no shared
//! ownership: a child is reachable from exactly one parent, so a tree of `Node`s can't contain a
//! cycle.
//!
//! # Examples
//!
//! ```
//! use bintree::Node;
//!
//! let mut root = Node::with_children(2, Some(Node::new(1)), None);
//! assert_eq!(root.degree(), 1);
//!
//! root.set_right(Some(Node::new(3)));
//! assert_eq!(root.degree(), 2);
//! assert_eq!(root.right().map(Node::payload), Some(&3));
//! ```

use std::mem::ManuallyDrop;
use std::ptr;

/// An owning, possibly empty, pointer to a subtree.
pub(crate) type Link<T> = Option<Box<Node<T>>>;

/// A single vertex holding a payload and exclusively owning its `left` and `right` children.
///
/// Dropping, cloning, and comparing `Node`s work on a heap stack, so a list-shaped subtree of any
/// depth can be handled.
// TODO stack based Debug. The derived one recurses once per level.
#[derive(Debug)]
pub struct Node<T> {
    pub(crate) payload: T,
    pub(crate) left: Link<T>,
    pub(crate) right: Link<T>,
}

impl<T> Node<T> {
    /// Creates a leaf holding `payload`.
    pub fn new(payload: T) -> Self {
        Self {
            payload,
            left: None,
            right: None,
        }
    }

    /// Creates a node holding `payload` that owns the given children.
    pub fn with_children(payload: T, left: Option<Node<T>>, right: Option<Node<T>>) -> Self {
        Self {
            payload,
            left: left.map(Box::new),
            right: right.map(Box::new),
        }
    }

    /// The value stored in this node.
    pub fn payload(&self) -> &T {
        &self.payload
    }

    /// The left child, if any.
    pub fn left(&self) -> Option<&Node<T>> {
        self.left.as_deref()
    }

    /// The right child, if any.
    pub fn right(&self) -> Option<&Node<T>> {
        self.right.as_deref()
    }

    /// Mutable access to the left child, if any.
    pub fn left_mut(&mut self) -> Option<&mut Node<T>> {
        self.left.as_deref_mut()
    }

    /// Mutable access to the right child, if any.
    pub fn right_mut(&mut self) -> Option<&mut Node<T>> {
        self.right.as_deref_mut()
    }

    /// Attaches `child` on the left and hands back whatever subtree was there before.
    pub fn set_left(&mut self, child: Option<Node<T>>) -> Option<Node<T>> {
        std::mem::replace(&mut self.left, child.map(Box::new)).map(|old| *old)
    }

    /// Attaches `child` on the right and hands back whatever subtree was there before.
    pub fn set_right(&mut self, child: Option<Node<T>>) -> Option<Node<T>> {
        std::mem::replace(&mut self.right, child.map(Box::new)).map(|old| *old)
    }

    /// Detaches and returns the left subtree.
    pub fn take_left(&mut self) -> Option<Node<T>> {
        self.set_left(None)
    }

    /// Detaches and returns the right subtree.
    pub fn take_right(&mut self) -> Option<Node<T>> {
        self.set_right(None)
    }

    /// The number of children present: 0, 1, or 2.
    pub fn degree(&self) -> usize {
        usize::from(self.left.is_some()) + usize::from(self.right.is_some())
    }

    /// Whether this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Consumes the node, returning its payload. Children are released without recursing.
    pub fn into_payload(self) -> T {
        let mut node = ManuallyDrop::new(self);
        dismantle(node.left.take());
        dismantle(node.right.take());
        // SAFETY: `node` is never dropped or touched again, so `payload` is moved out exactly once.
        // Both links are `None` by now and own nothing that could leak.
        unsafe { ptr::read(&node.payload) }
    }
}

impl<T> Drop for Node<T> {
    fn drop(&mut self) {
        dismantle(self.left.take());
        dismantle(self.right.take());
    }
}

impl<T: Clone> Clone for Node<T> {
    fn clone(&self) -> Self {
        // Rebuilt bottom-up: when a node is reached its right subtree is on top of `built`, with
        // its left subtree just below.
        let mut built: Vec<Node<T>> = Vec::new();
        for node in post_order(self) {
            let right = node.right.is_some().then(|| built.pop()).flatten();
            let left = node.left.is_some().then(|| built.pop()).flatten();
            built.push(Node::with_children(node.payload.clone(), left, right));
        }
        let Some(copy) = built.pop() else {
            unreachable!("post-order always ends at the node being cloned");
        };
        copy
    }
}

impl<T: PartialEq> PartialEq for Node<T> {
    fn eq(&self, other: &Self) -> bool {
        let mut pending = vec![(self, other)];
        while let Some((a, b)) = pending.pop() {
            if a.payload != b.payload {
                return false;
            }
            for pair in [(a.left(), b.left()), (a.right(), b.right())] {
                match pair {
                    (None, None) => {}
                    (Some(a), Some(b)) => pending.push((a, b)),
                    _ => return false,
                }
            }
        }
        true
    }
}

impl<T: Eq> Eq for Node<T> {}

/// Every node under (and including) `root`, children before their parent and left before right.
fn post_order<T>(root: &Node<T>) -> Vec<&Node<T>> {
    let mut pending = vec![root];
    let mut order = Vec::new();
    while let Some(node) = pending.pop() {
        order.push(node);
        pending.extend(node.left());
        pending.extend(node.right());
    }
    order.reverse();
    order
}

/// Releases a whole subtree using a heap stack instead of the call stack, so a degenerate
/// (list-shaped) tree can be dropped without overflowing.
pub(crate) fn dismantle<T>(link: Link<T>) {
    let mut pending: Vec<Box<Node<T>>> = link.into_iter().collect();
    while let Some(mut node) = pending.pop() {
        pending.extend(node.left.take());
        pending.extend(node.right.take());
    }
}
