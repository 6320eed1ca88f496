//! The capabilities shared by every binary tree in this crate.
//!
//! [`BinaryTree`] only asks an implementor for access to its root. Every structural query and
//! traversal is then provided on top of that. None of them care about ordering, so they work the
//! same on a hand-built [`plain::Tree`][crate::plain::Tree] as on either search tree.
//!
//! Traversals take a visitor that is called once per payload. They walk the tree with an explicit
//! stack (or queue, for level order), so a tree shaped like a linked list is fine.

use std::collections::VecDeque;

use crate::node::Node;

/// Structural queries and traversals over a tree of [`Node`]s.
///
/// The empty-tree conventions are: `size() == 0`, `height() == -1`, `degree() == -1`, and
/// `edge_count() == -1`. A single node has height 0 and no edges.
///
/// # Examples
///
/// ```
/// use bintree::{BinaryTree, Node};
/// use bintree::plain::Tree;
///
/// let tree = Tree::from(Node::with_children(
///     1,
///     Some(Node::with_children(2, Some(Node::new(4)), None)),
///     Some(Node::new(3)),
/// ));
///
/// assert_eq!(tree.size(), 4);
/// assert_eq!(tree.height(), 2);
/// assert_eq!(tree.level_of(&4), Some(2));
///
/// let mut visited = Vec::new();
/// tree.level_order(|x| visited.push(*x));
/// assert_eq!(visited, [1, 2, 3, 4]);
/// ```
pub trait BinaryTree<T> {
    /// The root node, or `None` for an empty tree.
    fn root(&self) -> Option<&Node<T>>;

    /// Replaces the whole tree with `root`. The previous nodes are dropped.
    fn set_root(&mut self, root: Option<Node<T>>);

    /// Total number of nodes.
    fn size(&self) -> usize {
        let mut count = 0;
        self.pre_order(|_| count += 1);
        count
    }

    /// Whether the tree has no nodes.
    fn is_empty(&self) -> bool {
        self.root().is_none()
    }

    /// Number of edges on the longest path from the root down to a leaf. `-1` when empty.
    fn height(&self) -> isize {
        let mut height: isize = -1;
        let mut pending: Vec<(&Node<T>, isize)> =
            self.root().map(|n| (n, 0)).into_iter().collect();
        while let Some((node, depth)) = pending.pop() {
            height = height.max(depth);
            pending.extend(node.left().map(|n| (n, depth + 1)));
            pending.extend(node.right().map(|n| (n, depth + 1)));
        }
        height
    }

    /// The largest number of children any single node has. `-1` when empty.
    fn degree(&self) -> isize {
        let mut degree: isize = -1;
        walk_pre_order(self.root(), |node| degree = degree.max(node.degree() as isize));
        degree
    }

    /// Number of parent-child links: `size() - 1`, or `-1` when empty.
    fn edge_count(&self) -> isize {
        match self.root() {
            None => -1,
            Some(_) => self.size().saturating_sub(1) as isize,
        }
    }

    /// Depth of the first node equal to `value` in pre-order (the root is level 0). `None` if no
    /// node matches.
    fn level_of(&self, value: &T) -> Option<usize>
    where
        T: PartialEq,
    {
        let mut pending: Vec<(&Node<T>, usize)> =
            self.root().map(|n| (n, 0)).into_iter().collect();
        while let Some((node, level)) = pending.pop() {
            if node.payload() == value {
                return Some(level);
            }
            // Right goes on first so the left subtree is searched first.
            pending.extend(node.right().map(|n| (n, level + 1)));
            pending.extend(node.left().map(|n| (n, level + 1)));
        }
        None
    }

    /// Visits each node, then its left subtree, then its right subtree.
    fn pre_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        walk_pre_order(self.root(), |node| visit(node.payload()));
    }

    /// Visits the left subtree, then the node, then the right subtree. On a search tree this
    /// yields payloads in ascending order.
    fn in_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let mut pending: Vec<&Node<T>> = Vec::new();
        let mut current = self.root();
        loop {
            while let Some(node) = current {
                pending.push(node);
                current = node.left();
            }
            match pending.pop() {
                Some(node) => {
                    visit(node.payload());
                    current = node.right();
                }
                None => break,
            }
        }
    }

    /// Visits the left subtree, then the right subtree, then the node.
    fn post_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        // The flag records whether a node's children have already been pushed.
        let mut pending: Vec<(&Node<T>, bool)> =
            self.root().map(|n| (n, false)).into_iter().collect();
        while let Some((node, expanded)) = pending.pop() {
            if expanded {
                visit(node.payload());
            } else {
                pending.push((node, true));
                pending.extend(node.right().map(|n| (n, false)));
                pending.extend(node.left().map(|n| (n, false)));
            }
        }
    }

    /// Visits nodes level by level from the root, left to right within a level.
    fn level_order<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        let mut queue: VecDeque<&Node<T>> = self.root().into_iter().collect();
        while let Some(node) = queue.pop_front() {
            visit(node.payload());
            queue.extend(node.left());
            queue.extend(node.right());
        }
    }
}

/// Calls `visit` on every node reachable from `root`, in pre-order.
pub(crate) fn walk_pre_order<'a, T, F>(root: Option<&'a Node<T>>, mut visit: F)
where
    F: FnMut(&'a Node<T>),
{
    let mut pending: Vec<&Node<T>> = root.into_iter().collect();
    while let Some(node) = pending.pop() {
        visit(node);
        pending.extend(node.right());
        pending.extend(node.left());
    }
}
