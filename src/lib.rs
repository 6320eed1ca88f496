//! This crate exposes a plain binary tree and two Binary Search Trees (BSTs) built from the same
//! [`Node`] type.
//!
//! ## Binary Tree
//!
//! A binary tree is made of `Node`s, each of which stores a value and owns up to two child
//! `Node`s (a left one and a right one). The [`BinaryTree`] trait gives every tree in this crate
//! the same structural queries (size, height, degree, number of edges, depth of a value) and the
//! four classic traversals: pre-order, in-order, post-order, and level-order. [`plain::Tree`]
//! puts no rules on where values go.
//!
//! ## Binary Search Tree
//!
//! A Binary Search Tree keeps its values in order so they can be found by walking a single path
//! from the root. The most important invariants of a BST are:
//!
//! 1. For every `Node` in a BST, all the `Node`s in its left subtree have a
//!    value less than its own value.
//! 2. For every `Node` in a BST, all the `Node`s in its right subtree have a
//!    value greater than its own value.
//!
//! > Note that some `Node`s have no children. These `Node`s are called "leaf nodes".
//!
//! [`search::Tree`] holds each value at most once. [`duplicates::Tree`] relaxes the first rule to
//! "less than or equal to" so it can hold repeated values, which pile up in left subtrees.
//!
//! Neither tree balances itself. Searching, inserting, and removing take `O(height)`, and the
//! height is `O(N)` if values arrive in sorted order. Both trees can be checked against their
//! invariant with `validate`, which is meant for tests and diagnostics rather than every mutation.
//!
//! Nothing in this crate synchronizes access. Wrap a tree in a `Mutex` to share it between
//! threads.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod binary;
pub mod duplicates;
pub mod invariant;
pub mod node;
pub mod plain;
pub mod search;

pub use binary::BinaryTree;
pub use invariant::InvariantError;
pub use node::Node;

#[cfg(test)]
mod test {
    pub(crate) mod quick;
}
