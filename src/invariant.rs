//! Checking the ordering invariant of a search tree.
//!
//! Every node of a search tree must lie inside the range its ancestors carve out for it. The root
//! may hold anything; going left tightens the upper bound to the parent's payload and going right
//! tightens the lower bound. Whether the upper bound of a left subtree is inclusive depends on the
//! tree's [`Duplicates`] policy.
//!
//! # Examples
//!
//! ```
//! use std::ops::Bound;
//!
//! use bintree::Node;
//! use bintree::invariant::{check_subtree, Duplicates, InvariantError};
//!
//! let node = Node::with_children(5, Some(Node::new(5)), None);
//!
//! assert_eq!(
//!     check_subtree(&node, Bound::Unbounded, Bound::Unbounded, Duplicates::Rejected),
//!     Err(InvariantError::AboveUpperBound { level: 1 }),
//! );
//! assert!(check_subtree(&node, Bound::Unbounded, Bound::Unbounded, Duplicates::Left).is_ok());
//! ```

use std::ops::Bound;

use thiserror::Error;

use crate::node::Node;

/// Where values equal to a node's payload are allowed to live.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Duplicates {
    /// Nowhere: every subtree range is exclusive at both ends.
    Rejected,
    /// In the left subtree: a left subtree's upper bound includes its parent's payload.
    Left,
}

/// A node found outside the range its position allows. `level` is its depth, the root being 0.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvariantError {
    /// The node is not above the lower bound set by an ancestor it is right of.
    #[error("node at level {level} is not above the lower bound of its subtree")]
    BelowLowerBound {
        /// Depth of the offending node.
        level: usize,
    },
    /// The node is above the upper bound set by an ancestor it is left of.
    #[error("node at level {level} exceeds the upper bound of its subtree")]
    AboveUpperBound {
        /// Depth of the offending node.
        level: usize,
    },
}

/// Checks that every node in the subtree rooted at `node` lies within `(lower, upper)` and that
/// the subtree is itself ordered under `duplicates`.
///
/// Nodes are examined in pre-order; the first one out of range is reported.
pub fn check_subtree<T>(
    node: &Node<T>,
    lower: Bound<&T>,
    upper: Bound<&T>,
    duplicates: Duplicates,
) -> Result<(), InvariantError>
where
    T: Ord,
{
    let mut pending = vec![(node, lower, upper, 0)];
    while let Some((node, lower, upper, level)) = pending.pop() {
        let payload = node.payload();
        if !above(lower, payload) {
            return Err(InvariantError::BelowLowerBound { level });
        }
        if !below(upper, payload) {
            return Err(InvariantError::AboveUpperBound { level });
        }

        let left_upper = match duplicates {
            Duplicates::Rejected => Bound::Excluded(payload),
            Duplicates::Left => Bound::Included(payload),
        };
        if let Some(right) = node.right() {
            pending.push((right, Bound::Excluded(payload), upper, level + 1));
        }
        if let Some(left) = node.left() {
            pending.push((left, lower, left_upper, level + 1));
        }
    }
    Ok(())
}

/// Checks a whole tree given its (possibly absent) root. An empty tree is always ordered.
pub(crate) fn check_root<T>(
    root: Option<&Node<T>>,
    duplicates: Duplicates,
) -> Result<(), InvariantError>
where
    T: Ord,
{
    let result = root.map_or(Ok(()), |root| {
        check_subtree(root, Bound::Unbounded, Bound::Unbounded, duplicates)
    });
    if let Err(e) = &result {
        log::debug!("Search tree invariant violated ({duplicates:?}): {e}");
    }
    result
}

fn above<T: Ord>(lower: Bound<&T>, value: &T) -> bool {
    match lower {
        Bound::Unbounded => true,
        Bound::Included(bound) => value >= bound,
        Bound::Excluded(bound) => value > bound,
    }
}

fn below<T: Ord>(upper: Bound<&T>, value: &T) -> bool {
    match upper {
        Bound::Unbounded => true,
        Bound::Included(bound) => value <= bound,
        Bound::Excluded(bound) => value < bound,
    }
}
