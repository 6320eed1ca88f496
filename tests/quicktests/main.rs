#[macro_use]
extern crate quickcheck_macros;

use bintree::plain::Tree;
use bintree::{BinaryTree, Node};
use quickcheck::{Arbitrary, Gen};

mod duplicates;
mod plain;
mod search;

/// A hand-shaped tree of arbitrary form, for properties that shouldn't depend on ordering.
#[derive(Clone, Debug)]
pub(crate) struct Shape(pub(crate) Tree<u8>);

impl Arbitrary for Shape {
    fn arbitrary(g: &mut Gen) -> Self {
        let budget = g.size();
        Shape(grow(g, budget).map(Tree::from).unwrap_or_default())
    }
}

/// Builds a random subtree with at most `budget` nodes.
fn grow(g: &mut Gen, budget: usize) -> Option<Node<u8>> {
    // Stop early a quarter of the time so shapes vary between bushy and sparse.
    if budget == 0 || u8::arbitrary(g) % 4 == 0 {
        return None;
    }
    let left_budget = usize::arbitrary(g) % budget;
    let right_budget = budget - 1 - left_budget;
    let payload = u8::arbitrary(g);
    let left = grow(g, left_budget);
    let right = grow(g, right_budget);
    Some(Node::with_children(payload, left, right))
}

/// The four ways of walking a tree.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Order {
    Pre,
    In,
    Post,
    Level,
}

/// Collects the payloads of `tree` in the given order.
pub(crate) fn collect<T, B>(tree: &B, order: Order) -> Vec<T>
where
    T: Clone,
    B: BinaryTree<T>,
{
    let mut values = Vec::new();
    let push = |x: &T| values.push(x.clone());
    match order {
        Order::Pre => tree.pre_order(push),
        Order::In => tree.in_order(push),
        Order::Post => tree.post_order(push),
        Order::Level => tree.level_order(push),
    }
    values
}
