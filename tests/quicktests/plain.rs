use bintree::BinaryTree;

use crate::{collect, Order, Shape};

#[quickcheck]
fn edges_are_size_minus_one(shape: Shape) -> bool {
    let tree = shape.0;
    match tree.size() {
        0 => tree.edge_count() == -1,
        n => tree.edge_count() == n as isize - 1,
    }
}

#[quickcheck]
fn every_traversal_visits_every_node_once(shape: Shape) -> bool {
    let tree = shape.0;
    let mut expected = collect(&tree, Order::Pre);
    expected.sort_unstable();

    [
        collect(&tree, Order::In),
        collect(&tree, Order::Post),
        collect(&tree, Order::Level),
    ]
    .into_iter()
    .all(|mut values| {
        values.sort_unstable();
        values == expected
    }) && expected.len() == tree.size()
}

#[quickcheck]
fn height_is_between_log_and_linear(shape: Shape) -> bool {
    let tree = shape.0;
    let size = tree.size();
    if size == 0 {
        return tree.height() == -1;
    }
    let height = tree.height();
    let min_height = (usize::BITS - 1 - size.leading_zeros()) as isize;
    min_height <= height && height < size as isize
}

#[quickcheck]
fn root_is_first_or_last_as_each_order_promises(shape: Shape) -> bool {
    let tree = shape.0;
    let Some(root) = tree.root().map(|n| *n.payload()) else {
        return true;
    };

    collect(&tree, Order::Pre).first() == Some(&root)
        && collect(&tree, Order::Post).last() == Some(&root)
        && collect(&tree, Order::Level).first() == Some(&root)
        && tree.level_of(&root) == Some(0)
}

#[quickcheck]
fn degree_is_max_children(shape: Shape) -> bool {
    let tree = shape.0;
    match tree.size() {
        0 => tree.degree() == -1,
        1 => tree.degree() == 0,
        _ => tree.degree() >= 1 && tree.degree() <= 2,
    }
}
