use bintree::search::Tree;
use bintree::BinaryTree;

use std::collections::HashSet;

use crate::{collect, Order};

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.search(x).map(|n| n.payload()) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.search(x).is_none())
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
        if !tree.validate() {
            return false;
        }
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x))
        && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i16>) -> bool {
    let tree: Tree<_> = xs.into_iter().collect();
    let values = collect(&tree, Order::In);

    values.windows(2).all(|pair| pair[0] < pair[1]) && values.len() == tree.size()
}

#[quickcheck]
fn reinserting_keeps_size(xs: Vec<i8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    let size = tree.size();

    xs.into_iter().all(|x| !tree.insert(x)) && tree.size() == size
}

#[quickcheck]
fn removing_missing_value_is_a_no_op(xs: Vec<i8>, missing: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().filter(|x| *x != missing).collect();
    let before = tree.clone();

    tree.remove(&missing).is_none() && tree == before
}
