use bintree::duplicates::Tree;
use bintree::BinaryTree;

use crate::{collect, Order};

#[quickcheck]
fn in_order_is_non_decreasing(xs: Vec<i8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();
    let values = collect(&tree, Order::In);

    values.windows(2).all(|pair| pair[0] <= pair[1]) && values.len() == xs.len()
}

#[quickcheck]
fn count_is_number_of_inserts(xs: Vec<u8>) -> bool {
    let tree: Tree<_> = xs.iter().copied().collect();

    tree.validate()
        && xs
            .iter()
            .all(|x| tree.count_occurrences(x) == xs.iter().filter(|y| *y == x).count())
}

#[quickcheck]
fn inserting_again_adds_one_copy(xs: Vec<i8>, x: i8) -> bool {
    let mut tree: Tree<_> = xs.into_iter().collect();
    let size = tree.size();
    let count = tree.count_occurrences(&x);

    tree.insert(x);

    tree.size() == size + 1 && tree.count_occurrences(&x) == count + 1
}

#[quickcheck]
fn count_is_inserts_minus_removals(xs: Vec<u8>, removals: Vec<u8>) -> bool {
    let mut tree: Tree<_> = xs.iter().copied().collect();
    for x in &removals {
        tree.remove(x);
        if !tree.validate() {
            return false;
        }
    }

    (0..=u8::MAX).all(|v| {
        let inserted = xs.iter().filter(|x| **x == v).count();
        let removed = removals.iter().filter(|x| **x == v).count();
        tree.count_occurrences(&v) == inserted.saturating_sub(removed)
    })
}
