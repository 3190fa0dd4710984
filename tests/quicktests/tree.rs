use quickcheck_macros::quickcheck;

use treesort::tree::Tree;

#[quickcheck]
fn iterates_in_sorted_order(xs: Vec<i32>) -> bool {
    let tree: Tree<i32> = xs.iter().copied().collect();
    let mut expected = xs;
    expected.sort();

    tree.len() == expected.len() && tree.iter().copied().collect::<Vec<_>>() == expected
}

#[quickcheck]
fn descending_iteration_mirrors_ascending(xs: Vec<i32>) -> bool {
    let tree: Tree<i32> = xs.iter().copied().collect();
    let mut reversed: Vec<i32> = tree.iter().copied().collect();
    reversed.reverse();

    tree.iter_rev().copied().collect::<Vec<_>>() == reversed
}

#[quickcheck]
fn into_iter_agrees_with_iter(xs: Vec<i32>) -> bool {
    let tree: Tree<i32> = xs.iter().copied().collect();
    let borrowed: Vec<i32> = tree.iter().copied().collect();

    tree.into_iter().collect::<Vec<_>>() == borrowed
}

#[quickcheck]
fn contains_every_inserted_value(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn min_and_max_agree_with_the_input(xs: Vec<i32>) -> bool {
    let tree: Tree<i32> = xs.iter().copied().collect();

    tree.min() == xs.iter().min() && tree.max() == xs.iter().max()
}

#[quickcheck]
fn len_counts_duplicates(xs: Vec<i8>) -> bool {
    // Many `i8` draws collide, so this exercises duplicate insertion often.
    let tree: Tree<i8> = xs.iter().copied().collect();

    tree.len() == xs.len()
}

#[quickcheck]
fn removing_every_inserted_value_drains_the_tree(xs: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();

    // Every removal must find its value, duplicates included.
    if !xs.iter().all(|x| tree.remove(x)) {
        return false;
    }

    tree.is_empty()
        && tree.len() == 0
        && tree.min().is_none()
        && tree.max().is_none()
        && xs.iter().all(|x| !tree.contains(x))
}
