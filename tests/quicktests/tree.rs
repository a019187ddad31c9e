use bintree::traversal::Traverse;
use bintree::tree::Tree;
use quickcheck_macros::quickcheck;

use std::collections::HashSet;

use crate::Op;

/// Applies a set of operations to a tree and a hashset.
/// This way we can ensure that after a random smattering of inserts
/// and removes we have the same set of payloads in both.
fn do_ops(ops: &[Op<i8>], bst: &mut Tree<i8>, set: &mut HashSet<i8>) {
    for op in ops {
        match op {
            Op::Insert(x) => {
                bst.insert(*x);
                set.insert(*x);
            }
            Op::Remove(x) => {
                bst.remove(x);
                set.remove(x);
            }
        }
    }
}

fn in_order(tree: &Tree<i8>) -> Vec<i8> {
    tree.traverse_in_order().into_iter().copied().collect()
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = HashSet::new();

    do_ops(&ops, &mut tree, &mut set);
    tree.len() == set.len() && set.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_deletions(xs: Vec<i8>, deletes: Vec<i8>) -> bool {
    let mut tree: Tree<i8> = xs.iter().copied().collect();
    for delete in &deletes {
        tree.remove(delete);
    }

    let mut still_present = xs;
    for delete in &deletes {
        // We may have inserted the same value multiple times - delete each one.
        while let Some(pos) = still_present.iter().position(|x| x == delete) {
            still_present.swap_remove(pos);
        }
    }

    deletes.iter().all(|x| !tree.contains(x)) && still_present.iter().all(|x| tree.contains(x))
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.into_iter().collect();
    let values = in_order(&tree);

    values.len() == tree.len() && values.windows(2).all(|w| w[0] < w[1])
}

#[quickcheck]
fn inserting_twice_is_inserting_once(xs: Vec<i8>, x: i8) -> bool {
    let mut once: Tree<i8> = xs.into_iter().collect();
    let mut twice = once.clone();

    once.insert(x);
    twice.insert(x);
    twice.insert(x);
    once == twice
}

#[quickcheck]
fn merge_holds_both(xs: Vec<i8>, ys: Vec<i8>) -> bool {
    let left: Tree<i8> = xs.iter().copied().collect();
    let right: Tree<i8> = ys.iter().copied().collect();
    let merged = left.merge(&right);

    let mut expected: Vec<i8> = xs.into_iter().chain(ys).collect();
    expected.sort_unstable();
    expected.dedup();
    in_order(&merged) == expected
}

#[quickcheck]
fn filter_keeps_every_match(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    let evens = tree.filter(|x| x % 2 == 0);
    let kept = in_order(&evens);

    // Every even payload survives, every odd payload that survives is an
    // ancestor of an even one, and nothing new appears.
    xs.iter().filter(|x| *x % 2 == 0).all(|x| kept.contains(x))
        && kept.iter().all(|x| tree.contains(x))
        && kept
            .iter()
            .filter(|x| *x % 2 != 0)
            .all(|x| !evens.extract_subtree(x).filter(|y| y % 2 == 0).is_empty())
}

#[quickcheck]
fn identity_map_is_a_copy(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.into_iter().collect();
    tree.map(|x| *x) == tree
}

#[quickcheck]
fn extracted_subtrees_are_contained(xs: Vec<i8>) -> bool {
    let tree: Tree<i8> = xs.iter().copied().collect();
    xs.iter()
        .all(|x| tree.contains_subtree(&tree.extract_subtree(x)))
}
