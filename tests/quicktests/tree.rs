use avl::tree::Tree;

use std::collections::{BTreeSet, HashSet};

use quickcheck_macros::quickcheck;

use crate::Op;

/// Applies a set of operations to a tree and a `BTreeSet`.
/// This way we can ensure that after a random smattering of inserts
/// and membership checks the two agree on the same set of values.
fn do_ops<K>(ops: &[Op<K>], tree: &mut Tree<K>, set: &mut BTreeSet<K>) -> bool
where
    K: Ord + Clone,
{
    ops.iter().all(|op| match op {
        Op::Insert(k) => tree.insert(k.clone()) == set.insert(k.clone()),
        Op::Contains(k) => tree.contains(k) == set.contains(k),
    })
}

#[quickcheck]
fn matches_ordered_set(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    let agreed = do_ops(&ops, &mut tree, &mut set);

    let in_order: Vec<i8> = tree.in_order().into_iter().map(|(_, v)| *v).collect();
    agreed && in_order == set.into_iter().collect::<Vec<_>>()
}

#[quickcheck]
fn contains(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    xs.iter().all(|x| tree.find(x) == Some(x))
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| tree.find(x) == None)
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let in_order: Vec<i16> = tree.in_order().into_iter().map(|(_, v)| *v).collect();
    in_order.windows(2).all(|pair| pair[0] < pair[1])
}

#[quickcheck]
fn duplicate_inserts_are_rejected(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    let mut seen = HashSet::new();

    xs.into_iter().all(|x| tree.insert(x) == seen.insert(x))
}

#[quickcheck]
fn height_stays_within_avl_bound(xs: Vec<u16>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let in_order = tree.in_order();
    let n = in_order.len() as f64;
    let height = in_order
        .iter()
        .map(|(depth, _)| depth + 1)
        .max()
        .unwrap_or(0) as f64;

    height <= 1.44 * (n + 2.0).log2()
}

#[quickcheck]
fn min_max_match_in_order_ends(xs: Vec<i32>) -> bool {
    let mut tree = Tree::new();
    for x in &xs {
        tree.insert(*x);
    }

    let in_order: Vec<i32> = tree.in_order().into_iter().map(|(_, v)| *v).collect();
    tree.min() == in_order.first() && tree.max() == in_order.last()
}
