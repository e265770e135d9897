use binary_tree::{traversal, Tree, TreeError};
use quickcheck_macros::quickcheck;

use std::cmp::Ordering;
use std::collections::{BTreeSet, HashSet};

use crate::Op;

/// Applies a set of operations to a tree and a set.
/// This way we can ensure that after a random smattering of adds
/// and removes we have the same values in both, and that every
/// operation succeeded or failed the same way on each.
fn do_ops<T>(ops: &[Op<T>], tree: &mut Tree<T>, set: &mut BTreeSet<T>) -> bool
where
    T: Ord + Clone,
{
    for op in ops {
        let agreed = match op {
            Op::Add(x) => {
                let expected = if set.insert(x.clone()) {
                    Ok(())
                } else {
                    Err(TreeError::DuplicateKey)
                };
                tree.add(x.clone()) == expected
            }
            Op::Remove(x) => {
                let expected = set.take(x).ok_or(TreeError::NotFound);
                tree.remove(x) == expected
            }
            Op::Contains(x) => tree.contains(x) == set.contains(x),
            Op::Clear => {
                tree.clear();
                set.clear();
                true
            }
        };

        if !agreed || tree.count() != set.len() {
            return false;
        }
    }

    true
}

fn tree_of(xs: &[i8]) -> Tree<i8> {
    let mut tree = Tree::new();
    for x in xs {
        // Duplicates are expected here.
        let _ = tree.add(*x);
    }
    tree
}

#[quickcheck]
fn fuzz_multiple_operations_i8(ops: Vec<Op<i8>>) -> bool {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut tree = Tree::new();
    let mut set = BTreeSet::new();

    do_ops(&ops, &mut tree, &mut set) && tree.iter().eq(set.iter())
}

#[quickcheck]
fn count_matches_successful_adds(xs: Vec<i8>) -> bool {
    let mut tree = Tree::new();
    let successes = xs.iter().filter(|x| tree.add(**x).is_ok()).count();
    let distinct: HashSet<_> = xs.iter().collect();

    tree.count() == successes && successes == distinct.len()
}

#[quickcheck]
fn in_order_is_strictly_ascending(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let values = tree.in_order();

    values.windows(2).all(|w| w[0] < w[1]) && values.len() == tree.count()
}

#[quickcheck]
fn traversals_visit_every_value_once(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let mut pre = tree.pre_order();
    let mut post = tree.post_order();
    pre.sort_unstable();
    post.sort_unstable();

    pre == tree.in_order() && post == tree.in_order()
}

#[quickcheck]
fn pre_and_post_order_bracket_the_root(xs: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let root = tree.root().map(|n| *n.value());

    tree.pre_order().first().copied() == root && tree.post_order().last().copied() == root
}

#[quickcheck]
fn contains_not(xs: Vec<i8>, nots: Vec<i8>) -> bool {
    let tree = tree_of(&xs);
    let added: HashSet<_> = xs.into_iter().collect();
    let nots: HashSet<_> = nots.into_iter().collect();
    let mut nots = nots.difference(&added);

    nots.all(|x| !tree.contains(x))
}

#[quickcheck]
fn with_removals(xs: Vec<i8>, removes: Vec<i8>) -> bool {
    let mut tree = tree_of(&xs);
    let mut expected: BTreeSet<_> = xs.into_iter().collect();

    for remove in &removes {
        let count_before = tree.count();
        let agreed = match (tree.remove(remove), expected.remove(remove)) {
            (Ok(removed), true) => removed == *remove && tree.count() == count_before - 1,
            (Err(TreeError::NotFound), false) => tree.count() == count_before,
            _ => false,
        };
        if !agreed {
            return false;
        }
    }

    let mut values = Vec::new();
    traversal::in_order(tree.root(), &mut values);
    values.into_iter().eq(expected)
}

/// A plainly recursive BST that removes two-children nodes by their in-order successor. Small
/// `i8` trees keep the recursion shallow.
struct Model {
    value: i8,
    left: Option<Box<Model>>,
    right: Option<Box<Model>>,
}

fn model_add(slot: &mut Option<Box<Model>>, x: i8) -> bool {
    match slot {
        None => {
            *slot = Some(Box::new(Model {
                value: x,
                left: None,
                right: None,
            }));
            true
        }
        Some(node) => match x.cmp(&node.value) {
            Ordering::Less => model_add(&mut node.left, x),
            Ordering::Greater => model_add(&mut node.right, x),
            Ordering::Equal => false,
        },
    }
}

fn model_remove(slot: &mut Option<Box<Model>>, x: i8) -> bool {
    let Some(node) = slot else {
        return false;
    };
    match x.cmp(&node.value) {
        Ordering::Less => model_remove(&mut node.left, x),
        Ordering::Greater => model_remove(&mut node.right, x),
        Ordering::Equal => {
            match (node.left.take(), node.right.take()) {
                (child, None) | (None, child) => *slot = child,
                (left, right) => {
                    node.left = left;
                    node.right = right;
                    let mut successor = node.right.as_deref();
                    while let Some(next) = successor.and_then(|n| n.left.as_deref()) {
                        successor = Some(next);
                    }
                    if let Some(value) = successor.map(|n| n.value) {
                        node.value = value;
                        model_remove(&mut node.right, value);
                    }
                }
            }
            true
        }
    }
}

fn model_pre_order(node: Option<&Model>, out: &mut Vec<i8>) {
    if let Some(node) = node {
        out.push(node.value);
        model_pre_order(node.left.as_deref(), out);
        model_pre_order(node.right.as_deref(), out);
    }
}

#[quickcheck]
fn shape_matches_recursive_successor_tree(ops: Vec<Op<i8>>) -> bool {
    let mut tree = Tree::new();
    let mut model = None;

    ops.iter().all(|op| {
        let agreed = match op {
            Op::Add(x) => tree.add(*x).is_ok() == model_add(&mut model, *x),
            Op::Remove(x) => tree.remove(x).is_ok() == model_remove(&mut model, *x),
            Op::Contains(_) => true,
            Op::Clear => {
                tree.clear();
                model = None;
                true
            }
        };

        let mut expected = Vec::new();
        model_pre_order(model.as_deref(), &mut expected);
        agreed && tree.pre_order() == expected && tree.count() == expected.len()
    })
}
