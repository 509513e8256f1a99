use avl::AvlTree;
use simplelog::{Config, LevelFilter, TestLogger};

fn tree() -> AvlTree<i32> {
    let _ = TestLogger::init(LevelFilter::Trace, Config::default());
    AvlTree::new()
}

fn floor_log2(n: usize) -> isize { (usize::BITS - 1 - n.leading_zeros()) as isize }

#[test]
fn empty() {
    let tree = tree();
    assert!(tree.is_empty());
    assert_eq!(tree.len(), 0);
    assert_eq!(tree.height(), -1);
    assert!(tree.root().is_empty());
    assert_eq!(tree.root().data(), None);
    assert_eq!(tree.pre_order().next(), None);
}

#[test]
fn insert() {
    let mut tree = tree();

    tree.insert(-10);
    assert_eq!(tree.len(), 1);
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.to_pre_order(), [-10]);
    assert!(!tree.is_empty());
    assert_eq!(tree.root().data(), Some(&-10));

    tree.insert(-15);
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.to_pre_order(), [-10, -15]);

    tree.insert(20);
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.height(), 1);
    assert_eq!(tree.to_pre_order(), [-10, -15, 20]);
}

#[test]
fn remove() {
    let mut tree = tree();
    for &i in &[55, 9, 91, 12] { tree.insert(i); }

    assert_eq!(tree.remove(&-1), None);
    assert_eq!(tree.len(), 4);

    assert_eq!(tree.remove(&91), Some(91));
    assert_eq!(tree.len(), 3);
    assert_eq!(tree.to_pre_order(), [12, 9, 55]);

    assert_eq!(tree.remove(&12), Some(12));
    assert_eq!(tree.len(), 2);
    assert_eq!(tree.to_pre_order(), [55, 9]);

    tree.remove(&9);
    tree.remove(&55);
    assert!(tree.root().is_empty());
    assert!(tree.is_empty());
    assert_eq!(tree.validate(), Ok(()));
}

#[test]
fn sequential_insertion_stays_perfect() {
    let mut tree = tree();
    for i in 1..32 { tree.insert(i); }

    assert_eq!(tree.root().data(), Some(&16));
    assert_eq!(tree.height(), floor_log2(tree.len()));
    assert_eq!(tree.height(), 4);
    assert_eq!(tree.validate(), Ok(()));
}

#[test]
fn removals_keep_root_and_height() {
    let mut tree = tree();
    for i in 1..32 { tree.insert(i); }

    for &i in &[8, 13, 15] { tree.remove(&i); }
    assert_eq!(tree.height(), floor_log2(tree.len()));
    assert_eq!(tree.root().data(), Some(&16));

    tree.remove(&14);
    assert_eq!(tree.height(), floor_log2(tree.len()));
    assert_eq!(tree.root().data(), Some(&16));

    tree.remove(&24);
    tree.insert(24);
    for &i in &[25, 27, 31] { tree.remove(&i); }

    assert_eq!(tree.len(), 24);
    assert_eq!(tree.height(), 4);
    assert_eq!(tree.root().data(), Some(&16));
    assert_eq!(tree.to_pre_order(),
               [16, 9, 4, 2, 1, 3, 6, 5, 7, 11, 10, 12, 22, 20, 18, 17, 19, 21, 26, 23, 24, 29,
                28, 30]);
    assert_eq!(tree.validate(), Ok(()));
}

#[test]
fn duplicates_are_kept() {
    let mut tree = tree();
    for _ in 0..3 { tree.insert(5); }

    assert_eq!(tree.len(), 3);
    assert_eq!(tree.to_pre_order(), [5, 5, 5]);
    assert_eq!(tree.validate(), Ok(()));

    assert_eq!(tree.remove(&5), Some(5));
    assert_eq!(tree.to_pre_order(), [5, 5]);
}

#[test]
fn navigating_nodes() {
    let mut tree = tree();
    for &i in &[55, 9, 91, 12] { tree.insert(i); }

    let nine = tree.search(&9);
    assert_eq!(nine.parent().and_then(|n| n.data()), Some(&55));
    assert!(nine.left().map_or(false, |n| n.is_empty()));
    assert_eq!(nine.right().and_then(|n| n.data()), Some(&12));
    assert_eq!(nine.height(), 1);

    let nil = tree.search(&100);
    assert!(nil.is_empty());
    assert_eq!(nil.parent().and_then(|n| n.data()), Some(&91));
    assert!(nil.left().is_none());
    assert_eq!(nil.height(), -1);

    assert_eq!(tree.min().data(), Some(&9));
    assert_eq!(tree.max().data(), Some(&91));
    assert_eq!(tree.successor(&12).data(), Some(&55));
}
