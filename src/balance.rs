//! AVL balancing.
//!
//! Every insertion and removal ends with a walk from the point of mutation up to the root. Each
//! node on the way has its height refreshed and, when its subtrees differ in height by more than
//! one, is restructured with a single or double rotation.

use compare::Compare;
use log::debug;
use crate::node::{Dir, Left, Link, Nodes, Right};

/// The largest balance factor a node may have once an operation completes.
pub const MAX_BALANCE: isize = 1;

/// Returns `|height(left) - height(right)|` for a node, or -1 for a sentinel.
pub fn balance_factor<T>(nodes: &Nodes<T>, link: Link) -> isize {
    link.map_or(-1, |id| lean::<T, Left>(nodes, id).abs())
}

/// Returns how much taller the `D` subtree of a node is than its other subtree.
fn lean<T, D>(nodes: &Nodes<T>, id: usize) -> isize where D: Dir {
    nodes.height(nodes.child::<D>(id)) - nodes.height(nodes.child::<D::Opposite>(id))
}

/// Restores balance at an unbalanced node, returning the root of the restructured subtree.
fn restructure<T>(nodes: &mut Nodes<T>, id: usize) -> usize {
    debug_assert!(balance_factor(nodes, Some(id)) > MAX_BALANCE,
                  "restructuring balanced node {}", id);

    if lean::<T, Left>(nodes, id) >= 1 {
        restructure_heavy::<T, Left>(nodes, id)
    } else {
        restructure_heavy::<T, Right>(nodes, id)
    }
}

// `D` is the taller side. A child leaning the other way forms a zig-zag and is first rotated
// toward `D`; a child with equal subtrees takes the single rotation.
fn restructure_heavy<T, D>(nodes: &mut Nodes<T>, id: usize) -> usize where D: Dir {
    if let Some(child) = nodes.child::<D>(id) {
        if lean::<T, D::Opposite>(nodes, child) >= 1 {
            debug!("double rotation at node {} ({}-{})", id, D::NAME, D::Opposite::NAME);
            nodes.rotate::<D>(child);
        } else {
            debug!("single rotation at node {} ({}-{})", id, D::NAME, D::NAME);
        }
    }

    nodes.rotate::<D::Opposite>(id)
}

/// Walks from `link` to the root, refreshing heights and rotating every unbalanced node.
///
/// After a rotation the walk continues from the rotated node's new parent, which is the child
/// promoted into its place.
pub fn rebalance_up<T>(nodes: &mut Nodes<T>, root: &mut Link, mut link: Link) {
    while let Some(id) = link {
        nodes.update_height(id);

        if balance_factor(nodes, link) > MAX_BALANCE {
            let top = restructure(nodes, id);

            if nodes.parent(top).is_none() {
                debug!("node {} is the new root", top);
                *root = Some(top);
            }
        }

        link = nodes.parent(id);
    }
}

/// Inserts `element` as a new leaf and rebalances above it.
///
/// Elements comparing greater than a node descend right, all others (equal ones included)
/// descend left, so duplicates are kept.
pub fn insert<T, C>(nodes: &mut Nodes<T>, root: &mut Link, cmp: &C, element: T)
    where C: Compare<T> {

    let mut parent = None;
    let mut link = *root;
    let mut greater = false;

    while let Some(id) = link {
        greater = cmp.compares_gt(&element, nodes.data(id));
        parent = link;
        link = if greater { nodes.right(id) } else { nodes.left(id) };
    }

    let id = nodes.alloc(element, parent);

    match parent {
        None => *root = Some(id),
        Some(parent) if greater => nodes.set_child::<Right>(parent, Some(id)),
        Some(parent) => nodes.set_child::<Left>(parent, Some(id)),
    }

    rebalance_up(nodes, root, Some(id));
}

/// Removes the first node comparing equal to `key`, returning its element.
pub fn remove<T, C, Q: ?Sized>(nodes: &mut Nodes<T>, root: &mut Link, cmp: &C, key: &Q)
    -> Option<T> where C: Compare<Q, T> {

    let (link, _) = nodes.search(*root, cmp, key);
    link.map(|id| remove_node(nodes, root, id))
}

fn remove_node<T>(nodes: &mut Nodes<T>, root: &mut Link, id: usize) -> T {
    match (nodes.left(id), nodes.right(id)) {
        (None, None) => {
            let parent = nodes.parent(id);
            nodes.splice(id, None, root);
            rebalance_up(nodes, root, parent);
        }
        (Some(child), None) | (None, Some(child)) => {
            nodes.splice(id, Some(child), root);
            rebalance_up(nodes, root, Some(child));
        }
        (Some(_), Some(right)) => {
            // the element being removed moves down to the successor, which has at most one child
            let succ = nodes.extremum::<Left>(right);
            nodes.swap_data(id, succ);
            return remove_node(nodes, root, succ);
        }
    }

    nodes.release(id, root)
}
