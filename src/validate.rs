//! Consistency checks over a tree's structure.

use compare::Compare;
use std::cmp;
use thiserror::Error;
use crate::balance::{self, MAX_BALANCE};
use crate::node::{Left, Link, Nodes, Right};

/// An invariant found broken by [`AvlTree::validate`](crate::AvlTree::validate).
///
/// Nodes are identified by their depth, the root being at depth 0.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Violation {
    /// A node's subtrees differ in height by more than one.
    #[error("node at depth {depth} has balance factor {factor}")]
    Unbalanced {
        /// Depth of the offending node.
        depth: usize,
        /// Its balance factor.
        factor: isize,
    },

    /// An element compares greater than its in-order successor.
    #[error("element {position} in order compares greater than the next")]
    Unordered {
        /// In-order position of the offending element.
        position: usize,
    },

    /// A child's parent link does not point at the node holding it.
    #[error("node at depth {depth} does not link back to its parent")]
    BrokenParent {
        /// Depth of the offending child.
        depth: usize,
    },

    /// A node's cached height disagrees with the height of its subtree.
    #[error("node at depth {depth} records height {recorded} but has height {actual}")]
    StaleHeight {
        /// Depth of the offending node.
        depth: usize,
        /// The cached height.
        recorded: isize,
        /// The height recomputed from its subtrees.
        actual: isize,
    },

    /// The root links to a parent.
    #[error("root has a parent")]
    RootHasParent,

    /// The number of reachable nodes differs from the tree's length.
    #[error("{reachable} nodes are reachable from the root but the tree holds {len}")]
    SizeMismatch {
        /// Nodes reachable from the root.
        reachable: usize,
        /// Nodes the tree holds.
        len: usize,
    },
}

/// Walks the whole tree and reports the first broken invariant.
pub fn check<T, C>(nodes: &Nodes<T>, root: Link, cmp: &C) -> Result<(), Violation>
    where C: Compare<T> {

    if let Some(root) = root {
        if nodes.parent(root).is_some() { return Err(Violation::RootHasParent); }
    }

    let mut in_order = Vec::with_capacity(nodes.len());
    visit(nodes, root, 0, &mut in_order)?;

    if in_order.len() != nodes.len() {
        return Err(Violation::SizeMismatch { reachable: in_order.len(), len: nodes.len() });
    }

    match in_order.windows(2).position(|w| cmp.compares_gt(nodes.data(w[0]), nodes.data(w[1]))) {
        Some(position) => Err(Violation::Unordered { position }),
        None => Ok(()),
    }
}

// Returns the recomputed height of the subtree in `link`.
fn visit<T>(nodes: &Nodes<T>, link: Link, depth: usize, in_order: &mut Vec<usize>)
    -> Result<isize, Violation> {

    let id = match link {
        None => return Ok(-1),
        Some(id) => id,
    };

    for child in nodes.child::<Left>(id).into_iter().chain(nodes.child::<Right>(id)) {
        if nodes.parent(child) != Some(id) {
            return Err(Violation::BrokenParent { depth: depth + 1 });
        }
    }

    let left = visit(nodes, nodes.left(id), depth + 1, in_order)?;
    in_order.push(id);
    let right = visit(nodes, nodes.right(id), depth + 1, in_order)?;

    let actual = 1 + cmp::max(left, right);
    let recorded = nodes.height(link);
    if recorded != actual {
        return Err(Violation::StaleHeight { depth, recorded, actual });
    }

    let factor = balance::balance_factor(nodes, link);
    if factor > MAX_BALANCE {
        return Err(Violation::Unbalanced { depth, factor });
    }

    Ok(actual)
}
