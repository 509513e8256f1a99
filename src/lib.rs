//! A self-balancing binary search tree.
//!
//! [`AvlTree`] keeps every node's subtrees within one level of each other
//! by rotating after each insertion and removal, so lookups, insertions and removals all take
//! logarithmic time. Nodes link back to their parents, and positions in the tree can be inspected
//! through [`NodeRef`], including the sentinel slots below the leaves.
//!
//! # Examples
//!
//! ```
//! let mut tree = avl::AvlTree::new();
//!
//! for i in 1..32 { tree.insert(i); }
//!
//! assert_eq!(tree.root().data(), Some(&16));
//! assert_eq!(tree.height(), 4);
//! assert_eq!(tree.validate(), Ok(()));
//! ```

#![deny(missing_docs)]

mod balance;
mod node;
mod tree;
mod validate;

#[cfg(feature = "quickcheck")]
mod quickcheck;

pub use node::{Degree, NodeRef, PreOrder};
pub use tree::AvlTree;
pub use validate::Violation;
