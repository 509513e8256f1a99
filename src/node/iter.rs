//! Pre-order traversal.

use super::Nodes;

/// An iterator over a tree's elements in pre-order: each node before its left subtree, the left
/// subtree before the right.
///
/// Acquire through [`AvlTree::pre_order`](crate::AvlTree::pre_order).
pub struct PreOrder<'a, T: 'a> {
    nodes: &'a Nodes<T>,
    stack: Vec<usize>,
    size: usize,
}

impl<'a, T> PreOrder<'a, T> {
    pub(crate) fn new(nodes: &'a Nodes<T>, root: Option<usize>) -> Self {
        PreOrder { nodes, stack: root.into_iter().collect(), size: nodes.len() }
    }
}

impl<'a, T> Clone for PreOrder<'a, T> {
    fn clone(&self) -> Self {
        PreOrder { nodes: self.nodes, stack: self.stack.clone(), size: self.size }
    }
}

impl<'a, T> Iterator for PreOrder<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let id = self.stack.pop()?;
        self.stack.extend(self.nodes.right(id));
        self.stack.extend(self.nodes.left(id));
        self.size -= 1;
        Some(self.nodes.data(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) { (self.size, Some(self.size)) }
}

impl<'a, T> ExactSizeIterator for PreOrder<'a, T> {}
