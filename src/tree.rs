//! A self-balancing binary search tree.

use compare::{Compare, Natural};
use std::fmt::{self, Debug};
use crate::balance;
use crate::node::{Left, Link, NodeRef, Nodes, PreOrder, Right};
use crate::validate::{self, Violation};

/// A self-balancing (AVL) binary search tree.
///
/// Every node's subtrees differ in height by at most one once an operation returns. Elements that
/// compare equal are all kept: a duplicate is inserted into the left subtree of its equal.
///
/// The behavior of this tree is undefined if an element's ordering relative to any other element
/// changes while the element is in the tree. This is normally only possible through `Cell`,
/// `RefCell`, or unsafe code.
#[derive(Clone)]
pub struct AvlTree<T, C = Natural<T>> where C: Compare<T> {
    pub(crate) nodes: Nodes<T>,
    pub(crate) root: Link,
    cmp: C,
}

impl<T> AvlTree<T> where T: Ord {
    /// Creates an empty tree ordered according to the natural order of its elements.
    ///
    /// # Examples
    ///
    /// ```
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.to_pre_order(), [2, 1, 3]);
    /// ```
    pub fn new() -> Self { AvlTree::with_cmp(compare::natural()) }
}

impl<T, C> AvlTree<T, C> where C: Compare<T> {
    /// Creates an empty tree ordered according to the given comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use compare::{Compare, natural};
    /// use avl::AvlTree;
    ///
    /// let mut tree = AvlTree::with_cmp(natural().rev());
    ///
    /// tree.insert(1);
    /// tree.insert(2);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.to_pre_order(), [2, 3, 1]);
    /// ```
    pub fn with_cmp(cmp: C) -> Self {
        AvlTree { nodes: Nodes::new(), root: None, cmp }
    }

    /// Checks if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    /// assert!(tree.is_empty());
    ///
    /// tree.insert(2);
    /// assert!(!tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool { self.root.is_none() }

    /// Returns the number of elements in the tree, duplicates included.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    /// assert_eq!(tree.len(), 0);
    ///
    /// tree.insert(2);
    /// tree.insert(2);
    /// assert_eq!(tree.len(), 2);
    /// ```
    pub fn len(&self) -> usize { self.nodes.len() }

    /// Returns the height of the tree: -1 when empty, 0 for a single element.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    /// assert_eq!(tree.height(), -1);
    ///
    /// for i in 1..32 { tree.insert(i); }
    /// assert_eq!(tree.height(), 4);
    /// ```
    pub fn height(&self) -> isize { self.nodes.height(self.root) }

    /// Returns the root of the tree, which is a sentinel when the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    /// assert!(tree.root().is_empty());
    ///
    /// tree.insert(-10);
    /// tree.insert(-15);
    ///
    /// let root = tree.root();
    /// assert_eq!(root.data(), Some(&-10));
    /// assert_eq!(root.left().and_then(|n| n.data()), Some(&-15));
    /// assert!(root.right().map_or(false, |n| n.is_empty()));
    /// ```
    pub fn root(&self) -> NodeRef<'_, T> { NodeRef::new(&self.nodes, self.root, None) }

    /// Returns a reference to the tree's comparator.
    pub fn cmp(&self) -> &C { &self.cmp }

    /// Removes all elements from the tree.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
    }

    /// Inserts an element into the tree and rebalances it.
    ///
    /// An element equal to one already present is inserted alongside it rather than replacing it.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    ///
    /// tree.insert(55);
    /// tree.insert(9);
    /// tree.insert(91);
    /// tree.insert(9);
    ///
    /// assert_eq!(tree.len(), 4);
    /// assert_eq!(tree.to_pre_order(), [55, 9, 9, 91]);
    /// ```
    pub fn insert(&mut self, element: T) {
        balance::insert(&mut self.nodes, &mut self.root, &self.cmp, element);
    }

    /// Removes an element equal to the given key and rebalances the tree, returning the removed
    /// element, or `None` if the tree does not contain the key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    ///
    /// for &i in &[55, 9, 91, 12] { tree.insert(i); }
    ///
    /// assert_eq!(tree.remove(&-1), None);
    /// assert_eq!(tree.len(), 4);
    ///
    /// assert_eq!(tree.remove(&91), Some(91));
    /// assert_eq!(tree.to_pre_order(), [12, 9, 55]);
    /// ```
    pub fn remove<Q: ?Sized>(&mut self, key: &Q) -> Option<T> where C: Compare<Q, T> {
        balance::remove(&mut self.nodes, &mut self.root, &self.cmp, key)
    }

    /// Returns the node holding an element equal to the given key, or the sentinel where such an
    /// element would be inserted.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    ///
    /// assert_eq!(tree.search(&1).data(), Some(&1));
    ///
    /// let miss = tree.search(&3);
    /// assert!(miss.is_empty());
    /// assert_eq!(miss.parent().and_then(|n| n.data()), Some(&2));
    /// ```
    pub fn search<Q: ?Sized>(&self, key: &Q) -> NodeRef<'_, T> where C: Compare<Q, T> {
        let (link, parent) = self.nodes.search(self.root, &self.cmp, key);
        NodeRef::new(&self.nodes, link, parent)
    }

    /// Checks if the tree contains an element equal to the given key.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    /// assert!(!tree.contains(&1));
    /// tree.insert(1);
    /// assert!(tree.contains(&1));
    /// ```
    pub fn contains<Q: ?Sized>(&self, key: &Q) -> bool where C: Compare<Q, T> {
        !self.search(key).is_empty()
    }

    /// Returns the node following the one holding the given key in order, or a sentinel if the
    /// key is absent or is the maximum.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.successor(&1).data(), Some(&2));
    /// assert_eq!(tree.successor(&2).data(), Some(&3));
    /// assert!(tree.successor(&3).is_empty());
    /// assert!(tree.successor(&4).is_empty());
    /// ```
    pub fn successor<Q: ?Sized>(&self, key: &Q) -> NodeRef<'_, T> where C: Compare<Q, T> {
        let (link, _) = self.nodes.search(self.root, &self.cmp, key);
        NodeRef::at(&self.nodes, link.and_then(|id| self.nodes.neighbor::<Right>(id)))
    }

    /// Returns the node preceding the one holding the given key in order, or a sentinel if the
    /// key is absent or is the minimum.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert!(tree.predecessor(&1).is_empty());
    /// assert_eq!(tree.predecessor(&2).data(), Some(&1));
    /// assert_eq!(tree.predecessor(&3).data(), Some(&2));
    /// ```
    pub fn predecessor<Q: ?Sized>(&self, key: &Q) -> NodeRef<'_, T> where C: Compare<Q, T> {
        let (link, _) = self.nodes.search(self.root, &self.cmp, key);
        NodeRef::at(&self.nodes, link.and_then(|id| self.nodes.neighbor::<Left>(id)))
    }

    /// Returns the node holding the tree's minimum element, or a sentinel if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    /// assert!(tree.min().is_empty());
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.min().data(), Some(&1));
    /// ```
    pub fn min(&self) -> NodeRef<'_, T> {
        NodeRef::at(&self.nodes, self.root.map(|id| self.nodes.extremum::<Left>(id)))
    }

    /// Returns the node holding the tree's maximum element, or a sentinel if the tree is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    /// assert!(tree.max().is_empty());
    ///
    /// tree.insert(2);
    /// tree.insert(1);
    /// tree.insert(3);
    ///
    /// assert_eq!(tree.max().data(), Some(&3));
    /// ```
    pub fn max(&self) -> NodeRef<'_, T> {
        NodeRef::at(&self.nodes, self.root.map(|id| self.nodes.extremum::<Right>(id)))
    }

    /// Returns an iterator over the tree's elements in pre-order.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut tree = avl::AvlTree::new();
    ///
    /// tree.insert(-10);
    /// tree.insert(-15);
    /// tree.insert(20);
    ///
    /// let mut it = tree.pre_order();
    /// assert_eq!(it.next(), Some(&-10));
    /// assert_eq!(it.next(), Some(&-15));
    /// assert_eq!(it.next(), Some(&20));
    /// assert_eq!(it.next(), None);
    /// ```
    pub fn pre_order(&self) -> PreOrder<'_, T> { PreOrder::new(&self.nodes, self.root) }

    /// Returns the tree's elements in pre-order.
    pub fn to_pre_order(&self) -> Vec<T> where T: Clone { self.pre_order().cloned().collect() }

    /// Checks every structural invariant of the tree, returning the first one found broken.
    ///
    /// # Examples
    ///
    /// ```
    /// let tree: avl::AvlTree<_> = (0..100).collect();
    /// assert_eq!(tree.validate(), Ok(()));
    /// ```
    pub fn validate(&self) -> Result<(), Violation> {
        validate::check(&self.nodes, self.root, &self.cmp)
    }
}

impl<T, C> Debug for AvlTree<T, C> where T: Debug, C: Compare<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.pre_order()).finish()
    }
}

impl<T, C> Default for AvlTree<T, C> where C: Compare<T> + Default {
    fn default() -> Self { AvlTree::with_cmp(Default::default()) }
}

impl<T, C> Extend<T> for AvlTree<T, C> where C: Compare<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, it: I) {
        for element in it { self.insert(element); }
    }
}

impl<T, C> FromIterator<T> for AvlTree<T, C> where C: Compare<T> + Default {
    fn from_iter<I: IntoIterator<Item = T>>(it: I) -> Self {
        let mut tree = AvlTree::default();
        tree.extend(it);
        tree
    }
}

impl<'a, T, C> IntoIterator for &'a AvlTree<T, C> where C: Compare<T> {
    type Item = &'a T;
    type IntoIter = PreOrder<'a, T>;
    fn into_iter(self) -> PreOrder<'a, T> { self.pre_order() }
}
