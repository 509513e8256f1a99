//! The node pool and the structural primitives the balancing engine is built on.

mod iter;


use compare::Compare;
use log::trace;
use std::cmp::{self, Ordering::*};
use std::fmt::{self, Debug};
use std::mem;

pub use self::iter::PreOrder;

/// A child or parent slot: the index of a node in its pool, or `None` for the sentinel.
pub type Link = Option<usize>;

#[derive(Clone, Debug)]
pub struct Node<T> {
    data: T,
    left: Link,
    right: Link,
    parent: Link,
    height: isize,
}

impl<T> Node<T> {
    fn new(data: T, parent: Link) -> Self {
        Node { data, left: None, right: None, parent, height: 0 }
    }

    fn relink(&mut self, old: usize, new: Link) {
        if self.left == Some(old) {
            self.left = new;
        } else if self.right == Some(old) {
            self.right = new;
        }
    }
}

/// The number of non-sentinel children of a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Degree {
    /// Both children are sentinels.
    Zero,
    /// Exactly one child holds an element.
    One,
    /// Both children hold elements.
    Two,
}

/// Storage for the nodes of one tree.
///
/// `left` and `right` are the owning edges of the tree shape; `parent` only records where a node
/// hangs so that walks can climb back toward the root.
#[derive(Clone, Debug)]
pub struct Nodes<T> {
    nodes: Vec<Node<T>>,
}

impl<T> Default for Nodes<T> {
    fn default() -> Self { Nodes::new() }
}

impl<T> Nodes<T> {
    pub fn new() -> Self { Nodes { nodes: Vec::new() } }

    pub fn len(&self) -> usize { self.nodes.len() }

    pub fn clear(&mut self) { self.nodes.clear(); }

    pub fn data(&self, id: usize) -> &T { &self.nodes[id].data }

    pub fn left(&self, id: usize) -> Link { self.nodes[id].left }

    pub fn right(&self, id: usize) -> Link { self.nodes[id].right }

    pub fn parent(&self, id: usize) -> Link { self.nodes[id].parent }

    pub fn child<D>(&self, id: usize) -> Link where D: Dir { D::child(&self.nodes[id]) }

    /// Returns the cached height of the node in the given slot, or -1 for a sentinel.
    pub fn height(&self, link: Link) -> isize { link.map_or(-1, |id| self.nodes[id].height) }

    /// Recomputes a node's height from the cached heights of its children.
    pub fn update_height(&mut self, id: usize) {
        let node = &self.nodes[id];
        let height = 1 + cmp::max(self.height(node.left), self.height(node.right));
        self.nodes[id].height = height;
    }

    pub fn degree(&self, id: usize) -> Degree {
        let node = &self.nodes[id];
        match (node.left, node.right) {
            (None, None) => Degree::Zero,
            (Some(_), Some(_)) => Degree::Two,
            _ => Degree::One,
        }
    }

    /// Allocates a leaf holding `data` below `parent`. The caller hangs it in the parent's slot.
    pub fn alloc(&mut self, data: T, parent: Link) -> usize {
        self.nodes.push(Node::new(data, parent));
        self.nodes.len() - 1
    }

    /// Frees an unlinked node and returns its element.
    ///
    /// The last node of the pool moves into the freed slot, so every link to it (including
    /// `root`) is rewritten.
    pub fn release(&mut self, id: usize, root: &mut Link) -> T {
        let last = self.nodes.len() - 1;
        let node = self.nodes.swap_remove(id);

        if id != last {
            let (parent, left, right) = {
                let moved = &self.nodes[id];
                (moved.parent, moved.left, moved.right)
            };

            if let Some(parent) = parent { self.nodes[parent].relink(last, Some(id)); }
            if *root == Some(last) { *root = Some(id); }
            for child in left.into_iter().chain(right) { self.nodes[child].parent = Some(id); }
        }

        node.data
    }

    /// Exchanges the elements held by two nodes without touching their links.
    pub fn swap_data(&mut self, a: usize, b: usize) {
        if a == b { return; }
        let (lo, hi) = (cmp::min(a, b), cmp::max(a, b));
        let (head, tail) = self.nodes.split_at_mut(hi);
        mem::swap(&mut head[lo].data, &mut tail[0].data);
    }

    /// Hangs `child` in the `D` slot of `id` and points the child back at `id`.
    pub fn set_child<D>(&mut self, id: usize, child: Link) where D: Dir {
        *D::child_mut(&mut self.nodes[id]) = child;
        if let Some(child) = child { self.nodes[child].parent = Some(id); }
    }

    /// Puts `new` in the slot `old` occupies under its parent, or makes it the root.
    pub fn splice(&mut self, old: usize, new: Link, root: &mut Link) {
        let parent = self.nodes[old].parent;

        match parent {
            Some(parent) => self.nodes[parent].relink(old, new),
            None => *root = new,
        }

        if let Some(new) = new { self.nodes[new].parent = parent; }
        self.nodes[old].parent = None;
    }

    /// Rotates the node toward `D`, if possible, returning the root of the rotated subtree.
    ///
    /// The child on the opposite side takes the node's place and the node adopts that child's
    /// inner subtree. The parent's slot is rewired, but a new subtree root without a parent is
    /// left for the caller to install as the tree's root.
    pub fn rotate<D>(&mut self, id: usize) -> usize where D: Dir {
        let pivot = match D::Opposite::child(&self.nodes[id]) {
            Some(pivot) => pivot,
            None => return id,
        };

        let parent = self.nodes[id].parent;
        let inner = D::child(&self.nodes[pivot]);

        self.set_child::<D::Opposite>(id, inner);
        self.set_child::<D>(pivot, Some(id));
        self.nodes[pivot].parent = parent;
        if let Some(parent) = parent { self.nodes[parent].relink(id, Some(pivot)); }

        self.update_height(id);
        self.update_height(pivot);

        trace!("rotated node {} {} under node {}", id, D::NAME, pivot);
        pivot
    }

    /// Follows `D` links from `id` as far as they go.
    pub fn extremum<D>(&self, mut id: usize) -> usize where D: Dir {
        while let Some(child) = self.child::<D>(id) { id = child; }
        id
    }

    /// Returns the in-order neighbor of `id` in direction `D`: the successor for `Right`, the
    /// predecessor for `Left`.
    pub fn neighbor<D>(&self, id: usize) -> Link where D: Dir {
        if let Some(child) = self.child::<D>(id) {
            return Some(self.extremum::<D::Opposite>(child));
        }

        let mut id = id;
        loop {
            let parent = self.parent(id)?;
            if self.child::<D::Opposite>(parent) == Some(id) { return Some(parent); }
            id = parent;
        }
    }

    /// Descends from `root` to the first node comparing equal to `key`.
    ///
    /// Returns the slot found together with its parent; on a miss the slot is the sentinel
    /// where `key` would hang.
    pub fn search<C, Q: ?Sized>(&self, root: Link, cmp: &C, key: &Q) -> (Link, Link)
        where C: Compare<Q, T> {

        let mut parent = None;
        let mut link = root;

        while let Some(id) = link {
            match cmp.compare(key, &self.nodes[id].data) {
                Equal => break,
                Less => link = self.nodes[id].left,
                Greater => link = self.nodes[id].right,
            }

            parent = Some(id);
        }

        (link, parent)
    }
}

/// A direction in the tree, used to write each symmetric operation once.
pub trait Dir: Sized {
    type Opposite: Dir<Opposite = Self>;

    const NAME: &'static str;

    fn child<T>(node: &Node<T>) -> Link;
    fn child_mut<T>(node: &mut Node<T>) -> &mut Link;
}

pub enum Left {}

impl Dir for Left {
    type Opposite = Right;

    const NAME: &'static str = "left";

    fn child<T>(node: &Node<T>) -> Link { node.left }
    fn child_mut<T>(node: &mut Node<T>) -> &mut Link { &mut node.left }
}

pub enum Right {}

impl Dir for Right {
    type Opposite = Left;

    const NAME: &'static str = "right";

    fn child<T>(node: &Node<T>) -> Link { node.right }
    fn child_mut<T>(node: &mut Node<T>) -> &mut Link { &mut node.right }
}

/// A read-only view of one position in a tree: a node holding an element, or a sentinel.
///
/// Every node has two children, either of which may be a sentinel. A sentinel has no children.
pub struct NodeRef<'a, T: 'a> {
    nodes: &'a Nodes<T>,
    link: Link,
    parent: Link,
}

impl<'a, T> Clone for NodeRef<'a, T> {
    fn clone(&self) -> Self { *self }
}

impl<'a, T> Copy for NodeRef<'a, T> {}

impl<'a, T> NodeRef<'a, T> {
    pub(crate) fn new(nodes: &'a Nodes<T>, link: Link, parent: Link) -> Self {
        NodeRef { nodes, link, parent }
    }

    /// Views the node in `link`, which hangs wherever its own parent link says.
    pub(crate) fn at(nodes: &'a Nodes<T>, link: Link) -> Self {
        NodeRef::new(nodes, link, link.and_then(|id| nodes.parent(id)))
    }

    /// Checks if this is a sentinel.
    pub fn is_empty(&self) -> bool { self.link.is_none() }

    /// Returns the element held here, or `None` for a sentinel.
    pub fn data(&self) -> Option<&'a T> {
        let nodes = self.nodes;
        self.link.map(|id| nodes.data(id))
    }

    /// Returns the left child, or `None` for a sentinel.
    pub fn left(&self) -> Option<NodeRef<'a, T>> {
        self.link.map(|id| NodeRef::new(self.nodes, self.nodes.left(id), Some(id)))
    }

    /// Returns the right child, or `None` for a sentinel.
    pub fn right(&self) -> Option<NodeRef<'a, T>> {
        self.link.map(|id| NodeRef::new(self.nodes, self.nodes.right(id), Some(id)))
    }

    /// Returns the parent node, or `None` at the root.
    pub fn parent(&self) -> Option<NodeRef<'a, T>> {
        self.parent.map(|id| NodeRef::at(self.nodes, Some(id)))
    }

    /// Returns the height of the subtree rooted here: -1 for a sentinel, 0 for a leaf.
    pub fn height(&self) -> isize { self.nodes.height(self.link) }

    /// Returns the number of children holding elements. A sentinel has degree zero.
    pub fn degree(&self) -> Degree { self.link.map_or(Degree::Zero, |id| self.nodes.degree(id)) }
}

impl<'a, T> Debug for NodeRef<'a, T> where T: Debug {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.data() {
            Some(data) => f.debug_tuple("Node").field(data).finish(),
            None => f.write_str("Nil"),
        }
    }
}
