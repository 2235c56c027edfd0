//! Utilities to traverse the orthtree structure.
//!
//! Storage order is already a breadth-first walk of the tree, so plain iteration over
//! [`OrthtreeIndex::nodes`] covers the common case. The types here follow parent-child links
//! instead.

use std::marker::PhantomData;

use crate::orthtree::{Node, OrthtreeIndex};
use crate::r#type::OrthtreeNum;

/// A handle onto one node of a tree, which can walk down to its children.
#[derive(Debug)]
pub struct NodeRef<'a, const D: usize, N: OrthtreeNum, T: OrthtreeIndex<D, N>> {
    /// The tree that this node is a reference onto
    tree: &'a T,

    /// Position of this node in the tree's storage.
    index: usize,

    phantom: PhantomData<N>,
}

impl<'a, const D: usize, N: OrthtreeNum, T: OrthtreeIndex<D, N>> NodeRef<'a, D, N, T> {
    pub(crate) fn new(tree: &'a T, index: usize) -> Self {
        debug_assert!(index < tree.size());
        Self {
            tree,
            index,
            phantom: PhantomData,
        }
    }

    /// Position of this node in the tree's storage.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The node this handle points at.
    pub fn node(&self) -> &'a Node<D, N> {
        let tree: &'a T = self.tree;
        &tree.nodes()[self.index]
    }

    /// Depth of this node, where the root is level 0.
    pub fn level(&self) -> usize {
        self.node().level()
    }

    /// Returns `true` if this is a leaf node without children.
    pub fn is_leaf(&self) -> bool {
        self.node().is_leaf()
    }

    /// Returns `true` if this is an intermediate node with children.
    pub fn is_parent(&self) -> bool {
        self.node().is_parent()
    }

    /// Returns an iterator over the child nodes of this node, in child-index order. Empty for a
    /// leaf.
    pub fn children(&self) -> impl Iterator<Item = NodeRef<'a, D, N, T>> {
        let tree = self.tree;
        self.node()
            .children()
            .map(move |index| NodeRef::new(tree, index))
    }
}

// Manual impls so `T` itself doesn't need to be `Clone`.
impl<const D: usize, N: OrthtreeNum, T: OrthtreeIndex<D, N>> Clone for NodeRef<'_, D, N, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<const D: usize, N: OrthtreeNum, T: OrthtreeIndex<D, N>> Copy for NodeRef<'_, D, N, T> {}

/// Depth-first, pre-order iterator over `(index, node)` pairs.
///
/// Uses an explicit stack, so deep trees don't grow the call stack.
#[derive(Debug)]
pub struct DepthFirst<'a, const D: usize, N: OrthtreeNum, T: OrthtreeIndex<D, N>> {
    tree: &'a T,
    stack: Vec<usize>,
    phantom: PhantomData<N>,
}

impl<'a, const D: usize, N: OrthtreeNum, T: OrthtreeIndex<D, N>> DepthFirst<'a, D, N, T> {
    pub(crate) fn new(tree: &'a T) -> Self {
        let stack = if tree.is_empty() { vec![] } else { vec![0] };
        Self {
            tree,
            stack,
            phantom: PhantomData,
        }
    }
}

impl<'a, const D: usize, N: OrthtreeNum, T: OrthtreeIndex<D, N>> Iterator
    for DepthFirst<'a, D, N, T>
{
    type Item = (usize, &'a Node<D, N>);

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.stack.pop()?;
        let tree: &'a T = self.tree;
        let node = &tree.nodes()[index];
        // Reversed so the lowest child index is popped first.
        self.stack.extend(node.children().rev());
        Some((index, node))
    }
}
