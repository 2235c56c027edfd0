use std::collections::VecDeque;

use crate::error::{OrthtreeError, Result};
use crate::orthtree::builder::OrthtreeBuilder;
use crate::orthtree::r#trait::OrthtreeIndex;
use crate::orthtree::Node;
use crate::r#type::{Dimensions, OrthtreeNum};
use crate::vector::Vector;

/// An owned orthtree.
///
/// Nodes are stored flat in breadth-first order: the root at position 0, then every level-1 node
/// in child-index order, then level 2, and so on. Usually this will be created from scratch via
/// [`OrthtreeBuilder`], or regenerated in place with [`generate`][Orthtree::generate].
#[derive(Debug, Clone)]
pub struct Orthtree<const D: usize, N: OrthtreeNum> {
    pub(crate) nodes: Vec<Node<D, N>>,
    /// End offset into `nodes` of each level.
    pub(crate) level_bounds: Vec<usize>,
    /// Work queue for generation, kept around so regeneration reuses its allocation. Always empty
    /// outside of generation.
    pub(crate) pending: VecDeque<Node<D, N>>,
}

impl<const D: usize, N: OrthtreeNum> Orthtree<D, N> {
    /// Create an empty tree. Call [`generate`][Self::generate] to fill it.
    ///
    /// A zero-dimensional tree is rejected when the crate using it is compiled:
    ///
    /// ```compile_fail
    /// use orthtree::Orthtree;
    ///
    /// let tree = Orthtree::<0, f64>::new();
    /// ```
    pub fn new() -> Self {
        let () = Dimensions::<D>::ASSERT;
        Self {
            nodes: Vec::new(),
            level_bounds: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    /// Discard the current contents and generate a new tree over `[lower, upper)`.
    ///
    /// See [`OrthtreeBuilder::finish`] for how `should_subdivide` is applied. Returns an error,
    /// leaving the tree empty, if `lower[d] >= upper[d]` on any axis or if `upper[d] - lower[d]`
    /// does not fit in `N`.
    ///
    /// With integer scalars, odd extents are halved with truncation, so their children miss the
    /// upper edge of the parent. Power-of-two extents partition exactly.
    pub fn generate<F>(
        &mut self,
        lower: Vector<D, N>,
        upper: Vector<D, N>,
        max_depth: usize,
        mut should_subdivide: F,
    ) -> Result<()>
    where
        F: FnMut(&Node<D, N>) -> bool,
    {
        self.try_generate(lower, upper, max_depth, |node| Ok(should_subdivide(node)))
    }

    /// Like [`generate`][Self::generate], but with a fallible predicate whose first error is
    /// returned unchanged. Invalid bounds are reported through `E: From<OrthtreeError>`.
    pub fn try_generate<E, F>(
        &mut self,
        lower: Vector<D, N>,
        upper: Vector<D, N>,
        max_depth: usize,
        should_subdivide: F,
    ) -> std::result::Result<(), E>
    where
        E: From<OrthtreeError>,
        F: FnMut(&Node<D, N>) -> std::result::Result<bool, E>,
    {
        let builder = match OrthtreeBuilder::new(lower, upper) {
            Ok(builder) => builder.with_max_depth(max_depth),
            Err(err) => {
                self.clear();
                return Err(err.into());
            }
        };
        builder.generate_into(self, should_subdivide)
    }

    /// A borrowed, `Copy` view of this tree.
    pub fn as_ref(&self) -> OrthtreeRef<'_, D, N> {
        OrthtreeRef {
            nodes: &self.nodes,
            level_bounds: &self.level_bounds,
        }
    }

    /// Consume the tree, returning its nodes in breadth-first order.
    pub fn into_inner(self) -> Vec<Node<D, N>> {
        self.nodes
    }

    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.level_bounds.clear();
        self.pending.clear();
    }
}

impl<const D: usize, N: OrthtreeNum> Default for Orthtree<D, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const D: usize, N: OrthtreeNum> PartialEq for Orthtree<D, N> {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.level_bounds == other.level_bounds
    }
}

impl<const D: usize, N: OrthtreeNum> OrthtreeIndex<D, N> for Orthtree<D, N> {
    fn nodes(&self) -> &[Node<D, N>] {
        &self.nodes
    }

    fn level_bounds(&self) -> &[usize] {
        &self.level_bounds
    }
}

impl<'a, const D: usize, N: OrthtreeNum> IntoIterator for &'a Orthtree<D, N> {
    type Item = &'a Node<D, N>;
    type IntoIter = std::slice::Iter<'a, Node<D, N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}

/// A reference onto the nodes of an [`Orthtree`].
///
/// Usually this will be created from an [`Orthtree`] via its [`as_ref`][Orthtree::as_ref] method.
/// Generated trees are never mutated, so a view can be shared freely between reader threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrthtreeRef<'a, const D: usize, N: OrthtreeNum> {
    pub(crate) nodes: &'a [Node<D, N>],
    pub(crate) level_bounds: &'a [usize],
}

impl<const D: usize, N: OrthtreeNum> OrthtreeIndex<D, N> for OrthtreeRef<'_, D, N> {
    fn nodes(&self) -> &[Node<D, N>] {
        self.nodes
    }

    fn level_bounds(&self) -> &[usize] {
        self.level_bounds
    }
}

impl<'a, const D: usize, N: OrthtreeNum> IntoIterator for OrthtreeRef<'a, D, N> {
    type Item = &'a Node<D, N>;
    type IntoIter = std::slice::Iter<'a, Node<D, N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.nodes.iter()
    }
}
