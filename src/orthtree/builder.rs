use std::convert::Infallible;

use tracing::{debug, debug_span, trace};

use crate::error::{OrthtreeError, Result};
use crate::orthtree::{Node, Orthtree};
use crate::r#type::{Dimensions, OrthtreeNum};
use crate::vector::Vector;

/// Maximum depth used by [`OrthtreeBuilder::new`] unless overridden.
pub const DEFAULT_MAX_DEPTH: usize = 8;

/// A builder to create an [`Orthtree`].
///
/// ```
/// use orthtree::orthtree::{OrthtreeBuilder, OrthtreeIndex};
/// use orthtree::Vector;
///
/// let tree = OrthtreeBuilder::new(Vector::new([0.0, 0.0]), Vector::new([512.0, 512.0]))
///     .unwrap()
///     .with_max_depth(2)
///     .finish(|_| true);
/// assert_eq!(tree.size(), 1 + 4 + 16);
/// ```
#[derive(Debug, Clone)]
pub struct OrthtreeBuilder<const D: usize, N: OrthtreeNum> {
    lower: Vector<D, N>,
    extent: Vector<D, N>,
    max_depth: usize,
    capacity: usize,
}

impl<const D: usize, N: OrthtreeNum> OrthtreeBuilder<D, N> {
    /// Create a new builder over the region `[lower, upper)` with the default max depth.
    ///
    /// Returns an error if `lower[d] >= upper[d]` on any axis, or if `upper[d] - lower[d]` does not
    /// fit in `N` (e.g. `i8` bounds `[-100, 100)`).
    pub fn new(lower: Vector<D, N>, upper: Vector<D, N>) -> Result<Self> {
        let () = Dimensions::<D>::ASSERT;
        let extent = check_bounds(&lower, &upper)?;
        Ok(Self {
            lower,
            extent,
            max_depth: DEFAULT_MAX_DEPTH,
            capacity: 0,
        })
    }

    /// Set the deepest level a node may be generated at. With `0` only the root is generated.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Reserve storage for this many nodes up front.
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// The deepest level a node may be generated at.
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Consume this builder, generating the tree breadth-first.
    ///
    /// `should_subdivide` is called once per candidate node with `level < max_depth`, and the node
    /// is split into `2^D` children when it returns `true`. A predicate that always returns `true`
    /// produces `sum((2^D)^l)` nodes for `l` in `0..=max_depth`, so keep the depth modest in
    /// higher dimensions.
    ///
    /// With integer scalars, extents are halved with truncating division. An odd extent loses its
    /// remainder, so the children of such a node do not cover its upper edge and points there fall
    /// in no leaf. Use power-of-two extents for an exact partition.
    pub fn finish<F>(self, mut should_subdivide: F) -> Orthtree<D, N>
    where
        F: FnMut(&Node<D, N>) -> bool,
    {
        match self.try_finish(|node| Ok::<_, Infallible>(should_subdivide(node))) {
            Ok(tree) => tree,
            Err(never) => match never {},
        }
    }

    /// Like [`finish`][Self::finish], but with a fallible predicate. The first error returned by
    /// the predicate stops generation and is passed through unchanged.
    pub fn try_finish<E, F>(self, should_subdivide: F) -> std::result::Result<Orthtree<D, N>, E>
    where
        F: FnMut(&Node<D, N>) -> std::result::Result<bool, E>,
    {
        let mut tree = Orthtree::new();
        tree.nodes.reserve(self.capacity);
        self.generate_into(&mut tree, should_subdivide)?;
        Ok(tree)
    }

    /// Replace the contents of `tree` with a freshly generated tree, reusing its allocations.
    ///
    /// On error the tree is left empty.
    pub(crate) fn generate_into<E, F>(
        &self,
        tree: &mut Orthtree<D, N>,
        mut should_subdivide: F,
    ) -> std::result::Result<(), E>
    where
        F: FnMut(&Node<D, N>) -> std::result::Result<bool, E>,
    {
        let span = debug_span!("generate", dims = D, max_depth = self.max_depth);
        let _guard = span.enter();

        tree.clear();

        tree.pending.push_back(Node::new(self.lower, self.extent, 0));

        // Storage position the next enqueued node will land at. The queue is FIFO, so nodes are
        // stored in the same order they are enqueued.
        let mut next_slot = 1;
        let mut num_leaves = 0;

        while let Some(mut node) = tree.pending.pop_front() {
            let subdivide = node.level < self.max_depth
                && match should_subdivide(&node) {
                    Ok(subdivide) => subdivide,
                    Err(err) => {
                        tree.clear();
                        return Err(err);
                    }
                };

            if subdivide {
                trace!(index = tree.nodes.len(), level = node.level, "subdivide");
                node.first_child = Some(next_slot);
                for child_index in 0..Dimensions::<D>::NUM_CHILDREN {
                    tree.pending.push_back(node.child(child_index));
                }
                next_slot += Dimensions::<D>::NUM_CHILDREN;
            } else {
                num_leaves += 1;
            }

            // The first node of a new level closes off the previous one.
            if node.level > tree.level_bounds.len() {
                tree.level_bounds.push(tree.nodes.len());
            }
            tree.nodes.push(node);
        }
        tree.level_bounds.push(tree.nodes.len());

        debug!(
            num_nodes = tree.nodes.len(),
            num_leaves,
            num_levels = tree.level_bounds.len(),
            "generated orthtree"
        );
        Ok(())
    }
}

#[allow(clippy::neg_cmp_op_on_partial_ord)]
/// Validate the root region, returning its extent.
fn check_bounds<const D: usize, N: OrthtreeNum>(
    lower: &Vector<D, N>,
    upper: &Vector<D, N>,
) -> Result<Vector<D, N>> {
    let mut extent = Vector::default();
    for axis in 0..D {
        let (lo, hi) = (lower[axis], upper[axis]);
        // Written as a negation so NaN bounds are rejected too.
        if !(lo < hi) {
            return Err(OrthtreeError::InvalidBounds {
                axis,
                lower: lo.to_string(),
                upper: hi.to_string(),
            });
        }
        extent[axis] = N::checked_span(lo, hi).ok_or_else(|| OrthtreeError::BoundsOverflow {
            axis,
            lower: lo.to_string(),
            upper: hi.to_string(),
        })?;
    }
    Ok(extent)
}
