use std::ops::Range;

use crate::r#type::{Dimensions, OrthtreeNum};
use crate::vector::Vector;

/// One axis-aligned region of an orthtree.
///
/// The region is half-open on every axis: it covers `origin[d] <= p[d] < origin[d] + extent[d]`,
/// so a boundary shared between two siblings belongs to the upper one.
///
/// Children halve the extent with the scalar's own division. For integer scalars an odd extent
/// is truncated, so the children of that node leave a one-unit gap along its upper edge.
#[derive(Debug, Clone, PartialEq)]
pub struct Node<const D: usize, N: OrthtreeNum> {
    pub(crate) origin: Vector<D, N>,
    pub(crate) extent: Vector<D, N>,
    pub(crate) center: Vector<D, N>,
    pub(crate) level: usize,

    /// Storage position of the first child. Children are generated breadth-first, so the `2^D`
    /// children of a node are always stored contiguously from here.
    pub(crate) first_child: Option<usize>,
}

impl<const D: usize, N: OrthtreeNum> Node<D, N> {
    /// A pending node with no children yet.
    pub(crate) fn new(origin: Vector<D, N>, extent: Vector<D, N>, level: usize) -> Self {
        let center = Vector::from_fn(|axis| origin[axis] + extent[axis] / N::two());
        Self {
            origin,
            extent,
            center,
            level,
            first_child: None,
        }
    }

    /// The child of this node selected by `child_index`.
    ///
    /// Bit `d` of `child_index` picks the upper half of axis `d` when set and the lower half when
    /// clear.
    pub(crate) fn child(&self, child_index: usize) -> Self {
        let half_extent = self.extent / N::two();
        let origin = Vector::from_fn(|axis| {
            if child_index & (1 << axis) != 0 {
                self.origin[axis] + half_extent[axis]
            } else {
                self.origin[axis]
            }
        });
        Self::new(origin, half_extent, self.level + 1)
    }

    /// Lower corner of the region, inclusive.
    pub fn origin(&self) -> &Vector<D, N> {
        &self.origin
    }

    /// Size of the region along each axis.
    pub fn extent(&self) -> &Vector<D, N> {
        &self.extent
    }

    /// Midpoint of the region, `origin + extent / 2`.
    pub fn center(&self) -> &Vector<D, N> {
        &self.center
    }

    /// Upper corner of the region, exclusive.
    pub fn max(&self) -> Vector<D, N> {
        Vector::from_fn(|axis| self.origin[axis] + self.extent[axis])
    }

    /// Depth of this node, where the root is level 0.
    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns `true` if this node was not subdivided.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.first_child.is_none()
    }

    /// Returns `true` if this node was subdivided into `2^D` children.
    #[inline]
    pub fn is_parent(&self) -> bool {
        !self.is_leaf()
    }

    /// Storage positions of this node's children, in child-index order. Empty for a leaf.
    pub fn children(&self) -> Range<usize> {
        match self.first_child {
            Some(first) => first..first + Dimensions::<D>::NUM_CHILDREN,
            None => 0..0,
        }
    }

    /// Returns `true` if `point` lies inside this node's half-open region.
    pub fn contains_point(&self, point: &Vector<D, N>) -> bool {
        (0..D).all(|axis| {
            point[axis] >= self.origin[axis] && point[axis] < self.origin[axis] + self.extent[axis]
        })
    }
}
