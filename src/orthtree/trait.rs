use crate::error::{OrthtreeError, Result};
use crate::orthtree::traversal::{DepthFirst, NodeRef};
use crate::orthtree::Node;
use crate::r#type::OrthtreeNum;

/// A trait for accessing nodes out of a generated orthtree.
pub trait OrthtreeIndex<const D: usize, N: OrthtreeNum>: Sized {
    /// All nodes of the tree in breadth-first order, internal nodes included.
    fn nodes(&self) -> &[Node<D, N>];

    /// The end offsets into [OrthtreeIndex::nodes] of each level. The nodes of level `l` are
    /// located at `nodes()[level_bounds()[l - 1]..level_bounds()[l]]`, with an implicit initial 0.
    fn level_bounds(&self) -> &[usize];

    /// The total number of nodes, leaf and internal.
    fn size(&self) -> usize {
        self.nodes().len()
    }

    /// Returns `true` if nothing has been generated.
    fn is_empty(&self) -> bool {
        self.nodes().is_empty()
    }

    /// The node stored at `index`, or an error if `index >= size()`.
    fn at(&self, index: usize) -> Result<&Node<D, N>> {
        let nodes = self.nodes();
        nodes.get(index).ok_or(OrthtreeError::IndexOutOfRange {
            index,
            size: nodes.len(),
        })
    }

    /// The root node, which always covers the full generation bounds.
    fn root(&self) -> Option<&Node<D, N>> {
        self.nodes().first()
    }

    /// Iterate over every node in storage (breadth-first) order. Each call starts again at the
    /// root.
    fn iter(&self) -> std::slice::Iter<'_, Node<D, N>> {
        self.nodes().iter()
    }

    /// Iterate over the leaf nodes in storage order.
    fn leaves(&self) -> impl Iterator<Item = &Node<D, N>> {
        self.iter().filter(|node| node.is_leaf())
    }

    /// The number of levels (height) of the tree, or 0 when empty.
    fn num_levels(&self) -> usize {
        self.level_bounds().len()
    }

    /// The nodes on `level`, where the root is level 0.
    fn nodes_at_level(&self, level: usize) -> Result<&[Node<D, N>]> {
        let level_bounds = self.level_bounds();
        if level >= level_bounds.len() {
            return Err(OrthtreeError::LevelOutOfRange {
                level,
                num_levels: level_bounds.len(),
            });
        }
        let start = if level == 0 {
            0
        } else {
            level_bounds[level - 1]
        };
        Ok(&self.nodes()[start..level_bounds[level]])
    }

    /// A traversal handle onto the root node.
    fn root_ref(&self) -> Option<NodeRef<'_, D, N, Self>> {
        (!self.is_empty()).then(|| NodeRef::new(self, 0))
    }

    /// Iterate over `(index, node)` pairs in depth-first pre-order, children in child-index order.
    fn depth_first(&self) -> DepthFirst<'_, D, N, Self> {
        DepthFirst::new(self)
    }
}
