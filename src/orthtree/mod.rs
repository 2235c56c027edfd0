//! An implementation of a breadth-first generated, flat-storage orthtree.

#![warn(missing_docs)]

mod builder;
mod index;
mod node;
mod r#trait;
pub mod traversal;

pub use builder::{OrthtreeBuilder, DEFAULT_MAX_DEPTH};
pub use index::{Orthtree, OrthtreeRef};
pub use node::Node;
pub use r#trait::OrthtreeIndex;
