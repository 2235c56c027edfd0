#![doc = include_str!("../README.md")]

mod error;
pub mod orthtree;
mod r#type;
mod vector;

pub use error::{OrthtreeError, Result};
pub use orthtree::{Node, Orthtree, OrthtreeBuilder, OrthtreeIndex};
pub use r#type::OrthtreeNum;
pub use vector::Vector;
