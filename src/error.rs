use thiserror::Error;

/// Enum with all errors in this crate.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrthtreeError {
    /// A node index past the end of the tree's storage.
    #[error("index {index} is out of range. Tree size is {size}")]
    IndexOutOfRange { index: usize, size: usize },

    /// An axis past the dimensionality of a vector.
    #[error("axis {axis} is out of range for a {dimensions}-dimensional vector")]
    AxisOutOfRange { axis: usize, dimensions: usize },

    /// Bounds whose difference on some axis does not fit in the scalar type.
    #[error("bounds on axis {axis} overflow the scalar type: {upper} - {lower} is not representable")]
    BoundsOverflow {
        axis: usize,
        lower: String,
        upper: String,
    },

    /// A tree level deeper than the generated tree.
    #[error("level {level} is out of range. Tree has {num_levels} levels")]
    LevelOutOfRange { level: usize, num_levels: usize },

    /// Lower bound not strictly below the upper bound on some axis.
    #[error("invalid bounds on axis {axis}: lower bound {lower} is not below upper bound {upper}")]
    InvalidBounds {
        axis: usize,
        lower: String,
        upper: String,
    },
}

pub type Result<T> = std::result::Result<T, OrthtreeError>;
