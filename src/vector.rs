//! A fixed-length coordinate tuple used for both points and extents.

use std::array;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

use num_traits::NumCast;

use crate::error::{OrthtreeError, Result};
use crate::r#type::{Dimensions, OrthtreeNum};

/// A point or an extent in `D`-dimensional space with scalar type `N`.
///
/// Arithmetic is only defined against a scalar, which is applied to every component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector<const D: usize, N: OrthtreeNum> {
    coords: [N; D],
}

impl<const D: usize, N: OrthtreeNum> Vector<D, N> {
    /// Create a vector from its components.
    pub fn new(coords: [N; D]) -> Self {
        let () = Dimensions::<D>::ASSERT;
        Self { coords }
    }

    /// Create a vector with every component set to `value`.
    pub fn splat(value: N) -> Self {
        Self::new([value; D])
    }

    /// Create a vector by evaluating `f` once per axis.
    pub fn from_fn(f: impl FnMut(usize) -> N) -> Self {
        Self::new(array::from_fn(f))
    }

    /// The number of axes, `D`.
    #[inline]
    pub const fn dimensions(&self) -> usize {
        D
    }

    pub fn as_array(&self) -> &[N; D] {
        &self.coords
    }

    pub fn into_array(self) -> [N; D] {
        self.coords
    }

    pub fn iter(&self) -> impl Iterator<Item = &N> {
        self.coords.iter()
    }

    /// The component on `axis`, or an error if `axis >= D`.
    pub fn get(&self, axis: usize) -> Result<N> {
        self.coords
            .get(axis)
            .copied()
            .ok_or(OrthtreeError::AxisOutOfRange {
                axis,
                dimensions: D,
            })
    }

    /// A mutable reference to the component on `axis`, or an error if `axis >= D`.
    pub fn get_mut(&mut self, axis: usize) -> Result<&mut N> {
        self.coords
            .get_mut(axis)
            .ok_or(OrthtreeError::AxisOutOfRange {
                axis,
                dimensions: D,
            })
    }

    /// Overwrite the component on `axis`, or return an error if `axis >= D`.
    pub fn set(&mut self, axis: usize, value: N) -> Result<()> {
        *self.get_mut(axis)? = value;
        Ok(())
    }

    /// Euclidean distance to `other`.
    ///
    /// The sum of squares is accumulated in `f64`, so unsigned scalars never underflow. For integer
    /// scalars the result is truncated, and it saturates at `N::max_value()` if it cannot be
    /// represented.
    pub fn distance(&self, other: &Self) -> N {
        let dist = self.squared_distance_f64(other).sqrt();
        <N as NumCast>::from(dist).unwrap_or_else(N::max_value)
    }

    fn squared_distance_f64(&self, other: &Self) -> f64 {
        self.coords
            .iter()
            .zip(other.coords.iter())
            .map(|(a, b)| {
                let diff = a.to_f64().unwrap_or(f64::NAN) - b.to_f64().unwrap_or(f64::NAN);
                diff * diff
            })
            .sum()
    }
}

impl<const D: usize, N: OrthtreeNum> Default for Vector<D, N> {
    fn default() -> Self {
        Self::splat(N::zero())
    }
}

impl<const D: usize, N: OrthtreeNum> From<[N; D]> for Vector<D, N> {
    fn from(coords: [N; D]) -> Self {
        Self::new(coords)
    }
}

impl<const D: usize, N: OrthtreeNum> From<Vector<D, N>> for [N; D] {
    fn from(value: Vector<D, N>) -> Self {
        value.coords
    }
}

impl<const D: usize, N: OrthtreeNum> Index<usize> for Vector<D, N> {
    type Output = N;

    /// Panics if `axis >= D`. Use [`Vector::get`] for a checked lookup.
    fn index(&self, axis: usize) -> &Self::Output {
        &self.coords[axis]
    }
}

impl<const D: usize, N: OrthtreeNum> IndexMut<usize> for Vector<D, N> {
    fn index_mut(&mut self, axis: usize) -> &mut Self::Output {
        &mut self.coords[axis]
    }
}

macro_rules! impl_scalar_op {
    ($op:ident, $op_fn:ident, $assign:ident, $assign_fn:ident, $sym:tt) => {
        impl<const D: usize, N: OrthtreeNum> $assign<N> for Vector<D, N> {
            fn $assign_fn(&mut self, rhs: N) {
                for c in self.coords.iter_mut() {
                    *c = *c $sym rhs;
                }
            }
        }

        impl<const D: usize, N: OrthtreeNum> $op<N> for Vector<D, N> {
            type Output = Self;

            fn $op_fn(mut self, rhs: N) -> Self::Output {
                self.$assign_fn(rhs);
                self
            }
        }
    };
}

impl_scalar_op!(Add, add, AddAssign, add_assign, +);
impl_scalar_op!(Sub, sub, SubAssign, sub_assign, -);
impl_scalar_op!(Mul, mul, MulAssign, mul_assign, *);
impl_scalar_op!(Div, div, DivAssign, div_assign, /);
