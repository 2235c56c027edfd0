use std::fmt::{Debug, Display};

use num_traits::{Bounded, Num, NumCast, ToPrimitive};

/// A trait for types that can be used as the scalar coordinate of an orthtree.
///
/// This trait is sealed and cannot be implemented for external types. Only the primitive integer
/// and floating point types are accepted, so a tree over a non-numeric scalar fails to compile
/// rather than failing at runtime.
pub trait OrthtreeNum:
    private::Sealed
    + Num
    + NumCast
    + ToPrimitive
    + PartialOrd
    + Copy
    + Default
    + Debug
    + Display
    + Send
    + Sync
    + Bounded
    + 'static
{
    /// The number two in this scalar type, used to halve extents.
    fn two() -> Self {
        Self::one() + Self::one()
    }

    /// `upper - lower`, or `None` if the difference is not representable in this type.
    fn checked_span(lower: Self, upper: Self) -> Option<Self>;
}

macro_rules! impl_int {
    ($($t:ty),*) => {
        $(
            impl OrthtreeNum for $t {
                fn checked_span(lower: Self, upper: Self) -> Option<Self> {
                    upper.checked_sub(lower)
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($t:ty),*) => {
        $(
            impl OrthtreeNum for $t {
                fn checked_span(lower: Self, upper: Self) -> Option<Self> {
                    let span = upper - lower;
                    span.is_finite().then_some(span)
                }
            }
        )*
    };
}

impl_int!(i8, u8, i16, u16, i32, u32, i64, u64);
impl_float!(f32, f64);

// https://rust-lang.github.io/api-guidelines/future-proofing.html#sealed-traits-protect-against-downstream-implementations-c-sealed
mod private {
    pub trait Sealed {}

    impl Sealed for i8 {}
    impl Sealed for u8 {}
    impl Sealed for i16 {}
    impl Sealed for u16 {}
    impl Sealed for i32 {}
    impl Sealed for u32 {}
    impl Sealed for i64 {}
    impl Sealed for u64 {}
    impl Sealed for f32 {}
    impl Sealed for f64 {}
}

/// Compile-time guard against zero-dimensional trees.
///
/// Referencing [`Dimensions::ASSERT`] from a generic item forces the assertion to be evaluated
/// when that item is monomorphized, so `D = 0` is rejected during the build.
pub(crate) struct Dimensions<const D: usize>;

impl<const D: usize> Dimensions<D> {
    pub(crate) const ASSERT: () = assert!(D > 0, "Cannot have a 0-dimensional orthtree.");

    /// Number of children of a subdivided node, `2^D`.
    pub(crate) const NUM_CHILDREN: usize = 1 << D;
}
