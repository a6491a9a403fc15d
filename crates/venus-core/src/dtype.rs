//! Numeric element traits for shaped buffers.
//!
//! ```text
//! Scalar          (every primitive integer and float)
//!   └── Signed    (i8..i64, isize, f32, f64)
//! ```
//!
//! Vector and matrix operations are generic over these traits, so the same
//! code serves `f32` transform matrices and `u8` color vectors.
//!
//! All element arithmetic goes through the methods below rather than the
//! operator traits. Integer types wrap modulo `2^bits` in every build
//! profile (a `u8` channel computes `200 + 100 = 44` and `10 - 20 = 246`);
//! floats use IEEE arithmetic. No element operation can panic.

use core::fmt;

// ---------------------------------------------------------------------------
// Scalar: the root trait for every element type
// ---------------------------------------------------------------------------

/// Base trait for all numeric types storable in a shaped buffer.
///
/// Does *not* require negation, so unsigned channel types such as `u8`
/// colors are first-class element types.
pub trait Scalar: Copy + fmt::Debug + fmt::Display + PartialEq + Send + Sync + 'static {
    /// The additive identity (`0`).
    fn zero() -> Self;

    /// The multiplicative identity (`1`).
    fn one() -> Self;

    /// `self + rhs`, wrapping on integer overflow.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// `self - rhs`, wrapping on integer overflow.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// `self * rhs`, wrapping on integer overflow.
    fn wrapping_mul(self, rhs: Self) -> Self;
}

// ---------------------------------------------------------------------------
// Signed
// ---------------------------------------------------------------------------

/// Element types with an additive inverse.
///
/// Required by `negate` and by the alternating-sign determinant expansion.
pub trait Signed: Scalar {
    /// `-self`, wrapping for the minimum integer value.
    fn wrapping_neg(self) -> Self;
}

// ===========================================================================
// Macro implementations
// ===========================================================================

macro_rules! impl_scalar_float {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0.0
            }
            #[inline]
            fn one() -> Self {
                1.0
            }
            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                self + rhs
            }
            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                self - rhs
            }
            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                self * rhs
            }
        }

        impl Signed for $ty {
            #[inline]
            fn wrapping_neg(self) -> Self {
                -self
            }
        }
    };
}

impl_scalar_float!(f32);
impl_scalar_float!(f64);

macro_rules! impl_scalar_int {
    ($ty:ty) => {
        impl Scalar for $ty {
            #[inline]
            fn zero() -> Self {
                0
            }
            #[inline]
            fn one() -> Self {
                1
            }
            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$ty>::wrapping_add(self, rhs)
            }
            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$ty>::wrapping_sub(self, rhs)
            }
            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$ty>::wrapping_mul(self, rhs)
            }
        }
    };
}

impl_scalar_int!(i8);
impl_scalar_int!(i16);
impl_scalar_int!(i32);
impl_scalar_int!(i64);
impl_scalar_int!(isize);
impl_scalar_int!(u8);
impl_scalar_int!(u16);
impl_scalar_int!(u32);
impl_scalar_int!(u64);
impl_scalar_int!(usize);

macro_rules! impl_signed {
    ($($ty:ty),*) => {
        $(
            impl Signed for $ty {
                #[inline]
                fn wrapping_neg(self) -> Self {
                    <$ty>::wrapping_neg(self)
                }
            }
        )*
    };
}

impl_signed!(i8, i16, i32, i64, isize);
