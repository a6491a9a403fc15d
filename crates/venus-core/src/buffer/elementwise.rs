//! Element-wise operations shared by vectors and matrices.
//!
//! A matrix is a shaped buffer with a two-component shape, so copy, add,
//! subtract, negate and scale have one implementation for both. Types opt in
//! by exposing their [`ShapedBuffer`].
//!
//! Every binary operation takes the destination as `self` and requires the
//! sources to have identical shapes. An unshaped destination is shaped to
//! match its first source; a shaped destination must already match.
//! Integer elements wrap on overflow (see [`Scalar`]).

use crate::error::Result;
use crate::{Scalar, Signed};

use super::ShapedBuffer;

/// Shape-checked element-wise arithmetic over a [`ShapedBuffer`].
pub trait Elementwise: Sized {
    /// The element type.
    type Elem: Scalar;

    /// The underlying storage.
    fn buffer(&self) -> &ShapedBuffer<Self::Elem>;

    /// The underlying storage, mutably.
    fn buffer_mut(&mut self) -> &mut ShapedBuffer<Self::Elem>;

    /// `self = src`.
    fn copy_from(&mut self, src: &Self) -> Result<()> {
        self.buffer_mut().map_into("copy", src.buffer(), |x| x)
    }

    /// `self = a + b`.
    ///
    /// ```
    /// # use venus_core::prelude::*;
    /// let a = vector![1, 2, 3];
    /// let b = vector![10, 20, 30];
    /// let mut c = Vector::unshaped();
    /// c.add(&a, &b).unwrap();
    /// assert_eq!(c.as_slice(), &[11, 22, 33]);
    /// ```
    fn add(&mut self, a: &Self, b: &Self) -> Result<()> {
        self.buffer_mut().zip_into("add", a.buffer(), b.buffer(), Scalar::wrapping_add)
    }

    /// `self = a - b`.
    fn subtract(&mut self, a: &Self, b: &Self) -> Result<()> {
        self.buffer_mut().zip_into("subtract", a.buffer(), b.buffer(), Scalar::wrapping_sub)
    }

    /// `self = src * scalar`.
    fn scale(&mut self, src: &Self, scalar: Self::Elem) -> Result<()> {
        self.buffer_mut().map_into("scale", src.buffer(), |x| x.wrapping_mul(scalar))
    }

    /// `self = -src`.
    fn negate(&mut self, src: &Self) -> Result<()>
    where
        Self::Elem: Signed,
    {
        self.buffer_mut().map_into("negate", src.buffer(), Signed::wrapping_neg)
    }

    // ------------------------------------------------------------------
    // In-place forms (destination aliases the first source)
    // ------------------------------------------------------------------

    /// `self = self + rhs`.
    fn add_assign(&mut self, rhs: &Self) -> Result<()> {
        self.buffer_mut().zip_assign("add", rhs.buffer(), Scalar::wrapping_add)
    }

    /// `self = self - rhs`.
    fn sub_assign(&mut self, rhs: &Self) -> Result<()> {
        self.buffer_mut().zip_assign("subtract", rhs.buffer(), Scalar::wrapping_sub)
    }

    /// `self = self * scalar`.
    fn scale_in_place(&mut self, scalar: Self::Elem) {
        self.buffer_mut().apply(|x| x.wrapping_mul(scalar));
    }

    /// `self = -self`.
    fn negate_in_place(&mut self)
    where
        Self::Elem: Signed,
    {
        self.buffer_mut().apply(Signed::wrapping_neg);
    }

    /// Set every element to zero.
    fn fill_zero(&mut self) {
        self.buffer_mut().apply(|_| <Self::Elem as Scalar>::zero());
    }
}

impl<T: Scalar> Elementwise for ShapedBuffer<T> {
    type Elem = T;

    fn buffer(&self) -> &ShapedBuffer<T> {
        self
    }

    fn buffer_mut(&mut self) -> &mut ShapedBuffer<T> {
        self
    }
}
