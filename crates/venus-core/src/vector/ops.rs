//! Vector-only products: dot, cross and element-wise (Hadamard) product.

use crate::Scalar;
use crate::buffer::Elementwise;
use crate::error::{CoreError, Result};
use crate::shape::Shape;

use super::Vector;

impl<T: Scalar> Vector<T> {
    /// Inner product `sum(a_i * b_i)`.
    ///
    /// ```
    /// # use venus_core::vector;
    /// let a = vector![1.0_f32, 2.0, 3.0];
    /// let b = vector![4.0_f32, 5.0, 6.0];
    /// assert_eq!(a.dot(&b).unwrap(), 32.0);
    /// ```
    pub fn dot(&self, other: &Self) -> Result<T> {
        check_same_shape("dot", self, other)?;
        Ok(self
            .as_slice()
            .iter()
            .zip(other.as_slice().iter())
            .fold(T::zero(), |acc, (&a, &b)| acc.wrapping_add(a.wrapping_mul(b))))
    }

    /// `dot(self, self)`.
    pub fn norm_squared(&self) -> T {
        self.as_slice()
            .iter()
            .fold(T::zero(), |acc, &a| acc.wrapping_add(a.wrapping_mul(a)))
    }

    /// Element-wise product: `self[i] = a[i] * b[i]`.
    pub fn multiply(&mut self, a: &Self, b: &Self) -> Result<()> {
        self.buffer_mut().zip_into("multiply", a.buffer(), b.buffer(), Scalar::wrapping_mul)
    }

    /// Element-wise product in place: `self[i] *= rhs[i]`.
    pub fn multiply_assign(&mut self, rhs: &Self) -> Result<()> {
        self.buffer_mut().zip_assign("multiply", rhs.buffer(), Scalar::wrapping_mul)
    }

    // ------------------------------------------------------------------
    // Cross product (length 3 only)
    // ------------------------------------------------------------------

    /// `self = a × b`.
    ///
    /// Both operands must have exactly three elements.
    ///
    /// ```
    /// # use venus_core::prelude::*;
    /// let x = vector![1, 0, 0];
    /// let y = vector![0, 1, 0];
    /// let mut z = Vector::unshaped();
    /// z.cross(&x, &y).unwrap();
    /// assert_eq!(z.as_slice(), &[0, 0, 1]);
    /// ```
    pub fn cross(&mut self, a: &Self, b: &Self) -> Result<()> {
        let product = cross3(components("cross", a)?, components("cross", b)?);
        self.buf.format_like("cross", Shape::vector(3))?;
        self.as_mut_slice().copy_from_slice(&product);
        Ok(())
    }

    /// `self = self × rhs`.
    pub fn cross_assign(&mut self, rhs: &Self) -> Result<()> {
        let product = cross3(components("cross", self)?, components("cross", rhs)?);
        self.as_mut_slice().copy_from_slice(&product);
        Ok(())
    }

    /// `self = lhs × self`.
    pub fn cross_assign_rhs(&mut self, lhs: &Self) -> Result<()> {
        let product = cross3(components("cross", lhs)?, components("cross", self)?);
        self.as_mut_slice().copy_from_slice(&product);
        Ok(())
    }
}

/// All three components, read before any destination is written.
fn components<T: Scalar>(op: &'static str, v: &Vector<T>) -> Result<[T; 3]> {
    match *v.as_slice() {
        [x, y, z] => Ok([x, y, z]),
        _ => Err(CoreError::unsupported(
            op,
            "cross product is defined only for length-3 vectors",
        )),
    }
}

fn cross3<T: Scalar>(a: [T; 3], b: [T; 3]) -> [T; 3] {
    let term = |i: usize, j: usize| {
        a[i].wrapping_mul(b[j]).wrapping_sub(a[j].wrapping_mul(b[i]))
    };
    [term(1, 2), term(2, 0), term(0, 1)]
}

/// Same rule as the element-wise kernels: an unshaped vector only pairs
/// with another unshaped vector, never with a zero-length one.
fn check_same_shape<T: Scalar>(op: &'static str, a: &Vector<T>, b: &Vector<T>) -> Result<()> {
    if a.shape() != b.shape() {
        return Err(CoreError::shape_mismatch(op, a.shape(), b.shape()));
    }
    Ok(())
}
