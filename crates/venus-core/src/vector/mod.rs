//! Rank-1 shaped buffers.
//!
//! A [`Vector`] is a mathematical vector (a point or direction, a color),
//! not a growable container. It carries the shared element-wise operations
//! through [`Elementwise`] plus the vector-only products (dot, cross and
//! element-wise product).

mod ops;

use core::ops::{Index, IndexMut};

use crate::Scalar;
use crate::buffer::{Elementwise, ShapedBuffer};
use crate::error::{CoreError, Result};
use crate::shape::Shape;

/// A rank-1 vector of `T`.
///
/// The shape is always `Shape::Vector { len }`, or `Shape::Empty` for a
/// destination that has not been written yet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "ShapedBuffer<T>",
        into = "ShapedBuffer<T>",
        bound(
            serialize = "T: serde::Serialize",
            deserialize = "T: serde::Deserialize<'de>"
        )
    )
)]
pub struct Vector<T: Scalar> {
    pub(crate) buf: ShapedBuffer<T>,
}

impl<T: Scalar> Vector<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Allocate a zero-filled vector of `len` elements.
    pub fn zeros(len: usize) -> Result<Self> {
        Ok(Self {
            buf: ShapedBuffer::allocate(Shape::vector(len))?,
        })
    }

    /// Take ownership of `data` as a vector.
    pub fn from_vec(data: Vec<T>) -> Self {
        Self {
            buf: ShapedBuffer::from(data),
        }
    }

    /// Copy `data` into a new vector.
    pub fn from_slice(data: &[T]) -> Self {
        Self::from_vec(data.to_vec())
    }

    /// An unshaped vector, for use as a destination.
    pub const fn unshaped() -> Self {
        Self {
            buf: ShapedBuffer::unshaped(),
        }
    }

    /// Grow or shrink to `new_len`, keeping the leading elements.
    ///
    /// ```
    /// # use venus_core::vector;
    /// let mut v = vector![1, 2, 3, 4];
    /// v.resize(6).unwrap();
    /// assert_eq!(&v.as_slice()[..4], &[1, 2, 3, 4]);
    /// ```
    pub fn resize(&mut self, new_len: usize) -> Result<()> {
        self.buf.resize(Shape::vector(new_len))
    }

    /// Release the vector's storage.
    pub fn deallocate(self) {
        self.buf.deallocate();
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The shape header.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.buf.shape()
    }

    /// The number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.buf.numel()
    }

    /// Whether the vector has no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buf.numel() == 0
    }

    /// The element at `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        self.buf
            .as_slice()
            .get(index)
            .copied()
            .ok_or_else(|| self.out_of_bounds(index))
    }

    /// Set the element at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        let shape = self.shape();
        match self.buf.as_mut_slice().get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(CoreError::IndexOutOfBounds {
                index: vec![index],
                shape,
            }),
        }
    }

    /// The elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// The elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    /// Consume the vector and return its elements.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.buf.into_vec()
    }

    /// Iterate over the elements in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    fn out_of_bounds(&self, index: usize) -> CoreError {
        CoreError::IndexOutOfBounds {
            index: vec![index],
            shape: self.shape(),
        }
    }
}

impl<T: Scalar> Elementwise for Vector<T> {
    type Elem = T;

    fn buffer(&self) -> &ShapedBuffer<T> {
        &self.buf
    }

    fn buffer_mut(&mut self) -> &mut ShapedBuffer<T> {
        &mut self.buf
    }
}

impl<T: Scalar> Default for Vector<T> {
    fn default() -> Self {
        Self::unshaped()
    }
}

impl<T: Scalar> Index<usize> for Vector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.buf.as_slice()[index]
    }
}

impl<T: Scalar> IndexMut<usize> for Vector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.buf.as_mut_slice()[index]
    }
}

impl<T: Scalar> From<Vec<T>> for Vector<T> {
    fn from(data: Vec<T>) -> Self {
        Self::from_vec(data)
    }
}

impl<T: Scalar> From<Vector<T>> for ShapedBuffer<T> {
    fn from(v: Vector<T>) -> Self {
        v.buf
    }
}

impl<T: Scalar> TryFrom<ShapedBuffer<T>> for Vector<T> {
    type Error = CoreError;

    /// Accepts vector-shaped or unshaped buffers.
    fn try_from(buf: ShapedBuffer<T>) -> Result<Self> {
        match buf.shape() {
            Shape::Vector { .. } | Shape::Empty => Ok(Self { buf }),
            other => Err(CoreError::shape_mismatch(
                "into_vector",
                Shape::vector(buf.numel()),
                other,
            )),
        }
    }
}
