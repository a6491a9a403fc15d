//! Contiguous element storage with an attached shape header.
//!
//! [`ShapedBuffer`] is the storage behind every [`Vector`](crate::vector::Vector)
//! and [`Matrix`](crate::matrix::Matrix). It owns a flat `Vec<T>` in row-major
//! order together with the [`Shape`] describing it, and guarantees that the
//! element count always equals `shape.numel()`.
//!
//! Allocation never aborts on failure: requests that overflow or that the
//! allocator refuses come back as [`CoreError::AllocationFailure`].

mod elementwise;

pub use elementwise::Elementwise;

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::shape::Shape;

/// A flat element buffer and the shape that describes it.
///
/// The buffer owns its data; cloning performs a deep copy. Dropping the
/// buffer (or calling [`deallocate`](Self::deallocate)) releases it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(
        try_from = "BufferParts<T>",
        bound(
            serialize = "T: serde::Serialize",
            deserialize = "T: serde::Deserialize<'de>"
        )
    )
)]
pub struct ShapedBuffer<T: Scalar> {
    shape: Shape,
    data: Vec<T>,
}

impl<T: Scalar> ShapedBuffer<T> {
    // ------------------------------------------------------------------
    // Allocation
    // ------------------------------------------------------------------

    /// Allocate a zero-filled buffer sized for `shape`.
    ///
    /// ```
    /// # use venus_core::buffer::ShapedBuffer;
    /// # use venus_core::Shape;
    /// let buf = ShapedBuffer::<f32>::allocate(Shape::matrix(2, 3)).unwrap();
    /// assert_eq!(buf.numel(), 6);
    /// assert!(buf.iter().all(|&x| x == 0.0));
    /// ```
    pub fn allocate(shape: Shape) -> Result<Self> {
        let numel = shape
            .checked_numel()
            .ok_or_else(|| CoreError::allocation_failure(usize::MAX))?;
        let mut data = Vec::new();
        data.try_reserve_exact(numel)
            .map_err(|_| CoreError::allocation_failure(numel))?;
        data.resize(numel, T::zero());
        tracing::trace!(%shape, numel, "allocated shaped buffer");
        Ok(Self { shape, data })
    }

    /// Wrap caller-filled data in a buffer of the given shape.
    ///
    /// Returns an error if `data.len()` does not equal `shape.numel()`.
    pub fn from_vec(shape: Shape, data: Vec<T>) -> Result<Self> {
        if shape.checked_numel() != Some(data.len()) {
            return Err(CoreError::shape_mismatch(
                "from_vec",
                shape,
                Shape::vector(data.len()),
            ));
        }
        Ok(Self { shape, data })
    }

    /// A buffer with no shape and no elements.
    ///
    /// Operations that write into an unshaped destination shape it to match
    /// their first source.
    pub const fn unshaped() -> Self {
        Self {
            shape: Shape::Empty,
            data: Vec::new(),
        }
    }

    /// Change the shape, preserving elements up to the overlap of the old and
    /// new element counts. New elements are zero.
    ///
    /// On error the buffer is left untouched.
    pub fn resize(&mut self, new_shape: Shape) -> Result<()> {
        let numel = new_shape
            .checked_numel()
            .ok_or_else(|| CoreError::allocation_failure(usize::MAX))?;
        if numel > self.data.len() {
            self.data
                .try_reserve_exact(numel - self.data.len())
                .map_err(|_| CoreError::allocation_failure(numel))?;
        }
        self.data.resize(numel, T::zero());
        self.data.shrink_to_fit();
        tracing::trace!(from = %self.shape, to = %new_shape, "resized shaped buffer");
        self.shape = new_shape;
        Ok(())
    }

    /// Release the buffer's storage.
    pub fn deallocate(self) {
        tracing::trace!(shape = %self.shape, "deallocated shaped buffer");
        drop(self);
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The shape header.
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// The number of stored elements.
    #[inline]
    pub fn numel(&self) -> usize {
        self.data.len()
    }

    /// Whether the buffer has never been shaped.
    #[inline]
    pub fn is_unshaped(&self) -> bool {
        self.shape.is_empty()
    }

    /// A flat slice of all elements in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// A mutable flat slice of all elements in storage order.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Consume the buffer and return the underlying `Vec<T>`.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Iterate over all elements in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    /// Iterate mutably over all elements in storage order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.data.iter_mut()
    }

    // ------------------------------------------------------------------
    // Destination formatting and element-wise kernels
    // ------------------------------------------------------------------

    /// Make `self` a valid destination of shape `shape`.
    ///
    /// An unshaped buffer is allocated to `shape`; a shaped buffer must
    /// already match it.
    pub(crate) fn format_like(&mut self, op: &'static str, shape: Shape) -> Result<()> {
        if self.shape.is_empty() {
            if !shape.is_empty() {
                *self = Self::allocate(shape)?;
                tracing::trace!(op, %shape, "formatted unshaped destination");
            }
            return Ok(());
        }
        if self.shape != shape {
            return Err(CoreError::shape_mismatch(op, shape, self.shape));
        }
        Ok(())
    }

    /// Write `f(src[i])` into `self[i]` for every element.
    pub(crate) fn map_into<F>(&mut self, op: &'static str, src: &Self, f: F) -> Result<()>
    where
        F: Fn(T) -> T,
    {
        self.format_like(op, src.shape)?;
        for (d, &s) in self.data.iter_mut().zip(src.data.iter()) {
            *d = f(s);
        }
        Ok(())
    }

    /// Write `f(a[i], b[i])` into `self[i]` for every element.
    pub(crate) fn zip_into<F>(&mut self, op: &'static str, a: &Self, b: &Self, f: F) -> Result<()>
    where
        F: Fn(T, T) -> T,
    {
        if a.shape != b.shape {
            return Err(CoreError::shape_mismatch(op, a.shape, b.shape));
        }
        self.format_like(op, a.shape)?;
        for ((d, &x), &y) in self.data.iter_mut().zip(a.data.iter()).zip(b.data.iter()) {
            *d = f(x, y);
        }
        Ok(())
    }

    /// Replace `self[i]` with `f(self[i], rhs[i])` for every element.
    pub(crate) fn zip_assign<F>(&mut self, op: &'static str, rhs: &Self, f: F) -> Result<()>
    where
        F: Fn(T, T) -> T,
    {
        if self.shape != rhs.shape {
            return Err(CoreError::shape_mismatch(op, self.shape, rhs.shape));
        }
        for (d, &y) in self.data.iter_mut().zip(rhs.data.iter()) {
            *d = f(*d, y);
        }
        Ok(())
    }

    /// Apply a function to every element in place.
    pub fn apply<F>(&mut self, f: F)
    where
        F: Fn(T) -> T,
    {
        for x in &mut self.data {
            *x = f(*x);
        }
    }
}

impl<T: Scalar> Default for ShapedBuffer<T> {
    fn default() -> Self {
        Self::unshaped()
    }
}

impl<T: Scalar> From<Vec<T>> for ShapedBuffer<T> {
    /// Wrap `data` as a vector-shaped buffer.
    fn from(data: Vec<T>) -> Self {
        Self {
            shape: Shape::vector(data.len()),
            data,
        }
    }
}

/// Wire form of a [`ShapedBuffer`], validated on deserialization.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct BufferParts<T> {
    shape: Shape,
    data: Vec<T>,
}

#[cfg(feature = "serde")]
impl<T: Scalar> TryFrom<BufferParts<T>> for ShapedBuffer<T> {
    type Error = CoreError;

    fn try_from(parts: BufferParts<T>) -> Result<Self> {
        Self::from_vec(parts.shape, parts.data)
    }
}
