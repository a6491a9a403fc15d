//! Declared dimensions of a shaped buffer.

use core::fmt;

/// The shape header stored alongside every element buffer.
///
/// A buffer is either rank-1 (`Vector`), rank-2 (`Matrix`), or not yet
/// shaped (`Empty`). An `Empty` buffer holds no elements; operations that
/// write into one shape it to match their source first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Shape {
    /// No shape assigned yet.
    #[default]
    Empty,
    /// A vector of `len` elements.
    Vector { len: usize },
    /// A row-major matrix of `rows * cols` elements.
    Matrix { rows: usize, cols: usize },
}

impl Shape {
    /// Shorthand for [`Shape::Vector`].
    #[inline]
    pub const fn vector(len: usize) -> Self {
        Self::Vector { len }
    }

    /// Shorthand for [`Shape::Matrix`].
    #[inline]
    pub const fn matrix(rows: usize, cols: usize) -> Self {
        Self::Matrix { rows, cols }
    }

    /// Number of elements the shape describes, or `None` on overflow.
    pub const fn checked_numel(&self) -> Option<usize> {
        match *self {
            Self::Empty => Some(0),
            Self::Vector { len } => Some(len),
            Self::Matrix { rows, cols } => rows.checked_mul(cols),
        }
    }

    /// Number of elements the shape describes.
    ///
    /// Saturates on overflow; such a shape can never be allocated.
    #[inline]
    pub const fn numel(&self) -> usize {
        match self.checked_numel() {
            Some(n) => n,
            None => usize::MAX,
        }
    }

    /// Whether no shape has been assigned.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// `(rows, cols)` for matrix shapes.
    #[inline]
    pub const fn dims(&self) -> Option<(usize, usize)> {
        match *self {
            Self::Matrix { rows, cols } => Some((rows, cols)),
            _ => None,
        }
    }

    /// The shape with rows and columns swapped. Other shapes are unchanged.
    #[inline]
    #[must_use]
    pub const fn transposed(&self) -> Self {
        match *self {
            Self::Matrix { rows, cols } => Self::Matrix {
                rows: cols,
                cols: rows,
            },
            other => other,
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "<empty>"),
            Self::Vector { len } => write!(f, "[{len}]"),
            Self::Matrix { rows, cols } => write!(f, "[{rows}, {cols}]"),
        }
    }
}
