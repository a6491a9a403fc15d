//! Rank-2 shaped buffers in row-major order.
//!
//! [`Matrix`] shares copy/add/subtract/negate/scale with [`Vector`] through
//! [`Elementwise`]; transpose and product live in `ops`, the determinant in
//! `det`.

mod det;
mod ops;

use core::ops::{Index, IndexMut};

use crate::Scalar;
use crate::buffer::{Elementwise, ShapedBuffer};
use crate::error::{CoreError, Result};
use crate::shape::Shape;
use crate::vector::Vector;

/// A row-major matrix of `T`.
///
/// The shape is always `Shape::Matrix { rows, cols }`, or `Shape::Empty`
/// for a destination that has not been written yet (reported as 0×0).
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
pub struct Matrix<T: Scalar> {
    buf: ShapedBuffer<T>,
}

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Allocate a zero-filled `rows x cols` matrix.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self {
            buf: ShapedBuffer::allocate(Shape::matrix(rows, cols))?,
        })
    }

    /// Allocate the `n x n` identity matrix.
    ///
    /// ```
    /// # use venus_core::matrix::Matrix;
    /// let eye = Matrix::<f32>::identity(3).unwrap();
    /// assert_eq!(eye[(0, 0)], 1.0);
    /// assert_eq!(eye[(0, 1)], 0.0);
    /// ```
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Self::zeros(n, n)?;
        m.fill_identity()?;
        Ok(m)
    }

    /// Wrap row-major `data` as a `rows x cols` matrix.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<T>) -> Result<Self> {
        Ok(Self {
            buf: ShapedBuffer::from_vec(Shape::matrix(rows, cols), data)?,
        })
    }

    /// Build a matrix from equal-length rows.
    pub fn from_rows(rows: &[&[T]]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            if row.len() != cols {
                return Err(CoreError::shape_mismatch(
                    "from_rows",
                    Shape::vector(cols),
                    Shape::vector(row.len()),
                ));
            }
            data.extend_from_slice(row);
        }
        Self::from_vec(rows.len(), cols, data)
    }

    /// An unshaped matrix, for use as a destination.
    pub const fn unshaped() -> Self {
        Self {
            buf: ShapedBuffer::unshaped(),
        }
    }

    /// Reshape to `rows x cols`, keeping the leading elements in storage
    /// order. New elements are zero.
    pub fn resize(&mut self, rows: usize, cols: usize) -> Result<()> {
        self.buf.resize(Shape::matrix(rows, cols))
    }

    /// Release the matrix's storage.
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

    /// `(rows, cols)`; `(0, 0)` while unshaped.
    #[inline]
    pub fn dims(&self) -> (usize, usize) {
        self.shape().dims().unwrap_or((0, 0))
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.dims().0
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.dims().1
    }

    /// Total number of elements.
    #[inline]
    pub fn numel(&self) -> usize {
        self.buf.numel()
    }

    /// Whether `rows == cols`.
    #[inline]
    pub fn is_square(&self) -> bool {
        let (rows, cols) = self.dims();
        rows == cols
    }

    /// The element at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> Result<T> {
        let flat = self.flat_index(row, col)?;
        Ok(self.buf.as_slice()[flat])
    }

    /// Set the element at `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        let flat = self.flat_index(row, col)?;
        self.buf.as_mut_slice()[flat] = value;
        Ok(())
    }

    /// Row `row` copied into a vector.
    pub fn row(&self, row: usize) -> Result<Vector<T>> {
        let (rows, cols) = self.dims();
        if row >= rows {
            return Err(self.out_of_bounds(vec![row]));
        }
        let start = row * cols;
        Ok(Vector::from_slice(&self.buf.as_slice()[start..start + cols]))
    }

    /// Column `col` copied into a vector.
    pub fn column(&self, col: usize) -> Result<Vector<T>> {
        let (rows, cols) = self.dims();
        if col >= cols {
            return Err(self.out_of_bounds(vec![0, col]));
        }
        let data = self.buf.as_slice();
        Ok(Vector::from_vec(
            (0..rows).map(|r| data[r * cols + col]).collect(),
        ))
    }

    /// The elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// The elements in row-major order, mutably.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    /// Consume the matrix and return its row-major elements.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.buf.into_vec()
    }

    /// Iterate over the elements in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.buf.iter()
    }

    fn flat_index(&self, row: usize, col: usize) -> Result<usize> {
        let (rows, cols) = self.dims();
        if row >= rows || col >= cols {
            return Err(self.out_of_bounds(vec![row, col]));
        }
        Ok(row * cols + col)
    }

    fn out_of_bounds(&self, index: Vec<usize>) -> CoreError {
        CoreError::IndexOutOfBounds {
            index,
            shape: self.shape(),
        }
    }
}

impl<T: Scalar> Elementwise for Matrix<T> {
    type Elem = T;

    fn buffer(&self) -> &ShapedBuffer<T> {
        &self.buf
    }

    fn buffer_mut(&mut self) -> &mut ShapedBuffer<T> {
        &mut self.buf
    }
}

impl<T: Scalar> Default for Matrix<T> {
    fn default() -> Self {
        Self::unshaped()
    }
}

impl<T: Scalar> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        let (rows, cols) = self.dims();
        assert!(
            row < rows && col < cols,
            "index ({row}, {col}) out of bounds for shape {}",
            self.shape()
        );
        &self.buf.as_slice()[row * cols + col]
    }
}

impl<T: Scalar> IndexMut<(usize, usize)> for Matrix<T> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        let (rows, cols) = self.dims();
        assert!(
            row < rows && col < cols,
            "index ({row}, {col}) out of bounds for shape {}",
            self.shape()
        );
        &mut self.buf.as_mut_slice()[row * cols + col]
    }
}

impl<T: Scalar> From<Matrix<T>> for ShapedBuffer<T> {
    fn from(m: Matrix<T>) -> Self {
        m.buf
    }
}

impl<T: Scalar> TryFrom<ShapedBuffer<T>> for Matrix<T> {
    type Error = CoreError;

    /// Accepts matrix-shaped or unshaped buffers.
    fn try_from(buf: ShapedBuffer<T>) -> Result<Self> {
        match buf.shape() {
            Shape::Matrix { .. } | Shape::Empty => Ok(Self { buf }),
            other => Err(CoreError::shape_mismatch(
                "into_matrix",
                Shape::matrix(1, buf.numel()),
                other,
            )),
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_from_vec() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.shape(), Shape::matrix(2, 3));
        assert_eq!(m.rows(), 2);
        assert_eq!(m.cols(), 3);
        assert_eq!(m.get(1, 0).unwrap(), 4);
        assert_eq!(m[(0, 2)], 3);
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        assert!(Matrix::from_vec(2, 3, vec![1, 2, 3]).is_err());
    }

    #[test]
    fn test_from_rows() {
        let m = Matrix::from_rows(&[&[1, 2], &[3, 4], &[5, 6]]).unwrap();
        assert_eq!(m.dims(), (3, 2));
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let r = Matrix::from_rows(&[&[1, 2], &[3]]);
        assert!(matches!(r, Err(CoreError::ShapeMismatch { .. })));
    }

    #[test]
    fn test_identity() {
        let eye = Matrix::<f64>::identity(3).unwrap();
        for r in 0..3 {
            for c in 0..3 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert_eq!(eye[(r, c)], expected);
            }
        }
    }

    #[test]
    fn test_get_set_out_of_bounds() {
        let mut m = Matrix::<i32>::zeros(2, 2).unwrap();
        m.set(1, 1, 7).unwrap();
        assert_eq!(m.get(1, 1).unwrap(), 7);
        assert!(m.get(2, 0).is_err());
        assert!(m.set(0, 2, 1).is_err());
    }

    #[test]
    fn test_row_column() {
        let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
        assert_eq!(m.row(1).unwrap().as_slice(), &[4, 5, 6]);
        assert_eq!(m.column(0).unwrap().as_slice(), &[1, 4]);
        assert!(m.row(2).is_err());
        assert!(m.column(3).is_err());
    }

    #[test]
    fn test_unshaped_reports_zero_dims() {
        let m = Matrix::<f32>::unshaped();
        assert_eq!(m.dims(), (0, 0));
        assert_eq!(m.numel(), 0);
    }

    #[test]
    fn test_resize_keeps_storage_order() {
        let mut m = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
        m.resize(2, 3).unwrap();
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 0, 0]);
    }

    #[test]
    fn test_elementwise_shared_with_vectors() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = Matrix::from_vec(2, 2, vec![4.0, 3.0, 2.0, 1.0]).unwrap();
        let mut sum = Matrix::unshaped();
        sum.add(&a, &b).unwrap();
        assert_eq!(sum.shape(), Shape::matrix(2, 2));
        assert!(sum.iter().all(|&x| x == 5.0));

        let mut diff = Matrix::unshaped();
        diff.subtract(&a, &b).unwrap();
        assert_eq!(diff.as_slice(), &[-3.0, -1.0, 1.0, 3.0]);

        let mut scaled = Matrix::unshaped();
        scaled.scale(&a, 2.0).unwrap();
        assert_eq!(scaled.as_slice(), &[2.0, 4.0, 6.0, 8.0]);

        let mut neg = Matrix::unshaped();
        neg.negate(&a).unwrap();
        assert_eq!(neg.as_slice(), &[-1.0, -2.0, -3.0, -4.0]);
    }

    #[test]
    fn test_add_shape_mismatch() {
        let a = Matrix::<i32>::zeros(2, 3).unwrap();
        let b = Matrix::<i32>::zeros(2, 2).unwrap();
        let mut c = Matrix::unshaped();
        assert!(matches!(
            c.add(&a, &b),
            Err(CoreError::ShapeMismatch { .. })
        ));
    }
}
