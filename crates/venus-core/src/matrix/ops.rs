//! Transpose, matrix product and fill operations.

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::shape::Shape;
use crate::vector::Vector;

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Transpose
    // ------------------------------------------------------------------

    /// `self = srcᵀ`.
    ///
    /// `self` must be unshaped or already `src.cols x src.rows`.
    ///
    /// ```
    /// # use venus_core::matrix::Matrix;
    /// let m = Matrix::from_vec(2, 3, vec![1, 2, 3, 4, 5, 6]).unwrap();
    /// let mut t = Matrix::unshaped();
    /// t.transpose(&m).unwrap();
    /// assert_eq!(t.dims(), (3, 2));
    /// assert_eq!(t.as_slice(), &[1, 4, 2, 5, 3, 6]);
    /// ```
    pub fn transpose(&mut self, src: &Self) -> Result<()> {
        let (rows, cols) = src.dims();
        self.buf.format_like("transpose", src.shape().transposed())?;
        let data = src.as_slice();
        let out = self.as_mut_slice();
        for r in 0..rows {
            for c in 0..cols {
                out[c * rows + r] = data[r * cols + c];
            }
        }
        Ok(())
    }

    /// Transpose a square matrix in place by swapping across the diagonal.
    ///
    /// Non-square matrices are rejected: their transpose cannot be written
    /// as pairwise swaps within the same shape.
    pub fn transpose_in_place(&mut self) -> Result<()> {
        let (rows, cols) = self.dims();
        if rows != cols {
            return Err(CoreError::shape_mismatch(
                "transpose_in_place",
                Shape::matrix(rows, rows),
                self.shape(),
            ));
        }
        let n = rows;
        let data = self.as_mut_slice();
        for r in 0..n {
            for c in (r + 1)..n {
                data.swap(r * n + c, c * n + r);
            }
        }
        Ok(())
    }

    /// A newly allocated transpose.
    pub fn transposed(&self) -> Result<Self> {
        let mut out = Self::unshaped();
        out.transpose(self)?;
        Ok(out)
    }

    // ------------------------------------------------------------------
    // Products
    // ------------------------------------------------------------------

    /// `self = a · b`, with `self[r, c] = sum_i a[r, i] * b[i, c]`.
    ///
    /// Requires `a.cols == b.rows`. The result is `a.rows x b.cols`; `self`
    /// must be unshaped or already have that shape.
    pub fn multiply(&mut self, a: &Self, b: &Self) -> Result<()> {
        let (m, k) = a.dims();
        let (kb, n) = b.dims();
        if kb != k {
            return Err(CoreError::shape_mismatch(
                "multiply",
                Shape::matrix(k, n),
                b.shape(),
            ));
        }
        self.buf.format_like("multiply", Shape::matrix(m, n))?;

        let a_data = a.as_slice();
        let b_data = b.as_slice();
        let c_data = self.as_mut_slice();

        // ijk loop order (row-major friendly for A and C)
        for i in 0..m {
            let a_row = i * k;
            for j in 0..n {
                let mut sum = T::zero();
                for p in 0..k {
                    sum = sum.wrapping_add(a_data[a_row + p].wrapping_mul(b_data[p * n + j]));
                }
                c_data[i * n + j] = sum;
            }
        }
        Ok(())
    }

    /// A newly allocated product `self · other`.
    ///
    /// ```
    /// # use venus_core::matrix::Matrix;
    /// let a = Matrix::from_vec(2, 2, vec![1, 2, 3, 4]).unwrap();
    /// let b = Matrix::from_vec(2, 2, vec![5, 6, 7, 8]).unwrap();
    /// assert_eq!(a.matmul(&b).unwrap().as_slice(), &[19, 22, 43, 50]);
    /// ```
    pub fn matmul(&self, other: &Self) -> Result<Self> {
        let mut out = Self::unshaped();
        out.multiply(self, other)?;
        Ok(out)
    }

    /// `dst = self · v`, treating `v` as a column vector of length `cols`.
    pub fn multiply_vector(&self, dst: &mut Vector<T>, v: &Vector<T>) -> Result<()> {
        let (rows, cols) = self.dims();
        if v.shape() != Shape::vector(cols) {
            return Err(CoreError::shape_mismatch(
                "multiply_vector",
                Shape::vector(cols),
                v.shape(),
            ));
        }
        dst.buf.format_like("multiply_vector", Shape::vector(rows))?;

        let a = self.as_slice();
        let x = v.as_slice();
        for (r, yr) in dst.as_mut_slice().iter_mut().enumerate() {
            *yr = a[r * cols..(r + 1) * cols]
                .iter()
                .zip(x.iter())
                .fold(T::zero(), |acc, (&m, &xi)| acc.wrapping_add(m.wrapping_mul(xi)));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Fill
    // ------------------------------------------------------------------

    /// Overwrite a square matrix with the identity.
    pub fn fill_identity(&mut self) -> Result<()> {
        let (rows, cols) = self.dims();
        if rows != cols {
            return Err(CoreError::shape_mismatch(
                "fill_identity",
                Shape::matrix(rows, rows),
                self.shape(),
            ));
        }
        let n = rows;
        for (i, x) in self.as_mut_slice().iter_mut().enumerate() {
            *x = if i / n == i % n { T::one() } else { T::zero() };
        }
        Ok(())
    }
}
