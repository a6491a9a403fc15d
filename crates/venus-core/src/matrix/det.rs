//! Determinant by Laplace (cofactor) expansion.
//!
//! Expansion runs along the first column and builds one fresh minor per
//! recursive call, so the cost is `O(n!)`. That is fine for the 2×2, 3×3
//! and 4×4 matrices used by transforms and impractical much beyond that.

use crate::error::{CoreError, Result};
use crate::shape::Shape;
use crate::{Scalar, Signed};

use super::Matrix;

impl<T: Scalar> Matrix<T> {
    /// The submatrix with row `row` and column `col` removed.
    pub fn minor(&self, row: usize, col: usize) -> Result<Self> {
        let (rows, cols) = self.dims();
        if row >= rows || col >= cols {
            return Err(CoreError::IndexOutOfBounds {
                index: vec![row, col],
                shape: self.shape(),
            });
        }
        let mut out = Self::zeros(rows - 1, cols - 1)?;
        let src = self.as_slice();
        let dst = out.as_mut_slice();
        let mut k = 0;
        for r in (0..rows).filter(|&r| r != row) {
            for c in (0..cols).filter(|&c| c != col) {
                dst[k] = src[r * cols + c];
                k += 1;
            }
        }
        Ok(out)
    }
}

impl<T: Signed> Matrix<T> {
    /// Determinant of a square matrix.
    ///
    /// ```
    /// # use venus_core::matrix::Matrix;
    /// let m = Matrix::from_vec(2, 2, vec![3, 8, 4, 6]).unwrap();
    /// assert_eq!(m.determinant().unwrap(), -14);
    /// ```
    pub fn determinant(&self) -> Result<T> {
        let (rows, cols) = self.dims();
        if rows != cols {
            return Err(CoreError::shape_mismatch(
                "determinant",
                Shape::matrix(rows, rows),
                self.shape(),
            ));
        }
        self.laplace()
    }

    fn laplace(&self) -> Result<T> {
        let n = self.rows();
        let m = self.as_slice();
        match n {
            0 => Ok(T::one()),
            1 => Ok(m[0]),
            2 => Ok(m[0].wrapping_mul(m[3]).wrapping_sub(m[1].wrapping_mul(m[2]))),
            _ => {
                let mut det = T::zero();
                for a in 0..n {
                    let term = m[a * n].wrapping_mul(self.minor(a, 0)?.laplace()?);
                    det = if a % 2 == 0 {
                        det.wrapping_add(term)
                    } else {
                        det.wrapping_sub(term)
                    };
                }
                Ok(det)
            }
        }
    }
}
