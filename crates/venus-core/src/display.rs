//! `Display` formatting for [`Vector`] and [`Matrix`].

use core::fmt;

use crate::Scalar;
use crate::matrix::Matrix;
use crate::vector::Vector;

impl<T: Scalar> fmt::Display for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vector([")?;
        for (i, v) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "])")
    }
}

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.dims();
        if self.numel() == 0 {
            return write!(f, "matrix([], shape={})", self.shape());
        }
        let data = self.as_slice();
        writeln!(f, "matrix([")?;
        for r in 0..rows {
            write!(f, "  [")?;
            for c in 0..cols {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{}", data[r * cols + c])?;
            }
            if r < rows - 1 {
                writeln!(f, "],")?;
            } else {
                writeln!(f, "]")?;
            }
        }
        write!(f, "])")
    }
}
