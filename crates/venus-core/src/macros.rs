//! Literal constructors.

/// Build a [`Vector`](crate::vector::Vector) from its elements.
///
/// ```
/// # use venus_core::vector;
/// let v = vector![1_u8, 2, 3];
/// assert_eq!(v.len(), 3);
/// ```
#[macro_export]
macro_rules! vector {
    () => {
        $crate::vector::Vector::from_vec(::std::vec::Vec::new())
    };
    ($($x:expr),+ $(,)?) => {
        $crate::vector::Vector::from_vec(::std::vec![$($x),+])
    };
}

/// Build a [`Matrix`](crate::matrix::Matrix) from bracketed rows.
///
/// Evaluates to a `Result`, which is an error when the rows differ in
/// length.
///
/// ```
/// # use venus_core::matrix;
/// let m = matrix![[1, 2, 3], [4, 5, 6]].unwrap();
/// assert_eq!(m.dims(), (2, 3));
/// ```
#[macro_export]
macro_rules! matrix {
    ($([$($x:expr),* $(,)?]),+ $(,)?) => {
        $crate::matrix::Matrix::from_rows(&[$(&[$($x),*][..]),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::error::CoreError;
    use crate::shape::Shape;

    #[test]
    fn test_vector_macro() {
        let v = vector![1, 2, 3,];
        assert_eq!(v.shape(), Shape::vector(3));
        let empty: crate::vector::Vector<i32> = vector![];
        assert!(empty.is_empty());
    }

    #[test]
    fn test_matrix_macro() {
        let m = matrix![[1, 2], [3, 4], [5, 6]].unwrap();
        assert_eq!(m.shape(), Shape::matrix(3, 2));
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_matrix_macro_ragged() {
        assert!(matches!(
            matrix![[1, 2], [3]],
            Err(CoreError::ShapeMismatch { .. })
        ));
    }
}
