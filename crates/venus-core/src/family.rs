//! Named element-type families.
//!
//! [`Vector<T>`] and [`Matrix<T>`] already carry the full operation set for
//! any [`Scalar`]. A family gives one element type a name and a pair of type
//! aliases, so collaborators can say `ColorVector` instead of `Vector<u8>`.
//!
//! ```
//! use venus_core::define_family;
//! use venus_core::family::Family;
//!
//! define_family!(pub Fixed, i32, FixedVector, FixedMatrix);
//!
//! let v: FixedVector = Fixed::vector(3).unwrap();
//! assert_eq!(v.len(), 3);
//! assert_eq!(Fixed::NAME, "Fixed");
//! ```

use crate::Scalar;
use crate::error::Result;
use crate::matrix::Matrix;
use crate::vector::Vector;

/// A named element type with vector and matrix constructors.
pub trait Family {
    /// The element type shared by the family's vectors and matrices.
    type Elem: Scalar;

    /// Human-readable family name.
    const NAME: &'static str;

    /// A zero-filled vector of `len` elements.
    fn vector(len: usize) -> Result<Vector<Self::Elem>> {
        Vector::zeros(len)
    }

    /// A zero-filled `rows x cols` matrix.
    fn matrix(rows: usize, cols: usize) -> Result<Matrix<Self::Elem>> {
        Matrix::zeros(rows, cols)
    }
}

/// Declare a family marker type and its vector/matrix aliases.
///
/// `define_family!(vis Name, elem, VectorAlias, MatrixAlias)` emits
/// `struct Name` implementing [`Family`] with `Elem = elem`, plus
/// `type VectorAlias = Vector<elem>` and `type MatrixAlias = Matrix<elem>`.
#[macro_export]
macro_rules! define_family {
    ($(#[$meta:meta])* $vis:vis $name:ident, $elem:ty, $vector:ident, $matrix:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::family::Family for $name {
            type Elem = $elem;
            const NAME: &'static str = stringify!($name);
        }

        #[allow(dead_code)]
        $vis type $vector = $crate::vector::Vector<$elem>;

        #[allow(dead_code)]
        $vis type $matrix = $crate::matrix::Matrix<$elem>;
    };
}

define_family!(
    /// Single-precision vectors and matrices used for geometry and transforms.
    pub Real,
    f32,
    RealVector,
    RealMatrix
);

define_family!(
    /// Byte-valued color channels.
    ///
    /// Channel arithmetic wraps modulo 256, so `200 + 100` gives `44` and
    /// `10 - 20` gives `246`.
    pub Color,
    u8,
    ColorVector,
    ColorMatrix
);

impl Vector<u8> {
    /// A three-channel color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::from_vec(vec![r, g, b])
    }

    /// A four-channel color with alpha.
    pub fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_vec(vec![r, g, b, a])
    }
}
