//! `venus-core`: numeric buffer engine for the Venus graphics toolkit.
//!
//! Provides shape-checked vectors and matrices over a single storage
//! convention: a flat, row-major element buffer that carries its own shape
//! header. Transform and rendering code builds on these types; the windowing
//! layer uses the byte-valued [`Color`](family::Color) family.
//!
//! # Design
//!
//! - Generic over element types via [`Scalar`] / [`Signed`]; named families
//!   (`Real`, `Color`) are declared with [`define_family!`].
//! - Every operation writes into an explicit destination and returns
//!   [`Result`]. An unshaped destination is shaped to match its first
//!   source; mismatched shapes are rejected, never silently reordered.
//! - Operations whose destination must alias a source (cross product,
//!   square transpose) have dedicated in-place forms that read every source
//!   element before writing.
//! - Everything is synchronous and allocation failures are reported as
//!   [`CoreError::AllocationFailure`], never aborts.

#[macro_use]
mod macros;

pub mod buffer;
mod display;
pub mod dtype;
pub mod error;
pub mod family;
pub mod matrix;
pub mod shape;
pub mod vector;

// Re-export key types at crate root for convenience.
pub use buffer::{Elementwise, ShapedBuffer};
pub use dtype::{Scalar, Signed};
pub use error::{CoreError, Result};
pub use shape::Shape;

/// Items intended for glob-import: `use venus_core::prelude::*;`
pub mod prelude {
    pub use crate::buffer::{Elementwise, ShapedBuffer};
    pub use crate::dtype::{Scalar, Signed};
    pub use crate::error::{CoreError, Result};
    pub use crate::family::{
        Color, ColorMatrix, ColorVector, Family, Real, RealMatrix, RealVector,
    };
    pub use crate::matrix::Matrix;
    pub use crate::shape::Shape;
    pub use crate::vector::Vector;
    pub use crate::{matrix, vector};
}
