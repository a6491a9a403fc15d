//! # Venus
//!
//! Numeric foundation of the Venus graphics toolkit.
//!
//! One `use venus::prelude::*;` gives you shaped vectors and matrices, the
//! element-wise operation set they share, and the `Real` and `Color`
//! families used by the windowing and rendering layers.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | Shaped buffers, vectors, matrices, families |
//! | `serde` | `Serialize` / `Deserialize` for shapes, buffers, vectors and matrices |
//!
//! Windowing and widget crates will be gated behind their own feature flags
//! as they are ported.

#[cfg(feature = "core")]
pub use venus_core as core;

/// Glob-import convenience: `use venus::prelude::*;`
#[cfg(feature = "core")]
pub mod prelude {
    pub use venus_core::prelude::*;
}
