use thiserror::Error;

use crate::shape::Shape;

/// All errors returned by `venus-core`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// Operand shapes are incompatible for the requested operation.
    #[error("shape mismatch: expected {expected}, got {got}")]
    ShapeMismatch { expected: Shape, got: Shape },

    /// Storage for `requested` elements could not be obtained.
    #[error("allocation failure: could not allocate {requested} elements")]
    AllocationFailure { requested: usize },

    /// The operation is not defined for the operand's shape.
    #[error("unsupported operation `{op}`: {reason}")]
    UnsupportedOperation {
        op: &'static str,
        reason: &'static str,
    },

    /// A checked element or row/column access is out of range.
    #[error("index {index:?} out of bounds for shape {shape}")]
    IndexOutOfBounds { index: Vec<usize>, shape: Shape },
}

impl CoreError {
    /// Build a [`CoreError::ShapeMismatch`] and log the rejected operation.
    pub(crate) fn shape_mismatch(op: &'static str, expected: Shape, got: Shape) -> Self {
        tracing::debug!(op, %expected, %got, "rejected operands: shape mismatch");
        Self::ShapeMismatch { expected, got }
    }

    /// Build a [`CoreError::UnsupportedOperation`] and log it.
    pub(crate) fn unsupported(op: &'static str, reason: &'static str) -> Self {
        tracing::debug!(op, reason, "rejected operands: unsupported operation");
        Self::UnsupportedOperation { op, reason }
    }

    /// Build a [`CoreError::AllocationFailure`] and log it.
    pub(crate) fn allocation_failure(requested: usize) -> Self {
        tracing::warn!(requested, "element buffer allocation failed");
        Self::AllocationFailure { requested }
    }
}

/// Convenience alias used throughout `venus-core`.
pub type Result<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_shape_mismatch() {
        let err = CoreError::ShapeMismatch {
            expected: Shape::Vector { len: 3 },
            got: Shape::Vector { len: 4 },
        };
        assert_eq!(err.to_string(), "shape mismatch: expected [3], got [4]");
    }

    #[test]
    fn test_display_unsupported() {
        let err = CoreError::unsupported("cross", "requires length-3 vectors");
        assert!(err.to_string().contains("`cross`"));
    }

    #[test]
    fn test_display_allocation_failure() {
        let err = CoreError::allocation_failure(usize::MAX);
        assert!(err.to_string().starts_with("allocation failure"));
    }
}
