use crate::rank::Rank;

/// Errors raised by the coordinate algebra.
///
/// Every variant is local to the operation that produced it; nothing is
/// left half-updated when one is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ReciprocalError {
    /// A tuple or transform was requested with a rank outside {0, 1, 2, 4, 8}.
    #[error("unsupported tuple length: {0} (expected one of 0, 1, 2, 4, 8)")]
    InvalidDimension(usize),

    /// Two operands that must share a rank do not.
    #[error("dimension mismatch: expected rank {expected}, got rank {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Rotation angles of a rank with no rotation defined (empty, octonion).
    #[error("rotation is not supported for {0} tuples")]
    UnsupportedRotationDimension(Rank),

    /// Normalizing a zero-length tuple, or projecting with a zero weight.
    #[error("degenerate tuple in {operation}")]
    DegenerateTuple { operation: &'static str },
}

impl ReciprocalError {
    pub(crate) fn mismatch(expected: Rank, got: Rank) -> Self {
        ReciprocalError::DimensionMismatch {
            expected: expected.dim(),
            got: got.dim(),
        }
    }
}
