use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ReciprocalError;

/// Element count of a tuple or side length of a transform.
///
/// Only the ranks of the normed division algebras (and the empty tuple) are
/// representable, so an invalid rank can never reach the algebra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub enum Rank {
    /// No elements.
    Empty,
    /// Real numbers: `[w]`
    Scalar,
    /// Complex numbers: `[w x]`
    Complex,
    /// Quaternions, or 3D homogeneous coordinates `[w x y z]`
    Quaternion,
    /// Octonions (no rotation support)
    Octonion,
}

impl Rank {
    /// Every rank, smallest first.
    pub const ALL: [Rank; 5] = [
        Rank::Empty,
        Rank::Scalar,
        Rank::Complex,
        Rank::Quaternion,
        Rank::Octonion,
    ];

    /// Largest element count of any rank.
    pub const MAX_DIM: usize = 8;

    /// Number of elements.
    pub const fn dim(self) -> usize {
        match self {
            Rank::Empty => 0,
            Rank::Scalar => 1,
            Rank::Complex => 2,
            Rank::Quaternion => 4,
            Rank::Octonion => 8,
        }
    }

    /// Rank with exactly `n` elements, if one exists.
    pub const fn from_dim(n: usize) -> Option<Rank> {
        match n {
            0 => Some(Rank::Empty),
            1 => Some(Rank::Scalar),
            2 => Some(Rank::Complex),
            4 => Some(Rank::Quaternion),
            8 => Some(Rank::Octonion),
            _ => None,
        }
    }

    /// Whether `rotate` accepts angle tuples of this rank.
    pub fn supports_rotation(self) -> bool {
        matches!(self, Rank::Scalar | Rank::Complex | Rank::Quaternion)
    }
}

impl TryFrom<usize> for Rank {
    type Error = ReciprocalError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        Rank::from_dim(n).ok_or(ReciprocalError::InvalidDimension(n))
    }
}

impl From<Rank> for usize {
    fn from(rank: Rank) -> usize {
        rank.dim()
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rank::Empty => write!(f, "empty"),
            Rank::Scalar => write!(f, "scalar"),
            Rank::Complex => write!(f, "complex"),
            Rank::Quaternion => write!(f, "quaternion"),
            Rank::Octonion => write!(f, "octonion"),
        }
    }
}
