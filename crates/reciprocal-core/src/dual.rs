//! Reciprocal pairs of tuples.

use serde::{Deserialize, Serialize};

use crate::error::ReciprocalError;
use crate::rank::Rank;
use crate::tuple::Tuple;
use crate::Result;

/// A principal tuple and its subordinate (reciprocal) counterpart.
///
/// Both tuples always share a rank. Arithmetic between the two is left to
/// the physics code that consumes them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "DualParts", into = "DualParts")]
pub struct Dual {
    principal: Tuple,
    subordinate: Tuple,
}

#[derive(Serialize, Deserialize)]
struct DualParts {
    principal: Tuple,
    subordinate: Tuple,
}

impl Dual {
    /// Two tuples of `rank` whose only nonzero element is the weight `scale`.
    ///
    /// `Dual::new(rank, 0.0)` is a pair of zero tuples.
    pub fn new(rank: Rank, scale: f64) -> Self {
        let mut t = Tuple::zeros(rank);
        t.set(&[scale]);
        Self {
            principal: t,
            subordinate: t,
        }
    }

    /// Take ownership of an existing pair. Fails if the ranks differ.
    pub fn from_tuples(principal: Tuple, subordinate: Tuple) -> Result<Self> {
        if principal.rank() != subordinate.rank() {
            return Err(ReciprocalError::mismatch(principal.rank(), subordinate.rank()));
        }
        Ok(Self { principal, subordinate })
    }

    pub fn principal(&self) -> &Tuple {
        &self.principal
    }

    pub fn subordinate(&self) -> &Tuple {
        &self.subordinate
    }

    /// Shared rank of both tuples.
    pub fn rank(&self) -> Rank {
        self.principal.rank()
    }

    pub fn into_parts(self) -> (Tuple, Tuple) {
        (self.principal, self.subordinate)
    }
}

impl TryFrom<DualParts> for Dual {
    type Error = ReciprocalError;

    fn try_from(parts: DualParts) -> Result<Self> {
        Dual::from_tuples(parts.principal, parts.subordinate)
    }
}

impl From<Dual> for DualParts {
    fn from(d: Dual) -> Self {
        DualParts {
            principal: d.principal,
            subordinate: d.subordinate,
        }
    }
}
