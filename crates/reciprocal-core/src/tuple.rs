//! Fixed-rank real tuples.
//!
//! "Tuple" rather than "vector": the same type carries real, complex,
//! quaternion or octonion magnitudes, and homogeneous coordinates written
//! `[w x y z]` (weight first, not last).

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::ReciprocalError;
use crate::rank::Rank;
use crate::Result;

/// A tuple of `f64` magnitudes whose length is one of the algebra ranks.
///
/// Element 0 is the projective (weight) component when the tuple is used as
/// a homogeneous coordinate. The rank is fixed at construction; elements
/// change only through the bulk setters.
///
/// # Examples
///
/// ```
/// use reciprocal_core::{Rank, Tuple};
///
/// let t = Tuple::from_values(&[2.0, 4.0, 0.0, 6.0]).unwrap();
/// assert_eq!(t.rank(), Rank::Quaternion);
///
/// // Project onto the unit weight plane
/// let p = t.unitize().unwrap();
/// assert_eq!(p.as_slice(), &[1.0, 2.0, 0.0, 3.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Tuple {
    rank: Rank,
    // Slots past `rank.dim()` are always zero.
    e: [f64; Rank::MAX_DIM],
}

impl Tuple {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// Zero tuple of the given rank.
    pub const fn zeros(rank: Rank) -> Self {
        Self {
            rank,
            e: [0.0; Rank::MAX_DIM],
        }
    }

    /// Zero tuple with `n` elements.
    ///
    /// Fails with `InvalidDimension` unless `n` is 0, 1, 2, 4 or 8.
    pub fn with_dimension(n: usize) -> Result<Self> {
        Ok(Self::zeros(Rank::try_from(n)?))
    }

    /// Tuple holding `values`, with the rank taken from their count.
    pub fn from_values(values: &[f64]) -> Result<Self> {
        let mut t = Self::with_dimension(values.len())?;
        t.e[..values.len()].copy_from_slice(values);
        Ok(t)
    }

    /// Scalar tuple `[w]`.
    pub const fn scalar(w: f64) -> Self {
        let mut e = [0.0; Rank::MAX_DIM];
        e[0] = w;
        Self { rank: Rank::Scalar, e }
    }

    /// Complex tuple `[w x]`.
    pub const fn complex(values: [f64; 2]) -> Self {
        let mut e = [0.0; Rank::MAX_DIM];
        e[0] = values[0];
        e[1] = values[1];
        Self { rank: Rank::Complex, e }
    }

    /// Quaternion tuple `[w x y z]`.
    pub const fn quaternion(values: [f64; 4]) -> Self {
        let mut e = [0.0; Rank::MAX_DIM];
        e[0] = values[0];
        e[1] = values[1];
        e[2] = values[2];
        e[3] = values[3];
        Self { rank: Rank::Quaternion, e }
    }

    /// Octonion tuple.
    pub const fn octonion(values: [f64; 8]) -> Self {
        Self { rank: Rank::Octonion, e: values }
    }

    /// Unit tuple `[1, 0, ...]` of the same rank. Rank 0 yields the empty tuple.
    pub fn identity(&self) -> Self {
        let mut id = Self::zeros(self.rank);
        if self.rank != Rank::Empty {
            id.e[0] = 1.0;
        }
        id
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.rank.dim()
    }

    pub fn is_empty(&self) -> bool {
        self.rank == Rank::Empty
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.e[..self.rank.dim()]
    }

    pub fn get(&self, i: usize) -> Option<f64> {
        self.as_slice().get(i).copied()
    }

    /// Overwrite the leading elements with `values`.
    ///
    /// Copies `min(len, values.len())` elements. Extra values are dropped and
    /// elements past the end of a short slice keep their old values.
    pub fn set(&mut self, values: &[f64]) -> &mut Self {
        let n = self.len().min(values.len());
        self.e[..n].copy_from_slice(&values[..n]);
        self
    }

    /// Overwrite the leading elements from another tuple of any rank.
    pub fn set_from(&mut self, other: &Tuple) -> &mut Self {
        self.set(other.as_slice())
    }

    // =========================================================================
    // Metrics
    // =========================================================================

    /// Squared Euclidean length, including the projective component.
    pub fn length2(&self) -> f64 {
        self.as_slice().iter().map(|x| x * x).sum()
    }

    /// Euclidean length.
    ///
    /// Elements are rescaled by the largest magnitude first, so tuples whose
    /// squares would overflow or underflow still get a finite length.
    pub fn length(&self) -> f64 {
        let (max, scaled) = self.scaled_length();
        max * scaled
    }

    // Largest magnitude and the length of the tuple divided by it.
    fn scaled_length(&self) -> (f64, f64) {
        let max = self.as_slice().iter().fold(0.0_f64, |m, x| m.max(x.abs()));
        if max == 0.0 || !max.is_finite() {
            return (max, if max == 0.0 { 0.0 } else { 1.0 });
        }
        let sum: f64 = self.as_slice().iter().map(|x| (x / max) * (x / max)).sum();
        (max, sum.sqrt())
    }

    // =========================================================================
    // Derived tuples
    // =========================================================================

    /// Copy of this tuple rescaled to length `scale`.
    ///
    /// Fails with `DegenerateTuple` for a zero-length tuple, or when the
    /// rescaled elements are not finite.
    pub fn normalize(&self, scale: f64) -> Result<Self> {
        let degenerate = ReciprocalError::DegenerateTuple { operation: "normalize" };
        let (max, scaled) = self.scaled_length();
        if max == 0.0 || !max.is_finite() {
            return Err(degenerate);
        }
        let mut v = *self;
        for x in &mut v.e[..self.len()] {
            *x = *x / max / scaled * scale;
        }
        if v.as_slice().iter().all(|x| x.is_finite()) {
            Ok(v)
        } else {
            Err(degenerate)
        }
    }

    /// Copy of this tuple rescaled to unit length.
    pub fn normalize_unit(&self) -> Result<Self> {
        self.normalize(1.0)
    }

    /// Project onto the weight plane `w`.
    ///
    /// Elements `1..` are divided by `e[0] / w` and `e[0]` becomes `w`.
    /// Fails with `DegenerateTuple` when there is no weight, when `e[0] / w`
    /// is zero or not finite, or when a projected element is not finite.
    pub fn project(&self, w: f64) -> Result<Self> {
        let degenerate = ReciprocalError::DegenerateTuple { operation: "project" };
        let weight = match self.get(0) {
            Some(weight) if weight != 0.0 => weight,
            _ => return Err(degenerate),
        };
        let factor = weight / w;
        if factor == 0.0 || !factor.is_finite() {
            return Err(degenerate);
        }
        let mut v = *self;
        for x in &mut v.e[1..self.len()] {
            *x /= factor;
        }
        v.e[0] = w;
        if v.as_slice().iter().all(|x| x.is_finite()) {
            Ok(v)
        } else {
            Err(degenerate)
        }
    }

    /// Project onto the unit weight plane.
    pub fn unitize(&self) -> Result<Self> {
        self.project(1.0)
    }

    /// Whether every element is within `eps` of `other`'s. Ranks must match.
    pub fn approx_eq(&self, other: &Tuple, eps: f64) -> bool {
        self.rank == other.rank
            && self
                .as_slice()
                .iter()
                .zip(other.as_slice())
                .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Default for Tuple {
    /// Scalar zero.
    fn default() -> Self {
        Self::zeros(Rank::Scalar)
    }
}

impl Index<usize> for Tuple {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.as_slice()[i]
    }
}

impl TryFrom<&[f64]> for Tuple {
    type Error = ReciprocalError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Tuple::from_values(values)
    }
}

impl TryFrom<Vec<f64>> for Tuple {
    type Error = ReciprocalError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Tuple::from_values(&values)
    }
}

impl From<Tuple> for Vec<f64> {
    fn from(t: Tuple) -> Vec<f64> {
        t.as_slice().to_vec()
    }
}

impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<")?;
        for (i, x) in self.as_slice().iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{x:.3}")?;
        }
        write!(f, ">")
    }
}
