//! Square transformation matrices over homogeneous tuples.
//!
//! Matrices are stored row-major as `xform[row][col]`. Tuples act as row
//! vectors: `apply` computes `out[i] = Σ_k xform[k][i] · t[k]`, so row 0 is
//! the translation row picked up through the projective weight `t[0]`.
//!
//! Every operator (`scale`, `translate`, `rotate`) builds its own matrix and
//! returns `self.multiply(op)`. Operators therefore take effect in call order:
//! `t.scale(s)?.rotate(r)?` scales first, then rotates.

use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::error::ReciprocalError;
use crate::rank::Rank;
use crate::tuple::Tuple;
use crate::Result;

/// Pairs of matrix positions forming the rotation block for each quaternion
/// axis. Axis 0 is the projective axis and never rotates.
const QUATERNION_BLOCKS: [(usize, usize); 4] = [(0, 0), (3, 2), (1, 3), (2, 1)];

/// An n×n operator acting on rank-n tuples.
///
/// Operators return new transforms; the receiver is never modified, so a
/// transform can be shared between several composition chains.
///
/// # Examples
///
/// ```
/// use reciprocal_core::{Transform, Tuple};
///
/// let t = Transform::default()
///     .scale(2.0)
///     .translate(&Tuple::quaternion([1.0, 0.5, 0.0, 0.0]))
///     .unwrap();
/// let p = t.apply(&Tuple::quaternion([0.5, 1.0, 1.0, 1.0])).unwrap();
/// assert_eq!(p.as_slice(), &[1.0, 2.5, 2.0, 2.0]);
/// ```
#[derive(Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct Transform {
    rank: Rank,
    xform: SmallVec<[f64; 16]>,
}

impl Transform {
    /// Diagonal matrix with `scale` on the diagonal.
    pub fn identity(rank: Rank, scale: f64) -> Self {
        let n = rank.dim();
        let mut xform = SmallVec::from_elem(0.0, n * n);
        for i in 0..n {
            xform[i * n + i] = scale;
        }
        Self { rank, xform }
    }

    /// Identity matrix of the given rank.
    pub fn new(rank: Rank) -> Self {
        Self::identity(rank, 1.0)
    }

    pub fn rank(&self) -> Rank {
        self.rank
    }

    /// Element at `xform[row][col]`.
    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        let n = self.rank.dim();
        if row < n && col < n {
            Some(self.xform[row * n + col])
        } else {
            None
        }
    }

    /// One row of the matrix.
    pub fn row(&self, row: usize) -> Option<&[f64]> {
        let n = self.rank.dim();
        (row < n).then(|| &self.xform[row * n..(row + 1) * n])
    }

    /// All elements, row-major.
    pub fn as_slice(&self) -> &[f64] {
        &self.xform
    }

    fn set(&mut self, row: usize, col: usize, value: f64) {
        let n = self.rank.dim();
        self.xform[row * n + col] = value;
    }

    fn check_rank(&self, rank: Rank) -> Result<()> {
        if self.rank == rank {
            Ok(())
        } else {
            Err(ReciprocalError::mismatch(self.rank, rank))
        }
    }

    // =========================================================================
    // Composition
    // =========================================================================

    /// Matrix product `self · other`.
    pub fn multiply(&self, other: &Transform) -> Result<Transform> {
        self.check_rank(other.rank)?;
        Ok(self.compose(other))
    }

    /// Compose a uniform scale of `factor` on every axis, weight included.
    pub fn scale(&self, factor: f64) -> Transform {
        let op = Transform::identity(self.rank, factor);
        self.compose(&op)
    }

    /// Compose an independent scale per axis, taken from `factors`.
    pub fn scale_axes(&self, factors: &Tuple) -> Result<Transform> {
        self.check_rank(factors.rank())?;
        let mut op = Transform::new(self.rank);
        for (i, &f) in factors.as_slice().iter().enumerate() {
            op.set(i, i, f);
        }
        Ok(self.compose(&op))
    }

    /// Compose a translation whose row 0 is `v`.
    ///
    /// `v` is a full homogeneous tuple: `v[0]` lands on the weight diagonal,
    /// so a weight of 1 leaves the projective component unchanged.
    pub fn translate(&self, v: &Tuple) -> Result<Transform> {
        self.check_rank(v.rank())?;
        let mut op = Transform::new(self.rank);
        for (col, &x) in v.as_slice().iter().enumerate() {
            op.set(0, col, x);
        }
        Ok(self.compose(&op))
    }

    /// `translate` from raw values.
    pub fn translate_values(&self, values: &[f64]) -> Result<Transform> {
        self.translate(&Tuple::from_values(values)?)
    }

    /// Compose the rotation whose per-axis angles (radians) are in `angles`.
    ///
    /// - scalar: no rotation exists; the transform is returned unchanged.
    /// - complex: only a cosine scale on axis 1, not a full planar rotation.
    /// - quaternion: one block per nonzero angle on axes 1, 2, 3, composed in
    ///   axis order. Axis 0 is projective and never rotates.
    /// - empty and octonion tuples fail with `UnsupportedRotationDimension`.
    pub fn rotate(&self, angles: &Tuple) -> Result<Transform> {
        let rank = angles.rank();
        self.check_rank(rank)?;
        if !rank.supports_rotation() {
            return Err(ReciprocalError::UnsupportedRotationDimension(rank));
        }
        match rank {
            Rank::Complex => {
                if angles[1] == 0.0 {
                    return Ok(self.clone());
                }
                let mut op = Transform::new(Rank::Complex);
                op.set(1, 1, angles[1].cos());
                Ok(self.compose(&op))
            }
            Rank::Quaternion => {
                let mut result = self.clone();
                for (axis, &(p, q)) in QUATERNION_BLOCKS.iter().enumerate().skip(1) {
                    let theta = angles[axis];
                    if theta == 0.0 {
                        continue;
                    }
                    tracing::trace!(axis, theta, "composing rotation block ({}, {})", p, q);
                    let (sin, cos) = theta.sin_cos();
                    let mut op = Transform::new(Rank::Quaternion);
                    op.set(p, p, cos);
                    op.set(q, q, cos);
                    op.set(p, q, sin);
                    op.set(q, p, -sin);
                    result = result.compose(&op);
                }
                Ok(result)
            }
            // Scalar: no rotation exists.
            _ => Ok(self.clone()),
        }
    }

    // Only called with operators built at `self.rank`.
    fn compose(&self, op: &Transform) -> Transform {
        let n = self.rank.dim();
        let mut product = Transform::identity(self.rank, 0.0);
        for i in 0..n {
            for k in 0..n {
                let a = self.xform[i * n + k];
                if a == 0.0 {
                    continue;
                }
                for j in 0..n {
                    product.xform[i * n + j] += a * op.xform[k * n + j];
                }
            }
        }
        product
    }

    // =========================================================================
    // Application
    // =========================================================================

    /// Transform `t`, returning a new tuple of the same rank.
    pub fn apply(&self, t: &Tuple) -> Result<Tuple> {
        self.check_rank(t.rank())?;
        let n = self.rank.dim();
        let mut out = [0.0; Rank::MAX_DIM];
        for (i, o) in out.iter_mut().enumerate().take(n) {
            for k in 0..n {
                *o += self.xform[k * n + i] * t[k];
            }
        }
        let mut product = Tuple::zeros(self.rank);
        product.set(&out[..n]);
        Ok(product)
    }

    /// Whether every element is within `eps` of `other`'s. Ranks must match.
    pub fn approx_eq(&self, other: &Transform, eps: f64) -> bool {
        self.rank == other.rank
            && self
                .xform
                .iter()
                .zip(other.xform.iter())
                .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Default for Transform {
    /// 4×4 identity, for 3D homogeneous coordinates.
    fn default() -> Self {
        Self::new(Rank::Quaternion)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Transform {
    type Error = ReciprocalError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        let rank = Rank::try_from(rows.len())?;
        let n = rank.dim();
        let mut xform = SmallVec::with_capacity(n * n);
        for row in &rows {
            if row.len() != n {
                return Err(ReciprocalError::DimensionMismatch {
                    expected: n,
                    got: row.len(),
                });
            }
            xform.extend_from_slice(row);
        }
        Ok(Self { rank, xform })
    }
}

impl From<Transform> for Vec<Vec<f64>> {
    fn from(t: Transform) -> Vec<Vec<f64>> {
        let n = t.rank.dim();
        if n == 0 {
            return Vec::new();
        }
        t.xform.chunks(n).map(|row| row.to_vec()).collect()
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.rank.dim();
        let rows: Vec<&[f64]> = (0..n).filter_map(|r| self.row(r)).collect();
        f.debug_struct("Transform")
            .field("rank", &self.rank)
            .field("xform", &rows)
            .finish()
    }
}

impl fmt::Display for Transform {
    /// One line per column: line `c` lists `xform[0][c], xform[1][c], ...`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.rank.dim();
        for col in 0..n {
            for row in 0..n {
                if row > 0 {
                    write!(f, ",")?;
                }
                write!(f, "{}", self.xform[row * n + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_PI_2, PI};

    const EPS: f64 = 1e-12;

    fn sample(rank: Rank) -> Transform {
        let n = rank.dim();
        let rows: Vec<Vec<f64>> = (0..n)
            .map(|i| (0..n).map(|j| ((i * 7 + j * 3) % 11) as f64 * 0.25 - 1.0).collect())
            .collect();
        Transform::try_from(rows).unwrap()
    }

    #[test]
    fn test_identity() {
        let t = Transform::identity(Rank::Quaternion, 3.0);
        for i in 0..4 {
            for j in 0..4 {
                let expected = if i == j { 3.0 } else { 0.0 };
                assert_eq!(t.get(i, j), Some(expected));
            }
        }
        assert_eq!(t.get(4, 0), None);
        assert_eq!(Transform::default(), Transform::new(Rank::Quaternion));
    }

    #[test]
    fn test_multiply_identity_left() {
        for rank in Rank::ALL {
            let t = sample(rank);
            let product = Transform::new(rank).multiply(&t).unwrap();
            assert!(product.approx_eq(&t, EPS));
        }
    }

    #[test]
    fn test_multiply_known_product() {
        let a = Transform::try_from(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Transform::try_from(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
        let ab = a.multiply(&b).unwrap();
        assert_eq!(ab.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_multiply_rank_mismatch() {
        let a = Transform::new(Rank::Quaternion);
        let b = Transform::new(Rank::Complex);
        assert_eq!(
            a.multiply(&b),
            Err(ReciprocalError::DimensionMismatch { expected: 4, got: 2 })
        );
    }

    #[test]
    fn test_operators_do_not_mutate_receiver() {
        let base = Transform::default();
        let scaled = base.scale(2.0);
        let _ = base.translate(&Tuple::quaternion([1.0, 1.0, 1.0, 1.0])).unwrap();
        assert_eq!(base, Transform::default());
        assert_eq!(scaled.get(0, 0), Some(2.0));
    }

    #[test]
    fn test_scale_uniform() {
        let t = Transform::default().scale(2.0).scale(3.0);
        let p = t.apply(&Tuple::quaternion([1.0, 1.0, 2.0, 3.0])).unwrap();
        assert_eq!(p.as_slice(), &[6.0, 6.0, 12.0, 18.0]);
    }

    #[test]
    fn test_scale_axes() {
        let factors = Tuple::quaternion([1.0, 2.0, 3.0, 4.0]);
        let t = Transform::default().scale_axes(&factors).unwrap();
        let p = t.apply(&Tuple::quaternion([1.0, 1.0, 1.0, 1.0])).unwrap();
        assert_eq!(p.as_slice(), &[1.0, 2.0, 3.0, 4.0]);

        assert!(matches!(
            Transform::default().scale_axes(&Tuple::complex([1.0, 2.0])),
            Err(ReciprocalError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_translate() {
        let t = Transform::default().translate_values(&[1.0, 2.0, -1.0, 0.5]).unwrap();
        assert_eq!(t.row(0), Some(&[1.0, 2.0, -1.0, 0.5][..]));

        let p = t.apply(&Tuple::quaternion([1.0, 1.0, 1.0, 1.0])).unwrap();
        assert_eq!(p.as_slice(), &[1.0, 3.0, 0.0, 1.5]);

        assert_eq!(
            Transform::default().translate_values(&[1.0, 2.0, 3.0]),
            Err(ReciprocalError::InvalidDimension(3))
        );
    }

    #[test]
    fn test_rotate_scalar_is_noop() {
        let t = Transform::new(Rank::Scalar).scale(2.0);
        assert_eq!(t.rotate(&Tuple::scalar(PI)).unwrap(), t);
    }

    #[test]
    fn test_rotate_complex_cosine_only() {
        let t = Transform::new(Rank::Complex).rotate(&Tuple::complex([0.0, PI / 3.0])).unwrap();
        assert!((t.get(1, 1).unwrap() - 0.5).abs() < EPS);
        assert_eq!(t.get(0, 0), Some(1.0));
        assert_eq!(t.get(0, 1), Some(0.0));
        assert_eq!(t.get(1, 0), Some(0.0));

        let untouched = Transform::new(Rank::Complex).rotate(&Tuple::complex([5.0, 0.0])).unwrap();
        assert_eq!(untouched, Transform::new(Rank::Complex));
    }

    #[test]
    fn test_rotate_quaternion_blocks() {
        let theta: f64 = 0.3;
        let (sin, cos) = theta.sin_cos();
        for (axis, &(p, q)) in QUATERNION_BLOCKS.iter().enumerate().skip(1) {
            let mut angles = Tuple::zeros(Rank::Quaternion);
            let mut values = [0.0; 4];
            values[axis] = theta;
            angles.set(&values);

            let t = Transform::default().rotate(&angles).unwrap();
            assert!((t.get(p, p).unwrap() - cos).abs() < EPS);
            assert!((t.get(q, q).unwrap() - cos).abs() < EPS);
            assert!((t.get(p, q).unwrap() - sin).abs() < EPS);
            assert!((t.get(q, p).unwrap() + sin).abs() < EPS);
            assert_eq!(t.get(0, 0), Some(1.0));
            assert_eq!(t.get(axis, axis), Some(1.0));
        }
    }

    #[test]
    fn test_rotate_ignores_projective_angle() {
        let t = Transform::default().rotate(&Tuple::quaternion([1.0, 0.0, 0.0, 0.0])).unwrap();
        assert_eq!(t, Transform::default());
    }

    #[test]
    fn test_rotate_composes_in_axis_order() {
        let angles = Tuple::quaternion([0.0, 0.4, -0.7, 1.1]);
        let single = |axis: usize| {
            let mut v = [0.0; 4];
            v[axis] = angles[axis];
            Transform::default().rotate(&Tuple::quaternion(v)).unwrap()
        };
        let expected = single(1).multiply(&single(2)).unwrap().multiply(&single(3)).unwrap();
        let combined = Transform::default().rotate(&angles).unwrap();
        assert!(combined.approx_eq(&expected, EPS));
    }

    #[test]
    fn test_rotate_unsupported() {
        assert_eq!(
            Transform::new(Rank::Octonion).rotate(&Tuple::zeros(Rank::Octonion)),
            Err(ReciprocalError::UnsupportedRotationDimension(Rank::Octonion))
        );
        assert_eq!(
            Transform::new(Rank::Empty).rotate(&Tuple::zeros(Rank::Empty)),
            Err(ReciprocalError::UnsupportedRotationDimension(Rank::Empty))
        );
        assert!(matches!(
            Transform::default().rotate(&Tuple::octonion([0.0; 8])),
            Err(ReciprocalError::DimensionMismatch { expected: 4, got: 8 })
        ));
    }

    #[test]
    fn test_apply_quarter_turn() {
        let t = Transform::default()
            .rotate(&Tuple::quaternion([0.0, FRAC_PI_2, 0.0, 0.0]))
            .unwrap();
        let p = t.apply(&Tuple::quaternion([1.0, 0.0, 1.0, 0.0])).unwrap();
        assert!(p.approx_eq(&Tuple::quaternion([1.0, 0.0, 0.0, -1.0]), EPS));
    }

    #[test]
    fn test_apply_rank_mismatch() {
        assert_eq!(
            Transform::default().apply(&Tuple::complex([1.0, 1.0])),
            Err(ReciprocalError::DimensionMismatch { expected: 4, got: 2 })
        );
    }

    #[test]
    fn test_try_from_rows() {
        assert_eq!(
            Transform::try_from(vec![vec![1.0; 3]; 3]),
            Err(ReciprocalError::InvalidDimension(3))
        );
        assert_eq!(
            Transform::try_from(vec![vec![1.0, 0.0], vec![1.0]]),
            Err(ReciprocalError::DimensionMismatch { expected: 2, got: 1 })
        );
        let empty = Transform::try_from(Vec::new()).unwrap();
        assert_eq!(empty.rank(), Rank::Empty);
    }

    #[test]
    fn test_serde_rows() {
        let t = Transform::new(Rank::Complex).scale(2.0);
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "[[2.0,0.0],[0.0,2.0]]");
        assert_eq!(serde_json::from_str::<Transform>(&json).unwrap(), t);
    }

    #[test]
    fn test_display() {
        let t = Transform::new(Rank::Complex);
        assert_eq!(format!("{t}"), "1,0\n0,1\n");

        // Columns print as lines, so the translation row reads down the first column.
        let t = Transform::new(Rank::Complex).translate_values(&[1.0, 2.5]).unwrap();
        assert_eq!(t.row(0), Some(&[1.0, 2.5][..]));
        assert_eq!(format!("{t}"), "1,0\n2.5,1\n");
        assert_eq!(format!("{}", Transform::new(Rank::Empty)), "");
    }
}
