//! Unit operator tuples for 3D work in homogeneous coordinates.
//!
//! The coordinate system is X to the right, Y up and Z into the screen, with
//! rotation by the right-hand rule. X coincides with the real axis for
//! rotational operators; I is the vertical plane, J is orthogonal to the real
//! axis and K is the horizontal plane.

use std::f64::consts::FRAC_PI_2;

use crate::tuple::Tuple;

/// Quarter turn in the I plane.
pub const I: Tuple = Tuple::quaternion([1.0, 0.0, 0.0, FRAC_PI_2]);
/// Quarter turn in the J plane.
pub const J: Tuple = Tuple::quaternion([1.0, FRAC_PI_2, 0.0, 0.0]);
/// Quarter turn in the K plane.
pub const K: Tuple = Tuple::quaternion([1.0, 0.0, FRAC_PI_2, 0.0]);

/// Unit step along X.
pub const X: Tuple = Tuple::quaternion([1.0, 1.0, 0.0, 0.0]);
/// Unit step along Y.
pub const Y: Tuple = Tuple::quaternion([1.0, 0.0, 1.0, 0.0]);
/// Unit step along Z.
pub const Z: Tuple = Tuple::quaternion([1.0, 0.0, 0.0, 1.0]);
