//! # reciprocal-core
//!
//! Coordinate algebra for the reciprocal system model.
//!
//! Provides the fixed-rank value types the physics code is built on:
//! - `Rank`: the closed set of algebra ranks (0, 1, 2, 4, 8)
//! - `Tuple`: real vectors used as homogeneous coordinates `[w x y z]`
//! - `Transform`: square operators composed from scale, translate and rotate
//! - `Dual` and `Location`: reciprocal pairs and space-time coordinates

pub mod rank;
pub mod tuple;
pub mod axes;
pub mod transform;
pub mod dual;
pub mod location;
pub mod error;
pub mod prelude;

pub use rank::Rank;
pub use tuple::Tuple;
pub use transform::Transform;
pub use dual::Dual;
pub use location::Location;
pub use error::ReciprocalError;

pub type Result<T> = std::result::Result<T, ReciprocalError>;
