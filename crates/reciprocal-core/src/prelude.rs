//! Convenience re-exports for common reciprocal-core types.
//!
//! ```rust
//! use reciprocal_core::prelude::*;
//! ```

pub use crate::Rank;
pub use crate::Tuple;
pub use crate::Transform;
pub use crate::Dual;
pub use crate::Location;
pub use crate::ReciprocalError;
pub use crate::Result;
