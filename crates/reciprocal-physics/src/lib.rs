//! # reciprocal-physics
//!
//! Collaborators of the coordinate algebra:
//! - Larson's inter-regional ratios and the atomic limits derived from them
//! - System configuration (locale, time zone, model database parameters)

pub mod constants;
pub mod config;
pub mod error;

pub use config::RsConfig;
pub use constants::{standard_mass, unstable_element, IRR, IRR1D, MASS_LIMIT, Z_LIMIT};
pub use error::ConfigError;
