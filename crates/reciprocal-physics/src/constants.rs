//! Reciprocal system constants.

/// Larson's inter-regional ratio, electric (1D).
pub const IRR1D: f64 = 128.0 * (1.0 + 1.0 / 9.0);

/// Larson's inter-regional ratio, magnetic (2D).
pub const IRR: f64 = 128.0 * (1.0 + 2.0 / 9.0);

/// Highest atomic number.
pub const Z_LIMIT: u32 = 118;

/// Mass limit, two units per atomic number.
pub const MASS_LIMIT: u32 = Z_LIMIT * 2;

/// Standard atomic mass (u) of element `z` at magnetic ionization `ion`.
pub fn standard_mass(z: u32, ion: i32) -> f64 {
    let z = f64::from(z);
    2.0 * z + f64::from(ion) * z * z / IRR
}

/// First unstable atomic number at a magnetic ionization level.
///
/// Levels below 1 are unbounded and yield `Z_LIMIT`.
pub fn unstable_element(magnetic_ionization_level: i32) -> u32 {
    if magnetic_ionization_level < 1 {
        return Z_LIMIT;
    }
    let level = f64::from(magnetic_ionization_level);
    let z_limit = f64::from(Z_LIMIT);
    let root = (z_limit * 2.0 * IRR / level + (IRR * IRR) / (level * level)).sqrt();
    (root - IRR / level).ceil() as u32
}
