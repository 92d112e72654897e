//! Space-time coordinates.

use serde::{Deserialize, Serialize};

use crate::dual::Dual;
use crate::rank::Rank;

/// A full coordinate: a spatial and a temporal `Dual`.
///
/// Location holds no derived state. Its parts are replaced wholesale; element
/// edits happen on the tuples before they are assembled.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    space: Dual,
    time: Dual,
}

impl Location {
    /// Zero rank-4 space and time.
    pub fn new() -> Self {
        Self {
            space: Dual::new(Rank::Quaternion, 0.0),
            time: Dual::new(Rank::Quaternion, 0.0),
        }
    }

    pub fn from_duals(space: Dual, time: Dual) -> Self {
        Self { space, time }
    }

    /// Location in 3D space.
    pub fn space(&self) -> &Dual {
        &self.space
    }

    /// Location in 3D time.
    pub fn time(&self) -> &Dual {
        &self.time
    }

    pub fn set(&mut self, space: Dual, time: Dual) -> &mut Self {
        self.space = space;
        self.time = time;
        self
    }

    pub fn set_space(&mut self, space: Dual) -> &mut Self {
        self.space = space;
        self
    }

    pub fn set_time(&mut self, time: Dual) -> &mut Self {
        self.time = time;
        self
    }
}

impl Default for Location {
    fn default() -> Self {
        Self::new()
    }
}
