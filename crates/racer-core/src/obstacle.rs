// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Axis-aligned obstacles ("enemies").

use racer_math::{Fixed, FixedError, Vec2};
use serde::{Deserialize, Serialize};

use crate::config::SimConfig;

/// Center of an unrotated rectangle with half extents
/// `(config.car_width, config.car_height)`.
///
/// Coordinates are raw Q64.64 magnitudes and therefore never negative. On the
/// wire they are written as decimal strings like any other fixed-point value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Obstacle {
    /// Raw magnitude of the center x coordinate.
    #[serde(with = "raw_magnitude")]
    pub x: u128,
    /// Raw magnitude of the center y coordinate.
    #[serde(with = "raw_magnitude")]
    pub y: u128,
}

impl Obstacle {
    /// Places an obstacle at integer grid units.
    pub fn from_units(x: u64, y: u64) -> Self {
        Self {
            x: Fixed::from_uint(x).mag(),
            y: Fixed::from_uint(y).mag(),
        }
    }

    /// Center as a fixed-point vector.
    pub fn center(&self) -> Vec2 {
        Vec2::new(Fixed::from_raw(self.x), Fixed::from_raw(self.y))
    }

    /// Rectangle corners in the same order as vehicle vertices: front-right,
    /// front-left, back-left, back-right ("front" is `+y`).
    pub fn vertices(&self, config: &SimConfig) -> Result<[Vec2; 4], FixedError> {
        let c = self.center();
        let (w, h) = (config.car_width, config.car_height);
        Ok([
            Vec2::new(c.x.checked_add(w)?, c.y.checked_add(h)?),
            Vec2::new(c.x.checked_sub(w)?, c.y.checked_add(h)?),
            Vec2::new(c.x.checked_sub(w)?, c.y.checked_sub(h)?),
            Vec2::new(c.x.checked_add(w)?, c.y.checked_sub(h)?),
        ])
    }
}

mod raw_magnitude {
    use racer_math::Fixed;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub(super) fn serialize<S: Serializer>(raw: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        Fixed::from_raw(*raw).serialize(serializer)
    }

    pub(super) fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let value = Fixed::deserialize(deserializer)?;
        if value.is_negative() {
            return Err(D::Error::custom(format!(
                "obstacle coordinate must be non-negative, got {value}"
            )));
        }
        Ok(value.mag())
    }
}
