// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use racer_math::{Fixed, FixedError, Vec2};

/// Axis-aligned bounding box in grid coordinates.
///
/// Invariants:
/// - `min` components are less than or equal to `max` components.
/// - Bounds are inclusive: points on a face are inside.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Aabb {
    min: Vec2,
    max: Vec2,
}

impl Aabb {
    /// Returns the minimum corner.
    #[must_use]
    pub fn min(&self) -> Vec2 {
        self.min
    }

    /// Returns the maximum corner.
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.max
    }

    /// Builds an AABB centered at `center` with half-extents `hx, hy`.
    ///
    /// Negative extents are treated by magnitude.
    pub fn from_center_half_extents(
        center: Vec2,
        hx: Fixed,
        hy: Fixed,
    ) -> Result<Self, FixedError> {
        let he = Vec2::new(hx.abs(), hy.abs());
        Ok(Self {
            min: center.checked_sub(he)?,
            max: center.checked_add(he)?,
        })
    }

    /// Returns `true` if `p` lies inside or on the boundary.
    #[must_use]
    pub fn contains_point(&self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }
}
