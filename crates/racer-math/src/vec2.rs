// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::ops::Neg;

use serde::{Deserialize, Serialize};

use crate::fixed::{Fixed, FixedError};

/// 2D vector in sign-magnitude Q64.64.
///
/// Plain value type; every operation returns a new vector and reports
/// arithmetic failure instead of saturating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vec2 {
    /// Lateral component.
    pub x: Fixed,
    /// Forward component (heading 0 points along +y).
    pub y: Fixed,
}

impl Vec2 {
    /// The zero vector.
    pub const ZERO: Self = Self {
        x: Fixed::ZERO,
        y: Fixed::ZERO,
    };

    /// Creates a vector from its components.
    pub const fn new(x: Fixed, y: Fixed) -> Self {
        Self { x, y }
    }

    /// Creates a vector from integer components.
    pub fn from_ints(x: i64, y: i64) -> Self {
        Self::new(Fixed::from_int(x), Fixed::from_int(y))
    }

    /// Component-wise sum.
    pub fn checked_add(self, rhs: Self) -> Result<Self, FixedError> {
        Ok(Self::new(self.x.checked_add(rhs.x)?, self.y.checked_add(rhs.y)?))
    }

    /// Component-wise difference.
    pub fn checked_sub(self, rhs: Self) -> Result<Self, FixedError> {
        Ok(Self::new(self.x.checked_sub(rhs.x)?, self.y.checked_sub(rhs.y)?))
    }

    /// Scales both components by `k`.
    pub fn scale(self, k: Fixed) -> Result<Self, FixedError> {
        Ok(Self::new(self.x.checked_mul(k)?, self.y.checked_mul(k)?))
    }

    /// Dot product.
    pub fn dot(self, rhs: Self) -> Result<Fixed, FixedError> {
        self.x.checked_mul(rhs.x)?.checked_add(self.y.checked_mul(rhs.y)?)
    }

    /// 2D cross product (z component of the 3D cross): `x * rhs.y - y * rhs.x`.
    pub fn cross(self, rhs: Self) -> Result<Fixed, FixedError> {
        self.x.checked_mul(rhs.y)?.checked_sub(self.y.checked_mul(rhs.x)?)
    }

    /// Returns `[x, y]` for diagnostics.
    pub fn to_f64_array(self) -> [f64; 2] {
        [self.x.to_f64(), self.y.to_f64()]
    }
}

impl Neg for Vec2 {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}
