// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Angle constants in radians, Q64.64, each the exact floor of the true value.

use crate::fixed::Fixed;

/// π.
pub const PI: Fixed = Fixed::from_raw(57_952_155_664_616_982_739);

/// π / 2.
pub const HALF_PI: Fixed = Fixed::from_raw(28_976_077_832_308_491_369);

/// 3π / 2.
pub const THREE_HALF_PI: Fixed = Fixed::from_raw(86_928_233_496_925_474_108);

/// 2π.
pub const TAU: Fixed = Fixed::from_raw(115_904_311_329_233_965_478);

/// 10°.
pub const DEG_10: Fixed = Fixed::from_raw(3_219_564_203_589_832_374);

/// 30°.
pub const DEG_30: Fixed = Fixed::from_raw(9_658_692_610_769_497_123);

/// 50°.
pub const DEG_50: Fixed = Fixed::from_raw(16_097_821_017_949_161_871);

/// 90°.
pub const DEG_90: Fixed = HALF_PI;
