// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Simulation configuration.
//!
//! Grid, obstacle, ray, and steering constants travel together in one
//! [`SimConfig`] value passed into every core operation. The defaults are the
//! compatibility constants; changing any of them changes simulation output.

use racer_math::angle::{DEG_10, DEG_30, DEG_50, DEG_90};
use racer_math::Fixed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Number of sensor rays in the fan.
pub const NUM_RAYS: usize = 5;

/// Angular offsets of the fan relative to the heading, in output order.
pub const RAY_OFFSETS: [Fixed; NUM_RAYS] = [
    Fixed::new(DEG_50.mag(), true),
    Fixed::new(DEG_30.mag(), true),
    Fixed::ZERO,
    DEG_30,
    DEG_50,
];

/// What the tick driver does with a steering command that leaves the bound.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SteerPolicy {
    /// Keep the previous steer.
    #[default]
    Reject,
    /// Keep the out-of-bound steer.
    Apply,
}

/// Error type for configuration loading and validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A length or angle that must be strictly positive was not.
    #[error("{field} must be positive, got {value}")]
    NonPositive {
        /// Offending field name.
        field: &'static str,
        /// Offending value.
        value: Fixed,
    },
    /// Both walls would be in range at once.
    #[error("grid width {grid_width} must exceed twice the ray length {ray_length}")]
    GridTooNarrow {
        /// Configured grid width.
        grid_width: Fixed,
        /// Configured ray length.
        ray_length: Fixed,
    },
    /// Serialization/deserialization failure.
    #[error("config json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Grid, obstacle, ray, and steering constants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Horizontal extent of the grid; walls sit at `x = 0` and `x = grid_width`.
    pub grid_width: Fixed,
    /// Vertical extent of the grid (length of each wall segment).
    pub grid_height: Fixed,
    /// Obstacle half-width.
    pub car_width: Fixed,
    /// Obstacle half-height.
    pub car_height: Fixed,
    /// Length of every sensor ray; upper bound on reported distances.
    pub ray_length: Fixed,
    /// Steer change per `Left`/`Right` command (radians).
    pub steer_step: Fixed,
    /// Steering bound: steer must stay within `[-steer_bound, steer_bound]`.
    pub steer_bound: Fixed,
    /// Maximum vehicle speed.
    pub max_speed: Fixed,
    /// Handling of out-of-bound steering in the tick driver.
    pub steer_policy: SteerPolicy,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_width: Fixed::from_int(400),
            grid_height: Fixed::from_int(1000),
            car_width: Fixed::from_int(16),
            car_height: Fixed::from_int(32),
            ray_length: Fixed::from_int(150),
            steer_step: DEG_10,
            steer_bound: DEG_90,
            max_speed: Fixed::from_int(100),
            steer_policy: SteerPolicy::Reject,
        }
    }
}

impl SimConfig {
    /// Parses and validates a JSON config. Missing fields take defaults.
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the invariants every core operation relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("grid_width", self.grid_width),
            ("grid_height", self.grid_height),
            ("car_width", self.car_width),
            ("car_height", self.car_height),
            ("ray_length", self.ray_length),
            ("steer_step", self.steer_step),
            ("steer_bound", self.steer_bound),
            ("max_speed", self.max_speed),
        ];
        for (field, value) in positive {
            if value <= Fixed::ZERO {
                return Err(ConfigError::NonPositive { field, value });
            }
        }

        // Left takes priority in `near_wall`; a grid this narrow would hide the
        // right wall whenever both are in range.
        let both_walls = self
            .ray_length
            .checked_add(self.ray_length)
            .map_or(true, |span| self.grid_width <= span);
        if both_walls {
            return Err(ConfigError::GridTooNarrow {
                grid_width: self.grid_width,
                ray_length: self.ray_length,
            });
        }
        Ok(())
    }
}
