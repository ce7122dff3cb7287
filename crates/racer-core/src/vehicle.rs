// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Vehicle state and kinematics.
//!
//! Heading convention: steer 0 points along `+y`; positive steer turns toward
//! `+x`. The forward unit vector is `(sin(steer), cos(steer))`.

use racer_math::{Fixed, FixedError, Trig, Vec2};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SimConfig;

/// Index of the left side edge (`v1 → v2`) in [`polygon_edges`] output.
pub const LEFT_EDGE: usize = 1;
/// Index of the right side edge (`v3 → v0`) in [`polygon_edges`] output.
pub const RIGHT_EDGE: usize = 3;

/// Discrete steering decision returned by the decision function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SteerCommand {
    /// Keep the current steer.
    Straight,
    /// Decrease steer by one step (toward `-x`).
    Left,
    /// Increase steer by one step (toward `+x`).
    Right,
}

/// Invalid vehicle parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VehicleError {
    /// Speed outside `[0, max_speed]`.
    #[error("speed {speed} outside [0, {max}]")]
    SpeedOutOfRange {
        /// Requested speed.
        speed: Fixed,
        /// Configured maximum.
        max: Fixed,
    },
    /// Half-length or half-width not strictly positive.
    #[error("vehicle half extents must be positive")]
    NonPositiveExtent,
}

/// The simulated vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vehicle {
    /// Center of the body.
    pub position: Vec2,
    /// Half-length along the heading.
    pub length: Fixed,
    /// Half-width across the heading.
    pub width: Fixed,
    /// Heading in radians; expected within `[-steer_bound, steer_bound]`.
    #[serde(default)]
    pub steer: Fixed,
    /// Distance travelled per tick.
    pub speed: Fixed,
}

impl Vehicle {
    /// Creates a vehicle with zero steer after checking its parameters.
    pub fn new(
        config: &SimConfig,
        position: Vec2,
        length: Fixed,
        width: Fixed,
        speed: Fixed,
    ) -> Result<Self, VehicleError> {
        let vehicle = Self {
            position,
            length,
            width,
            steer: Fixed::ZERO,
            speed,
        };
        vehicle.validate(config)?;
        Ok(vehicle)
    }

    /// Checks extents and speed range.
    pub fn validate(&self, config: &SimConfig) -> Result<(), VehicleError> {
        if self.length <= Fixed::ZERO || self.width <= Fixed::ZERO {
            return Err(VehicleError::NonPositiveExtent);
        }
        if self.speed.is_negative() || self.speed > config.max_speed {
            return Err(VehicleError::SpeedOutOfRange {
                speed: self.speed,
                max: config.max_speed,
            });
        }
        Ok(())
    }
}

/// Applies one steering command.
///
/// Returns whether the resulting steer lies within `[-steer_bound,
/// steer_bound]`. The new steer is kept either way; the caller decides what to
/// do with a violation.
pub fn control(
    config: &SimConfig,
    vehicle: &mut Vehicle,
    command: SteerCommand,
) -> Result<bool, FixedError> {
    vehicle.steer = match command {
        SteerCommand::Straight => vehicle.steer,
        SteerCommand::Left => vehicle.steer.checked_sub(config.steer_step)?,
        SteerCommand::Right => vehicle.steer.checked_add(config.steer_step)?,
    };
    Ok(vehicle.steer.abs() <= config.steer_bound)
}

/// Integrates one tick: `position += speed * (sin(steer), cos(steer))`.
///
/// Pass the precise trig tier; error here compounds across ticks.
pub fn drive(trig: &impl Trig, vehicle: &mut Vehicle) -> Result<(), FixedError> {
    let (sin, cos) = trig.sin_cos(vehicle.steer)?;
    let velocity = Vec2::new(sin, cos).scale(vehicle.speed)?;
    vehicle.position = vehicle.position.checked_add(velocity)?;
    Ok(())
}

/// Corners of the oriented body: front-right, front-left, back-left,
/// back-right.
///
/// Only two corners are rotated; the other two are their reflections through
/// the center.
pub fn vertices(trig: &impl Trig, vehicle: &Vehicle) -> Result<[Vec2; 4], FixedError> {
    let (sin, cos) = trig.sin_cos(vehicle.steer)?;
    let (w, l) = (vehicle.width, vehicle.length);

    // Local (lateral, forward) maps to lateral * (cos, -sin) + forward * (sin, cos).
    let w_cos = w.checked_mul(cos)?;
    let w_sin = w.checked_mul(sin)?;
    let l_cos = l.checked_mul(cos)?;
    let l_sin = l.checked_mul(sin)?;
    let front_right = Vec2::new(w_cos.checked_add(l_sin)?, l_cos.checked_sub(w_sin)?);
    let front_left = Vec2::new(l_sin.checked_sub(w_cos)?, l_cos.checked_add(w_sin)?);

    let c = vehicle.position;
    Ok([
        c.checked_add(front_right)?,
        c.checked_add(front_left)?,
        c.checked_sub(front_right)?,
        c.checked_sub(front_left)?,
    ])
}

/// Closed-polygon edges: edge `i` runs `v[i] → v[(i + 1) % 4]`.
pub fn polygon_edges(v: &[Vec2; 4]) -> [(Vec2, Vec2); 4] {
    [(v[0], v[1]), (v[1], v[2]), (v[2], v[3]), (v[3], v[0])]
}
