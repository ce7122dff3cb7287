// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sensor ray fan.

use racer_math::{Fixed, FixedError, Trig, Vec2};
use serde::Serialize;

use crate::config::{SimConfig, NUM_RAYS, RAY_OFFSETS};

/// One sensor ray: a segment from the vehicle center to `ray_length` ahead
/// along `theta`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Ray {
    /// Absolute angle (heading plus fan offset).
    pub theta: Fixed,
    /// `cos(theta)`, fast tier.
    pub cos_theta: Fixed,
    /// `sin(theta)`, fast tier.
    pub sin_theta: Fixed,
    /// Origin.
    pub p: Vec2,
    /// Far endpoint.
    pub q: Vec2,
}

/// The fan, ordered by offset `{-50°, -30°, 0°, +30°, +50°}`.
pub type Rays = [Ray; NUM_RAYS];

/// Builds the fan for a pose. Index `i` of every sensor array corresponds to
/// `RAY_OFFSETS[i]`.
pub fn build_rays(
    config: &SimConfig,
    trig: &impl Trig,
    position: Vec2,
    heading: Fixed,
) -> Result<Rays, FixedError> {
    let mut rays = [Ray::default(); NUM_RAYS];
    for (ray, offset) in rays.iter_mut().zip(RAY_OFFSETS) {
        let theta = heading.checked_add(offset)?;
        let (sin_theta, cos_theta) = trig.sin_cos(theta)?;
        let reach = Vec2::new(sin_theta, cos_theta).scale(config.ray_length)?;
        *ray = Ray {
            theta,
            cos_theta,
            sin_theta,
            p: position,
            q: position.checked_add(reach)?,
        };
    }
    Ok(rays)
}
