// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Broad-phase obstacle culling.
//!
//! The box is centered on the vehicle with half extents
//! `(ray_length + car_width, ray_length + car_height)`. Any obstacle with an
//! edge within ray range has its center inside; extras are allowed.

use racer_geom::Aabb;
use racer_math::FixedError;

use crate::config::SimConfig;
use crate::obstacle::Obstacle;
use crate::vehicle::Vehicle;

/// Sensing box around the vehicle (inclusive bounds).
pub fn sensing_box(config: &SimConfig, vehicle: &Vehicle) -> Result<Aabb, FixedError> {
    Aabb::from_center_half_extents(
        vehicle.position,
        config.ray_length.checked_add(config.car_width)?,
        config.ray_length.checked_add(config.car_height)?,
    )
}

/// Indices and references of obstacles whose centers fall in the sensing box,
/// in input order.
pub fn filter_near_indexed<'a>(
    config: &SimConfig,
    vehicle: &Vehicle,
    obstacles: &'a [Obstacle],
) -> Result<Vec<(usize, &'a Obstacle)>, FixedError> {
    let bounds = sensing_box(config, vehicle)?;
    Ok(obstacles
        .iter()
        .enumerate()
        .filter(|(_, o)| bounds.contains_point(o.center()))
        .collect())
}

/// Obstacles whose centers fall in the sensing box, in input order.
pub fn filter_near<'a>(
    config: &SimConfig,
    vehicle: &Vehicle,
    obstacles: &'a [Obstacle],
) -> Result<Vec<&'a Obstacle>, FixedError> {
    Ok(filter_near_indexed(config, vehicle, obstacles)?
        .into_iter()
        .map(|(_, o)| o)
        .collect())
}
