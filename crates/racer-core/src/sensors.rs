// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sensor fusion: grid walls and filtered obstacles into one reading per ray.
//!
//! Readings are `Option<Fixed>`: `None` means the ray hit nothing. A
//! zero-distance obstacle hit is `Some(0)` and stays distinguishable from a
//! miss until [`Sensors::to_wire`] flattens both to `0` for the decision
//! function. A zero wall distance is fused as a wall miss.

use racer_geom::{distance, intersects};
use racer_math::{Fixed, Trig, Vec2};
use serde::{Deserialize, Serialize};

use crate::config::{SimConfig, NUM_RAYS};
use crate::error::SimError;
use crate::filter::filter_near;
use crate::obstacle::Obstacle;
use crate::rays::{build_rays, Ray, Rays};
use crate::vehicle::{polygon_edges, Vehicle};

/// Which grid wall, if any, is within ray range of the vehicle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Wall {
    /// Neither wall is in range.
    #[default]
    None,
    /// The wall at `x = 0`.
    Left,
    /// The wall at `x = grid_width`.
    Right,
}

impl Wall {
    /// Boundary segment of this wall, running the full grid height.
    pub fn segment(self, config: &SimConfig) -> Option<(Vec2, Vec2)> {
        let x = match self {
            Self::None => return None,
            Self::Left => Fixed::ZERO,
            Self::Right => config.grid_width,
        };
        Some((Vec2::new(x, Fixed::ZERO), Vec2::new(x, config.grid_height)))
    }
}

/// Fused per-ray distances, in fan order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Sensors {
    readings: [Option<Fixed>; NUM_RAYS],
}

impl Sensors {
    /// Wraps raw readings.
    pub const fn new(readings: [Option<Fixed>; NUM_RAYS]) -> Self {
        Self { readings }
    }

    /// Per-ray readings; `None` is a miss.
    pub const fn readings(&self) -> &[Option<Fixed>; NUM_RAYS] {
        &self.readings
    }

    /// External format: misses become `0`.
    pub fn to_wire(&self) -> [Fixed; NUM_RAYS] {
        self.readings.map(Option::unwrap_or_default)
    }
}

/// Clamps a hit distance into `[0, ray_length]`.
fn clamp_reading(config: &SimConfig, d: Fixed) -> Fixed {
    d.clamp(Fixed::ZERO, config.ray_length)
}

/// Nearest obstacle edge hit by `ray`, scanning every edge of every candidate.
pub fn closest_obstacle_hit(
    config: &SimConfig,
    ray: &Ray,
    obstacles: &[&Obstacle],
) -> Result<Option<Fixed>, SimError> {
    let mut closest: Option<Fixed> = None;
    for obstacle in obstacles {
        let corners = obstacle.vertices(config)?;
        for (a, b) in polygon_edges(&corners) {
            if !intersects(ray.p, ray.q, a, b)? {
                continue;
            }
            let d = clamp_reading(
                config,
                distance(ray.p, a, b, ray.cos_theta, ray.sin_theta)?,
            );
            closest = Some(closest.map_or(d, |c| c.min(d)));
        }
    }
    Ok(closest)
}

/// Wall within `ray_length` of the vehicle center. Left wins when both are.
pub fn near_wall(config: &SimConfig, vehicle: &Vehicle) -> Wall {
    let x = vehicle.position.x;
    if x <= config.ray_length {
        return Wall::Left;
    }
    match config.grid_width.checked_sub(config.ray_length) {
        Ok(right_band) if x >= right_band => Wall::Right,
        _ => Wall::None,
    }
}

/// Per-ray distance to `wall`, or `None` when no wall is near.
///
/// A ray counts as hitting the wall exactly when its far endpoint lies on or
/// beyond the wall line; no general intersection test runs here.
pub fn wall_distances(
    config: &SimConfig,
    wall: Wall,
    rays: &Rays,
) -> Result<Option<[Option<Fixed>; NUM_RAYS]>, SimError> {
    let Some((a, b)) = wall.segment(config) else {
        return Ok(None);
    };
    let mut out = [None; NUM_RAYS];
    for (slot, ray) in out.iter_mut().zip(rays) {
        let reaches = match wall {
            Wall::Left => ray.q.x <= Fixed::ZERO,
            _ => ray.q.x >= config.grid_width,
        };
        if reaches {
            let d = distance(ray.p, a, b, ray.cos_theta, ray.sin_theta)?;
            *slot = Some(clamp_reading(config, d));
        }
    }
    Ok(Some(out))
}

/// Combines a wall and an obstacle reading for one ray. Ties go to the wall.
///
/// A zero wall distance (center on or past the wall line) counts as a wall
/// miss so it cannot mask an obstacle.
fn fuse(wall: Option<Fixed>, obstacle: Option<Fixed>) -> Option<Fixed> {
    match (wall, obstacle) {
        (None, e) => e,
        (Some(w), e) if w.is_zero() => e,
        (Some(w), None) => Some(w),
        (Some(w), Some(e)) => Some(w.min(e)),
    }
}

/// Full sensing pass for the vehicle's current pose.
pub fn compute_sensors(
    config: &SimConfig,
    trig: &impl Trig,
    vehicle: &Vehicle,
    obstacles: &[Obstacle],
) -> Result<Sensors, SimError> {
    let rays = build_rays(config, trig, vehicle.position, vehicle.steer)?;
    let near = filter_near(config, vehicle, obstacles)?;
    let walls = wall_distances(config, near_wall(config, vehicle), &rays)?;

    let mut readings = [None; NUM_RAYS];
    for (i, ray) in rays.iter().enumerate() {
        let e = closest_obstacle_hit(config, ray, &near)?;
        readings[i] = match walls {
            Some(w) => fuse(w[i], e),
            None => e,
        };
    }
    Ok(Sensors::new(readings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use racer_math::FastTrig;

    fn car_at(x: i64, y: i64) -> Vehicle {
        Vehicle {
            position: Vec2::from_ints(x, y),
            length: Fixed::from_int(32),
            width: Fixed::from_int(16),
            steer: Fixed::ZERO,
            speed: Fixed::ZERO,
        }
    }

    #[test]
    fn fusion_prefers_the_nearer_reading_and_the_wall_on_ties() {
        let (three, five) = (Fixed::from_int(3), Fixed::from_int(5));
        assert_eq!(fuse(None, Some(five)), Some(five));
        assert_eq!(fuse(Some(three), None), Some(three));
        assert_eq!(fuse(Some(three), Some(five)), Some(three));
        assert_eq!(fuse(Some(five), Some(three)), Some(three));
        assert_eq!(fuse(Some(three), Some(three)), Some(three));
    }

    #[test]
    fn zero_wall_distance_does_not_mask_the_obstacle() {
        let five = Fixed::from_int(5);
        assert_eq!(fuse(Some(Fixed::ZERO), Some(five)), Some(five));
        assert_eq!(fuse(Some(Fixed::ZERO), None), None);
    }

    #[test]
    fn vehicle_on_the_left_wall_line_still_sees_the_obstacle_ahead() {
        let config = SimConfig::default();
        let vehicle = car_at(0, 200);
        // Back edge at y = 300 - 32 = 268, spanning x in [-6, 26].
        let obstacles = [Obstacle::from_units(10, 300)];
        assert_eq!(near_wall(&config, &vehicle), Wall::Left);

        let sensors = compute_sensors(&config, &FastTrig, &vehicle, &obstacles).expect("sensors");
        assert_eq!(
            sensors.readings(),
            &[None, None, Some(Fixed::from_int(68)), None, None]
        );
        assert_eq!(sensors.to_wire()[2], Fixed::from_int(68));
    }

    #[test]
    fn near_wall_bands() {
        let config = SimConfig::default();
        assert_eq!(near_wall(&config, &car_at(150, 0)), Wall::Left);
        assert_eq!(near_wall(&config, &car_at(151, 0)), Wall::None);
        assert_eq!(near_wall(&config, &car_at(249, 0)), Wall::None);
        assert_eq!(near_wall(&config, &car_at(250, 0)), Wall::Right);
    }

    #[test]
    fn no_wall_means_no_wall_distances() {
        let config = SimConfig::default();
        let rays = build_rays(&config, &FastTrig, Vec2::from_ints(200, 200), Fixed::ZERO)
            .expect("rays");
        assert_eq!(wall_distances(&config, Wall::None, &rays), Ok(None));
    }

    #[test]
    fn obstacle_dead_ahead_reports_gap_to_its_back_edge() {
        let config = SimConfig::default();
        let vehicle = car_at(200, 200);
        // Back edge at y = 300 - 32 = 268.
        let obstacles = [Obstacle::from_units(200, 300)];
        let sensors = compute_sensors(&config, &FastTrig, &vehicle, &obstacles).expect("sensors");
        assert_eq!(sensors.readings()[2], Some(Fixed::from_int(68)));
        assert_eq!(sensors.readings()[0], None);
        assert_eq!(sensors.to_wire()[0], Fixed::ZERO);
    }

    #[test]
    fn right_wall_is_seen_by_the_right_rays() {
        let config = SimConfig::default();
        let sensors =
            compute_sensors(&config, &FastTrig, &car_at(300, 200), &[]).expect("sensors");
        let r = sensors.readings();
        assert!(r[0].is_none() && r[1].is_none() && r[2].is_none());
        let d = r[4].expect("+50° ray reaches x = 400");
        // 100 / sin(50°) ≈ 130.54
        assert!((d.to_f64() - 130.54).abs() < 0.05);
        assert!(r[3].is_none());
    }
}
