// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Hard collision gate run at the start of every tick.

use racer_geom::intersects;
use racer_math::Trig;
use tracing::warn;

use crate::config::SimConfig;
use crate::error::{Collision, SimError};
use crate::filter::filter_near_indexed;
use crate::obstacle::Obstacle;
use crate::sensors::{near_wall, Wall};
use crate::vehicle::{polygon_edges, vertices, Vehicle, LEFT_EDGE, RIGHT_EDGE};

/// Fails with [`SimError::Collision`] if the vehicle body touches a near wall
/// or any filtered obstacle.
///
/// Only the vehicle side facing the near wall is tested against it. Against
/// obstacles every vehicle edge is tested against every obstacle edge; the
/// first obstacle found (in slice order) is reported.
pub fn check_collision(
    config: &SimConfig,
    trig: &impl Trig,
    vehicle: &Vehicle,
    obstacles: &[Obstacle],
) -> Result<(), SimError> {
    let edges = polygon_edges(&vertices(trig, vehicle)?);

    let wall = near_wall(config, vehicle);
    if let Some((a, b)) = wall.segment(config) {
        let side = if wall == Wall::Left { LEFT_EDGE } else { RIGHT_EDGE };
        let (p, q) = edges[side];
        if intersects(p, q, a, b)? {
            warn!(?wall, "vehicle hit wall");
            return Err(SimError::Collision(Collision::Wall(wall)));
        }
    }

    for (index, obstacle) in filter_near_indexed(config, vehicle, obstacles)? {
        let obstacle_edges = polygon_edges(&obstacle.vertices(config)?);
        for (p, q) in edges {
            for (a, b) in obstacle_edges {
                if intersects(p, q, a, b)? {
                    warn!(index, center = ?obstacle.center(), "vehicle hit obstacle");
                    return Err(SimError::Collision(Collision::Obstacle { index }));
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use racer_math::{FastTrig, Fixed, Vec2};

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
    fn touching_obstacle_collides_and_one_unit_away_passes() {
        let config = SimConfig::default();
        let vehicle = car_at(200, 200);
        assert_eq!(
            check_collision(&config, &FastTrig, &vehicle, &[Obstacle::from_units(232, 200)]),
            Err(SimError::Collision(Collision::Obstacle { index: 0 }))
        );
        assert_eq!(
            check_collision(&config, &FastTrig, &vehicle, &[Obstacle::from_units(233, 200)]),
            Ok(())
        );
    }

    #[test]
    fn reports_the_slice_index_of_the_hit_obstacle() {
        let config = SimConfig::default();
        let obstacles = [
            Obstacle::from_units(390, 900),
            Obstacle::from_units(200, 250),
        ];
        assert_eq!(
            check_collision(&config, &FastTrig, &car_at(200, 200), &obstacles),
            Err(SimError::Collision(Collision::Obstacle { index: 1 }))
        );
    }

    #[test]
    fn left_edge_on_the_wall_collides() {
        let config = SimConfig::default();
        assert_eq!(
            check_collision(&config, &FastTrig, &car_at(16, 200), &[]),
            Err(SimError::Collision(Collision::Wall(Wall::Left)))
        );
        assert_eq!(check_collision(&config, &FastTrig, &car_at(17, 200), &[]), Ok(()));
    }

    #[test]
    fn right_edge_on_the_wall_collides() {
        let config = SimConfig::default();
        assert_eq!(
            check_collision(&config, &FastTrig, &car_at(384, 200), &[]),
            Err(SimError::Collision(Collision::Wall(Wall::Right)))
        );
        assert_eq!(check_collision(&config, &FastTrig, &car_at(383, 200), &[]), Ok(()));
    }
}
