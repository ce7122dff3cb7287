// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Obstacle motion between ticks.

use racer_math::Fixed;

use crate::config::SimConfig;
use crate::obstacle::Obstacle;

/// Produces the next tick's obstacle set from the current one.
pub trait ObstacleMotion {
    /// Advances every obstacle by one tick.
    fn advance(&mut self, obstacles: &[Obstacle]) -> Vec<Obstacle>;
}

/// Obstacles stand still.
#[derive(Debug, Clone, Copy, Default)]
pub struct Static;

impl ObstacleMotion for Static {
    fn advance(&mut self, obstacles: &[Obstacle]) -> Vec<Obstacle> {
        obstacles.to_vec()
    }
}

/// Obstacles scroll toward `y = 0` and re-enter at the top of the grid.
///
/// An obstacle whose center would drop below `car_height` (its body leaving
/// the grid) respawns at `y = grid_height` keeping its `x`.
#[derive(Debug, Clone)]
pub struct ScrollMotion {
    speed: u128,
    floor: u128,
    top: u128,
}

impl ScrollMotion {
    /// Scrolls by `|speed|` per tick within `config`'s grid.
    pub fn new(config: &SimConfig, speed: Fixed) -> Self {
        Self {
            speed: speed.mag(),
            floor: config.car_height.abs().mag(),
            top: config.grid_height.abs().mag(),
        }
    }
}

impl ObstacleMotion for ScrollMotion {
    fn advance(&mut self, obstacles: &[Obstacle]) -> Vec<Obstacle> {
        obstacles
            .iter()
            .map(|o| {
                let y = match o.y.checked_sub(self.speed) {
                    Some(y) if y >= self.floor => y,
                    _ => self.top,
                };
                Obstacle { x: o.x, y }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolls_down_then_wraps_to_the_top() {
        let config = SimConfig::default();
        let mut motion = ScrollMotion::new(&config, Fixed::from_int(10));
        let start = [Obstacle::from_units(50, 500), Obstacle::from_units(70, 41)];
        let next = motion.advance(&start);
        assert_eq!(next[0], Obstacle::from_units(50, 490));
        // 41 - 10 = 31 < car_height (32): respawn.
        assert_eq!(next[1], Obstacle::from_units(70, 1000));
    }

    #[test]
    fn landing_exactly_on_the_floor_stays() {
        let config = SimConfig::default();
        let mut motion = ScrollMotion::new(&config, Fixed::from_int(10));
        let next = motion.advance(&[Obstacle::from_units(0, 42)]);
        assert_eq!(next[0], Obstacle::from_units(0, 32));
    }

    #[test]
    fn static_motion_is_identity() {
        let obstacles = [Obstacle::from_units(1, 2)];
        assert_eq!(Static.advance(&obstacles), obstacles.to_vec());
    }
}
