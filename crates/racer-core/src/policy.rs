// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Decision boundary between sensing and control.

use racer_math::Fixed;
use serde::{Deserialize, Serialize};

use crate::config::NUM_RAYS;
use crate::vehicle::SteerCommand;

/// Maps one tick's wire-format sensor vector to a steering command.
///
/// `0` in the input means "no hit". Implementations may keep state between
/// ticks.
pub trait Decide {
    /// Chooses the command for this tick.
    fn decide(&mut self, sensors: &[Fixed; NUM_RAYS]) -> SteerCommand;
}

impl<F> Decide for F
where
    F: FnMut(&[Fixed; NUM_RAYS]) -> SteerCommand,
{
    fn decide(&mut self, sensors: &[Fixed; NUM_RAYS]) -> SteerCommand {
        self(sensors)
    }
}

/// Reference policy: steer away from the nearer side once anything is within
/// `threshold`, otherwise go straight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearancePolicy {
    /// Readings at or below this distance trigger a turn.
    pub threshold: Fixed,
}

impl Default for ClearancePolicy {
    fn default() -> Self {
        Self {
            threshold: Fixed::from_int(60),
        }
    }
}

fn nearest_hit(readings: &[Fixed]) -> Option<Fixed> {
    readings.iter().copied().filter(|d| !d.is_zero()).min()
}

impl Decide for ClearancePolicy {
    fn decide(&mut self, sensors: &[Fixed; NUM_RAYS]) -> SteerCommand {
        match nearest_hit(sensors) {
            Some(d) if d <= self.threshold => {}
            _ => return SteerCommand::Straight,
        }
        // Rays 0..2 look toward -x, rays 3..5 toward +x.
        match (nearest_hit(&sensors[..2]), nearest_hit(&sensors[3..])) {
            (Some(_), None) => SteerCommand::Right,
            (None, Some(_)) => SteerCommand::Left,
            (Some(l), Some(r)) if r < l => SteerCommand::Left,
            _ => SteerCommand::Right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wire(values: [i64; NUM_RAYS]) -> [Fixed; NUM_RAYS] {
        values.map(Fixed::from_int)
    }

    #[test]
    fn clear_road_goes_straight() {
        let mut policy = ClearancePolicy::default();
        assert_eq!(policy.decide(&wire([0, 0, 0, 0, 0])), SteerCommand::Straight);
        assert_eq!(policy.decide(&wire([90, 0, 140, 0, 61])), SteerCommand::Straight);
    }

    #[test]
    fn turns_away_from_the_closer_side() {
        let mut policy = ClearancePolicy::default();
        assert_eq!(policy.decide(&wire([40, 0, 0, 0, 0])), SteerCommand::Right);
        assert_eq!(policy.decide(&wire([0, 0, 0, 0, 40])), SteerCommand::Left);
        assert_eq!(policy.decide(&wire([30, 0, 0, 20, 0])), SteerCommand::Left);
        assert_eq!(policy.decide(&wire([0, 0, 50, 0, 0])), SteerCommand::Right);
    }

    #[test]
    fn closures_decide_too() {
        let mut calls = 0;
        let mut always_left = |_: &[Fixed; NUM_RAYS]| {
            calls += 1;
            SteerCommand::Left
        };
        assert_eq!(always_left.decide(&[Fixed::ZERO; NUM_RAYS]), SteerCommand::Left);
        assert_eq!(calls, 1);
    }
}
