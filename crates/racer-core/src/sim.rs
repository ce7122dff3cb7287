// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Per-tick driver.
//!
//! One tick runs, strictly in order: collision gate, ray fan, broad phase,
//! sensor fusion, decision, steering control, velocity integration. The
//! vehicle is only written back once every stage has succeeded.

use racer_math::{FastTrig, PreciseTrig, Trig, Vec2};
use serde::Serialize;
use tracing::{debug, info, instrument};

use crate::collision::check_collision;
use crate::config::{SimConfig, SteerPolicy};
use crate::error::{Collision, SimError};
use crate::motion::ObstacleMotion;
use crate::obstacle::Obstacle;
use crate::policy::Decide;
use crate::sensors::{compute_sensors, Sensors};
use crate::vehicle::{control, drive, SteerCommand, Vehicle};

/// What happened during one successful tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TickReport {
    /// Zero-based tick number.
    pub tick: u64,
    /// Fused sensor readings seen by the decider.
    pub sensors: Sensors,
    /// Command returned by the decider.
    pub command: SteerCommand,
    /// Whether the commanded steer stayed within the bound.
    pub steer_in_bound: bool,
    /// Vehicle center after integration.
    pub position: Vec2,
}

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum Termination {
    /// Every requested tick ran.
    Completed,
    /// A tick's collision gate failed.
    Collision {
        /// What was hit.
        collision: Collision,
    },
}

/// Final state of a multi-tick run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunOutcome {
    /// Ticks that completed without collision.
    pub ticks_completed: u64,
    /// Vehicle after the last completed tick.
    pub vehicle: Vehicle,
    /// Obstacles as they stood when the run stopped.
    pub obstacles: Vec<Obstacle>,
    /// Why the run stopped.
    pub termination: Termination,
}

/// Deterministic tick driver.
///
/// `F` serves the ray fan and vertex rotation; `P` serves velocity
/// integration.
#[derive(Debug, Clone)]
pub struct Simulation<F = FastTrig, P = PreciseTrig> {
    config: SimConfig,
    fast: F,
    precise: P,
    tick_count: u64,
}

impl Simulation {
    /// Driver with the default trig tiers.
    pub fn new(config: SimConfig) -> Self {
        Self::with_trig(config, FastTrig, PreciseTrig)
    }
}

impl<F: Trig, P: Trig> Simulation<F, P> {
    /// Driver with explicit trig providers.
    pub fn with_trig(config: SimConfig, fast: F, precise: P) -> Self {
        Self {
            config,
            fast,
            precise,
            tick_count: 0,
        }
    }

    /// Number of ticks completed so far.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    /// Runs one tick. On success `vehicle` holds the new pose; on any error it
    /// is left as it was.
    #[instrument(skip_all, fields(tick = self.tick_count))]
    pub fn tick(
        &mut self,
        vehicle: &mut Vehicle,
        obstacles: &[Obstacle],
        decider: &mut impl Decide,
    ) -> Result<TickReport, SimError> {
        check_collision(&self.config, &self.fast, vehicle, obstacles)?;

        let sensors = compute_sensors(&self.config, &self.fast, vehicle, obstacles)?;
        let command = decider.decide(&sensors.to_wire());

        let mut next = *vehicle;
        let steer_in_bound = control(&self.config, &mut next, command)?;
        if !steer_in_bound && self.config.steer_policy == SteerPolicy::Reject {
            next.steer = vehicle.steer;
        }
        drive(&self.precise, &mut next)?;
        *vehicle = next;

        let report = TickReport {
            tick: self.tick_count,
            sensors,
            command,
            steer_in_bound,
            position: next.position,
        };
        debug!(
            sensors = ?sensors.to_wire().map(|d| d.to_f64()),
            ?command,
            steer_in_bound,
            x = next.position.x.to_f64(),
            y = next.position.y.to_f64(),
            "tick"
        );
        self.tick_count += 1;
        Ok(report)
    }

    /// Runs up to `ticks` ticks, advancing obstacles after each one.
    ///
    /// A collision ends the run normally with [`Termination::Collision`];
    /// arithmetic failures are returned as errors.
    pub fn run(
        &mut self,
        mut vehicle: Vehicle,
        mut obstacles: Vec<Obstacle>,
        decider: &mut impl Decide,
        motion: &mut impl ObstacleMotion,
        ticks: u64,
    ) -> Result<RunOutcome, SimError> {
        let mut completed = 0;
        let mut termination = Termination::Completed;
        while completed < ticks {
            match self.tick(&mut vehicle, &obstacles, decider) {
                Ok(_) => {}
                Err(SimError::Collision(collision)) => {
                    termination = Termination::Collision { collision };
                    break;
                }
                Err(err) => return Err(err),
            }
            obstacles = motion.advance(&obstacles);
            completed += 1;
        }
        info!(completed, ?termination, "run finished");
        Ok(RunOutcome {
            ticks_completed: completed,
            vehicle,
            obstacles,
            termination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::Static;
    use racer_math::angle::{DEG_10, DEG_90};
    use racer_math::Fixed;

    fn car(x: i64, y: i64, speed: i64) -> Vehicle {
        Vehicle {
            position: Vec2::from_ints(x, y),
            length: Fixed::from_int(32),
            width: Fixed::from_int(16),
            steer: Fixed::ZERO,
            speed: Fixed::from_int(speed),
        }
    }

    #[test]
    fn straight_tick_advances_along_y() {
        let mut sim = Simulation::new(SimConfig::default());
        let mut vehicle = car(200, 200, 5);
        let mut straight = |_: &[Fixed; 5]| SteerCommand::Straight;
        let report = sim.tick(&mut vehicle, &[], &mut straight).expect("tick");
        assert_eq!(report.tick, 0);
        assert_eq!(vehicle.position, Vec2::from_ints(200, 205));
        assert_eq!(sim.tick_count(), 1);
    }

    #[test]
    fn collision_is_reported_before_the_decider_runs() {
        let mut sim = Simulation::new(SimConfig::default());
        let mut vehicle = car(200, 200, 5);
        let before = vehicle;
        let mut called = false;
        let mut decider = |_: &[Fixed; 5]| {
            called = true;
            SteerCommand::Straight
        };
        let result = sim.tick(&mut vehicle, &[Obstacle::from_units(200, 250)], &mut decider);
        assert_eq!(
            result,
            Err(SimError::Collision(Collision::Obstacle { index: 0 }))
        );
        assert!(!called);
        assert_eq!(vehicle, before);
        assert_eq!(sim.tick_count(), 0);
    }

    #[test]
    fn reject_policy_keeps_the_previous_steer() {
        let mut sim = Simulation::new(SimConfig::default());
        let mut vehicle = car(200, 200, 0);
        vehicle.steer = DEG_90;
        let mut right = |_: &[Fixed; 5]| SteerCommand::Right;
        let report = sim.tick(&mut vehicle, &[], &mut right).expect("tick");
        assert!(!report.steer_in_bound);
        assert_eq!(vehicle.steer, DEG_90);
    }

    #[test]
    fn apply_policy_keeps_the_out_of_bound_steer() {
        let config = SimConfig {
            steer_policy: SteerPolicy::Apply,
            ..SimConfig::default()
        };
        let mut sim = Simulation::new(config);
        let mut vehicle = car(200, 200, 0);
        vehicle.steer = DEG_90;
        let mut right = |_: &[Fixed; 5]| SteerCommand::Right;
        sim.tick(&mut vehicle, &[], &mut right).expect("tick");
        assert_eq!(vehicle.steer, DEG_90.checked_add(DEG_10).expect("sum"));
    }

    #[test]
    fn run_stops_on_collision_with_the_completed_count() {
        let mut sim = Simulation::new(SimConfig::default());
        // Obstacle back edge at y = 268; vehicle front starts at 232 and
        // advances 10 per tick, touching it after the fourth move.
        let outcome = sim
            .run(
                car(200, 200, 10),
                vec![Obstacle::from_units(200, 300)],
                &mut |_: &[Fixed; 5]| SteerCommand::Straight,
                &mut Static,
                20,
            )
            .expect("run");
        assert_eq!(outcome.ticks_completed, 4);
        assert_eq!(outcome.vehicle.position, Vec2::from_ints(200, 240));
        assert_eq!(
            outcome.termination,
            Termination::Collision {
                collision: Collision::Obstacle { index: 0 }
            }
        );
    }
}
