// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Racer core: deterministic sensing and control for one vehicle.

This crate provides:
- `SimConfig`: grid, obstacle, ray and steering constants passed explicitly.
- The five-ray sensor fan (`build_rays`) and broad-phase culling (`filter_near`).
- Sensor fusion of grid walls and obstacles (`compute_sensors`).
- Vehicle kinematics (`control`, `drive`, `vertices`) and the collision gate
  (`check_collision`).
- A per-tick driver (`Simulation`) plus the decision and obstacle-motion
  boundaries (`Decide`, `ObstacleMotion`).

Determinism:
- All geometry runs on `racer_math::Fixed`; identical inputs give
  bit-identical outputs.
- Ray fan and vertex rotation take the fast trig tier; velocity integration
  takes the precise tier.
"]

/// Vehicle collision gate.
pub mod collision;
/// Simulation configuration.
pub mod config;
mod error;
/// Broad-phase obstacle culling.
pub mod filter;
/// Obstacle motion between ticks.
pub mod motion;
/// Axis-aligned obstacles.
pub mod obstacle;
/// Decision boundary and reference policy.
pub mod policy;
/// Sensor ray fan.
pub mod rays;
/// Wall and obstacle sensor fusion.
pub mod sensors;
/// Per-tick driver.
pub mod sim;
/// Seeded obstacle placement.
pub mod spawn;
/// Vehicle state and kinematics.
pub mod vehicle;

pub use collision::check_collision;
pub use config::{ConfigError, SimConfig, SteerPolicy, NUM_RAYS, RAY_OFFSETS};
pub use error::{Collision, SimError};
pub use filter::{filter_near, filter_near_indexed};
pub use motion::{ObstacleMotion, ScrollMotion, Static};
pub use obstacle::Obstacle;
pub use policy::{ClearancePolicy, Decide};
pub use rays::{build_rays, Ray, Rays};
pub use sensors::{
    closest_obstacle_hit, compute_sensors, near_wall, wall_distances, Sensors, Wall,
};
pub use sim::{RunOutcome, Simulation, TickReport, Termination};
pub use spawn::spawn_obstacles;
pub use vehicle::{control, drive, vertices, SteerCommand, Vehicle, VehicleError};
