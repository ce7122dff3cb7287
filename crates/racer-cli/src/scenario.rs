// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scenario files: config, starting vehicle, and obstacle setup in one JSON
//! document.

use std::path::Path;

use anyhow::{Context, Result};
use racer_core::{spawn_obstacles, ClearancePolicy, Obstacle, SimConfig, Vehicle};
use racer_math::Fixed;
use serde::Deserialize;

/// Seeded obstacle rows appended to the explicit list.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct SpawnRows {
    #[serde(default)]
    pub(crate) seed: u64,
    pub(crate) count: usize,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct Scenario {
    #[serde(default)]
    pub(crate) config: SimConfig,
    pub(crate) vehicle: Vehicle,
    #[serde(default)]
    pub(crate) obstacles: Vec<Obstacle>,
    #[serde(default)]
    pub(crate) spawn: Option<SpawnRows>,
    /// Scroll speed toward `y = 0`; zero keeps obstacles static.
    #[serde(default)]
    pub(crate) obstacle_speed: Fixed,
    #[serde(default)]
    pub(crate) policy: ClearancePolicy,
}

impl Scenario {
    pub(crate) fn load(path: &Path) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read scenario {}", path.display()))?;
        let scenario: Self = serde_json::from_slice(&bytes)
            .with_context(|| format!("invalid scenario json in {}", path.display()))?;
        scenario.config.validate().context("invalid scenario config")?;
        scenario
            .vehicle
            .validate(&scenario.config)
            .context("invalid scenario vehicle")?;
        Ok(scenario)
    }

    /// Explicit obstacles followed by spawned rows. `seed` overrides the
    /// file's spawn seed.
    pub(crate) fn obstacles(&self, seed: Option<u64>) -> Vec<Obstacle> {
        let mut all = self.obstacles.clone();
        if let Some(spawn) = self.spawn {
            let seed = seed.unwrap_or(spawn.seed);
            all.extend(spawn_obstacles(&self.config, seed, spawn.count));
        }
        all
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = r#"{
        "vehicle": { "position": { "x": 200, "y": 100 }, "length": 32, "width": 16, "speed": 4 }
    }"#;

    #[test]
    fn minimal_scenario_takes_defaults() {
        let scenario: Scenario = serde_json::from_str(MINIMAL).expect("parse");
        assert_eq!(scenario.config, SimConfig::default());
        assert!(scenario.obstacles(None).is_empty());
        assert_eq!(scenario.obstacle_speed, Fixed::ZERO);
    }

    #[test]
    fn seed_flag_overrides_the_file_seed() {
        let mut scenario: Scenario = serde_json::from_str(MINIMAL).expect("parse");
        scenario.spawn = Some(SpawnRows { seed: 1, count: 3 });
        assert_eq!(scenario.obstacles(None), scenario.obstacles(Some(1)));
        assert_eq!(
            scenario.obstacles(Some(2)),
            spawn_obstacles(&scenario.config, 2, 3)
        );
    }
}
