// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Seeded obstacle placement.

use racer_math::Prng;

use crate::config::SimConfig;
use crate::obstacle::Obstacle;

/// Places `count` obstacles, one per row.
///
/// Row `i` sits at `y = grid_height * (i + 1) / count`; each `x` is an integer
/// drawn uniformly from `[0, grid_width)`. The same seed always yields the same
/// layout.
pub fn spawn_obstacles(config: &SimConfig, seed: u64, count: usize) -> Vec<Obstacle> {
    let mut rng = Prng::from_seed_u64(seed);
    let width = u64::try_from(config.grid_width.trunc_mag()).unwrap_or(u64::MAX);
    let height = config.grid_height.abs().mag();
    let rows = u128::try_from(count).unwrap_or(u128::MAX);

    (1..=rows)
        .map(|row| {
            let x = rng.next_below(width);
            // height * row / rows, split so the product cannot overflow.
            let y = height / rows * row + (height % rows).saturating_mul(row) / rows;
            Obstacle {
                x: u128::from(x) << 64,
                y,
            }
        })
        .collect()
}
