// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;

use racer_math::FixedError;
use serde::Serialize;
use thiserror::Error;

use crate::sensors::Wall;

/// What the vehicle ran into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Collision {
    /// The relevant vehicle side edge crossed a grid wall.
    Wall(Wall),
    /// A vehicle edge crossed an edge of an obstacle.
    Obstacle {
        /// Position of the obstacle in the caller's slice.
        index: usize,
    },
}

impl fmt::Display for Collision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wall(wall) => write!(f, "vehicle hit the {wall:?} wall"),
            Self::Obstacle { index } => write!(f, "vehicle hit obstacle #{index}"),
        }
    }
}

/// Failure of a simulation step.
///
/// Both variants end the step; neither is retried. The scheduler decides
/// whether the episode continues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimError {
    /// Fixed-point overflow or division by zero.
    #[error(transparent)]
    Arithmetic(#[from] FixedError),
    /// The vehicle overlaps a wall or obstacle.
    #[error("collision: {0}")]
    Collision(Collision),
}
