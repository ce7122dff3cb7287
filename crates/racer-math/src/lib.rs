// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Deterministic math for Racer.

This crate provides:
- A sign-magnitude Q64.64 fixed-point scalar (`Fixed`) with checked arithmetic.
- A 2D vector over `Fixed` (`Vec2`).
- Two trigonometry tiers behind the `Trig` strategy trait.
- A seeded `xoroshiro128+` generator for reproducible setup.

Design notes:
- No floating point participates in any computation whose result feeds a
  decision; `to_f64` exists only for diagnostics.
- Arithmetic failures surface as `FixedError` and are never saturated.
"]

/// Angle constants (radians).
pub mod angle;
/// Sign-magnitude fixed-point scalar.
pub mod fixed;
/// Seeded deterministic PRNG.
pub mod prng;
/// Two-tier deterministic trigonometry.
pub mod trig;
mod trig_lut;
/// Fixed-point 2D vector.
pub mod vec2;

pub use fixed::{Fixed, FixedError, ParseFixedError};
pub use prng::Prng;
pub use trig::{FastTrig, PreciseTrig, Trig};
pub use vec2::Vec2;
