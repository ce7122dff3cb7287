// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![forbid(unsafe_code)]
#![doc = r"Geometry kernel for Racer.

This crate provides:
- Orientation and closed-segment intersection (`intersects`).
- Along-ray distance to a target line (`distance`).
- Fixed-point axis-aligned bounding boxes (`Aabb`) for broad-phase culling.

Design notes:
- Deterministic: every decision is taken on sign-magnitude Q64.64 values.
- Callers must confirm `intersects` before asking for `distance`.
"]

/// Axis-aligned bounding boxes.
pub mod aabb;
/// Segment intersection and ray distance.
pub mod segment;

pub use aabb::Aabb;
pub use segment::{distance, intersects, orientation, Orientation};
