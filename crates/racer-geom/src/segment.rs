// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Segment orientation, intersection, and ray distance.
//!
//! Intersection policy (closed segments):
//! - Proper crossings intersect.
//! - Segments that only touch at an endpoint, or where an endpoint lies on the
//!   other segment, intersect.
//! - Collinear segments intersect iff they overlap (sharing a single point
//!   counts); collinear disjoint segments do not.
//!
//! `intersects(a, b) == intersects(b, a)` holds bit-for-bit: both argument
//! orders evaluate the same four orientation values, just relabeled.

use core::cmp::Ordering;

use racer_math::{Fixed, FixedError, Vec2};

/// Turn direction of the ordered triple `(p, q, r)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    /// `r` lies on the line through `p` and `q`.
    Collinear,
    /// `p → q → r` turns clockwise.
    Clockwise,
    /// `p → q → r` turns counter-clockwise.
    CounterClockwise,
}

/// Classifies `(p, q, r)` by the sign of `cross(q - p, r - p)`.
pub fn orientation(p: Vec2, q: Vec2, r: Vec2) -> Result<Orientation, FixedError> {
    let turn = q.checked_sub(p)?.cross(r.checked_sub(p)?)?;
    Ok(match turn.cmp(&Fixed::ZERO) {
        Ordering::Equal => Orientation::Collinear,
        Ordering::Greater => Orientation::CounterClockwise,
        Ordering::Less => Orientation::Clockwise,
    })
}

/// Given `r` collinear with `p`-`q`, returns whether it lies within the segment.
fn on_segment(p: Vec2, q: Vec2, r: Vec2) -> bool {
    r.x >= p.x.min(q.x) && r.x <= p.x.max(q.x) && r.y >= p.y.min(q.y) && r.y <= p.y.max(q.y)
}

/// Returns whether closed segments `p1`-`q1` and `p2`-`q2` share a point.
pub fn intersects(p1: Vec2, q1: Vec2, p2: Vec2, q2: Vec2) -> Result<bool, FixedError> {
    let o1 = orientation(p1, q1, p2)?;
    let o2 = orientation(p1, q1, q2)?;
    let o3 = orientation(p2, q2, p1)?;
    let o4 = orientation(p2, q2, q1)?;

    if o1 != o2 && o3 != o4 {
        return Ok(true);
    }

    Ok((o1 == Orientation::Collinear && on_segment(p1, q1, p2))
        || (o2 == Orientation::Collinear && on_segment(p1, q1, q2))
        || (o3 == Orientation::Collinear && on_segment(p2, q2, p1))
        || (o4 == Orientation::Collinear && on_segment(p2, q2, q1)))
}

/// Distance along a ray from `origin` to the line through `p2`-`q2`.
///
/// The ray direction is `(sin_theta, cos_theta)`; the result is the ray
/// parameter `t` solving `origin + t * dir ∈ line(p2, q2)`:
///
/// ```text
/// t = cross(p2 - origin, q2 - p2) / cross(dir, q2 - p2)
/// ```
///
/// When the ray is parallel to the target (the collinear-overlap case of
/// [`intersects`]) the result is the nearest target endpoint ahead of the
/// origin, or zero if the origin already lies on the target.
///
/// Only meaningful after [`intersects`] confirmed the ray segment hits the
/// target; the value is not range-checked here.
pub fn distance(
    origin: Vec2,
    p2: Vec2,
    q2: Vec2,
    cos_theta: Fixed,
    sin_theta: Fixed,
) -> Result<Fixed, FixedError> {
    let dir = Vec2::new(sin_theta, cos_theta);
    let edge = q2.checked_sub(p2)?;
    let denom = dir.cross(edge)?;

    if denom.is_zero() {
        let a = p2.checked_sub(origin)?.dot(dir)?;
        let b = q2.checked_sub(origin)?.dot(dir)?;
        let near = a.min(b);
        return Ok(if near.is_negative() { Fixed::ZERO } else { near });
    }

    p2.checked_sub(origin)?.cross(edge)?.checked_div(denom)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: i64, y: i64) -> Vec2 {
        Vec2::from_ints(x, y)
    }

    #[test]
    fn proper_crossing_intersects() {
        assert_eq!(intersects(v(0, 0), v(10, 10), v(0, 10), v(10, 0)), Ok(true));
    }

    #[test]
    fn parallel_disjoint_segments_do_not_intersect() {
        assert_eq!(intersects(v(0, 0), v(10, 0), v(0, 1), v(10, 1)), Ok(false));
    }

    #[test]
    fn touching_endpoints_intersect() {
        assert_eq!(intersects(v(0, 0), v(5, 5), v(5, 5), v(9, 0)), Ok(true));
        // T-junction: an endpoint resting on the interior of the other segment.
        assert_eq!(intersects(v(0, 0), v(10, 0), v(5, 0), v(5, 7)), Ok(true));
    }

    #[test]
    fn collinear_overlap_intersects_but_collinear_gap_does_not() {
        assert_eq!(intersects(v(0, 0), v(6, 0), v(4, 0), v(9, 0)), Ok(true));
        assert_eq!(intersects(v(0, 0), v(6, 0), v(6, 0), v(9, 0)), Ok(true));
        assert_eq!(intersects(v(0, 0), v(6, 0), v(7, 0), v(9, 0)), Ok(false));
    }

    #[test]
    fn distance_along_vertical_ray() {
        // Heading 0 points along +y: dir = (sin 0, cos 0) = (0, 1).
        let d = distance(v(5, 0), v(0, 40), v(10, 40), Fixed::ONE, Fixed::ZERO);
        assert_eq!(d, Ok(Fixed::from_int(40)));
    }

    #[test]
    fn distance_to_collinear_target_is_the_nearest_endpoint() {
        let d = distance(v(0, 0), v(0, 30), v(0, 12), Fixed::ONE, Fixed::ZERO);
        assert_eq!(d, Ok(Fixed::from_int(12)));
        let inside = distance(v(0, 20), v(0, 30), v(0, 12), Fixed::ONE, Fixed::ZERO);
        assert_eq!(inside, Ok(Fixed::ZERO));
    }
}
