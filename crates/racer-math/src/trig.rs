// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Deterministic `sin`/`cos` in two precision tiers.
//!
//! Both tiers share the same range reduction and quadrant reconstruction and
//! differ only in how they evaluate sine on the quarter wave `[0, π/2]`:
//!
//! - [`FastTrig`]: checked-in lookup table with linear interpolation.
//!   Absolute error stays below `1e-4`. Used wherever many evaluations happen
//!   per tick (ray fan, vertex rotation).
//! - [`PreciseTrig`]: Taylor series evaluated in Q64.64 until the next term
//!   truncates to zero. Used for velocity integration, where error compounds
//!   across ticks.
//!
//! Symmetry is exact in both tiers: `sin(-x)` is the bit-exact negation of
//! `sin(x)` and `cos(-x)` equals `cos(x)`, because the magnitude of the angle
//! is reduced and the sign applied at the end.

use crate::angle::{HALF_PI, PI, TAU, THREE_HALF_PI};
use crate::fixed::{Fixed, FixedError};
use crate::trig_lut::{sin_qtr_sample, SIN_QTR_SEGMENTS};

/// Upper bound on Taylor terms; the series for `x <= π/2` truncates to zero
/// well before this.
const TAYLOR_MAX_TERMS: i64 = 32;

/// Trigonometry strategy. Call sites choose a tier by which provider they are
/// handed, not by calling differently named functions.
pub trait Trig {
    /// Returns `(sin(angle), cos(angle))` for an angle in radians.
    fn sin_cos(&self, angle: Fixed) -> Result<(Fixed, Fixed), FixedError>;
}

/// Lookup-table tier (bounded error, cheap).
#[derive(Debug, Clone, Copy, Default)]
pub struct FastTrig;

/// Taylor-series tier (slow, precise).
#[derive(Debug, Clone, Copy, Default)]
pub struct PreciseTrig;

impl Trig for FastTrig {
    fn sin_cos(&self, angle: Fixed) -> Result<(Fixed, Fixed), FixedError> {
        sin_cos_with(angle, sin_qtr_lut)
    }
}

impl Trig for PreciseTrig {
    fn sin_cos(&self, angle: Fixed) -> Result<(Fixed, Fixed), FixedError> {
        sin_cos_with(angle, sin_qtr_taylor)
    }
}

fn sin_cos_with(
    angle: Fixed,
    sin_qtr: fn(Fixed) -> Result<Fixed, FixedError>,
) -> Result<(Fixed, Fixed), FixedError> {
    let r = Fixed::from_raw(angle.mag() % TAU.mag());

    // Comparisons rather than division keep the quadrant boundaries exact.
    let (quadrant, a) = if r < HALF_PI {
        (0_u8, r)
    } else if r < PI {
        (1_u8, r.checked_sub(HALF_PI)?)
    } else if r < THREE_HALF_PI {
        (2_u8, r.checked_sub(PI)?)
    } else {
        (3_u8, r.checked_sub(THREE_HALF_PI)?)
    };

    let s = sin_qtr(a)?;
    let c = sin_qtr(HALF_PI.checked_sub(a)?.abs())?;

    let (s, c) = match quadrant {
        0 => (s, c),
        1 => (c, -s),
        2 => (-s, -c),
        _ => (-c, s),
    };

    Ok((if angle.is_negative() { -s } else { s }, c))
}

fn sin_qtr_lut(a: Fixed) -> Result<Fixed, FixedError> {
    if a >= HALF_PI {
        return Ok(Fixed::ONE);
    }
    // t = a * SEGMENTS / (π/2), split into table index and interpolation weight.
    let scaled = a
        .mag()
        .checked_mul(SIN_QTR_SEGMENTS)
        .ok_or(FixedError::Overflow)?;
    let index = scaled / HALF_PI.mag();
    let weight = Fixed::from_raw(scaled % HALF_PI.mag()).checked_div(HALF_PI)?;

    let i = usize::try_from(index).map_err(|_| FixedError::Overflow)?;
    let y0 = Fixed::from_raw(sin_qtr_sample(i));
    let y1 = Fixed::from_raw(sin_qtr_sample(i + 1));
    // Sine is increasing on the quarter wave, so y1 >= y0.
    y0.checked_add(weight.checked_mul(y1.checked_sub(y0)?)?)
}

fn sin_qtr_taylor(a: Fixed) -> Result<Fixed, FixedError> {
    if a >= HALF_PI {
        return Ok(Fixed::ONE);
    }
    let x2 = a.checked_mul(a)?;
    let mut term = a;
    let mut sum = a;
    for k in 1..=TAYLOR_MAX_TERMS {
        let denom = Fixed::from_int((2 * k) * (2 * k + 1));
        term = -term.checked_mul(x2)?.checked_div(denom)?;
        if term.is_zero() {
            break;
        }
        sum = sum.checked_add(term)?;
    }
    Ok(sum.min(Fixed::ONE))
}
