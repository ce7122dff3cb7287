// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Sign-magnitude Q64.64 fixed-point scalar.
//!
//! A [`Fixed`] stores an unsigned magnitude scaled by `2^64` plus a sign flag:
//!
//! ```text
//! real_value = (negative ? -1 : 1) * mag / 2^64
//! ```
//!
//! The encoding is sign-magnitude, not two's complement. Every operator is
//! defined on magnitudes with explicit sign rules so results never depend on
//! wraparound. Zero is canonical: a zero magnitude always carries
//! `negative == false`, which keeps the derived `Eq`/`Hash` sound.
//!
//! Determinism contract:
//! - Multiplication forms the exact 256-bit product and truncates toward zero.
//! - Division produces exactly 64 fractional bits, truncated toward zero.
//! - Overflow and division by zero are reported as [`FixedError`]; nothing
//!   saturates.

use core::cmp::Ordering;
use core::fmt;
use core::ops::Neg;
use core::str::FromStr;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// Number of fractional bits in the Q64.64 encoding.
pub const FRAC_BITS: u32 = 64;

const FRAC_MASK: u128 = (1_u128 << FRAC_BITS) - 1;

/// Arithmetic failure. Always fatal for the computation that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FixedError {
    /// Divisor magnitude was zero.
    #[error("fixed-point division by zero")]
    DivisionByZero,
    /// Result magnitude does not fit in 128 bits.
    #[error("fixed-point magnitude overflow")]
    Overflow,
}

/// Failure to parse a decimal fixed-point literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseFixedError {
    /// No digits were supplied.
    #[error("empty fixed-point literal")]
    Empty,
    /// A character other than a decimal digit, sign, or `.` was found.
    #[error("invalid character in fixed-point literal")]
    InvalidDigit,
    /// The integer part does not fit in 64 bits.
    #[error(transparent)]
    Arithmetic(#[from] FixedError),
}

/// Deterministic signed fixed-point scalar (sign-magnitude, Q64.64).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Fixed {
    mag: u128,
    negative: bool,
}

impl Fixed {
    /// The fixed-point zero.
    pub const ZERO: Self = Self {
        mag: 0,
        negative: false,
    };

    /// The fixed-point one.
    pub const ONE: Self = Self {
        mag: 1 << FRAC_BITS,
        negative: false,
    };

    /// Builds a value from a raw magnitude and sign. A zero magnitude is
    /// always stored as non-negative.
    pub const fn new(mag: u128, negative: bool) -> Self {
        Self {
            mag,
            negative: negative && mag != 0,
        }
    }

    /// Builds a non-negative value from a raw Q64.64 magnitude.
    pub const fn from_raw(mag: u128) -> Self {
        Self::new(mag, false)
    }

    /// Exact conversion from a signed integer.
    pub fn from_int(n: i64) -> Self {
        Self::new(u128::from(n.unsigned_abs()) << FRAC_BITS, n < 0)
    }

    /// Exact conversion from an unsigned integer.
    pub fn from_uint(n: u64) -> Self {
        Self::new(u128::from(n) << FRAC_BITS, false)
    }

    /// Raw Q64.64 magnitude.
    pub const fn mag(self) -> u128 {
        self.mag
    }

    /// Returns `true` for values strictly below zero.
    pub const fn is_negative(self) -> bool {
        self.negative
    }

    /// Returns `true` for zero.
    pub const fn is_zero(self) -> bool {
        self.mag == 0
    }

    /// Absolute value.
    pub const fn abs(self) -> Self {
        Self {
            mag: self.mag,
            negative: false,
        }
    }

    /// Integer part of the magnitude (truncated toward zero).
    pub const fn trunc_mag(self) -> u128 {
        self.mag >> FRAC_BITS
    }

    /// Sign-magnitude addition.
    pub fn checked_add(self, rhs: Self) -> Result<Self, FixedError> {
        if self.negative == rhs.negative {
            let mag = self.mag.checked_add(rhs.mag).ok_or(FixedError::Overflow)?;
            Ok(Self::new(mag, self.negative))
        } else if self.mag >= rhs.mag {
            Ok(Self::new(self.mag - rhs.mag, self.negative))
        } else {
            Ok(Self::new(rhs.mag - self.mag, rhs.negative))
        }
    }

    /// Sign-magnitude subtraction (`self + (-rhs)`).
    pub fn checked_sub(self, rhs: Self) -> Result<Self, FixedError> {
        self.checked_add(-rhs)
    }

    /// Multiplication, truncated toward zero.
    pub fn checked_mul(self, rhs: Self) -> Result<Self, FixedError> {
        let mag = mul_mag(self.mag, rhs.mag)?;
        Ok(Self::new(mag, self.negative != rhs.negative))
    }

    /// Division, truncated toward zero.
    pub fn checked_div(self, rhs: Self) -> Result<Self, FixedError> {
        let mag = div_mag(self.mag, rhs.mag)?;
        Ok(Self::new(mag, self.negative != rhs.negative))
    }

    /// Lossy conversion for diagnostics and tests. Never feed the result back
    /// into a geometric decision.
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(self) -> f64 {
        let int = (self.mag >> FRAC_BITS) as f64;
        let frac = (self.mag & FRAC_MASK) as f64 / 18_446_744_073_709_551_616.0;
        let v = int + frac;
        if self.negative {
            -v
        } else {
            v
        }
    }
}

/// `(a * b) >> 64` over the full 256-bit product.
fn mul_mag(a: u128, b: u128) -> Result<u128, FixedError> {
    let (ah, al) = (a >> FRAC_BITS, a & FRAC_MASK);
    let (bh, bl) = (b >> FRAC_BITS, b & FRAC_MASK);

    // Each partial product is a 64x64 multiply and fits in u128.
    let hh = ah * bh;
    if hh >> FRAC_BITS != 0 {
        return Err(FixedError::Overflow);
    }
    let cross = (ah * bl)
        .checked_add(al * bh)
        .ok_or(FixedError::Overflow)?;
    (hh << FRAC_BITS)
        .checked_add(cross)
        .and_then(|v| v.checked_add((al * bl) >> FRAC_BITS))
        .ok_or(FixedError::Overflow)
}

/// `(a << 64) / b` by restoring long division over the fractional bits.
fn div_mag(a: u128, b: u128) -> Result<u128, FixedError> {
    if b == 0 {
        return Err(FixedError::DivisionByZero);
    }
    let int = a / b;
    if int >> FRAC_BITS != 0 {
        return Err(FixedError::Overflow);
    }
    let mut rem = a % b;
    let mut frac: u128 = 0;
    for _ in 0..FRAC_BITS {
        // rem < b, so after doubling the true value is < 2b; a carried-out
        // top bit means it certainly exceeds b.
        let carry = rem >> 127 != 0;
        rem <<= 1;
        frac <<= 1;
        if carry || rem >= b {
            rem = rem.wrapping_sub(b);
            frac |= 1;
        }
    }
    Ok((int << FRAC_BITS) | frac)
}

impl Neg for Fixed {
    type Output = Self;

    fn neg(self) -> Self {
        Self::new(self.mag, !self.negative)
    }
}

impl PartialOrd for Fixed {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fixed {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.negative, other.negative) {
            (false, false) => self.mag.cmp(&other.mag),
            (true, true) => other.mag.cmp(&self.mag),
            (false, true) => Ordering::Greater,
            (true, false) => Ordering::Less,
        }
    }
}

/// Exact decimal rendering. A binary fraction always terminates, so without a
/// precision the output round-trips through [`FromStr`]. With a precision the
/// fractional digits are truncated, not rounded.
impl fmt::Display for Fixed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.negative {
            f.write_str("-")?;
        }
        write!(f, "{}", self.mag >> FRAC_BITS)?;

        let limit = f.precision();
        let mut frac = self.mag & FRAC_MASK;
        if frac == 0 || limit == Some(0) {
            return Ok(());
        }
        f.write_str(".")?;
        let mut written = 0_usize;
        while frac != 0 && limit.is_none_or(|p| written < p) {
            frac *= 10;
            write!(f, "{}", frac >> FRAC_BITS)?;
            frac &= FRAC_MASK;
            written += 1;
        }
        Ok(())
    }
}

impl FromStr for Fixed {
    type Err = ParseFixedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (negative, body) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (int_part, frac_part) = body.split_once('.').unwrap_or((body, ""));
        if int_part.is_empty() && frac_part.is_empty() {
            return Err(ParseFixedError::Empty);
        }

        let mut int: u128 = 0;
        for c in int_part.chars() {
            let d = c.to_digit(10).ok_or(ParseFixedError::InvalidDigit)?;
            int = int
                .checked_mul(10)
                .and_then(|v| v.checked_add(u128::from(d)))
                .ok_or(FixedError::Overflow)?;
        }
        if int >> FRAC_BITS != 0 {
            return Err(FixedError::Overflow.into());
        }

        // Horner from the last digit: floor((floor(x) + d) / 10) equals
        // floor((x + d) / 10), so the result is the exact floor of the literal.
        let mut frac: u128 = 0;
        for c in frac_part.chars().rev() {
            let d = c.to_digit(10).ok_or(ParseFixedError::InvalidDigit)?;
            frac = (frac + (u128::from(d) << FRAC_BITS)) / 10;
        }

        Ok(Self::new((int << FRAC_BITS) | frac, negative))
    }
}

impl Serialize for Fixed {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Fixed {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct FixedVisitor;

        impl Visitor<'_> for FixedVisitor {
            type Value = Fixed;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a decimal fixed-point string or an integer")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Fixed, E> {
                v.parse().map_err(E::custom)
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Fixed, E> {
                Ok(Fixed::from_int(v))
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Fixed, E> {
                Ok(Fixed::from_uint(v))
            }
        }

        deserializer.deserialize_any(FixedVisitor)
    }
}
