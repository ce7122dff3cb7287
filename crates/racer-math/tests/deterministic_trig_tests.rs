// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use racer_math::angle::{DEG_10, HALF_PI, TAU};
use racer_math::{FastTrig, Fixed, PreciseTrig, Trig};

const FAST_TOLERANCE: f64 = 1e-4;
const PRECISE_TOLERANCE: f64 = 1e-9;

fn oracle_sin_cos_f64(angle: Fixed) -> (f64, f64) {
    let a = angle.to_f64();
    (libm::sin(a), libm::cos(a))
}

/// Sweeps `[-2τ, 2τ]` in steps of 1/64 rad plus every 10° multiple.
fn sweep() -> Vec<Fixed> {
    let step = Fixed::ONE.checked_div(Fixed::from_int(64)).expect("step");
    let mut angles = Vec::new();
    let mut a = -TAU.checked_add(TAU).expect("2tau");
    let end = TAU.checked_add(TAU).expect("2tau");
    while a <= end {
        angles.push(a);
        a = a.checked_add(step).expect("advance");
    }
    for k in -36..=36 {
        angles.push(DEG_10.checked_mul(Fixed::from_int(k)).expect("deg"));
    }
    angles
}

fn max_error(trig: &dyn Trig) -> f64 {
    let mut worst: f64 = 0.0;
    for angle in sweep() {
        let (s, c) = trig.sin_cos(angle).expect("sin_cos");
        let (os, oc) = oracle_sin_cos_f64(angle);
        worst = worst.max((s.to_f64() - os).abs());
        worst = worst.max((c.to_f64() - oc).abs());
    }
    worst
}

#[test]
fn fast_tier_stays_within_documented_tolerance() {
    let worst = max_error(&FastTrig);
    assert!(worst <= FAST_TOLERANCE, "fast trig error {worst}");
}

#[test]
fn precise_tier_is_much_tighter_than_fast_tier() {
    let worst = max_error(&PreciseTrig);
    assert!(worst <= PRECISE_TOLERANCE, "precise trig error {worst}");
}

#[test]
fn outputs_are_bounded_by_one() {
    for angle in sweep() {
        for trig in [&FastTrig as &dyn Trig, &PreciseTrig] {
            let (s, c) = trig.sin_cos(angle).expect("sin_cos");
            assert!(s.abs() <= Fixed::ONE);
            assert!(c.abs() <= Fixed::ONE);
        }
    }
}

#[test]
fn repeated_evaluation_is_bit_identical() {
    let angle = HALF_PI.checked_div(Fixed::from_int(3)).expect("angle");
    let first = FastTrig.sin_cos(angle).expect("first");
    for _ in 0..16 {
        assert_eq!(FastTrig.sin_cos(angle).expect("again"), first);
    }
}
