//! Helpers shared by the integration tests.

#![allow(dead_code)]

use std::sync::Once;

use log::LevelFilter;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

static INIT: Once = Once::new();

/// Routes `log` output through the test harness, fallback traces included.
pub fn init_logger() {
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .filter_level(LevelFilter::Trace)
            .is_test(true)
            .try_init();
    });
}

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(12345)
}

/// Distance between two `f32` values in units of the last place.
///
/// Both zeros map to the same point; NaN is only close to NaN.
pub fn ulp_f32(a: f32, b: f32) -> f64 {
    if a.is_nan() || b.is_nan() {
        return if a.is_nan() && b.is_nan() { 0.0 } else { f64::INFINITY };
    }
    let ordered = |x: f32| {
        let bits = x.to_bits();
        if bits >> 31 == 1 {
            -((bits & 0x7fff_ffff) as i64)
        } else {
            bits as i64
        }
    };
    (ordered(a) - ordered(b)).abs() as f64
}

/// Distance between two `f64` values in units of the last place.
pub fn ulp_f64(a: f64, b: f64) -> f64 {
    if a.is_nan() || b.is_nan() {
        return if a.is_nan() && b.is_nan() { 0.0 } else { f64::INFINITY };
    }
    let ordered = |x: f64| {
        let bits = x.to_bits();
        if bits >> 63 == 1 {
            -((bits & 0x7fff_ffff_ffff_ffff) as i128)
        } else {
            bits as i128
        }
    };
    (ordered(a) - ordered(b)).abs() as f64
}

/// Positive normal `f32` with a uniformly drawn exponent.
pub fn wide_positive_f32(rng: &mut StdRng) -> f32 {
    let e = rng.random_range(-126i32..128);
    let m: f32 = rng.random_range(1.0f32..2.0);
    m * 2.0f32.powi(e)
}

/// Positive normal `f64` with a uniformly drawn exponent.
pub fn wide_positive_f64(rng: &mut StdRng) -> f64 {
    let e = rng.random_range(-1022i32..1024);
    let m: f64 = rng.random_range(1.0f64..2.0);
    m * 2.0f64.powi(e)
}
