//! Accuracy tests for sine, including the large-argument reduction.

mod common;

use common::{init_logger, rng, ulp_f32, ulp_f64};
use lanemath::math::{cos, cosf, sin, sinf, Kernel, Sin, Sinf};
use lanemath::simd::{SimdMath, F32x8, F64x4};
use rand::Rng;

#[test]
fn test_sinf_ulp_medium_range() {
    let mut rng = rng();
    let bound = <Sinf as Kernel<f32>>::MAX_ULP + 0.5;

    let mut max_ulp = 0.0f64;
    for _ in 0..50_000 {
        let x: f32 = rng.random_range(-120.0..120.0);
        let want = (x as f64).sin() as f32;
        let got = sinf(x);
        let err = ulp_f32(got, want);
        max_ulp = max_ulp.max(err);
        assert!(err <= bound, "sinf({x:e}) = {got:e}, expected {want:e} ({err} ulp)");
    }
    println!("sinf max error below 120: {max_ulp} ulp");
}

#[test]
fn test_sinf_ulp_large_arguments() {
    init_logger();
    let mut rng = rng();
    let bound = <Sinf as Kernel<f32>>::MAX_ULP + 0.5;

    for _ in 0..20_000 {
        let e = rng.random_range(7i32..128);
        let m: f32 = rng.random_range(1.0..2.0);
        let sign = if rng.random_bool(0.5) { -1.0f32 } else { 1.0 };
        let x = sign * m * 2.0f32.powi(e);
        let want = (x as f64).sin() as f32;
        let got = sinf(x);
        assert!(
            ulp_f32(got, want) <= bound,
            "sinf({x:e}) = {got:e}, expected {want:e}"
        );
    }
}

#[test]
fn test_sin_ulp_random() {
    let mut rng = rng();
    let bound = <Sin as Kernel<f64>>::MAX_ULP + 0.5;

    let mut max_ulp = 0.0f64;
    for i in 0..50_000 {
        let x: f64 = if i % 2 == 0 {
            rng.random_range(-10.0..10.0)
        } else {
            rng.random_range(-8.0e6..8.0e6)
        };
        let want = x.sin();
        let got = sin(x);
        let err = ulp_f64(got, want);
        max_ulp = max_ulp.max(err);
        assert!(err <= bound, "sin({x:e}) = {got:e}, expected {want:e} ({err} ulp)");
    }
    println!("sin max error: {max_ulp} ulp");
}

#[test]
fn test_sin_small_and_special_values() {
    let sub = 1.0e-40f32;
    assert_eq!(sinf(sub), sub);
    assert_eq!(sinf(-0.0f32).to_bits(), (-0.0f32).to_bits());
    assert_eq!(sinf(2.0f32.powi(-13)), 2.0f32.powi(-13));
    assert!(sinf(f32::INFINITY).is_nan());
    assert!(sinf(f32::NAN).is_nan());

    assert_eq!(sin(0.0f64).to_bits(), 0.0f64.to_bits());
    assert_eq!(sin(-0.0f64).to_bits(), (-0.0f64).to_bits());
    assert_eq!(sin(1.0e-300f64), 1.0e-300);
    assert_eq!(sin(1.0e-310f64), 1.0e-310);
    assert_eq!(sin(-5.0e-324f64).to_bits(), (-5.0e-324f64).to_bits());
    assert_eq!(cos(1.0e-310f64), 1.0);
    assert!(sin(f64::NEG_INFINITY).is_nan());
    assert_eq!(sin(1.0e30f64), 1.0e30f64.sin());
}

/// `sin² + cos² = 1` within twice the declared budget, down both paths.
#[test]
fn test_pythagorean_identity() {
    let inputs_f32 = [0.0f32, 0.7, -2.0, 100.0, 119.9, 120.0, -5.0e5, 1.0e30, -3.0e38];
    for &x in &inputs_f32 {
        let s = sinf(x);
        let c = cosf(x);
        let sum = s * s + c * c;
        println!("x = {x:e}: sin = {s}, cos = {c}, sum = {sum}");
        assert!((sum - 1.0).abs() < 1.0e-6, "x = {x:e}: sin² + cos² = {sum}");
    }

    let inputs_f64 = [0.0f64, 0.7, -2.0, 100.0, 3.0e6, 1.0e10, 1.0e30];
    for &x in &inputs_f64 {
        let s = sin(x);
        let c = cos(x);
        let sum = s * s + c * c;
        assert!((sum - 1.0).abs() < 4.0e-15, "x = {x:e}: sin² + cos² = {sum}");
    }
}

#[test]
fn test_sin_lanes_match_scalar() {
    let x = F32x8::new([0.1, -1.0e-5, 3.0, 1.0e4, -7.5, f32::NAN, 1.0e-39, 60.0]);
    let y = sinf(x);
    for lane in 0..8 {
        let scalar = sinf(x.elements[lane]);
        assert_eq!(y.elements[lane].to_bits(), scalar.to_bits(), "lane {lane}");
    }

    let xd = F64x4::new([0.1, 1.0e9, -3.0, f64::INFINITY]);
    let yd = sin(xd);
    for lane in 0..4 {
        let scalar = sin(xd.elements[lane]);
        assert_eq!(yd.elements[lane].to_bits(), scalar.to_bits(), "lane {lane}");
    }
}

#[test]
fn test_sin_slice_methods() {
    let data = vec![0.0f32, std::f32::consts::FRAC_PI_2, std::f32::consts::PI];
    let result = data.as_slice().sin();
    assert!(result[0].abs() < 1e-7, "sin(0) should be 0");
    assert!((result[1] - 1.0).abs() < 1e-7, "sin(π/2) should be 1");
    assert!(result[2].abs() < 1e-6, "sin(π) should be ~0");
    assert_eq!(data.par_sin(), result);
}
