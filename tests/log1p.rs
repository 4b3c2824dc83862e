//! Accuracy tests for `ln(1 + x)`.

mod common;

use common::{init_logger, rng, ulp_f32, ulp_f64};
use lanemath::math::{log1p, log1pf, Kernel, Log1p, Log1pf};
use lanemath::simd::{SimdMath, F32x4, F64x2, F64x4, F64x8};
use rand::Rng;

#[test]
fn test_log1p_ulp_random() {
    let mut rng = rng();
    let bound = <Log1p as Kernel<f64>>::MAX_ULP + 0.5;

    let mut max_ulp = 0.0f64;
    for i in 0..30_000 {
        let x: f64 = match i % 3 {
            0 => rng.random_range(-0.999..1.0),
            1 => rng.random_range(-1.0e-6..1.0e-6),
            _ => rng.random_range(1.0..1.0e12),
        };
        let want = x.ln_1p();
        let got = log1p(x);
        let err = ulp_f64(got, want);
        max_ulp = max_ulp.max(err);
        assert!(err <= bound, "log1p({x:e}) = {got:e}, expected {want:e} ({err} ulp)");
    }
    println!("log1p max error: {max_ulp} ulp");
}

#[test]
fn test_log1pf_ulp_random() {
    let mut rng = rng();
    let bound = <Log1pf as Kernel<f32>>::MAX_ULP + 0.5;

    let mut max_ulp = 0.0f64;
    for i in 0..30_000 {
        let x: f32 = match i % 3 {
            0 => rng.random_range(-0.999..1.0),
            1 => rng.random_range(-1.0e-4..1.0e-4),
            _ => rng.random_range(1.0..1.0e30),
        };
        let want = (x as f64).ln_1p() as f32;
        let got = log1pf(x);
        let err = ulp_f32(got, want);
        max_ulp = max_ulp.max(err);
        assert!(err <= bound, "log1pf({x:e}) = {got:e}, expected {want:e} ({err} ulp)");
    }
    println!("log1pf max error: {max_ulp} ulp");
}

/// Small arguments keep their full precision through the correction term.
#[test]
fn test_log1p_tiny_arguments() {
    for e in 1..60 {
        for &sign in &[1.0f64, -1.0] {
            let x = sign * 1.37 * 2.0f64.powi(-e);
            let got = log1p(x);
            assert!(
                ulp_f64(got, x.ln_1p()) <= <Log1p as Kernel<f64>>::MAX_ULP + 0.5,
                "log1p({x:e}) = {got:e}, expected {:e}",
                x.ln_1p()
            );
        }
    }
}

/// Lanes with and without an exponent shift in one vector must give the
/// same bits as their scalar evaluation.
#[test]
fn test_log1p_mixed_shift_lanes() {
    let x = F64x8::new([1.0e-12, 3.0, -1.0e-9, 0.2, -0.4, 1.0e-3, 250.0, 0.3]);
    let y = log1p(x);
    for lane in 0..8 {
        assert_eq!(
            y.elements[lane].to_bits(),
            log1p(x.elements[lane]).to_bits(),
            "lane {lane}"
        );
    }

    let only_small = F64x2::new([1.0e-15, -2.0e-14]);
    let y = log1p(only_small);
    for lane in 0..2 {
        assert_eq!(y.elements[lane].to_bits(), log1p(only_small.elements[lane]).to_bits());
    }
}

#[test]
fn test_log1p_special_values() {
    init_logger();

    assert_eq!(log1p(-1.0f64), f64::NEG_INFINITY);
    assert!(log1p(-1.5f64).is_nan());
    assert!(log1p(f64::NEG_INFINITY).is_nan());
    assert_eq!(log1p(f64::INFINITY), f64::INFINITY);
    assert!(log1p(f64::NAN).is_nan());
    assert_eq!(log1p(0.0f64).to_bits(), 0.0f64.to_bits());
    assert_eq!(log1p(-0.0f64).to_bits(), (-0.0f64).to_bits());
    assert_eq!(log1p(1.0e-320f64), 1.0e-320);

    let xf = F32x4::new([-1.0, -2.0, 0.0, 1.0e-40]);
    let (yf, special) = Log1pf::eval_with_mask(xf);
    assert_eq!(special.lanes, [true; 4]);
    assert_eq!(yf.elements[0], f32::NEG_INFINITY);
    assert!(yf.elements[1].is_nan());
    assert_eq!(yf.elements[2], 0.0);
    assert_eq!(yf.elements[3], 1.0e-40);
}

#[test]
fn test_log1p_slice_surface() {
    let data: Vec<f64> = (0..37).map(|i| -0.9 + i as f64 * 0.25).collect();
    let seq = data.ln_1p();
    let par = data.par_ln_1p();
    assert_eq!(seq, par);

    let lanes: Vec<f64> = data
        .chunks(4)
        .flat_map(|c| {
            let mut block = [1.0f64; 4];
            block[..c.len()].copy_from_slice(c);
            log1p(F64x4::new(block)).to_array()[..c.len()].to_vec()
        })
        .collect();
    assert_eq!(seq, lanes);
}
