//! Sine and cosine.
//!
//! Single precision reduces by `π/2` in double precision and picks the sine
//! or cosine polynomial per quadrant. Inputs of at least 120 in magnitude go
//! through an exact reduction against 192 bits of `4/π`, one lane at a time.
//!
//! Double precision reduces by `π` with a three-part constant and evaluates
//! one odd polynomial; the parity of the quotient flips the sign bit.

use std::f64::consts::FRAC_PI_2;

use crate::math::poly::pairwise_horner;
use crate::math::special::{abs_bits, invalid, outside_range};
use crate::math::tables::{INV_PIO4, SINCOSF_TABLE};
use crate::math::Kernel;
use crate::simd::{SimdFloat, SimdUint, SimdWiden};

/// `1.5 · 2^52`: adding it rounds to an integer held in the low mantissa bits.
const SHIFT: f64 = 6755399441055744.0;

/// `abstop12` of `2^-12`; below it `sinf(x) = x` and `cosf(x) = 1`.
const TINY_TOP: u32 = 0x398;
/// `abstop12` of `120`.
const LARGE_TOP: u32 = 0x42f;
/// `abstop12` of infinity.
const INF_TOP: u32 = 0x7f8;

/// `π · 2^-62`.
const PI63: f64 = 3.4061215800865545e-19;

const INV_PI: f64 = 0.3183098861837907;
const PI_1: f64 = 3.141592653589793;
const PI_2: f64 = 1.2246467991473532e-16;
const PI_3: f64 = 2.165713347843828e-32;

/// `sin(r) ≈ r + r³·P(r²)` on `[-π/2, π/2]`.
const SIN_POLY: [f64; 7] = [
    -0.1666666666666606,
    0.008333333333273485,
    -0.0001984126982169595,
    2.755731618671281e-06,
    -2.505185490163253e-08,
    1.604733546032205e-10,
    -7.364473665132213e-13,
];

/// Single-precision sine.
pub struct Sinf;

/// Single-precision cosine.
pub struct Cosf;

/// Double-precision sine.
pub struct Sin;

/// Double-precision cosine.
pub struct Cos;

/// Top 12 bits of a single-precision pattern without the sign.
#[inline(always)]
fn abstop12<B: SimdUint<Scalar = u32>>(bits: B) -> B {
    (bits >> 20) & B::splat(0x7ff)
}

#[inline(always)]
fn sin_poly<W: SimdFloat<Scalar = f64>>(x: W) -> W {
    let s = &SINCOSF_TABLE.sin_poly;
    let x2 = x * x;
    let x3 = x * x2;
    let s1 = W::splat(s[1]) + x2 * W::splat(s[2]);
    let x7 = x3 * x2;
    let y = x + x3 * W::splat(s[0]);
    y + x7 * s1
}

#[inline(always)]
fn cos_poly<W: SimdFloat<Scalar = f64>>(x: W) -> W {
    let c = &SINCOSF_TABLE.cos_poly;
    let x2 = x * x;
    let x4 = x2 * x2;
    let c2 = W::splat(c[3]) + x2 * W::splat(c[4]);
    let x6 = x4 * x2;
    let c1 = W::splat(c[0]) + x2 * W::splat(c[1]);
    let y = c1 + x4 * W::splat(c[2]);
    y + x6 * c2
}

/// Picks the polynomial per lane: cosine where `swap` is set, negated where
/// `negate` is set, sine otherwise.
#[inline(always)]
fn quadrant_poly<W: SimdFloat<Scalar = f64>>(xs: W, swap: W::Mask, negate: W::Mask) -> W {
    let c = cos_poly(xs);
    let c = W::select(negate, -c, c);
    W::select(swap, c, sin_poly(xs))
}

/// `sin(x)` or `cos(x)` for `|x| < 120`, in double precision.
#[inline(always)]
fn sincosf_medium<W: SimdFloat<Scalar = f64>>(x: W, cosine: bool) -> W {
    let t = &SINCOSF_TABLE;
    let shifted = x.mul_add(W::splat(t.hpi_inv), W::splat(SHIFT));
    let q = shifted.to_bits();
    let n = shifted - W::splat(SHIFT);
    let r = (-n).mul_add(W::splat(t.hpi), x);

    let s = W::gather(q & W::Bits::splat(3), |i| t.sign[i]);
    let odd = (q & W::Bits::splat(1)).simd_eq(W::Bits::splat(1));
    let swap = if cosine { !odd } else { odd };
    let negate = (q & W::Bits::splat(2)).simd_eq(W::Bits::splat(2));
    quadrant_poly(r * s, swap, negate)
}

/// Reduces `x` (given as bits, `|x| >= 120`, finite) modulo `π/2`.
///
/// Returns `(r, n)` with `x = n·π/2 + r`, `r` in `[-π/4, π/4]` up to the sign
/// of `x`. Only the low two bits of `n` are meaningful.
fn reduce_large(xi: u32) -> (f64, u32) {
    let arr = &INV_PIO4[((xi >> 26) & 15) as usize..];
    let shift = (xi >> 23) & 7;
    let xi = ((xi & 0x00ff_ffff) | 0x0080_0000) << shift;

    let res0 = xi.wrapping_mul(arr[0]);
    let res1 = xi as u64 * arr[4] as u64;
    let res2 = xi as u64 * arr[8] as u64;
    let res0 = ((res2 >> 32) | ((res0 as u64) << 32)).wrapping_add(res1);

    let n = res0.wrapping_add(1 << 61) >> 62;
    let res0 = res0.wrapping_sub(n << 62);
    ((res0 as i64) as f64 * PI63, n as u32)
}

fn sincosf_large(x: f32, cosine: bool) -> f32 {
    let xi = x.to_bits();
    if abstop12(xi) >= INF_TOP {
        return invalid(x);
    }

    let t = &SINCOSF_TABLE;
    let (r, n) = reduce_large(xi);
    let q = n.wrapping_add(xi >> 31) & 3;
    let xs = r * t.sign[q as usize];
    let swap = (n & 1 == 1) != cosine;
    let negate = q & 2 != 0;
    quadrant_poly(xs, swap, negate) as f32
}

#[inline(always)]
fn sincosf_fast<V: SimdWiden>(x: V, cosine: bool) -> (V, V::Mask) {
    let top = abstop12(x.to_bits());
    let special = top.simd_ge(V::Bits::splat(LARGE_TOP));
    let tiny = !top.simd_ge(V::Bits::splat(TINY_TOP));

    let y = V::narrow(sincosf_medium(x.widen(), cosine));
    let small = if cosine { V::splat(1.0) } else { x };
    (V::select(tiny, small, y), special)
}

impl<V: SimdWiden> Kernel<V> for Sinf {
    const NAME: &'static str = "sinf";
    const MAX_ULP: f64 = 0.56;

    #[inline(always)]
    fn fast_path(x: V) -> (V, V::Mask) {
        sincosf_fast(x, false)
    }

    #[inline]
    fn fallback(x: f32) -> f32 {
        sincosf_large(x, false)
    }
}

impl<V: SimdWiden> Kernel<V> for Cosf {
    const NAME: &'static str = "cosf";
    const MAX_ULP: f64 = 0.56;

    #[inline(always)]
    fn fast_path(x: V) -> (V, V::Mask) {
        sincosf_fast(x, true)
    }

    #[inline]
    fn fallback(x: f32) -> f32 {
        sincosf_large(x, true)
    }
}

/// `sin(x - n·π)` with the sign flipped where `odd` has the top bit set.
#[inline(always)]
fn sin_reduced<V: SimdFloat<Scalar = f64>>(x: V, n: V, odd: V::Bits) -> V {
    let r = (-n).mul_add(V::splat(PI_1), x);
    let r = (-n).mul_add(V::splat(PI_2), r);
    let r = (-n).mul_add(V::splat(PI_3), r);

    let r2 = r * r;
    let r3 = r2 * r;
    let r4 = r2 * r2;
    let y = r3.mul_add(pairwise_horner(r2, r4, &SIN_POLY), r);
    V::from_bits(y.to_bits() ^ odd)
}

impl<V: SimdFloat<Scalar = f64>> Kernel<V> for Sin {
    const NAME: &'static str = "sin";
    const MAX_ULP: f64 = 3.5;

    #[inline(always)]
    fn fast_path(x: V) -> (V, V::Mask) {
        let ia = abs_bits(x);
        // 2^-255 <= |x| < 2^23
        let special = outside_range(ia, 0x3000_0000_0000_0000, 0x4160_0000_0000_0000);

        let n = x.mul_add(V::splat(INV_PI), V::splat(SHIFT));
        let odd = n.to_bits() << 63;
        let n = n - V::splat(SHIFT);
        (sin_reduced(x, n, odd), special)
    }

    #[inline]
    fn fallback(x: f64) -> f64 {
        x.sin()
    }
}

impl<V: SimdFloat<Scalar = f64>> Kernel<V> for Cos {
    const NAME: &'static str = "cos";
    const MAX_ULP: f64 = 3.5;

    #[inline(always)]
    fn fast_path(x: V) -> (V, V::Mask) {
        let ia = abs_bits(x);
        // 2^-27 <= |x| < 2^23; below that cos(x) rounds to 1.
        let special = outside_range(ia, 0x3e40_0000_0000_0000, 0x4160_0000_0000_0000);

        // cos(x) = sin(|x| + π/2), reduced around the odd multiples of π/2.
        let r = x.abs();
        let n = (r + V::splat(FRAC_PI_2)).mul_add(V::splat(INV_PI), V::splat(SHIFT));
        let odd = n.to_bits() << 63;
        let n = n - V::splat(SHIFT) - V::splat(0.5);
        (sin_reduced(r, n, odd), special)
    }

    #[inline]
    fn fallback(x: f64) -> f64 {
        x.cos()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simd::{F32x8, F64x4, SimdMask};

    fn ulp_diff_f32(a: f32, b: f32) -> i64 {
        (a.to_bits() as i32 as i64 - b.to_bits() as i32 as i64).abs()
    }

    #[test]
    fn test_reduce_large_matches_f64_reduction() {
        for &x in &[120.0f32, 1000.0, 12345.678, 1.0e6] {
            let (r, n) = reduce_large(x.to_bits());
            let want = (x as f64) - (n as f64) * FRAC_PI_2;
            // n only keeps its low bits, so compare modulo 2π.
            let diff = (r - want).rem_euclid(std::f64::consts::TAU);
            assert!(diff < 1e-9 || diff > std::f64::consts::TAU - 1e-9, "x = {x}");
            assert!(r.abs() <= std::f64::consts::FRAC_PI_4 + 1e-12);
        }
    }

    #[test]
    fn test_sinf_cosf_tiny_inputs() {
        let x = 2.0f32.powi(-13);
        assert_eq!(Sinf::eval(x), x);
        assert_eq!(Cosf::eval(x), 1.0);
        assert_eq!(Cosf::eval(2.0f32.powi(-12)), 1.0);
        assert_eq!(Sinf::eval(-0.0f32).to_bits(), (-0.0f32).to_bits());
        assert_eq!(Sinf::eval(1.0e-40f32), 1.0e-40);
    }

    #[test]
    fn test_sinf_cosf_fallback_lanes() {
        let x = F32x8::new([
            0.5,
            -2.0,
            119.0,
            120.0,
            -1.0e30,
            f32::INFINITY,
            f32::NAN,
            3.0,
        ]);
        let (s, special) = Sinf::eval_with_mask(x);
        assert_eq!(special.count(), 4);
        assert!(!special.test(2));
        assert!(s.elements[5].is_nan());
        assert!(s.elements[6].is_nan());
        for lane in [0, 1, 2, 3, 4, 7] {
            let want = (x.elements[lane] as f64).sin() as f32;
            assert!(
                ulp_diff_f32(s.elements[lane], want) <= 1,
                "lane {lane}: {} vs {want}",
                s.elements[lane]
            );
        }
    }

    #[test]
    fn test_cosf_large_arguments() {
        for &x in &[200.0f32, -3.0e5, 1.0e20, -f32::MAX] {
            let want = (x as f64).cos() as f32;
            let got = Cosf::eval(x);
            assert!(ulp_diff_f32(got, want) <= 1, "x = {x}: {got} vs {want}");
        }
    }

    #[test]
    fn test_double_sin_cos_small_arguments() {
        assert_eq!(Cos::eval(0.0f64), 1.0);
        assert_eq!(Cos::eval(-1.0e-300f64), 1.0);
        assert_eq!(Sin::eval(-0.0f64).to_bits(), (-0.0f64).to_bits());
        assert_eq!(Sin::eval(1.0e-300f64), 1.0e-300);
    }

    #[test]
    fn test_double_sin_cos_quadrants() {
        let x = F64x4::new([1.0, 2.5, -4.0, 5.5]);
        let s = Sin::eval(x);
        let c = Cos::eval(x);
        for lane in 0..4 {
            let v = x.elements[lane];
            assert!((s.elements[lane] - v.sin()).abs() < 1e-15, "sin {v}");
            assert!((c.elements[lane] - v.cos()).abs() < 1e-15, "cos {v}");
        }
    }

    #[test]
    fn test_double_special_values() {
        let x = F64x4::new([f64::INFINITY, f64::NEG_INFINITY, f64::NAN, 1.0e10]);
        let (s, special) = Sin::eval_with_mask(x);
        assert!(special.all());
        assert!(s.elements[0].is_nan());
        assert!(s.elements[1].is_nan());
        assert!(s.elements[2].is_nan());
        assert_eq!(s.elements[3], 1.0e10f64.sin());
        assert!(Cos::eval(f64::INFINITY).is_nan());
    }
}
