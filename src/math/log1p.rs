//! `ln(1 + x)`.
//!
//! The reduction works on `m = 1 + x` but keeps the rounding error of that
//! sum as a correction term `cm`, so small `x` lose no accuracy. The single
//! precision kernel runs the double-precision core on widened lanes.

use crate::bits::FloatBits;
use crate::math::poly::pairwise_horner;
use crate::math::special::{abs_bits, outside_normal};
use crate::math::Kernel;
use crate::simd::{SimdFloat, SimdMask, SimdUint, SimdWiden};

const LN2_HI: f64 = 0.6931471805598903;
const LN2_LO: f64 = 5.497923018708371e-14;

/// `log1p(f) ≈ f + f²·P(f)` for `f` in `[√2/2 - 1, √2 - 1]`.
const LOG1P_POLY: [f64; 19] = [
    -0.4999999999999997,
    0.33333333333328113,
    -0.2500000000001263,
    0.2000000000173798,
    -0.1666666666624139,
    0.1428571408744002,
    -0.1249999983115391,
    0.11111122008664678,
    -0.10000018142155685,
    0.0909058346604739,
    -0.0833255294803619,
    0.07697709214012723,
    -0.07160250097377094,
    0.06621608936546163,
    -0.060411861325383155,
    0.059735911529354736,
    -0.06786912861160647,
    0.0632483625086586,
    -0.02829914573469549,
];

/// Moves the mantissa split from `1.0` down to `√2/2`.
const SQRT2_SHIFT: u64 = 0x0009_5f62_0000_0000;
const SQRT2_HALF_HI: u64 = 0x3fe6_a09e_0000_0000;
const HI_MANTISSA_MASK: u64 = 0x000f_ffff_0000_0000;
const LO_WORD_MASK: u64 = 0x0000_0000_ffff_ffff;
const BIAS: u64 = <f64 as FloatBits>::EXPONENT_BIAS as u64;

/// Bits of `-1.0` in each precision; every pattern at or above them is
/// `<= -1` or a negative NaN.
const MINUS_ONE_F64: u64 = 0xbff0_0000_0000_0000;
const MINUS_ONE_F32: u32 = 0xbf80_0000;

/// Double-precision `ln(1 + x)`.
pub struct Log1p;

/// Single-precision `ln(1 + x)`.
pub struct Log1pf;

/// `ln(1 + x)` for `x > -1` with `|x|` normal and finite.
#[inline(always)]
pub(crate) fn log1p_core<W: SimdFloat<Scalar = f64>>(x: W) -> W {
    let one = W::splat(1.0);
    let m = x + one;
    let mi = m.to_bits();
    let u = mi.wrapping_add(W::Bits::splat(SQRT2_SHIFT));
    let e = u >> <f64 as FloatBits>::MANTISSA_BITS;
    let k = W::from_signed(e.wrapping_sub(W::Bits::splat(BIAS)));

    // m / 2^k - 1, with the mantissa of m rebased into [√2/2, √2).
    let u_red = (u & W::Bits::splat(HI_MANTISSA_MASK)).wrapping_add(W::Bits::splat(SQRT2_HALF_HI));
    let mut f = W::from_bits(u_red | (mi & W::Bits::splat(LO_WORD_MASK))) - one;

    // Rounding error of 1 + x, relative to m.
    let mut cm = (x - (m - one)) / m;

    // With no exponent shift f is x itself and the correction vanishes.
    let k0 = e.simd_eq(W::Bits::splat(BIAS));
    if k0.any() {
        cm = W::select(k0, W::splat(0.0), cm);
        f = W::select(k0, x, f);
    }

    let f2 = f * f;
    let p = pairwise_horner(f, f2, &LOG1P_POLY);
    let ylo = k.mul_add(W::splat(LN2_LO), cm);
    let yhi = k.mul_add(W::splat(LN2_HI), f);
    f2.mul_add(p, ylo + yhi)
}

impl<V: SimdFloat<Scalar = f64>> Kernel<V> for Log1p {
    const NAME: &'static str = "log1p";
    const MAX_ULP: f64 = 2.0;

    #[inline(always)]
    fn fast_path(x: V) -> (V, V::Mask) {
        let ix = x.to_bits();
        let special = outside_normal::<V>(abs_bits(x))
            | ix.simd_ge(V::Bits::splat(MINUS_ONE_F64));
        (log1p_core(x), special)
    }

    #[inline]
    fn fallback(x: f64) -> f64 {
        x.ln_1p()
    }
}

impl<V: SimdWiden> Kernel<V> for Log1pf {
    const NAME: &'static str = "log1pf";
    const MAX_ULP: f64 = 1.0;

    #[inline(always)]
    fn fast_path(x: V) -> (V, V::Mask) {
        let ix = x.to_bits();
        let special = outside_normal::<V>(abs_bits(x))
            | ix.simd_ge(V::Bits::splat(MINUS_ONE_F32));
        (V::narrow(log1p_core(x.widen())), special)
    }

    #[inline]
    fn fallback(x: f32) -> f32 {
        x.ln_1p()
    }
}
