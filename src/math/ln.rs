//! Natural logarithm.
//!
//! `logf` splits `x = 2^n · (1 + r)` with `1 + r` in `[2/3, 4/3)` and
//! approximates `log1p(r)` directly. `log` uses a 128-entry table to bring the
//! residual below `2^-8` before a degree-6 polynomial.

use std::f64::consts::LN_2;

use crate::math::poly::pairwise_horner;
use crate::bits::FloatBits;
use crate::math::special::outside_normal;
use crate::math::tables::{ReductionEntry, LOG_TABLE, LOG_TABLE_BITS};
use crate::math::Kernel;
use crate::simd::{SimdFloat, SimdUint};

/// Bits of `2/3` rounded up; mantissas at or above it are folded into the
/// next binade.
pub(crate) const LOGF_OFF: u32 = 0x3f2a_aaab;

/// `ln(2)` rounded to `f32`.
pub(crate) const LN2_F32: f32 = 0.6931472;

/// `log1p(r) ≈ r + r²·P(r)` on `[-1/3, 1/3]`.
const LOGF_POLY: [f32; 7] = [
    -4.9999917e-01,
    3.3336443e-01,
    -2.500934e-01,
    1.9827896e-01,
    -1.6386643e-01,
    1.6924025e-01,
    -1.554937e-01,
];

/// Start of the table's reduction interval, just below `√2/2`.
const LOG_OFF: u64 = 0x3fe6_9009_0000_0000;

/// `log1p(r) ≈ r + r²·A(r)` for `|r| < 2^-8`.
const LOG_POLY: [f64; 5] = [
    -0.4999999999999995,
    0.33333333331917214,
    -0.25000000020958385,
    0.20000301723226804,
    -0.16665331308706838,
];

/// Single-precision natural logarithm.
pub struct Logf;

/// Double-precision natural logarithm.
pub struct Log;

/// Splits single-precision bits into `(n, r)` with `x = 2^n · (1 + r)`.
#[inline(always)]
pub(crate) fn reduce_f32<V: SimdFloat<Scalar = f32>>(ix: V::Bits) -> (V, V) {
    let u = ix.wrapping_sub(V::Bits::splat(LOGF_OFF));
    let n = V::from_signed(u.ashr(<f32 as FloatBits>::MANTISSA_BITS));
    let u = (u & V::Bits::splat(<f32 as FloatBits>::MANTISSA_MASK))
        .wrapping_add(V::Bits::splat(LOGF_OFF));
    (n, V::from_bits(u) - V::splat(1.0))
}

/// Table reduction for double precision.
///
/// Returns `(r, k, log_c)` with `x = 2^k · c · (1 + r)` and `log_c` read from
/// `table` for the centre `c` of the input's subinterval.
#[inline(always)]
pub(crate) fn reduce_f64<V: SimdFloat<Scalar = f64>>(
    ix: V::Bits,
    table: &[ReductionEntry],
) -> (V, V, V) {
    let tmp = ix.wrapping_sub(V::Bits::splat(LOG_OFF));
    let mantissa_bits = <f64 as FloatBits>::MANTISSA_BITS;
    let i = (tmp >> (mantissa_bits - LOG_TABLE_BITS)) & V::Bits::splat((1 << LOG_TABLE_BITS) - 1);
    let k = V::from_signed(tmp.ashr(mantissa_bits));
    // Subtract k from the exponent, leaving the mantissa bits of ix intact.
    let iz = ix.wrapping_sub(tmp & V::Bits::splat(!<f64 as FloatBits>::MANTISSA_MASK));
    let z = V::from_bits(iz);

    let inv_c = V::gather(i, |j| table[j].inv_center);
    let log_c = V::gather(i, |j| table[j].log_center);

    // z/c - 1 in one rounding.
    let r = z.mul_add(inv_c, V::splat(-1.0));
    (r, k, log_c)
}

impl<V: SimdFloat<Scalar = f32>> Kernel<V> for Logf {
    const NAME: &'static str = "logf";
    const MAX_ULP: f64 = 3.34;

    #[inline(always)]
    fn fast_path(x: V) -> (V, V::Mask) {
        let ix = x.to_bits();
        let special = outside_normal::<V>(ix);

        let (n, r) = reduce_f32::<V>(ix);
        let r2 = r * r;
        let p = pairwise_horner(r, r2, &LOGF_POLY);
        let y = n.mul_add(V::splat(LN2_F32), r);
        (r2.mul_add(p, y), special)
    }

    #[inline]
    fn fallback(x: f32) -> f32 {
        x.ln()
    }
}

impl<V: SimdFloat<Scalar = f64>> Kernel<V> for Log {
    const NAME: &'static str = "log";
    const MAX_ULP: f64 = 2.5;

    #[inline(always)]
    fn fast_path(x: V) -> (V, V::Mask) {
        let ix = x.to_bits();
        let special = outside_normal::<V>(ix);

        let (r, k, log_c) = reduce_f64::<V>(ix, &LOG_TABLE);
        // k·ln2 + log(c) + r, largest terms first.
        let hi = k.mul_add(V::splat(LN_2), log_c + r);
        let r2 = r * r;
        let p = pairwise_horner(r, r2, &LOG_POLY);
        (r2.mul_add(p, hi), special)
    }

    #[inline]
    fn fallback(x: f64) -> f64 {
        x.ln()
    }
}
