//! Base-10 logarithm.
//!
//! Both precisions reuse the reductions of the natural logarithm. The
//! single-precision polynomial absorbs the `1/ln(10)` factor; the
//! double-precision one works from a table whose second column is already in
//! base 10.

use crate::math::ln::{reduce_f32, reduce_f64, LN2_F32};
use crate::math::poly::pairwise_horner;
use crate::math::special::outside_normal;
use crate::math::tables::LOG10_TABLE;
use crate::math::Kernel;
use crate::simd::SimdFloat;

/// `1/ln(10)` rounded to `f32`.
const INV_LN10_F32: f32 = 4.342945e-1;

/// `log10(1 + r) ≈ r/ln(10) + r²·P(r)` on `[-1/3, 1/3]`.
const LOG10F_POLY: [f32; 8] = [
    -2.1714708e-01,
    1.4476353e-01,
    -1.0860104e-01,
    8.6922616e-02,
    -7.13954e-02,
    6.0656108e-02,
    -6.635396e-02,
    6.1275203e-02,
];

const INV_LN10: f64 = 0.4342944819032518;
/// `log10(2)`.
const LOG10_2: f64 = 0.3010299956639812;

const LOG10_POLY: [f64; 5] = [
    -0.2171472409516257,
    0.1447648272949338,
    -0.10857362056683406,
    0.086860206747975,
    -0.07237661426460879,
];

/// Single-precision base-10 logarithm.
pub struct Log10f;

/// Double-precision base-10 logarithm.
pub struct Log10;

impl<V: SimdFloat<Scalar = f32>> Kernel<V> for Log10f {
    const NAME: &'static str = "log10f";
    const MAX_ULP: f64 = 3.31;

    #[inline(always)]
    fn fast_path(x: V) -> (V, V::Mask) {
        let ix = x.to_bits();
        let special = outside_normal::<V>(ix);

        let (n, r) = reduce_f32::<V>(ix);
        let r2 = r * r;
        let p = pairwise_horner(r, r2, &LOG10F_POLY);
        let y = n.mul_add(V::splat(LN2_F32), r) * V::splat(INV_LN10_F32);
        (r2.mul_add(p, y), special)
    }

    #[inline]
    fn fallback(x: f32) -> f32 {
        x.log10()
    }
}

impl<V: SimdFloat<Scalar = f64>> Kernel<V> for Log10 {
    const NAME: &'static str = "log10";
    const MAX_ULP: f64 = 2.5;

    #[inline(always)]
    fn fast_path(x: V) -> (V, V::Mask) {
        let ix = x.to_bits();
        let special = outside_normal::<V>(ix);

        let (r, k, log10_c) = reduce_f64::<V>(ix, &LOG10_TABLE);
        let w = r.mul_add(V::splat(INV_LN10), log10_c);
        let hi = k.mul_add(V::splat(LOG10_2), w);
        let r2 = r * r;
        let p = pairwise_horner(r, r2, &LOG10_POLY);
        (r2.mul_add(p, hi), special)
    }

    #[inline]
    fn fallback(x: f64) -> f64 {
        x.log10()
    }
}
