//! Polynomial evaluation over lanes.
//!
//! Coefficients are stored lowest degree first: `coeffs[0] + coeffs[1]·x + …`.

use num::Zero;

use crate::simd::SimdFloat;

/// Plain Horner scheme, one FMA per coefficient.
#[inline(always)]
pub fn horner<V: SimdFloat>(x: V, coeffs: &[V::Scalar]) -> V {
    coeffs
        .iter()
        .rev()
        .fold(V::splat(<V::Scalar as Zero>::zero()), |acc, &c| acc.mul_add(x, V::splat(c)))
}

/// Horner in `x²` over pairs `c[2i] + c[2i+1]·x`.
///
/// Halves the length of the dependent FMA chain compared with [`horner`]. With
/// an odd number of coefficients the top one stands alone.
#[inline(always)]
pub fn pairwise_horner<V: SimdFloat>(x: V, x2: V, coeffs: &[V::Scalar]) -> V {
    let pair = |p: &[V::Scalar]| {
        let lo = V::splat(p[0]);
        match p.get(1) {
            Some(&hi) => x.mul_add(V::splat(hi), lo),
            None => lo,
        }
    };

    let mut pairs = coeffs.chunks(2).rev();
    let top = pairs
        .next()
        .map_or(V::splat(<V::Scalar as Zero>::zero()), |p| pair(p));
    pairs.fold(top, |acc, p| x2.mul_add(acc, pair(p)))
}
