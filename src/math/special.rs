//! Special-case classification and the masked fallback merge.

use num::Float;

use crate::bits::FloatBits;
use crate::simd::{SimdFloat, SimdMask, SimdUint};

/// Lanes whose bit pattern lies outside `[min, max)`.
///
/// Computed as `(bits - min) >= (max - min)` in wrapping unsigned arithmetic,
/// so patterns below `min` wrap to huge values and are flagged too. No float
/// comparison is involved, so NaN inputs cannot trap.
#[inline(always)]
pub fn outside_range<B: SimdUint>(bits: B, min: B::Scalar, max: B::Scalar) -> B::Mask {
    let lo = B::splat(min);
    bits.wrapping_sub(lo).simd_ge(B::splat(max).wrapping_sub(lo))
}

/// Lanes whose bits are not those of a positive normal number: zeros,
/// subnormals, negatives, infinities and NaNs.
#[inline(always)]
pub fn outside_normal<V: SimdFloat>(bits: V::Bits) -> V::Mask {
    outside_range(
        bits,
        <V::Scalar as FloatBits>::MIN_NORMAL_BITS,
        <V::Scalar as FloatBits>::INFINITY_BITS,
    )
}

/// Bit patterns of `|x|`.
#[inline(always)]
pub fn abs_bits<V: SimdFloat>(x: V) -> V::Bits {
    x.to_bits() & V::Bits::splat(!<V::Scalar as FloatBits>::SIGN_MASK)
}

/// Replaces the `special` lanes of `fast` with `fallback` applied to the
/// matching lanes of `x`.
///
/// Lanes outside `special` come back bit-identical to `fast`, whatever the
/// fast path computed for the others. When no lane is flagged the fallback
/// is never called.
#[inline(always)]
pub fn merge_fallback<V, F>(name: &str, x: V, fast: V, special: V::Mask, fallback: F) -> V
where
    V: SimdFloat,
    F: Fn(V::Scalar) -> V::Scalar,
{
    if !special.any() {
        return fast;
    }

    log::trace!(
        "{name}: {} of {} lanes take the fallback path",
        special.count(),
        V::LANES
    );

    let slow = V::from_lanes(|lane| {
        let value = x.extract(lane);
        if special.test(lane) {
            fallback(value)
        } else {
            value
        }
    });
    V::select(special, slow, fast)
}

/// Invalid-operation result: `(x - x) / (x - x)` is NaN for infinite or NaN
/// `x` and raises the invalid flag on the way.
#[inline(always)]
pub fn invalid<T: Float>(x: T) -> T {
    (x - x) / (x - x)
}
