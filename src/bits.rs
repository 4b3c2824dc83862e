//! IEEE-754 bit-level views of `f32` and `f64`.
//!
//! Every kernel starts by reinterpreting its input as an unsigned integer of
//! the same width. Exponent extraction, sign tests and the bias arithmetic that
//! replaces `frexp` all happen on these integers, so they are total over every
//! bit pattern, including NaN and infinity encodings.
//!
//! | Type | Bits | Mantissa | Exponent | Bias |
//! |------|------|----------|----------|------|
//! | `f32` | `u32` | 23 | 8 | 127 |
//! | `f64` | `u64` | 52 | 11 | 1023 |

use std::fmt::Debug;

use num::traits::{AsPrimitive, PrimInt, WrappingAdd, WrappingSub};
use num::Float;

/// Unsigned integer carrying a float's bit pattern.
pub trait UintBits:
    PrimInt + WrappingAdd + WrappingSub + AsPrimitive<usize> + Debug + Send + Sync + 'static
{
    /// Shifts right while copying the top bit, i.e. `>>` on the
    /// two's-complement reading of the same bits.
    #[inline(always)]
    fn ashr(self, shift: u32) -> Self {
        self.signed_shr(shift)
    }
}

impl UintBits for u32 {}

impl UintBits for u64 {}

/// Floating-point type with a same-width unsigned bit representation.
pub trait FloatBits: Float + Debug + Send + Sync + 'static {
    type Bits: UintBits;

    /// Number of explicit mantissa bits.
    const MANTISSA_BITS: u32;
    const EXPONENT_BIAS: i32;
    const SIGN_MASK: Self::Bits;
    const MANTISSA_MASK: Self::Bits;
    /// Bits of the smallest positive normal number.
    const MIN_NORMAL_BITS: Self::Bits;
    const INFINITY_BITS: Self::Bits;

    fn to_bits(self) -> Self::Bits;

    fn from_bits(bits: Self::Bits) -> Self;

    /// Converts the two's-complement integer held in `bits` to a float.
    fn from_signed_bits(bits: Self::Bits) -> Self;
}

impl FloatBits for f32 {
    type Bits = u32;

    const MANTISSA_BITS: u32 = 23;
    const EXPONENT_BIAS: i32 = 127;
    const SIGN_MASK: u32 = 0x8000_0000;
    const MANTISSA_MASK: u32 = 0x007f_ffff;
    const MIN_NORMAL_BITS: u32 = 0x0080_0000;
    const INFINITY_BITS: u32 = 0x7f80_0000;

    #[inline(always)]
    fn to_bits(self) -> u32 {
        f32::to_bits(self)
    }

    #[inline(always)]
    fn from_bits(bits: u32) -> Self {
        f32::from_bits(bits)
    }

    #[inline(always)]
    fn from_signed_bits(bits: u32) -> Self {
        bits as i32 as f32
    }
}

impl FloatBits for f64 {
    type Bits = u64;

    const MANTISSA_BITS: u32 = 52;
    const EXPONENT_BIAS: i32 = 1023;
    const SIGN_MASK: u64 = 0x8000_0000_0000_0000;
    const MANTISSA_MASK: u64 = 0x000f_ffff_ffff_ffff;
    const MIN_NORMAL_BITS: u64 = 0x0010_0000_0000_0000;
    const INFINITY_BITS: u64 = 0x7ff0_0000_0000_0000;

    #[inline(always)]
    fn to_bits(self) -> u64 {
        f64::to_bits(self)
    }

    #[inline(always)]
    fn from_bits(bits: u64) -> Self {
        f64::from_bits(bits)
    }

    #[inline(always)]
    fn from_signed_bits(bits: u64) -> Self {
        bits as i64 as f64
    }
}
