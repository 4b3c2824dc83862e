//! Lane-count-agnostic traits shared by scalars and [`Vector`](super::lanes::Vector).
//!
//! A plain `f32`/`f64` is treated as a one-lane vector whose mask is a `bool`,
//! so every kernel is written once against [`SimdFloat`] and runs unchanged on
//! 1, 2, 4 or 8 lanes.

use std::fmt::Debug;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Shl, Shr, Sub};

use crate::bits::{FloatBits, UintBits};

/// Per-lane boolean predicate.
pub trait SimdMask:
    Copy
    + Debug
    + Send
    + Sync
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + Not<Output = Self>
{
    const LANES: usize;

    fn splat(value: bool) -> Self;

    /// True when at least one lane is set.
    fn any(self) -> bool;

    fn all(self) -> bool;

    /// State of one lane. `lane` must be below `LANES`.
    fn test(self, lane: usize) -> bool;

    /// Number of set lanes.
    fn count(self) -> usize;
}

/// Unsigned integer lanes holding float bit patterns.
pub trait SimdUint:
    Copy
    + Debug
    + Send
    + Sync
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    type Scalar: UintBits;
    type Mask: SimdMask;

    fn splat(value: Self::Scalar) -> Self;

    fn wrapping_add(self, rhs: Self) -> Self;

    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Arithmetic shift right of the two's-complement reading.
    fn ashr(self, shift: u32) -> Self;

    /// Unsigned `>=` per lane.
    fn simd_ge(self, rhs: Self) -> Self::Mask;

    fn simd_eq(self, rhs: Self) -> Self::Mask;

    fn extract(self, lane: usize) -> Self::Scalar;
}

/// Floating-point lanes.
///
/// `Bits` and `Mask` are tied together so that a comparison on the bit view
/// produces a mask usable in [`SimdFloat::select`] without conversion.
pub trait SimdFloat:
    Copy
    + Debug
    + Send
    + Sync
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
{
    type Scalar: FloatBits;
    type Bits: SimdUint<Scalar = <Self::Scalar as FloatBits>::Bits, Mask = Self::Mask>;
    type Mask: SimdMask;

    const LANES: usize;

    fn splat(value: Self::Scalar) -> Self;

    /// Reinterprets every lane as its bit pattern.
    fn to_bits(self) -> Self::Bits;

    fn from_bits(bits: Self::Bits) -> Self;

    /// Converts two's-complement integers held in `bits` to floats.
    fn from_signed(bits: Self::Bits) -> Self;

    /// `self * a + b` with a single rounding.
    fn mul_add(self, a: Self, b: Self) -> Self;

    fn abs(self) -> Self;

    /// Lane-wise `if mask { on_true } else { on_false }`.
    fn select(mask: Self::Mask, on_true: Self, on_false: Self) -> Self;

    /// Builds a vector by looking up each lane's index independently.
    fn gather<F>(index: Self::Bits, lookup: F) -> Self
    where
        F: Fn(usize) -> Self::Scalar;

    fn from_lanes<F>(lane: F) -> Self
    where
        F: FnMut(usize) -> Self::Scalar;

    fn extract(self, lane: usize) -> Self::Scalar;
}

/// Single-precision lanes that can be evaluated in double precision with the
/// same lane count.
pub trait SimdWiden: SimdFloat<Scalar = f32> {
    type Wide: SimdFloat<Scalar = f64, Mask = Self::Mask>;

    fn widen(self) -> Self::Wide;

    /// Rounds every lane to nearest `f32`.
    fn narrow(wide: Self::Wide) -> Self;
}

/// Fills a vector from memory.
pub trait SimdLoad: Sized {
    type Scalar;

    /// Loads the first `LANES` values of `slice`.
    ///
    /// # Panics
    ///
    /// Panics if `slice` is shorter than the lane count.
    fn load(slice: &[Self::Scalar]) -> Self;

    /// Loads `min(slice.len(), LANES)` values, padding the remaining lanes
    /// with `1.0`, a value inside every kernel's fast domain.
    fn load_partial(slice: &[Self::Scalar]) -> Self;
}

/// Writes a vector back to memory.
pub trait SimdStore {
    type Scalar;

    /// Stores the whole vector at the start of `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than the lane count.
    fn store_at(&self, out: &mut [Self::Scalar]);

    /// Stores the first `out.len()` lanes.
    fn store_at_partial(&self, out: &mut [Self::Scalar]);
}

/// Element-wise transcendental functions over buffers.
///
/// The plain methods process the buffer on the calling thread; the `par_`
/// methods split it across the rayon pool.
pub trait SimdMath {
    type Output;

    /// Natural logarithm.
    fn ln(&self) -> Self::Output;

    /// Base-10 logarithm.
    fn log10(&self) -> Self::Output;

    /// `ln(1 + x)`, accurate near zero.
    fn ln_1p(&self) -> Self::Output;

    fn sin(&self) -> Self::Output;

    fn cos(&self) -> Self::Output;

    fn par_ln(&self) -> Self::Output;

    fn par_log10(&self) -> Self::Output;

    fn par_ln_1p(&self) -> Self::Output;

    fn par_sin(&self) -> Self::Output;

    fn par_cos(&self) -> Self::Output;
}
