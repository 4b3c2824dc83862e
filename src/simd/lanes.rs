//! Portable fixed-width lanes.
//!
//! [`Vector<T, N>`] stores `N` values in a plain array and implements every
//! operation lane by lane. There is no per-ISA code here: the loops are short,
//! fixed-length and branch-free, which is the shape the optimiser turns into
//! packed instructions.
//!
//! # Supported widths
//!
//! | Alias | Lanes | Bits view | Mask |
//! |-------|-------|-----------|------|
//! | [`F32x2`], [`F32x4`], [`F32x8`] | 2, 4, 8 | [`U32x2`], [`U32x4`], [`U32x8`] | [`Mask<N>`] |
//! | [`F64x2`], [`F64x4`], [`F64x8`] | 2, 4, 8 | [`U64x2`], [`U64x4`], [`U64x8`] | [`Mask<N>`] |
//! | `f32`, `f64` | 1 | `u32`, `u64` | `bool` |
//!
//! Any other `N` works as well; the aliases are the widths the crate tests.

use std::array;
use std::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Neg, Not, Shl, Shr, Sub};

use num::traits::{AsPrimitive, WrappingAdd, WrappingSub};
use num::Float;

use crate::bits::{FloatBits, UintBits};
use crate::error::{lane_count_mismatch, LaneMathError, Result};
use crate::simd::traits::{SimdFloat, SimdLoad, SimdMask, SimdStore, SimdUint, SimdWiden};

/// `N` packed lanes of `T`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<T, const N: usize> {
    pub elements: [T; N],
}

/// Per-lane predicate for a `Vector<_, N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct Mask<const N: usize> {
    pub lanes: [bool; N],
}

pub type F32x2 = Vector<f32, 2>;
pub type F32x4 = Vector<f32, 4>;
pub type F32x8 = Vector<f32, 8>;
pub type F64x2 = Vector<f64, 2>;
pub type F64x4 = Vector<f64, 4>;
pub type F64x8 = Vector<f64, 8>;

pub type U32x2 = Vector<u32, 2>;
pub type U32x4 = Vector<u32, 4>;
pub type U32x8 = Vector<u32, 8>;
pub type U64x2 = Vector<u64, 2>;
pub type U64x4 = Vector<u64, 4>;
pub type U64x8 = Vector<u64, 8>;

impl<T: Copy, const N: usize> Vector<T, N> {
    #[inline(always)]
    pub fn new(elements: [T; N]) -> Self {
        Self { elements }
    }

    #[inline(always)]
    pub fn to_array(self) -> [T; N] {
        self.elements
    }

    #[inline(always)]
    fn zip_with<F: Fn(T, T) -> T>(self, rhs: Self, f: F) -> Self {
        Self {
            elements: array::from_fn(|i| f(self.elements[i], rhs.elements[i])),
        }
    }
}

impl<T: Copy, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(elements: [T; N]) -> Self {
        Self::new(elements)
    }
}

/// Loads a slice of exactly `N` values.
impl<'a, T: Copy, const N: usize> TryFrom<&'a [T]> for Vector<T, N> {
    type Error = LaneMathError;

    fn try_from(slice: &'a [T]) -> Result<Self> {
        <[T; N]>::try_from(slice)
            .map(Self::new)
            .map_err(|_| lane_count_mismatch(N, slice.len()))
    }
}

impl<const N: usize> Mask<N> {
    #[inline(always)]
    pub fn new(lanes: [bool; N]) -> Self {
        Self { lanes }
    }
}

// ================================================================================================
// OPERATORS
// ================================================================================================

macro_rules! impl_lanewise_binary {
    ($bound:ident: $($trait:ident::$method:ident),*) => {$(
        impl<T: $bound, const N: usize> $trait for Vector<T, N> {
            type Output = Self;

            #[inline(always)]
            fn $method(self, rhs: Self) -> Self {
                self.zip_with(rhs, |a, b| $trait::$method(a, b))
            }
        }
    )*};
}

impl_lanewise_binary!(FloatBits: Add::add, Sub::sub, Mul::mul, Div::div);
impl_lanewise_binary!(UintBits: BitAnd::bitand, BitOr::bitor, BitXor::bitxor);

impl<T: FloatBits, const N: usize> Neg for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self {
        Self {
            elements: self.elements.map(|e| -e),
        }
    }
}

impl<T: UintBits, const N: usize> Shl<u32> for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn shl(self, shift: u32) -> Self {
        Self {
            elements: self.elements.map(|e| e << shift as usize),
        }
    }
}

impl<T: UintBits, const N: usize> Shr<u32> for Vector<T, N> {
    type Output = Self;

    #[inline(always)]
    fn shr(self, shift: u32) -> Self {
        Self {
            elements: self.elements.map(|e| e >> shift as usize),
        }
    }
}

impl<const N: usize> BitAnd for Mask<N> {
    type Output = Self;

    #[inline(always)]
    fn bitand(self, rhs: Self) -> Self {
        Self::new(array::from_fn(|i| self.lanes[i] & rhs.lanes[i]))
    }
}

impl<const N: usize> BitOr for Mask<N> {
    type Output = Self;

    #[inline(always)]
    fn bitor(self, rhs: Self) -> Self {
        Self::new(array::from_fn(|i| self.lanes[i] | rhs.lanes[i]))
    }
}

impl<const N: usize> Not for Mask<N> {
    type Output = Self;

    #[inline(always)]
    fn not(self) -> Self {
        Self::new(self.lanes.map(|l| !l))
    }
}

// ================================================================================================
// MASKS
// ================================================================================================

impl<const N: usize> SimdMask for Mask<N> {
    const LANES: usize = N;

    #[inline(always)]
    fn splat(value: bool) -> Self {
        Self::new([value; N])
    }

    #[inline(always)]
    fn any(self) -> bool {
        self.lanes.iter().any(|&l| l)
    }

    #[inline(always)]
    fn all(self) -> bool {
        self.lanes.iter().all(|&l| l)
    }

    #[inline(always)]
    fn test(self, lane: usize) -> bool {
        self.lanes[lane]
    }

    #[inline(always)]
    fn count(self) -> usize {
        self.lanes.iter().filter(|&&l| l).count()
    }
}

impl SimdMask for bool {
    const LANES: usize = 1;

    #[inline(always)]
    fn splat(value: bool) -> Self {
        value
    }

    #[inline(always)]
    fn any(self) -> bool {
        self
    }

    #[inline(always)]
    fn all(self) -> bool {
        self
    }

    #[inline(always)]
    fn test(self, _lane: usize) -> bool {
        self
    }

    #[inline(always)]
    fn count(self) -> usize {
        self as usize
    }
}

// ================================================================================================
// INTEGER LANES
// ================================================================================================

impl<U: UintBits, const N: usize> SimdUint for Vector<U, N> {
    type Scalar = U;
    type Mask = Mask<N>;

    #[inline(always)]
    fn splat(value: U) -> Self {
        Self::new([value; N])
    }

    #[inline(always)]
    fn wrapping_add(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| WrappingAdd::wrapping_add(&a, &b))
    }

    #[inline(always)]
    fn wrapping_sub(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| WrappingSub::wrapping_sub(&a, &b))
    }

    #[inline(always)]
    fn ashr(self, shift: u32) -> Self {
        Self::new(self.elements.map(|e| UintBits::ashr(e, shift)))
    }

    #[inline(always)]
    fn simd_ge(self, rhs: Self) -> Mask<N> {
        Mask::new(array::from_fn(|i| self.elements[i] >= rhs.elements[i]))
    }

    #[inline(always)]
    fn simd_eq(self, rhs: Self) -> Mask<N> {
        Mask::new(array::from_fn(|i| self.elements[i] == rhs.elements[i]))
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> U {
        self.elements[lane]
    }
}

macro_rules! impl_scalar_uint {
    ($($t:ty),*) => {$(
        impl SimdUint for $t {
            type Scalar = $t;
            type Mask = bool;

            #[inline(always)]
            fn splat(value: $t) -> Self {
                value
            }

            #[inline(always)]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline(always)]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline(always)]
            fn ashr(self, shift: u32) -> Self {
                UintBits::ashr(self, shift)
            }

            #[inline(always)]
            fn simd_ge(self, rhs: Self) -> bool {
                self >= rhs
            }

            #[inline(always)]
            fn simd_eq(self, rhs: Self) -> bool {
                self == rhs
            }

            #[inline(always)]
            fn extract(self, _lane: usize) -> $t {
                self
            }
        }
    )*};
}

impl_scalar_uint!(u32, u64);

// ================================================================================================
// FLOAT LANES
// ================================================================================================

impl<T: FloatBits, const N: usize> SimdFloat for Vector<T, N> {
    type Scalar = T;
    type Bits = Vector<T::Bits, N>;
    type Mask = Mask<N>;

    const LANES: usize = N;

    #[inline(always)]
    fn splat(value: T) -> Self {
        Self::new([value; N])
    }

    #[inline(always)]
    fn to_bits(self) -> Self::Bits {
        Vector::new(self.elements.map(<T as FloatBits>::to_bits))
    }

    #[inline(always)]
    fn from_bits(bits: Self::Bits) -> Self {
        Self::new(bits.elements.map(<T as FloatBits>::from_bits))
    }

    #[inline(always)]
    fn from_signed(bits: Self::Bits) -> Self {
        Self::new(bits.elements.map(T::from_signed_bits))
    }

    #[inline(always)]
    fn mul_add(self, a: Self, b: Self) -> Self {
        Self::new(array::from_fn(|i| {
            Float::mul_add(self.elements[i], a.elements[i], b.elements[i])
        }))
    }

    #[inline(always)]
    fn abs(self) -> Self {
        Self::new(self.elements.map(Float::abs))
    }

    #[inline(always)]
    fn select(mask: Mask<N>, on_true: Self, on_false: Self) -> Self {
        Self::new(array::from_fn(|i| {
            if mask.lanes[i] {
                on_true.elements[i]
            } else {
                on_false.elements[i]
            }
        }))
    }

    #[inline(always)]
    fn gather<F>(index: Self::Bits, lookup: F) -> Self
    where
        F: Fn(usize) -> T,
    {
        Self::new(index.elements.map(|i| lookup(i.as_())))
    }

    #[inline(always)]
    fn from_lanes<F>(lane: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self::new(array::from_fn(lane))
    }

    #[inline(always)]
    fn extract(self, lane: usize) -> T {
        self.elements[lane]
    }
}

macro_rules! impl_scalar_float {
    ($($t:ty => $bits:ty),*) => {$(
        impl SimdFloat for $t {
            type Scalar = $t;
            type Bits = $bits;
            type Mask = bool;

            const LANES: usize = 1;

            #[inline(always)]
            fn splat(value: $t) -> Self {
                value
            }

            #[inline(always)]
            fn to_bits(self) -> $bits {
                <$t>::to_bits(self)
            }

            #[inline(always)]
            fn from_bits(bits: $bits) -> Self {
                <$t>::from_bits(bits)
            }

            #[inline(always)]
            fn from_signed(bits: $bits) -> Self {
                <$t as FloatBits>::from_signed_bits(bits)
            }

            #[inline(always)]
            fn mul_add(self, a: Self, b: Self) -> Self {
                <$t>::mul_add(self, a, b)
            }

            #[inline(always)]
            fn abs(self) -> Self {
                <$t>::abs(self)
            }

            #[inline(always)]
            fn select(mask: bool, on_true: Self, on_false: Self) -> Self {
                if mask {
                    on_true
                } else {
                    on_false
                }
            }

            #[inline(always)]
            fn gather<F>(index: $bits, lookup: F) -> Self
            where
                F: Fn(usize) -> $t,
            {
                lookup(index as usize)
            }

            #[inline(always)]
            fn from_lanes<F>(mut lane: F) -> Self
            where
                F: FnMut(usize) -> $t,
            {
                lane(0)
            }

            #[inline(always)]
            fn extract(self, _lane: usize) -> $t {
                self
            }
        }
    )*};
}

impl_scalar_float!(f32 => u32, f64 => u64);

impl SimdWiden for f32 {
    type Wide = f64;

    #[inline(always)]
    fn widen(self) -> f64 {
        self as f64
    }

    #[inline(always)]
    fn narrow(wide: f64) -> Self {
        wide as f32
    }
}

impl<const N: usize> SimdWiden for Vector<f32, N> {
    type Wide = Vector<f64, N>;

    #[inline(always)]
    fn widen(self) -> Vector<f64, N> {
        Vector::new(self.elements.map(|e| e as f64))
    }

    #[inline(always)]
    fn narrow(wide: Vector<f64, N>) -> Self {
        Self::new(wide.elements.map(|e| e as f32))
    }
}

// ================================================================================================
// LOAD / STORE
// ================================================================================================

impl<T: FloatBits, const N: usize> SimdLoad for Vector<T, N> {
    type Scalar = T;

    #[inline(always)]
    fn load(slice: &[T]) -> Self {
        Self::new(array::from_fn(|i| slice[i]))
    }

    #[inline(always)]
    fn load_partial(slice: &[T]) -> Self {
        Self::new(array::from_fn(|i| slice.get(i).copied().unwrap_or_else(T::one)))
    }
}

impl<T: Copy, const N: usize> SimdStore for Vector<T, N> {
    type Scalar = T;

    #[inline(always)]
    fn store_at(&self, out: &mut [T]) {
        out[..N].copy_from_slice(&self.elements);
    }

    #[inline(always)]
    fn store_at_partial(&self, out: &mut [T]) {
        let n = out.len().min(N);
        out[..n].copy_from_slice(&self.elements[..n]);
    }
}
