//! Transcendental kernels over scalars and lanes.
//!
//! Every function here is an instance of the same four-step pipeline:
//!
//! 1. **Decompose**: reinterpret the input as its bit pattern.
//! 2. **Reduce**: map it to a small canonical interval, through a lookup table
//!    (`log`, `log10`), a single exponent split (`logf`, `log10f`, `log1p`) or a
//!    modular reduction by `π/2` or `π` (`sin`, `cos`).
//! 3. **Approximate**: evaluate a minimax polynomial with FMA chains.
//! 4. **Special-case**: flag, from the raw bits, the lanes where the fast path's
//!    error bound does not hold and recompute only those with a precise
//!    fallback, merged back by select.
//!
//! # Functions
//!
//! | Function | Input | Fast domain | Fallback | Max error |
//! |----------|-------|-------------|----------|-----------|
//! | [`logf`] | `f32` lanes | normal positive | `f32::ln` | 3.34 ulp |
//! | [`log10f`] | `f32` lanes | normal positive | `f32::log10` | 3.31 ulp |
//! | [`log1pf`] | `f32` lanes | `x > -1`, `|x|` normal | `f32::ln_1p` | 1.0 ulp |
//! | [`log`] | `f64` lanes | normal positive | `f64::ln` | 2.5 ulp |
//! | [`log10`] | `f64` lanes | normal positive | `f64::log10` | 2.5 ulp |
//! | [`log1p`] | `f64` lanes | `x > -1`, `|x|` normal | `f64::ln_1p` | 2.0 ulp |
//! | [`sinf`] | `f32` lanes | `|x| < 120` | exact large reduction | 0.56 ulp |
//! | [`cosf`] | `f32` lanes | `|x| < 120` | exact large reduction | 0.56 ulp |
//! | [`sin`] | `f64` lanes | `2^-255 <= |x| < 2^23` | `f64::sin` | 3.5 ulp |
//! | [`cos`] | `f64` lanes | `2^-27 <= |x| < 2^23` | `f64::cos` | 3.5 ulp |
//!
//! Each function accepts a plain scalar or any [`Vector`](crate::simd::Vector)
//! width. A vector lane always produces exactly the bits the scalar call
//! produces for the same input.
//!
//! # Special values
//!
//! | Input | log family | sin / cos |
//! |-------|------------|-----------|
//! | `+0.0` | `-∞` (log1p: `+0.0`) | `sin`: `+0.0`, `cos`: `1.0` |
//! | `< 0` (`< -1` for log1p) | NaN | regular |
//! | `+∞` | `+∞` | NaN |
//! | NaN | NaN | NaN |
//!
//! # Usage
//!
//! ```rust
//! use lanemath::math::{cosf, log};
//! use lanemath::simd::{F32x4, Vector};
//!
//! assert_eq!(log(1.0f64), 0.0);
//!
//! let x = F32x4::new([0.0, 1.0e30, f32::INFINITY, 2.0f32.powi(-13)]);
//! let y: Vector<f32, 4> = cosf(x);
//! assert_eq!(y.elements[0], 1.0);
//! assert!(y.elements[2].is_nan());
//! assert_eq!(y.elements[3], 1.0);
//! ```

mod ln;
mod log10;
mod log1p;
pub mod poly;
mod sincos;
pub mod special;
pub mod tables;

pub use ln::{Log, Logf};
pub use log10::{Log10, Log10f};
pub use log1p::{Log1p, Log1pf};
pub use sincos::{Cos, Cosf, Sin, Sinf};

use crate::math::special::merge_fallback;
use crate::simd::{SimdFloat, SimdWiden};

/// A fast-path/fallback pair for one function at one precision.
///
/// Implementors supply the branch-free [`fast_path`](Kernel::fast_path) and the
/// precise scalar [`fallback`](Kernel::fallback); the provided methods combine
/// them with predicated selects so SIMD width is kept even when some lanes
/// need the slow path.
pub trait Kernel<V: SimdFloat> {
    /// Short function name used in trace output.
    const NAME: &'static str;

    /// Declared worst-case error of the combined result, in ulp.
    const MAX_ULP: f64;

    /// Evaluates every lane on the fast path.
    ///
    /// Returns the result together with the mask of lanes whose value cannot
    /// be trusted. Flagged lanes may hold any value, including NaN.
    fn fast_path(x: V) -> (V, V::Mask);

    /// Precise evaluation for a single flagged lane.
    fn fallback(x: V::Scalar) -> V::Scalar;

    /// Full evaluation.
    #[inline(always)]
    fn eval(x: V) -> V {
        Self::eval_with_mask(x).0
    }

    /// Full evaluation, also reporting which lanes used the fallback.
    #[inline(always)]
    fn eval_with_mask(x: V) -> (V, V::Mask) {
        let (y, special) = Self::fast_path(x);
        (
            merge_fallback(Self::NAME, x, y, special, Self::fallback),
            special,
        )
    }

    /// Evaluates only the lanes set in `active`.
    ///
    /// Inactive lanes return their input unchanged and never reach the
    /// fallback, whatever value they hold.
    #[inline(always)]
    fn eval_predicated(x: V, active: V::Mask) -> V {
        let (y, special) = Self::fast_path(x);
        let y = merge_fallback(Self::NAME, x, y, special & active, Self::fallback);
        V::select(active, y, x)
    }
}

/// Natural logarithm, single precision.
#[inline(always)]
pub fn logf<V: SimdFloat<Scalar = f32>>(x: V) -> V {
    Logf::eval(x)
}

/// Natural logarithm, double precision.
#[inline(always)]
pub fn log<V: SimdFloat<Scalar = f64>>(x: V) -> V {
    Log::eval(x)
}

/// Base-10 logarithm, single precision.
#[inline(always)]
pub fn log10f<V: SimdFloat<Scalar = f32>>(x: V) -> V {
    Log10f::eval(x)
}

/// Base-10 logarithm, double precision.
#[inline(always)]
pub fn log10<V: SimdFloat<Scalar = f64>>(x: V) -> V {
    Log10::eval(x)
}

/// `ln(1 + x)`, single precision.
#[inline(always)]
pub fn log1pf<V: SimdWiden>(x: V) -> V {
    Log1pf::eval(x)
}

/// `ln(1 + x)`, double precision.
#[inline(always)]
pub fn log1p<V: SimdFloat<Scalar = f64>>(x: V) -> V {
    Log1p::eval(x)
}

/// Sine, single precision.
#[inline(always)]
pub fn sinf<V: SimdWiden>(x: V) -> V {
    Sinf::eval(x)
}

/// Sine, double precision.
#[inline(always)]
pub fn sin<V: SimdFloat<Scalar = f64>>(x: V) -> V {
    Sin::eval(x)
}

/// Cosine, single precision.
#[inline(always)]
pub fn cosf<V: SimdWiden>(x: V) -> V {
    Cosf::eval(x)
}

/// Cosine, double precision.
#[inline(always)]
pub fn cos<V: SimdFloat<Scalar = f64>>(x: V) -> V {
    Cos::eval(x)
}
