//! # lanemath
//!
//! Vectorisable `log`, `log10`, `log1p`, `sin` and `cos` for `f32` and `f64`,
//! on plain scalars and on 2, 4 or 8-lane vectors.
//!
//! Each function reduces its argument with integer operations on the IEEE-754
//! bit pattern, evaluates a minimax polynomial with fused multiply-adds, and
//! sends only the lanes outside the polynomial's accurate domain to a precise
//! scalar fallback. The fast path has no division, no data-dependent branch
//! and no library call.
//!
//! ## Layout
//!
//! - [`bits`]: field access on float bit patterns.
//! - [`simd`]: portable lane types, the traits the kernels are written
//!   against, and slice-level helpers.
//! - [`math`]: the kernels, their tables and polynomial evaluators.
//! - [`error`]: errors of the buffer-oriented API.
//!
//! ## Quick start
//!
//! ```rust
//! use lanemath::math::{log10, sinf};
//! use lanemath::simd::{F32x8, SimdFloat, SimdMath};
//!
//! assert_eq!(log10(1.0f64), 0.0);
//!
//! let x = F32x8::splat(0.5);
//! let s = sinf(x);
//! assert!((s.elements[3] - 0.5f32.sin()).abs() < 1e-7);
//!
//! let angles: Vec<f64> = (0..100).map(|i| i as f64 * 0.1).collect();
//! let cosines = angles.cos();
//! assert_eq!(cosines.len(), 100);
//! ```
//!
//! Numeric domain errors never surface as `Err`: `log(-1.0)` is NaN and
//! `log(0.0)` is `-∞`, as in the standard library.

pub mod bits;
pub mod error;
pub mod math;
pub mod simd;

pub use error::{LaneMathError, Result};
pub use simd::SimdMath;

/// Buffers with at least this many elements are processed on the rayon pool
/// by [`simd::fast_map`].
pub const PARALLEL_SIMD_THRESHOLD: usize = 65_536;

/// Elements per rayon task on the parallel path.
pub const PARALLEL_CHUNK_SIZE: usize = 8_192;
