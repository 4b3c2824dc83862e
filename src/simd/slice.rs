//! Buffer-level evaluation of the math kernels.
//!
//! Every function here walks a slice in blocks of one [`Vector`](super::Vector)
//! width, evaluates a [`Kernel`] on each block and writes the lanes back. The
//! tail that does not fill a whole block is loaded with
//! [`SimdLoad::load_partial`], padded with `1.0`, and only the live lanes are
//! stored.
//!
//! # Strategies
//!
//! | Function | Threads | Use for |
//! |----------|---------|---------|
//! | [`scalar_map`] | caller | reference results, tiny inputs |
//! | [`simd_map`] | caller | most buffers |
//! | [`par_simd_map`] | rayon pool | very large buffers |
//! | [`fast_map`] | picked by size | when the size is not known up front |
//! | [`map_into`] | caller | writing into an existing buffer |
//!
//! [`fast_map`] switches to the parallel path at
//! [`PARALLEL_SIMD_THRESHOLD`](crate::PARALLEL_SIMD_THRESHOLD) elements;
//! [`fast_map_with`] takes the threshold and chunk size from a
//! [`DispatchConfig`] instead.
//!
//! Results never depend on the strategy: each element goes through the same
//! generic kernel, so all of them return identical bits.
//!
//! # Example
//!
//! ```rust
//! use lanemath::math::Logf;
//! use lanemath::simd::{fast_map, SimdMath, F32x8};
//!
//! let data: Vec<f32> = (1..=20).map(|i| i as f32).collect();
//! let logs = data.as_slice().ln();
//! assert_eq!(logs.len(), 20);
//! assert_eq!(logs[0], 0.0);
//!
//! let same = fast_map::<Logf, F32x8, _>(&data);
//! assert_eq!(logs, same);
//! ```

use rayon::prelude::*;

use crate::bits::FloatBits;
use crate::error::{length_mismatch, validation_error, Result};
use crate::math::{Cos, Cosf, Kernel, Log, Log10, Log10f, Log1p, Log1pf, Logf, Sin, Sinf};
use crate::simd::lanes::{F32x8, F64x4};
use crate::simd::traits::{SimdFloat, SimdLoad, SimdMath, SimdStore};
use crate::{PARALLEL_CHUNK_SIZE, PARALLEL_SIMD_THRESHOLD};

// ================================================================================================
// CONFIGURATION
// ================================================================================================

/// Size-based dispatch settings for [`fast_map_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchConfig {
    parallel_threshold: usize,
    chunk_size: usize,
}

impl DispatchConfig {
    /// Creates a configuration.
    ///
    /// Buffers with at least `parallel_threshold` elements are split across
    /// the rayon pool in chunks of about `chunk_size` elements, rounded down
    /// to a whole number of blocks.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`](crate::LaneMathError::ValidationError) when
    /// `chunk_size` is zero.
    pub fn new(parallel_threshold: usize, chunk_size: usize) -> Result<Self> {
        if chunk_size == 0 {
            log::debug!(
                "rejecting dispatch config: chunk_size = 0, parallel_threshold = {parallel_threshold}"
            );
            return Err(validation_error("chunk size must be non-zero"));
        }

        Ok(Self {
            parallel_threshold,
            chunk_size,
        })
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: PARALLEL_SIMD_THRESHOLD,
            chunk_size: PARALLEL_CHUNK_SIZE,
        }
    }
}

// ================================================================================================
// BLOCK LOOPS
// ================================================================================================

/// Evaluates `K` over `input` into `out`, one `V` block at a time.
#[inline(always)]
fn map_blocks<K, V, T>(input: &[T], out: &mut [T])
where
    K: Kernel<V>,
    V: SimdFloat<Scalar = T> + SimdLoad<Scalar = T> + SimdStore<Scalar = T>,
    T: FloatBits,
{
    debug_assert_eq!(input.len(), out.len());

    let step = <V as SimdFloat>::LANES;
    let complete = input.len() - input.len() % step;

    for (src, dst) in input[..complete]
        .chunks_exact(step)
        .zip(out[..complete].chunks_exact_mut(step))
    {
        K::eval(V::load(src)).store_at(dst);
    }

    if complete < input.len() {
        K::eval(V::load_partial(&input[complete..])).store_at_partial(&mut out[complete..]);
    }
}

fn par_map_blocks<K, V, T>(input: &[T], out: &mut [T], chunk_size: usize)
where
    K: Kernel<V>,
    V: SimdFloat<Scalar = T> + SimdLoad<Scalar = T> + SimdStore<Scalar = T>,
    T: FloatBits,
{
    let step = <V as SimdFloat>::LANES;

    // Whole blocks per chunk, so only the last chunk has a partial tail.
    let chunk_size = ((chunk_size / step) * step).max(step);

    out.par_chunks_mut(chunk_size)
        .zip(input.par_chunks(chunk_size))
        .for_each(|(dst, src)| map_blocks::<K, V, T>(src, dst));
}

// ================================================================================================
// PUBLIC ENTRY POINTS
// ================================================================================================

/// Applies `K` element by element on one-lane values.
pub fn scalar_map<K, T>(input: &[T]) -> Vec<T>
where
    K: Kernel<T>,
    T: SimdFloat<Scalar = T>,
{
    input.iter().map(|&x| K::eval(x)).collect()
}

/// Applies `K` to `input` in blocks of `V` on the calling thread.
pub fn simd_map<K, V, T>(input: &[T]) -> Vec<T>
where
    K: Kernel<V>,
    V: SimdFloat<Scalar = T> + SimdLoad<Scalar = T> + SimdStore<Scalar = T>,
    T: FloatBits,
{
    let mut out = vec![T::zero(); input.len()];
    map_blocks::<K, V, T>(input, &mut out);
    out
}

/// Applies `K` to `input` in blocks of `V`, split across the rayon pool in
/// chunks of [`PARALLEL_CHUNK_SIZE`](crate::PARALLEL_CHUNK_SIZE) elements.
pub fn par_simd_map<K, V, T>(input: &[T]) -> Vec<T>
where
    K: Kernel<V>,
    V: SimdFloat<Scalar = T> + SimdLoad<Scalar = T> + SimdStore<Scalar = T>,
    T: FloatBits,
{
    let mut out = vec![T::zero(); input.len()];
    par_map_blocks::<K, V, T>(input, &mut out, PARALLEL_CHUNK_SIZE);
    out
}

/// [`simd_map`] below the default parallel threshold, [`par_simd_map`] from
/// it on.
pub fn fast_map<K, V, T>(input: &[T]) -> Vec<T>
where
    K: Kernel<V>,
    V: SimdFloat<Scalar = T> + SimdLoad<Scalar = T> + SimdStore<Scalar = T>,
    T: FloatBits,
{
    fast_map_with::<K, V, T>(input, &DispatchConfig::default())
}

/// Like [`fast_map`], with the threshold and chunk size taken from `config`.
pub fn fast_map_with<K, V, T>(input: &[T], config: &DispatchConfig) -> Vec<T>
where
    K: Kernel<V>,
    V: SimdFloat<Scalar = T> + SimdLoad<Scalar = T> + SimdStore<Scalar = T>,
    T: FloatBits,
{
    let mut out = vec![T::zero(); input.len()];

    if input.len() < config.parallel_threshold {
        log::trace!(
            "{}: {} elements on the calling thread",
            <K as Kernel<V>>::NAME,
            input.len()
        );
        map_blocks::<K, V, T>(input, &mut out);
    } else {
        log::trace!(
            "{}: {} elements in parallel chunks of {}",
            <K as Kernel<V>>::NAME,
            input.len(),
            config.chunk_size
        );
        par_map_blocks::<K, V, T>(input, &mut out, config.chunk_size);
    }

    out
}

/// Applies `K` to `input`, writing the results into `out`.
///
/// # Errors
///
/// Returns [`LengthMismatch`](crate::LaneMathError::LengthMismatch) when the
/// two slices differ in length; `out` is left untouched.
pub fn map_into<K, V, T>(input: &[T], out: &mut [T]) -> Result<()>
where
    K: Kernel<V>,
    V: SimdFloat<Scalar = T> + SimdLoad<Scalar = T> + SimdStore<Scalar = T>,
    T: FloatBits,
{
    if input.len() != out.len() {
        return Err(length_mismatch(input.len(), out.len()));
    }

    map_blocks::<K, V, T>(input, out);
    Ok(())
}

// ================================================================================================
// TRAIT IMPLEMENTATIONS
// ================================================================================================

macro_rules! impl_simd_math {
    ($t:ty, $block:ty, $ln:ty, $log10:ty, $log1p:ty, $sin:ty, $cos:ty) => {
        impl_simd_math!(@impl &[$t], $t, $block, $ln, $log10, $log1p, $sin, $cos);
        impl_simd_math!(@impl Vec<$t>, $t, $block, $ln, $log10, $log1p, $sin, $cos);
    };
    (@impl $self_ty:ty, $t:ty, $block:ty, $ln:ty, $log10:ty, $log1p:ty, $sin:ty, $cos:ty) => {
        impl SimdMath for $self_ty {
            type Output = Vec<$t>;

            fn ln(&self) -> Vec<$t> {
                simd_map::<$ln, $block, $t>(self)
            }

            fn log10(&self) -> Vec<$t> {
                simd_map::<$log10, $block, $t>(self)
            }

            fn ln_1p(&self) -> Vec<$t> {
                simd_map::<$log1p, $block, $t>(self)
            }

            fn sin(&self) -> Vec<$t> {
                simd_map::<$sin, $block, $t>(self)
            }

            fn cos(&self) -> Vec<$t> {
                simd_map::<$cos, $block, $t>(self)
            }

            fn par_ln(&self) -> Vec<$t> {
                par_simd_map::<$ln, $block, $t>(self)
            }

            fn par_log10(&self) -> Vec<$t> {
                par_simd_map::<$log10, $block, $t>(self)
            }

            fn par_ln_1p(&self) -> Vec<$t> {
                par_simd_map::<$log1p, $block, $t>(self)
            }

            fn par_sin(&self) -> Vec<$t> {
                par_simd_map::<$sin, $block, $t>(self)
            }

            fn par_cos(&self) -> Vec<$t> {
                par_simd_map::<$cos, $block, $t>(self)
            }
        }
    };
}

impl_simd_math!(f32, F32x8, Logf, Log10f, Log1pf, Sinf, Cosf);
impl_simd_math!(f64, F64x4, Log, Log10, Log1p, Sin, Cos);
