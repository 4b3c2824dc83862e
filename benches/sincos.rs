//! Sine and cosine benchmarks: scalar standard library against the lane kernels.
//!
//! Covers `sin` and `cos` in both precisions over sizes from L1
//! resident to memory bound, each with the scalar, blocked and parallel paths.

use std::hint::black_box;
use std::time::Instant;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use lanemath::math::{Cos, Cosf};
use lanemath::simd::{fast_map, F32x8, F64x4, SimdMath};

// ================================================================================================
// BENCHMARK CONFIGURATION
// ================================================================================================

/// Element counts from L1-resident up to main memory.
const VECTOR_SIZES: &[usize] = &[
    1_024,      // 4 KiB (f32) - L1 cache
    16_384,     // 64 KiB - L1→L2 transition
    262_144,    // 1 MiB - L2 cache
    4_194_304,  // 16 MiB - L3 cache
    16_777_216, // 64 MiB - main memory
];

// ================================================================================================
// TEST DATA GENERATION
// ================================================================================================

/// Reproducible angles in `[0, 2π)`, all on the fast path.
fn generate_test_data_f32(len: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(42);

    (0..len)
        .map(|_| rng.random::<f32>() * 2.0 * std::f32::consts::PI)
        .collect()
}

fn generate_test_data_f64(len: usize) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(42);

    (0..len)
        .map(|_| rng.random::<f64>() * 2.0 * std::f64::consts::PI)
        .collect()
}

// ================================================================================================
// BENCHMARK IMPLEMENTATIONS
// ================================================================================================

fn benchmark_sincos_f32(c: &mut Criterion) {
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group(format!("Cosf_{}", format_size(size, 4)));
        group.throughput(Throughput::Bytes((size * std::mem::size_of::<f32>()) as u64));

        let input_vec = generate_test_data_f32(size);
        let input_slice = input_vec.as_slice();

        group.bench_with_input(BenchmarkId::new("scalar", size), input_slice, |b, input| {
            b.iter(|| black_box(input.iter().map(|x| x.cos()).collect::<Vec<f32>>()))
        });

        group.bench_with_input(BenchmarkId::new("simd", size), input_slice, |b, input| {
            b.iter(|| black_box(black_box(input).cos()))
        });

        group.bench_with_input(
            BenchmarkId::new("parallel SIMD", size),
            input_slice,
            |b, input| b.iter(|| black_box(black_box(input).par_cos())),
        );

        group.bench_with_input(BenchmarkId::new("Fast", size), input_slice, |b, input| {
            b.iter(|| black_box(fast_map::<Cosf, F32x8, f32>(black_box(input))))
        });

        group.bench_with_input(BenchmarkId::new("sin", size), input_slice, |b, input| {
            b.iter(|| black_box(black_box(input).sin()))
        });

        group.bench_with_input(BenchmarkId::new("parallel sin", size), input_slice, |b, input| {
            b.iter(|| black_box(black_box(input).par_sin()))
        });

        group.finish();
    }
}

fn benchmark_sincos_f64(c: &mut Criterion) {
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group(format!("Cos_{}", format_size(size, 8)));
        group.throughput(Throughput::Bytes((size * std::mem::size_of::<f64>()) as u64));

        let input_vec = generate_test_data_f64(size);
        let input_slice = input_vec.as_slice();

        group.bench_with_input(BenchmarkId::new("scalar", size), input_slice, |b, input| {
            b.iter(|| black_box(input.iter().map(|x| x.cos()).collect::<Vec<f64>>()))
        });

        group.bench_with_input(BenchmarkId::new("simd", size), input_slice, |b, input| {
            b.iter(|| black_box(black_box(input).cos()))
        });

        group.bench_with_input(BenchmarkId::new("Fast", size), input_slice, |b, input| {
            b.iter(|| black_box(fast_map::<Cos, F64x4, f64>(black_box(input))))
        });

        group.bench_with_input(BenchmarkId::new("sin", size), input_slice, |b, input| {
            b.iter(|| black_box(black_box(input).sin()))
        });

        group.bench_with_input(BenchmarkId::new("parallel sin", size), input_slice, |b, input| {
            b.iter(|| black_box(black_box(input).par_sin()))
        });

        group.finish();
    }
}

// ================================================================================================
// UTILITY FUNCTIONS
// ================================================================================================

/// Formats a buffer of `elements` values of `width` bytes each.
fn format_size(elements: usize, width: usize) -> String {
    let bytes = elements * width;

    if bytes >= 1_073_741_824 {
        format!("{:.1}_GiB", bytes as f64 / 1_073_741_824.0)
    } else if bytes >= 1_048_576 {
        format!("{:.1}_MiB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1}_KiB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes}_B")
    }
}

fn all_benchmarks(c: &mut Criterion) {
    println!(
        "Sine and cosine benchmarks over {} sizes, {} to {} elements",
        VECTOR_SIZES.len(),
        VECTOR_SIZES[0],
        VECTOR_SIZES[VECTOR_SIZES.len() - 1]
    );

    let start_time = Instant::now();

    benchmark_sincos_f32(c);
    benchmark_sincos_f64(c);

    println!(
        "Benchmark suite completed in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );
}

// ================================================================================================
// CRITERION INTEGRATION
// ================================================================================================

criterion_group!(benches, all_benchmarks);
criterion_main!(benches);
