//! Sine and cosine benchmarks: standard library scalar loop vs lane kernels.
//!
//! # Benchmark Categories
//!
//! ## 1. **Lane widths**
//! - One `LaneVector<f32, N>` evaluation for N = 4, 8, 16, 64
//! - Widths that are a multiple of the register width reach the intrinsic
//!   kernels; the others stay on the portable path
//!
//! ## 2. **Slices across the memory hierarchy**
//! - Scalar `f32::sin` baseline
//! - `sin_into` / `sincos_into` (sequential)
//! - `par_sin_into` (rayon, above the parallel threshold)

use std::hint::black_box;
use std::time::Instant;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use lanemat::trig::slice::{par_sin_into, sin_into, sincos_into};
use lanemat::{LaneVector, SimdTrig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

// ================================================================================================
// BENCHMARK CONFIGURATION
// ================================================================================================

/// Slice lengths spanning L1 to main memory.
const VECTOR_SIZES: &[usize] = &[
    1_024,     // 4 KiB - L1 cache
    16_384,    // 64 KiB - L1→L2 transition
    262_144,   // 1 MiB - parallel threshold
    1_048_576, // 4 MiB - L3 cache
    4_194_304, // 16 MiB - L3→RAM transition
];

// ================================================================================================
// TEST DATA GENERATION
// ================================================================================================

/// Reproducible inputs in [-2π, 2π).
fn generate_test_data(len: usize) -> Vec<f32> {
    let mut rng = StdRng::seed_from_u64(42);

    (0..len)
        .map(|_| (rng.random::<f32>() - 0.5) * 4.0 * std::f32::consts::PI)
        .collect()
}

fn lane_vector<const N: usize>() -> LaneVector<f32, N> {
    let data = generate_test_data(N);
    LaneVector::from_array(std::array::from_fn(|i| data[i]))
}

// ================================================================================================
// BENCHMARK IMPLEMENTATIONS
// ================================================================================================

fn bench_width<const N: usize>(c: &mut Criterion) {
    let mut group = c.benchmark_group(format!("Lane sin/cos N={N}"));
    let x = lane_vector::<N>();

    group.throughput(Throughput::Elements(N as u64));

    group.bench_function("Scalar", |b| {
        b.iter(|| black_box(black_box(x).map(f32::sin)))
    });
    group.bench_function("sin", |b| b.iter(|| black_box(black_box(x).sin())));
    group.bench_function("sin_cos", |b| {
        b.iter(|| black_box(black_box(x).sin_cos()))
    });

    group.finish();
}

fn benchmark_lane_widths(c: &mut Criterion) {
    bench_width::<4>(c);
    bench_width::<8>(c);
    bench_width::<16>(c);
    bench_width::<64>(c);
}

fn benchmark_slices(c: &mut Criterion) {
    for &size in VECTOR_SIZES {
        let mut group = c.benchmark_group(format!("Sine {}", format_size(size)));

        group.throughput(Throughput::Bytes(
            (size * std::mem::size_of::<f32>()) as u64,
        ));

        let input = generate_test_data(size);
        let mut output = vec![0.0f32; size];
        let mut cos_output = vec![0.0f32; size];

        group.bench_with_input(BenchmarkId::new("Scalar", size), &input, |b, input| {
            b.iter(|| {
                for (o, x) in output.iter_mut().zip(input) {
                    *o = x.sin();
                }
                black_box(&output);
            })
        });

        group.bench_with_input(BenchmarkId::new("sin_into", size), &input, |b, input| {
            b.iter(|| black_box(sin_into(black_box(input), &mut output)))
        });

        group.bench_with_input(
            BenchmarkId::new("sincos_into", size),
            &input,
            |b, input| {
                b.iter(|| {
                    black_box(sincos_into(
                        black_box(input),
                        &mut output,
                        &mut cos_output,
                    ))
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("par_sin_into", size),
            &input,
            |b, input| b.iter(|| black_box(par_sin_into(black_box(input), &mut output))),
        );

        group.finish();
    }
}

// ================================================================================================
// UTILITY FUNCTIONS
// ================================================================================================

/// Formats vector sizes into human-readable strings.
fn format_size(elements: usize) -> String {
    let bytes = elements * std::mem::size_of::<f32>();

    if bytes >= 1_048_576 {
        format!("{:.1} MiB", bytes as f64 / 1_048_576.0)
    } else if bytes >= 1024 {
        format!("{:.1} KiB", bytes as f64 / 1024.0)
    } else {
        format!("{bytes} B")
    }
}

fn all_benchmarks(c: &mut Criterion) {
    println!("🚀 Starting sine/cosine benchmarks");

    let start_time = Instant::now();

    benchmark_lane_widths(c);
    benchmark_slices(c);

    println!(
        "✅ Benchmark suite completed in {:.2} seconds",
        start_time.elapsed().as_secs_f64()
    );
}

// ================================================================================================
// CRITERION INTEGRATION
// ================================================================================================

criterion_group!(benches, all_benchmarks);
criterion_main!(benches);
