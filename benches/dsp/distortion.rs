//! Benchmarks for the saturator.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_fx::dsp::distortion;

use crate::{test_signal, BLOCK_SIZES};

pub fn bench_distortion(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/distortion");

    for &size in BLOCK_SIZES {
        let input = test_signal(size);

        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("saturate_buffer", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                distortion::saturate_buffer(black_box(&mut buffer), black_box(4.0));
            })
        });

        // Odd length exercises the scalar remainder path
        let odd = &input[..size - 3];
        let mut buffer = odd.to_vec();
        group.bench_with_input(BenchmarkId::new("saturate_buffer_odd", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(odd);
                distortion::saturate_buffer(black_box(&mut buffer), black_box(4.0));
            })
        });
    }

    group.finish();
}
