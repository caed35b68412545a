//! Benchmarks for dry/wet mixing.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_fx::dsp::mix;

use crate::{test_signal, BLOCK_SIZES};

pub fn bench_mix(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/mix");

    for &size in BLOCK_SIZES {
        let dry = test_signal(size);
        let wet: Vec<f32> = dry.iter().map(|s| s * 0.5).collect();
        let mut out = vec![0.0f32; size];

        group.bench_with_input(BenchmarkId::new("mix_dry_wet", size), &size, |b, _| {
            b.iter(|| {
                mix::mix_dry_wet(black_box(&dry), black_box(&wet), black_box(0.3), &mut out);
            })
        });
    }

    group.finish();
}
