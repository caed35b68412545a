//! Full chain: saturate → feedback delay → modulate → mix.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_fx::{EffectProcessor, EffectSettings};

use crate::{test_signal, BLOCK_SIZES};

pub fn bench_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/chain");

    let settings = EffectSettings {
        drive: 3.0,
        mix: 0.5,
        feedback: 0.6,
        rate: 0.25,
        depth: 0.5,
    };

    for &size in BLOCK_SIZES {
        let input = test_signal(size);
        let mut output = vec![0.0f32; size];

        let mut fx = EffectProcessor::with_capacity(size).expect("valid capacity");
        fx.set_params(settings);
        group.bench_with_input(BenchmarkId::new("process", size), &size, |b, _| {
            b.iter(|| fx.process(black_box(&input), black_box(&mut output)))
        });

        let mut fx = EffectProcessor::with_capacity(size).expect("valid capacity");
        fx.set_params(settings);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("process_in_place", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                fx.process_in_place(black_box(&mut buffer))
            })
        });
    }

    group.finish();
}
