//! Benchmarks for delay line operations.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use saavy_fx::{
    chain::{FeedbackDelay, Modulator},
    dsp::delay::DelayLine,
};

use crate::{test_signal, BLOCK_SIZES};

pub fn bench_delay(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/delay");

    for &size in BLOCK_SIZES {
        let input = test_signal(size);

        let mut line = DelayLine::new(size * 2);
        let delay = FeedbackDelay::for_capacity(size);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("feedback_delay", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                delay.process(&mut line, black_box(&mut buffer), black_box(0.5));
            })
        });

        let mut line = DelayLine::new(size * 2);
        let mut modulator = Modulator::new(20.0, size);
        let mut buffer = input.clone();
        group.bench_with_input(BenchmarkId::new("modulator", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                modulator.process(
                    &mut line,
                    black_box(&mut buffer),
                    black_box(1.0),
                    black_box(0.5),
                );
            })
        });

        // Interpolated read alone, with a swept delay time
        let mut line = DelayLine::new(size * 2);
        for &sample in &input {
            line.write(sample);
            line.advance();
        }
        group.bench_with_input(BenchmarkId::new("read_interpolated", size), &size, |b, _| {
            b.iter(|| {
                let mut sum = 0.0f32;
                for i in 0..size {
                    let delay_time = 20.0 + (i as f32 * 0.1).sin() * 10.0;
                    sum += line.read_interpolated(black_box(delay_time));
                }
                sum
            })
        });
    }

    group.finish();
}
