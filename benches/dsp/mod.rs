//! Benchmarks for low-level DSP primitives.

mod delay;
mod distortion;
mod mix;

pub use delay::bench_delay;
pub use distortion::bench_distortion;
pub use mix::bench_mix;
