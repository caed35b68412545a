//! Benchmarks for full processing blocks.

mod chain;

pub use chain::bench_chain;
