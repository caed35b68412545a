//! Low-level DSP primitives used by the effect chain.
//!
//! These components are allocation-free once constructed and realtime-safe.
//! They stay focused on the signal-processing math; `chain` sequences them
//! and owns the state that persists between blocks.

/// Circular delay line with rounded and interpolated taps.
pub mod delay;
/// Soft saturation waveshaper.
pub mod distortion;
/// Sine LFO used to sweep the modulation delay.
pub mod lfo;
/// Linear dry/wet blending.
pub mod mix;

pub use delay::DelayLine;
pub use lfo::SineLfo;
