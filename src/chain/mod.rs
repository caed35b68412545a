//! The effect chain: stages that share state across blocks, and the
//! processor that sequences them.
//!
//! Stages borrow the processor's delay line instead of owning one, so the
//! feedback delay and the modulator read and write a single history.

/// Feedback delay with interpolated read tap.
pub mod delay;
/// LFO-swept short delay (chorus/phaser).
pub mod modulate;
/// Block orchestrator and long-lived processor state.
pub mod processor;

pub use delay::{FeedbackDelay, DELAY_TIME_FRACTION};
pub use modulate::Modulator;
pub use processor::EffectProcessor;
