//! Realtime-safe mono effects chain: saturation, feedback delay,
//! LFO-modulated delay and dry/wet mix.
//!
//! ```
//! use saavy_fx::EffectProcessor;
//!
//! let mut fx = EffectProcessor::with_capacity(256).unwrap();
//! fx.set_feedback(0.4);
//! fx.set_mix(0.5);
//!
//! let input = vec![0.25f32; 256];
//! let mut output = vec![0.0f32; 256];
//! let written = fx.process(&input, &mut output);
//! assert_eq!(written, 256);
//! ```
//!
//! Parameters are never clamped. `feedback` at or above 1.0 grows without
//! bound and large `drive` saturates hard; keeping values sensible is left
//! to the caller. Index arithmetic stays in bounds for any value.

pub mod chain; // Saturate → delay → modulate → mix
pub mod config;
pub mod dsp;
pub mod error;
pub mod params; // Lock-free parameter control

pub use chain::EffectProcessor;
pub use config::ProcessorConfig;
pub use error::ProcessorError;
pub use params::{EffectParam, EffectSettings, ParamHandle, ParamMessage};

/// Block capacity used by `ProcessorConfig::default()`.
pub const DEFAULT_CAPACITY: usize = 2048;
