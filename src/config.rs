use crate::{error::ProcessorError, params::EffectSettings, DEFAULT_CAPACITY};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Base delay of the modulation stage, in samples.
pub const DEFAULT_MOD_BASE_DELAY: f32 = 20.0;

/// Construction-time settings for an [`EffectProcessor`](crate::EffectProcessor).
///
/// `capacity` fixes the block size, the scratch buffers and the delay line
/// (`2 × capacity`). It cannot change after construction.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProcessorConfig {
    pub capacity: usize,
    /// Centre delay the LFO sweeps around, in samples
    pub mod_base_delay: f32,
    /// Parameter values the processor starts with
    pub initial: EffectSettings,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}

impl ProcessorConfig {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            mod_base_delay: DEFAULT_MOD_BASE_DELAY,
            initial: EffectSettings::default(),
        }
    }

    /// Set the modulation base delay in samples.
    pub fn with_mod_base_delay(mut self, samples: f32) -> Self {
        self.mod_base_delay = samples;
        self
    }

    /// Derive the modulation base delay from milliseconds at `sample_rate`.
    ///
    /// 20 ms at 48 kHz = 960 samples.
    pub fn with_mod_base_delay_ms(self, ms: f32, sample_rate: f32) -> Self {
        self.with_mod_base_delay(ms * sample_rate / 1000.0)
    }

    pub fn with_params(mut self, settings: EffectSettings) -> Self {
        self.initial = settings;
        self
    }

    /// Number of samples held by the shared delay line.
    pub fn delay_line_len(&self) -> usize {
        self.capacity.saturating_mul(2)
    }

    /// Base delay the modulator runs with: `mod_base_delay` limited to the
    /// last slot of the delay line, so the centre of the sweep never wraps.
    pub fn effective_mod_base_delay(&self) -> f32 {
        let longest = self.delay_line_len().saturating_sub(1) as f32;
        self.mod_base_delay.min(longest)
    }

    /// Smallest capacity whose delay line holds a delay of `samples`.
    pub fn capacity_for_delay(samples: f32) -> usize {
        // Saturating cast: NaN gives 0, infinity gives usize::MAX
        ((samples / 2.0).ceil() as usize).saturating_add(1)
    }

    pub fn validate(&self) -> Result<(), ProcessorError> {
        if self.capacity == 0 {
            return Err(ProcessorError::ZeroCapacity);
        }

        if !self.mod_base_delay.is_finite() || self.mod_base_delay < 0.0 {
            return Err(ProcessorError::InvalidBaseDelay {
                value: self.mod_base_delay,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ProcessorConfig::default();
        assert_eq!(config.capacity, DEFAULT_CAPACITY);
        assert_eq!(config.mod_base_delay, DEFAULT_MOD_BASE_DELAY);
        assert_eq!(config.delay_line_len(), DEFAULT_CAPACITY * 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert_eq!(
            ProcessorConfig::new(0).validate(),
            Err(ProcessorError::ZeroCapacity)
        );
    }

    #[test]
    fn test_base_delay_from_ms() {
        let config = ProcessorConfig::new(256).with_mod_base_delay_ms(20.0, 48_000.0);
        assert!((config.mod_base_delay - 960.0).abs() < 1e-3);
    }

    #[test]
    fn test_base_delay_limited_to_line() {
        // 20 ms at 48 kHz does not fit a 512-sample block's 1024-slot line
        let config = ProcessorConfig::new(512).with_mod_base_delay_ms(20.0, 48_000.0);
        assert!(config.validate().is_ok());
        assert!(config.mod_base_delay >= config.delay_line_len() as f32);
        assert_eq!(config.effective_mod_base_delay(), 1023.0);

        let short = ProcessorConfig::new(4);
        assert_eq!(short.effective_mod_base_delay(), 7.0);

        let fits = ProcessorConfig::new(16);
        assert_eq!(fits.effective_mod_base_delay(), DEFAULT_MOD_BASE_DELAY);
    }

    #[test]
    fn test_capacity_for_delay() {
        let capacity = ProcessorConfig::capacity_for_delay(960.0);
        let config = ProcessorConfig::new(capacity).with_mod_base_delay(960.0);
        assert_eq!(capacity, 481);
        assert_eq!(config.effective_mod_base_delay(), 960.0);

        assert_eq!(ProcessorConfig::capacity_for_delay(0.0), 1);
        assert_eq!(ProcessorConfig::capacity_for_delay(20.0), 11);
    }

    #[test]
    fn test_invalid_base_delay_rejected() {
        for &bad in &[-1.0, f32::NAN, f32::INFINITY] {
            let result = ProcessorConfig::new(8).with_mod_base_delay(bad).validate();
            assert!(matches!(result, Err(ProcessorError::InvalidBaseDelay { .. })));
        }
    }
}
