use std::sync::Arc;

use crate::{
    chain::{delay::FeedbackDelay, modulate::Modulator},
    config::ProcessorConfig,
    dsp::{delay::DelayLine, distortion::saturate_buffer, mix::mix_dry_wet},
    error::ProcessorError,
    params::{EffectParam, EffectParams, EffectSettings, MessageReceiver, ParamHandle, ParamMessage},
};

/*
Effect Processor
================

Owns everything that lives between blocks and runs the chain:

    input ──► saturate ──┬──────────────────────────────► dry ─┐
                         │                                     ├─► mix ──► output
                         └─► feedback delay ──► modulate ─► wet ┘
                                   │                 │
                                   └── delay line ───┘

The dry tap is the saturated signal, not the raw input: with drive = 0 the
whole output is silent regardless of mix.

Buffers
-------

  input_buffer   capacity samples, holds the saturated (dry) block
  output_buffer  capacity samples, the wet block worked on in place
  delay_line     2 × capacity samples, shared by delay and modulation

All three are allocated in `new`; `process` never allocates.

Block length
------------

`process` handles min(input.len(), output.len(), capacity) samples and
returns that count. Anything past it is ignored on input and left untouched
on output, so callers with larger blocks must chunk them.
*/

/// Saturation → feedback delay → modulated delay → dry/wet mix.
pub struct EffectProcessor {
    config: ProcessorConfig,
    input_buffer: Vec<f32>,
    output_buffer: Vec<f32>,
    delay_line: DelayLine,
    delay: FeedbackDelay,
    modulator: Modulator,
    params: Arc<EffectParams>,
}

impl EffectProcessor {
    pub fn new(config: ProcessorConfig) -> Result<Self, ProcessorError> {
        config.validate()?;

        let capacity = config.capacity;
        let input_buffer = allocate_block(capacity)?;
        let output_buffer = allocate_block(capacity)?;
        let delay_line = DelayLine::try_new(config.delay_line_len())?;
        let delay = FeedbackDelay::for_capacity(capacity);
        let modulator = Modulator::new(config.effective_mod_base_delay(), capacity);

        if modulator.base_delay() < config.mod_base_delay {
            tracing::warn!(
                requested = config.mod_base_delay,
                applied = modulator.base_delay(),
                delay_line_len = delay_line.len(),
                "modulation base delay longer than the delay line, limiting it"
            );
        }

        tracing::debug!(
            capacity,
            delay_line_len = delay_line.len(),
            delay_time = delay.delay_time(),
            mod_base_delay = modulator.base_delay(),
            "effect processor created"
        );

        Ok(Self {
            input_buffer,
            output_buffer,
            delay_line,
            delay,
            modulator,
            params: Arc::new(EffectParams::new(config.initial)),
            config,
        })
    }

    /// Processor with default settings and the given block capacity.
    pub fn with_capacity(capacity: usize) -> Result<Self, ProcessorError> {
        Self::new(ProcessorConfig::new(capacity))
    }

    /// Process one block from `input` into `output`.
    ///
    /// Returns the number of samples written (see module notes on truncation).
    pub fn process(&mut self, input: &[f32], output: &mut [f32]) -> usize {
        let len = input.len().min(output.len()).min(self.capacity());

        self.input_buffer[..len].copy_from_slice(&input[..len]);
        let mix = self.run_chain(len);
        mix_dry_wet(
            &self.input_buffer[..len],
            &self.output_buffer[..len],
            mix,
            &mut output[..len],
        );

        len
    }

    /// Process one block, replacing the contents of `buffer`.
    pub fn process_in_place(&mut self, buffer: &mut [f32]) -> usize {
        let len = buffer.len().min(self.capacity());

        self.input_buffer[..len].copy_from_slice(&buffer[..len]);
        let mix = self.run_chain(len);
        mix_dry_wet(
            &self.input_buffer[..len],
            &self.output_buffer[..len],
            mix,
            &mut buffer[..len],
        );

        len
    }

    /// Saturate `input_buffer` into the dry tap, run the wet stages on
    /// `output_buffer`, and return the mix amount to blend with.
    fn run_chain(&mut self, len: usize) -> f32 {
        let settings = self.params.snapshot();

        let dry = &mut self.input_buffer[..len];
        saturate_buffer(dry, settings.drive);

        let wet = &mut self.output_buffer[..len];
        wet.copy_from_slice(dry);

        self.delay
            .process(&mut self.delay_line, wet, settings.feedback);
        self.modulator
            .process(&mut self.delay_line, wet, settings.rate, settings.depth);

        settings.mix
    }

    /// Apply every queued control message. Wait-free; safe on the audio thread.
    pub fn handle_messages<R: MessageReceiver>(&mut self, rx: &mut R) {
        while let Some(msg) = rx.pop() {
            match msg {
                ParamMessage::Set(param, value) => self.params.set(param, value),
                ParamMessage::Reset => self.reset(),
            }
        }
    }

    /// Clear the delay history, write cursor and LFO phase.
    pub fn reset(&mut self) {
        self.delay_line.reset();
        self.modulator.reset();
        tracing::debug!("effect processor reset");
    }

    pub fn set_drive(&self, value: f32) {
        self.params.set(EffectParam::Drive, value);
    }

    pub fn set_mix(&self, value: f32) {
        self.params.set(EffectParam::Mix, value);
    }

    pub fn set_feedback(&self, value: f32) {
        self.params.set(EffectParam::Feedback, value);
    }

    pub fn set_rate(&self, value: f32) {
        self.params.set(EffectParam::Rate, value);
    }

    pub fn set_depth(&self, value: f32) {
        self.params.set(EffectParam::Depth, value);
    }

    pub fn set_params(&self, settings: EffectSettings) {
        self.params.store_all(settings);
    }

    /// Current parameter values.
    pub fn params(&self) -> EffectSettings {
        self.params.snapshot()
    }

    /// Handle for changing parameters from another thread.
    pub fn handle(&self) -> ParamHandle {
        ParamHandle::new(Arc::clone(&self.params))
    }

    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// Maximum samples handled per call.
    pub fn capacity(&self) -> usize {
        self.config.capacity
    }

    pub fn delay_line_len(&self) -> usize {
        self.delay_line.len()
    }

    /// Write cursor of the shared delay line.
    pub fn delay_index(&self) -> usize {
        self.delay_line.write_pos()
    }

    pub fn lfo_phase(&self) -> f32 {
        self.modulator.phase()
    }

    /// Centre delay of the modulation stage, in samples.
    pub fn mod_base_delay(&self) -> f32 {
        self.modulator.base_delay()
    }
}

fn allocate_block(capacity: usize) -> Result<Vec<f32>, ProcessorError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(capacity)
        .map_err(|_| ProcessorError::AllocationFailed { requested: capacity })?;
    buffer.resize(capacity, 0.0);
    Ok(buffer)
}
