//! Effect parameters and the control surface used to change them.
//!
//! The audio thread must never block, so parameters are not kept behind a
//! lock. Each one is an independent [`AtomicF32`]; a control thread stores
//! new values and the processor loads all five once at the start of every
//! block. A change made mid-block is picked up on the next block.
//!
//! Two ways in:
//!
//! - [`ParamHandle`]: cloneable, `Send + Sync`, writes the atomics directly.
//! - [`ParamMessage`] over an `rtrb` queue: drained on the audio thread by
//!   `EffectProcessor::handle_messages`, which also carries `Reset`.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

#[cfg(feature = "rtrb")]
use rtrb::{Consumer, Producer, RingBuffer};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An `f32` stored as its bit pattern in an `AtomicU32`.
#[derive(Debug)]
pub struct AtomicF32(AtomicU32);

impl AtomicF32 {
    pub fn new(value: f32) -> Self {
        Self(AtomicU32::new(value.to_bits()))
    }

    #[inline]
    pub fn load(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn store(&self, value: f32) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

impl Default for AtomicF32 {
    fn default() -> Self {
        Self::new(0.0)
    }
}

/// Names each effect parameter.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EffectParam {
    /// Saturator input gain
    Drive,
    /// Dry/wet blend (0 = dry, 1 = wet)
    Mix,
    /// Delay regeneration gain
    Feedback,
    /// LFO cycles per block capacity
    Rate,
    /// LFO depth applied to the modulation delay
    Depth,
}

/// Plain snapshot of all parameters, read once per block.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectSettings {
    pub drive: f32,
    pub mix: f32,
    pub feedback: f32,
    pub rate: f32,
    pub depth: f32,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            drive: 1.0,
            mix: 1.0,
            feedback: 0.0,
            rate: 1.0,
            depth: 0.5,
        }
    }
}

impl EffectSettings {
    pub fn get(&self, param: EffectParam) -> f32 {
        match param {
            EffectParam::Drive => self.drive,
            EffectParam::Mix => self.mix,
            EffectParam::Feedback => self.feedback,
            EffectParam::Rate => self.rate,
            EffectParam::Depth => self.depth,
        }
    }

    pub fn with(mut self, param: EffectParam, value: f32) -> Self {
        match param {
            EffectParam::Drive => self.drive = value,
            EffectParam::Mix => self.mix = value,
            EffectParam::Feedback => self.feedback = value,
            EffectParam::Rate => self.rate = value,
            EffectParam::Depth => self.depth = value,
        }
        self
    }
}

/// Lock-free parameter storage shared between control and audio threads.
///
/// Values are neither validated nor clamped; see the crate docs.
#[derive(Debug)]
pub struct EffectParams {
    drive: AtomicF32,
    mix: AtomicF32,
    feedback: AtomicF32,
    rate: AtomicF32,
    depth: AtomicF32,
}

impl EffectParams {
    pub fn new(settings: EffectSettings) -> Self {
        Self {
            drive: AtomicF32::new(settings.drive),
            mix: AtomicF32::new(settings.mix),
            feedback: AtomicF32::new(settings.feedback),
            rate: AtomicF32::new(settings.rate),
            depth: AtomicF32::new(settings.depth),
        }
    }

    fn slot(&self, param: EffectParam) -> &AtomicF32 {
        match param {
            EffectParam::Drive => &self.drive,
            EffectParam::Mix => &self.mix,
            EffectParam::Feedback => &self.feedback,
            EffectParam::Rate => &self.rate,
            EffectParam::Depth => &self.depth,
        }
    }

    #[inline]
    pub fn get(&self, param: EffectParam) -> f32 {
        self.slot(param).load()
    }

    #[inline]
    pub fn set(&self, param: EffectParam, value: f32) {
        self.slot(param).store(value);
    }

    /// Load every parameter. Each field is tear-free on its own; the set as
    /// a whole may mix values from before and after a concurrent update.
    pub fn snapshot(&self) -> EffectSettings {
        EffectSettings {
            drive: self.drive.load(),
            mix: self.mix.load(),
            feedback: self.feedback.load(),
            rate: self.rate.load(),
            depth: self.depth.load(),
        }
    }

    pub fn store_all(&self, settings: EffectSettings) {
        self.drive.store(settings.drive);
        self.mix.store(settings.mix);
        self.feedback.store(settings.feedback);
        self.rate.store(settings.rate);
        self.depth.store(settings.depth);
    }
}

impl Default for EffectParams {
    fn default() -> Self {
        Self::new(EffectSettings::default())
    }
}

/// Control-thread handle to a processor's parameters.
#[derive(Debug, Clone)]
pub struct ParamHandle {
    params: Arc<EffectParams>,
}

impl ParamHandle {
    pub(crate) fn new(params: Arc<EffectParams>) -> Self {
        Self { params }
    }

    pub fn set(&self, param: EffectParam, value: f32) {
        self.params.set(param, value);
    }

    pub fn get(&self, param: EffectParam) -> f32 {
        self.params.get(param)
    }

    pub fn set_drive(&self, value: f32) {
        self.set(EffectParam::Drive, value);
    }

    pub fn set_mix(&self, value: f32) {
        self.set(EffectParam::Mix, value);
    }

    pub fn set_feedback(&self, value: f32) {
        self.set(EffectParam::Feedback, value);
    }

    pub fn set_rate(&self, value: f32) {
        self.set(EffectParam::Rate, value);
    }

    pub fn set_depth(&self, value: f32) {
        self.set(EffectParam::Depth, value);
    }

    pub fn snapshot(&self) -> EffectSettings {
        self.params.snapshot()
    }
}

/// Messages a control thread can queue for the audio thread.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ParamMessage {
    Set(EffectParam, f32),
    /// Clear delay history and LFO phase
    Reset,
}

pub trait MessageReceiver {
    fn pop(&mut self) -> Option<ParamMessage>;
}

#[cfg(feature = "rtrb")]
impl MessageReceiver for Consumer<ParamMessage> {
    fn pop(&mut self) -> Option<ParamMessage> {
        Consumer::pop(self).ok()
    }
}

/// Build a wait-free single-producer/single-consumer message queue.
#[cfg(feature = "rtrb")]
pub fn param_channel(capacity: usize) -> (Producer<ParamMessage>, Consumer<ParamMessage>) {
    RingBuffer::<ParamMessage>::new(capacity)
}
