//! Low Frequency Oscillator (LFO) for delay-time modulation.

/*
Low Frequency Oscillators
=========================

An LFO is an oscillator running far below audio rate. Instead of being heard
directly it moves a parameter around; here it sweeps a short delay time,
which bends pitch slightly up and down and produces chorus-style motion.

Vocabulary
----------

  phase         Position inside one cycle, in radians, kept in [0, 2π).

  increment     How far the phase moves per sample. For this chain the rate
                is expressed in cycles per block capacity:

                    increment = rate × 2π / capacity

                so rate = 1 completes one sweep every `capacity` samples.

  depth         Scales the bipolar LFO output (-1..+1) before it modulates
                the delay time.


Wrapping
--------

Phase is wrapped back into [0, 2π) on every advance. A plain
`if phase >= TAU { phase -= TAU }` only handles small positive steps; a
negative or very large rate would walk the phase out of range. Using
`rem_euclid` keeps the phase bounded for any finite increment, and a phase
that becomes NaN/infinite (from a NaN rate) is reset to zero.
*/

use std::f32::consts::TAU;

/// Phase increment for `rate` cycles per `capacity` samples.
#[inline]
pub fn phase_increment(rate: f32, capacity: usize) -> f32 {
    rate * TAU / capacity as f32
}

/// Sine LFO with a wrapped phase accumulator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SineLfo {
    phase: f32,
}

impl SineLfo {
    pub fn new() -> Self {
        Self { phase: 0.0 }
    }

    /// Current phase in radians, always in `[0, 2π)`.
    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    /// Bipolar output `sin(phase)`.
    #[inline]
    pub fn value(&self) -> f32 {
        self.phase.sin()
    }

    /// Move the phase forward by `increment` radians and wrap.
    #[inline]
    pub fn advance(&mut self, increment: f32) {
        let next = (self.phase + increment).rem_euclid(TAU);
        // rem_euclid can round up to exactly TAU for tiny negative inputs
        self.phase = if next.is_finite() && next < TAU { next } else { 0.0 };
    }

    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}
