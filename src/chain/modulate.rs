use crate::dsp::{
    delay::DelayLine,
    lfo::{phase_increment, SineLfo},
};

/*
Modulated Delay (Chorus / Phaser)
=================================

A short delay whose length is swept by a sine LFO. As the delay shortens
and lengthens the pitch of the delayed copy bends slightly up and down.

Per sample:

  1. phase += rate × 2π / capacity      (wrapped to [0, 2π))
  2. lfo    = sin(phase) × depth
  3. delay  = (1 + lfo) × base_delay
  4. write the incoming sample (no feedback), read the interpolated tap,
     advance the cursor

The phase steps forward before the sine is read, so a fresh stage starts
at sin(increment) rather than sin(0). Swapping steps 1 and 2 would delay
the whole sweep by one sample.

The stage rides on the same delay line as the feedback delay, so the
history it reads already contains the echoes written by that stage.

Parameters
----------

Rate:   LFO cycles per block capacity. 0 freezes the sweep.
Depth:  0 gives a fixed `base_delay`; 1 sweeps between 0 and 2 × base_delay.
*/

/// LFO-swept short delay stage.
#[derive(Debug, Clone)]
pub struct Modulator {
    lfo: SineLfo,
    base_delay: f32,
    capacity: usize,
}

impl Modulator {
    pub fn new(base_delay: f32, capacity: usize) -> Self {
        Self {
            lfo: SineLfo::new(),
            base_delay,
            capacity: capacity.max(1),
        }
    }

    pub fn base_delay(&self) -> f32 {
        self.base_delay
    }

    pub fn phase(&self) -> f32 {
        self.lfo.phase()
    }

    /// Run the stage over `buffer` in place.
    pub fn process(&mut self, line: &mut DelayLine, buffer: &mut [f32], rate: f32, depth: f32) {
        let increment = phase_increment(rate, self.capacity);

        for sample in buffer.iter_mut() {
            self.lfo.advance(increment);
            let lfo = self.lfo.value() * depth;
            let delay = (1.0 + lfo) * self.base_delay;
            *sample = line.next_sample(*sample, delay);
        }
    }

    pub fn reset(&mut self) {
        self.lfo.reset();
    }
}
