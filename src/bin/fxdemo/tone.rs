//! Test signal: a repeating plucked sawtooth.
//!
//! Short decaying notes leave gaps of near-silence, which makes the delay
//! repeats and the chorus sweep easy to hear.

const NOTES_HZ: [f32; 4] = [110.0, 165.0, 220.0, 130.81];

pub struct PluckTone {
    sample_rate: f32,
    phase: f32,
    envelope: f32,
    decay: f32,
    samples_per_note: usize,
    position: usize,
    note: usize,
}

impl PluckTone {
    pub fn new(sample_rate: f32) -> Self {
        Self {
            sample_rate,
            phase: 0.0,
            envelope: 1.0,
            // ~80 ms time constant
            decay: (-1.0 / (0.08 * sample_rate)).exp(),
            samples_per_note: (sample_rate * 0.5) as usize,
            position: 0,
            note: 0,
        }
    }

    pub fn render(&mut self, out: &mut [f32]) {
        for sample in out.iter_mut() {
            if self.position == self.samples_per_note {
                self.position = 0;
                self.envelope = 1.0;
                self.note = (self.note + 1) % NOTES_HZ.len();
            }

            let saw = 2.0 * self.phase - 1.0;
            *sample = saw * self.envelope * 0.6;

            self.phase += NOTES_HZ[self.note] / self.sample_rate;
            if self.phase >= 1.0 {
                self.phase -= 1.0;
            }
            self.envelope *= self.decay;
            self.position += 1;
        }
    }
}
