use crate::dsp::delay::DelayLine;

/*
Feedback Delay
==============

A delay line with regeneration: part of what comes out is written back in,
so an impulse repeats every `delay_time` samples, scaled by `feedback` each
time.

Per sample, in strict order:

  1. Read the rounded tap `round(delay_time)` behind the cursor
  2. Write  input + feedback × tap  at the cursor
  3. Read the interpolated tap `delay_time` behind the cursor
  4. Advance the cursor

Because step 2 happens before step 3, a sample written now can be read back
later in the same block; that is the feedback loop.

Feedback values
---------------

  0.0        Single echo, no repeats
  0.3 - 0.7  Decaying repeats
  ≥ 1.0      Repeats grow without bound (not clamped here)
  < 0.0      Polarity flips on every repeat
*/

/// Portion of the block capacity used as the delay time.
pub const DELAY_TIME_FRACTION: f32 = 0.25;

/// Feedback delay stage. Holds only its delay time; the line is borrowed.
#[derive(Debug, Clone, Copy)]
pub struct FeedbackDelay {
    delay_time: f32,
}

impl FeedbackDelay {
    /// Delay by `delay_time` samples (may be fractional).
    pub fn new(delay_time: f32) -> Self {
        Self { delay_time }
    }

    /// Delay by [`DELAY_TIME_FRACTION`] of `capacity`.
    pub fn for_capacity(capacity: usize) -> Self {
        Self::new(DELAY_TIME_FRACTION * capacity as f32)
    }

    pub fn delay_time(&self) -> f32 {
        self.delay_time
    }

    /// Run the stage over `buffer` in place.
    pub fn process(&self, line: &mut DelayLine, buffer: &mut [f32], feedback: f32) {
        for sample in buffer.iter_mut() {
            let regenerated = line.read_tap(self.delay_time);
            line.write(*sample + feedback * regenerated);
            *sample = line.read_interpolated(self.delay_time);
            line.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn impulse(len: usize) -> Vec<f32> {
        let mut buffer = vec![0.0; len];
        buffer[0] = 1.0;
        buffer
    }

    #[test]
    fn test_delay_time_from_capacity() {
        assert_eq!(FeedbackDelay::for_capacity(8).delay_time(), 2.0);
        assert_eq!(FeedbackDelay::for_capacity(6).delay_time(), 1.5);
    }

    #[test]
    fn test_zero_feedback_single_echo() {
        let mut line = DelayLine::new(16);
        let delay = FeedbackDelay::new(2.0);
        let mut buffer = impulse(16);

        delay.process(&mut line, &mut buffer, 0.0);

        let mut expected = vec![0.0; 16];
        expected[2] = 1.0;
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_fractional_delay_spreads_impulse() {
        let mut line = DelayLine::new(16);
        let delay = FeedbackDelay::new(1.5);
        let mut buffer = impulse(8);

        delay.process(&mut line, &mut buffer, 0.0);

        assert!((buffer[1] - 0.5).abs() < 1e-6);
        assert!((buffer[2] - 0.5).abs() < 1e-6);
        let rest: f32 = buffer.iter().map(|s| s.abs()).sum::<f32>() - 1.0;
        assert!(rest.abs() < 1e-6, "energy outside the two taps: {rest}");
    }

    #[test]
    fn test_feedback_repeats_decay() {
        let mut line = DelayLine::new(16);
        let delay = FeedbackDelay::new(2.0);
        let mut buffer = impulse(9);

        delay.process(&mut line, &mut buffer, 0.5);

        assert_eq!(buffer[2], 1.0);
        assert_eq!(buffer[4], 0.5);
        assert_eq!(buffer[6], 0.25);
        assert_eq!(buffer[8], 0.125);
        assert_eq!(buffer[3], 0.0);
    }

    #[test]
    fn test_negative_feedback_flips_polarity() {
        let mut line = DelayLine::new(16);
        let delay = FeedbackDelay::new(2.0);
        let mut buffer = impulse(7);

        delay.process(&mut line, &mut buffer, -0.5);

        assert_eq!(buffer[2], 1.0);
        assert_eq!(buffer[4], -0.5);
        assert_eq!(buffer[6], 0.25);
    }

    #[test]
    fn test_cursor_advances_once_per_sample() {
        let mut line = DelayLine::new(16);
        let delay = FeedbackDelay::new(2.0);
        let mut buffer = vec![0.0; 21];

        delay.process(&mut line, &mut buffer, 0.0);

        assert_eq!(line.write_pos(), 21 % 16);
    }
}
