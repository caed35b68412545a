//! Circular delay line shared by the feedback delay and the modulator.
//!
//! The line is allocated once and never resized. All reads and writes go
//! through a single write cursor that moves forward one slot per sample.
//! Read positions are computed relative to that cursor and reduced with a
//! Euclidean remainder, so any delay value (negative, huge, NaN or infinite)
//! still lands on a valid slot.
//!
//! ```text
//!   write_pos
//!       v
//!   [ . . x . . . . . ]      x = sample written this tick
//!     ^
//!     read_pos = write_pos - delay (wrapped)
//! ```

use crate::error::ProcessorError;

pub struct DelayLine {
    buffer: Vec<f32>,
    write_pos: usize,
}

impl DelayLine {
    /// Create a delay line holding `len` samples of history (minimum 1).
    pub fn new(len: usize) -> Self {
        Self {
            buffer: vec![0.0; len.max(1)],
            write_pos: 0,
        }
    }

    /// Create a delay line, reporting allocation failure instead of aborting.
    pub fn try_new(len: usize) -> Result<Self, ProcessorError> {
        if len == 0 {
            return Err(ProcessorError::ZeroCapacity);
        }

        let mut buffer = Vec::new();
        buffer
            .try_reserve_exact(len)
            .map_err(|_| ProcessorError::AllocationFailed { requested: len })?;
        buffer.resize(len, 0.0);

        Ok(Self {
            buffer,
            write_pos: 0,
        })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Current write cursor, always in `[0, len)`.
    #[inline]
    pub fn write_pos(&self) -> usize {
        self.write_pos
    }

    /// Store a sample at the write cursor. Does not advance.
    #[inline]
    pub fn write(&mut self, sample: f32) {
        self.buffer[self.write_pos] = sample;
    }

    /// Read the slot `round(delay)` samples behind the write cursor.
    #[inline]
    pub fn read_tap(&self, delay: f32) -> f32 {
        let len = self.buffer.len() as i64;
        // Saturating cast: NaN -> 0, +/-inf -> i64::MAX/MIN.
        let offset = (delay.round() as i64).rem_euclid(len);
        let index = (self.write_pos as i64 - offset).rem_euclid(len);
        self.buffer[index as usize]
    }

    /// Read `delay` samples behind the write cursor with linear interpolation.
    ///
    /// The position `write_pos - delay` is split into `floor` and fraction;
    /// the result blends that slot with the one after it:
    ///
    /// `line[i] * (1 - frac) + line[i + 1] * frac`
    #[inline]
    pub fn read_interpolated(&self, delay: f32) -> f32 {
        let read_pos = self.write_pos as f64 - delay as f64;
        let base = read_pos.floor();
        let frac = (read_pos - base) as f32;

        let index_a = self.wrap(base as i64);
        let index_b = (index_a + 1) % self.buffer.len();

        self.buffer[index_a] * (1.0 - frac) + self.buffer[index_b] * frac
    }

    /// Move the write cursor forward one slot, wrapping at the end.
    #[inline]
    pub fn advance(&mut self) {
        self.write_pos = (self.write_pos + 1) % self.buffer.len();
    }

    /// Write, read back through the interpolated tap, then advance.
    #[inline]
    pub fn next_sample(&mut self, sample: f32, delay: f32) -> f32 {
        self.write(sample);
        let delayed = self.read_interpolated(delay);
        self.advance();
        delayed
    }

    pub fn reset(&mut self) {
        self.buffer.fill(0.0);
        self.write_pos = 0;
    }

    #[inline]
    fn wrap(&self, index: i64) -> usize {
        index.rem_euclid(self.buffer.len() as i64) as usize
    }
}
