//! Saturation / Waveshaping
//!
//! The saturator pushes each sample through a smooth transfer function:
//!
//!   x = input * drive
//!   y = x / sqrt(1 + x²)
//!
//! # Shape of the curve
//!
//!   - Near zero, sqrt(1 + x²) ≈ 1, so y ≈ x (linear region)
//!   - For large |x|, y → ±1 but never reaches it
//!   - Monotonic and odd: sign(y) = sign(x)
//!
//! The denominator is computed as `hypot(x, 1)` so that x² never overflows;
//! an infinite `x` maps straight to ±1.
//!
//! Compared to `x / (1 + |x|)` this curve stays linear for longer and bends
//! more sharply near the ceiling, which keeps quiet material clean while
//! still taming peaks.
//!
//! # Drive Values
//!
//!   0.0  = Silence (everything is multiplied away)
//!   1.0  = Gentle, mostly transparent
//!   2-4  = Warm saturation
//!   10+  = Heavy, square-ish

/// Number of samples processed together in the lane loop.
pub const LANES: usize = 4;

/// Saturate a single sample: `x / sqrt(1 + x²)` with `x = sample * drive`.
#[inline]
pub fn saturate(sample: f32, drive: f32) -> f32 {
    let x = sample * drive;
    if x.is_infinite() {
        return x.signum();
    }
    x / x.hypot(1.0)
}

/// Saturate a buffer in place.
///
/// Full groups of [`LANES`] samples go through a fixed-width loop the
/// optimizer can vectorize; the trailing `len % LANES` samples take the
/// scalar path. Both produce exactly `saturate(sample, drive)`.
pub fn saturate_buffer(buffer: &mut [f32], drive: f32) {
    let mut chunks = buffer.chunks_exact_mut(LANES);

    for chunk in &mut chunks {
        let mut lanes = [0.0f32; LANES];
        lanes.copy_from_slice(chunk);
        for lane in lanes.iter_mut() {
            *lane = saturate(*lane, drive);
        }
        chunk.copy_from_slice(&lanes);
    }

    for sample in chunks.into_remainder() {
        *sample = saturate(*sample, drive);
    }
}
