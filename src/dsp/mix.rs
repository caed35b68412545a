//! Dry/wet mixing.

/*
Dry/Wet Mixing
==============

The last stage of the chain blends the unprocessed (dry) signal with the
processed (wet) signal using complementary linear weights:

    output = dry × (1 - mix) + wet × mix

    mix = 0.0  →  100% dry
    mix = 0.5  →  50/50
    mix = 1.0  →  100% wet

The weights sum to 1.0, so two full-scale inputs never sum past full scale
while mix stays inside [0, 1].

Mix is NOT clamped here. Values outside [0, 1] extrapolate (e.g. mix = 1.5
gives wet × 1.5 - dry × 0.5), which is occasionally useful and always the
caller's call. The two endpoints are copied directly so they are exact even
when the opposite signal is non-finite.
*/

/// Blend a single dry and wet sample.
#[inline]
pub fn blend_dry_wet(dry: f32, wet: f32, mix: f32) -> f32 {
    dry * (1.0 - mix) + wet * mix
}

/// Blend `dry` and `wet` into `out`: `out[i] = dry[i]·(1-mix) + wet[i]·mix`.
#[inline]
pub fn mix_dry_wet(dry: &[f32], wet: &[f32], mix: f32, out: &mut [f32]) {
    debug_assert_eq!(dry.len(), wet.len());
    debug_assert_eq!(dry.len(), out.len());

    if mix == 0.0 {
        out.copy_from_slice(dry);
        return;
    }
    if mix == 1.0 {
        out.copy_from_slice(wet);
        return;
    }

    for ((o, &d), &w) in out.iter_mut().zip(dry.iter()).zip(wet.iter()) {
        *o = blend_dry_wet(d, w, mix);
    }
}
