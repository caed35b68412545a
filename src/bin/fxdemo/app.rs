//! Live (cpal) and offline rendering of the demo.

use std::time::Duration;

use color_eyre::eyre::{eyre, Result, WrapErr};
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use saavy_fx::{
    params::param_channel, EffectParam, EffectProcessor, ParamHandle, ParamMessage,
    ProcessorConfig,
};

use crate::{tone::PluckTone, Options};

const OFFLINE_SAMPLE_RATE: f32 = 48_000.0;
const MESSAGE_QUEUE_SIZE: usize = 64;
const CHORUS_BASE_DELAY_MS: f32 = 20.0;
/// Deepest point `sweep` takes the depth to.
const SWEEP_MAX_DEPTH: f32 = 0.55;

fn build_processor(options: &Options, sample_rate: f32) -> Result<EffectProcessor> {
    // The line is 2 × capacity; grow the block until the widest sweep fits
    let base_delay = CHORUS_BASE_DELAY_MS * sample_rate / 1000.0;
    let depth = options.depth.abs().max(SWEEP_MAX_DEPTH);
    let needed = ProcessorConfig::capacity_for_delay(base_delay * (1.0 + depth));
    let capacity = options.capacity.max(needed);
    if capacity != options.capacity {
        tracing::info!(
            requested = options.capacity,
            capacity,
            "raised block capacity to fit the chorus delay"
        );
    }

    let config = ProcessorConfig::new(capacity)
        .with_mod_base_delay(base_delay)
        .with_params(options.settings());

    EffectProcessor::new(config).wrap_err("failed to build effect processor")
}

/// Slow sweep applied from the control thread, `t` in seconds.
fn sweep(handle: &ParamHandle, t: f32) {
    handle.set_depth(0.3 + 0.25 * (t * 0.4).sin());
    handle.set_mix(0.5 + 0.2 * (t * 0.25).cos());
}

/// Play the tone through the chain on the default output device.
pub fn run_live(options: &Options) -> Result<()> {
    let host = cpal::default_host();
    let device = host
        .default_output_device()
        .ok_or_else(|| eyre!("no default output device available"))?;
    let config = device
        .default_output_config()
        .wrap_err("failed to fetch default output config")?;

    let sample_rate = config.sample_rate().0 as f32;
    let channels = config.channels() as usize;
    tracing::info!(sample_rate, channels, "audio device ready");

    let mut fx = build_processor(options, sample_rate)?;
    let handle = fx.handle();
    let (mut tx, mut rx) = param_channel(MESSAGE_QUEUE_SIZE);

    let capacity = fx.capacity();
    let mut tone = PluckTone::new(sample_rate);
    let mut block = vec![0.0f32; capacity];

    let stream = device.build_output_stream(
        &config.into(),
        move |data: &mut [f32], _| {
            fx.handle_messages(&mut rx);

            let total_frames = data.len() / channels;
            let mut frames_written = 0;

            while frames_written < total_frames {
                let frames = (total_frames - frames_written).min(capacity);
                let mono = &mut block[..frames];

                tone.render(mono);
                fx.process_in_place(mono);

                let out_off = frames_written * channels;
                for (i, &s) in mono.iter().enumerate() {
                    for ch in 0..channels {
                        data[out_off + i * channels + ch] = s;
                    }
                }

                frames_written += frames;
            }
        },
        |err| tracing::error!("audio stream error: {err}"),
        None,
    )?;

    stream.play().wrap_err("failed to start audio stream")?;
    tracing::info!(seconds = options.seconds, "playing");

    let tick = Duration::from_millis(50);
    let steps = (options.seconds / tick.as_secs_f32()) as usize;
    for step in 0..steps {
        let t = step as f32 * tick.as_secs_f32();
        sweep(&handle, t);

        // Halfway through: drop the repeats and start from a clean line
        if step == steps / 2 {
            tracing::info!("clearing delay line");
            for msg in [ParamMessage::Set(EffectParam::Feedback, 0.2), ParamMessage::Reset] {
                if let Err(err) = tx.push(msg) {
                    tracing::warn!(?err, "control queue full, message dropped");
                }
            }
        }

        std::thread::sleep(tick);
    }

    Ok(())
}

/// Render the demo without an audio device and log per-second levels.
pub fn render_offline(options: &Options) -> Result<()> {
    let mut fx = build_processor(options, OFFLINE_SAMPLE_RATE)?;
    let handle = fx.handle();

    let capacity = fx.capacity();
    let mut tone = PluckTone::new(OFFLINE_SAMPLE_RATE);
    let mut input = vec![0.0f32; capacity];
    let mut output = vec![0.0f32; capacity];

    let total = (options.seconds * OFFLINE_SAMPLE_RATE) as usize;
    let second = OFFLINE_SAMPLE_RATE as usize;
    let mut rendered = 0;
    let (mut peak, mut sum_sq, mut count) = (0.0f32, 0.0f64, 0usize);

    while rendered < total {
        let frames = (total - rendered).min(capacity);
        sweep(&handle, rendered as f32 / OFFLINE_SAMPLE_RATE);

        tone.render(&mut input[..frames]);
        let written = fx.process(&input[..frames], &mut output);
        if output[..written].iter().any(|s| !s.is_finite()) {
            return Err(eyre!("output diverged; lower --feedback or --drive"));
        }

        for &s in &output[..written] {
            peak = peak.max(s.abs());
            sum_sq += (s as f64) * (s as f64);
        }
        count += written;
        rendered += written;

        if count >= second || rendered >= total {
            let rms = (sum_sq / count.max(1) as f64).sqrt();
            tracing::info!(
                second = rendered / second,
                peak,
                rms,
                params = ?fx.params(),
                "rendered"
            );
            (peak, sum_sq, count) = (0.0, 0.0, 0);
        }
    }

    Ok(())
}
