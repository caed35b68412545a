//! fxdemo - play a test tone through the effects chain
//!
//! Run with: cargo run --bin fxdemo -- [options]   (see `--help`)
//!
//! Log verbosity follows RUST_LOG (default `info`).

mod app;
mod tone;

use clap::Parser;
use color_eyre::eyre::Result;
use saavy_fx::EffectSettings;
use tracing_subscriber::EnvFilter;

/// Play a plucked test tone through saturation, feedback delay and chorus.
#[derive(Parser, Debug, Clone)]
#[command(name = "fxdemo", about, version)]
pub struct Options {
    /// Render without an audio device and log block levels
    #[arg(long)]
    pub offline: bool,

    /// Length of the demo in seconds
    #[arg(long, default_value_t = 8.0)]
    pub seconds: f32,

    /// Processor block capacity (raised if the chorus sweep would not fit)
    #[arg(long, default_value_t = 512)]
    pub capacity: usize,

    #[arg(long, default_value_t = 2.0)]
    pub drive: f32,

    #[arg(long, default_value_t = 0.5)]
    pub mix: f32,

    #[arg(long, default_value_t = 0.45)]
    pub feedback: f32,

    /// LFO rate in cycles per block
    #[arg(long, default_value_t = 0.05)]
    pub rate: f32,

    #[arg(long, default_value_t = 0.3)]
    pub depth: f32,
}

impl Options {
    /// Starting parameter values.
    pub fn settings(&self) -> EffectSettings {
        EffectSettings {
            drive: self.drive,
            mix: self.mix,
            feedback: self.feedback,
            rate: self.rate,
            depth: self.depth,
        }
    }
}

fn main() -> Result<()> {
    color_eyre::install()?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = Options::parse();
    tracing::info!(?options, "starting fxdemo");

    if options.offline {
        app::render_offline(&options)
    } else {
        app::run_live(&options)
    }
}
