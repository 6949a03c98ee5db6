//! Offline engine render command.

use anyhow::{Context, bail};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use voltaic_config::{EngineConfig, SessionConfig, validate_session};

use crate::render::render;
use crate::wav::write_wav_f32;

/// Engines selectable on the command line
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CliEngine {
    /// Ladder filter, outputs BP2, LP2, LP4 and LP4 VCA
    Ripples,
    /// Equalizer, outputs main plus both parametric bands' HP, BP and LP
    Shelves,
    /// Dual VCA/LPG with the manual digital section
    Streams,
}

impl CliEngine {
    fn kind(self) -> &'static str {
        match self {
            CliEngine::Ripples => "ripples",
            CliEngine::Shelves => "shelves",
            CliEngine::Streams => "streams",
        }
    }
}

#[derive(Args)]
pub struct RenderArgs {
    /// Output WAV file
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Session file (TOML); defaults apply when omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Engine to render; replaces the session's engine with its defaults
    /// unless the session already uses it
    #[arg(short, long, value_enum)]
    engine: Option<CliEngine>,

    /// Sample rate in Hz
    #[arg(long)]
    sample_rate: Option<u32>,

    /// Duration in seconds
    #[arg(long)]
    duration: Option<f32>,

    /// Engine channels (1-16)
    #[arg(long)]
    channels: Option<usize>,
}

/// Session described by the arguments, before validation.
fn session_from_args(args: &RenderArgs) -> anyhow::Result<SessionConfig> {
    let mut session = match &args.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("loading session {}", path.display()))?,
        None => SessionConfig::default(),
    };

    if let Some(engine) = args.engine
        && session.engine.kind() != engine.kind()
    {
        let Some(config) = EngineConfig::from_kind(engine.kind()) else {
            bail!("no defaults for engine '{}'", engine.kind());
        };
        session.engine = config;
    }
    if let Some(sample_rate) = args.sample_rate {
        session.sample_rate = sample_rate;
    }
    if let Some(duration) = args.duration {
        session.duration_secs = duration;
    }
    if let Some(channels) = args.channels {
        session.channels = channels;
    }
    Ok(session)
}

pub fn run(args: RenderArgs) -> anyhow::Result<()> {
    let session = session_from_args(&args)?;
    validate_session(&session).context("invalid session")?;

    println!(
        "Rendering {} x{} at {} Hz for {:.2}s...",
        session.engine.kind(),
        session.channels,
        session.sample_rate,
        session.duration_secs
    );

    let rendered = render(&session);
    if rendered.recoveries > 0 {
        tracing::warn!(
            recoveries = rendered.recoveries,
            "engines were rebuilt after non-finite output"
        );
    }

    let channels =
        u16::try_from(rendered.channels()).context("too many output channels for WAV")?;
    write_wav_f32(&args.output, &rendered.samples, channels, session.sample_rate)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!(
        "Wrote {} frames x {} channels to {}",
        rendered.samples.len() / rendered.channels().max(1),
        channels,
        args.output.display()
    );
    println!("  Channels: {}", rendered.outputs.join(", "));
    Ok(())
}
