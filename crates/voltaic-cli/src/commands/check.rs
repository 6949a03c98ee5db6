//! Session validation command.

use anyhow::Context;
use clap::Args;
use std::path::PathBuf;
use voltaic_config::{SessionConfig, validate_session};

#[derive(Args)]
pub struct CheckArgs {
    /// Session file (TOML)
    #[arg(value_name = "CONFIG")]
    config: PathBuf,
}

pub fn run(args: CheckArgs) -> anyhow::Result<()> {
    let session = SessionConfig::load(&args.config)
        .with_context(|| format!("loading session {}", args.config.display()))?;
    validate_session(&session)
        .with_context(|| format!("{} is not a valid session", args.config.display()))?;

    println!("{}: ok", args.config.display());
    println!(
        "  {} x{} at {} Hz, {:.2}s, {:?} signal",
        session.engine.kind(),
        session.channels,
        session.sample_rate,
        session.duration_secs,
        session.signal.waveform
    );
    Ok(())
}
