//! Default session command.

use anyhow::{Context, bail};
use clap::Args;
use std::path::PathBuf;
use voltaic_config::SessionConfig;

#[derive(Args)]
pub struct InitArgs {
    /// Output session file (TOML)
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    force: bool,
}

pub fn run(args: InitArgs) -> anyhow::Result<()> {
    if args.output.exists() && !args.force {
        bail!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        );
    }
    SessionConfig::default()
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;
    println!("Wrote default session to {}", args.output.display());
    Ok(())
}
