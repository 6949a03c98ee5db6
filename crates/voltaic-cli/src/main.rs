//! Voltaic CLI - render the analog engines offline.

mod commands;
mod render;
mod signal;
mod wav;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "voltaic")]
#[command(author, version, about = "Voltaic analog engine renderer", long_about = None)]
struct Cli {
    /// Log engine configuration and recoveries (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render an engine driven by a test signal to a WAV file
    Render(commands::render::RenderArgs),

    /// Show the anti-aliasing table for a filter profile
    Rates(commands::rates::RatesArgs),

    /// Load and validate a session file
    Check(commands::check::CheckArgs),

    /// Write the default session to a file
    Init(commands::init::InitArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Render(args) => commands::render::run(args),
        Commands::Rates(args) => commands::rates::run(args),
        Commands::Check(args) => commands::check::run(args),
        Commands::Init(args) => commands::init::run(args),
    }
}
