use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use julia_explorer::{Settings, ViewArgs, run_gui};

/// Interactive Julia explorer: move the cursor to pick the constant.
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(flatten)]
    view: ViewArgs,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let settings = Cli::parse().view.resolve(Settings::default())?;
    let config = settings.validate().context("invalid view parameters")?;
    let frame_rate = settings.frame_rate()?;

    run_gui(config, frame_rate)?;

    Ok(())
}
