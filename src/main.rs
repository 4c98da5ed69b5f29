use crate::commands::Cli;
use crate::convert::convert;
use anyhow::{Context, Result};
use clap::Parser;
use log::error;
use std::process::ExitCode;

mod commands;
mod convert;
mod cue;
mod error;
mod labels;
mod util;

fn main() -> ExitCode {
    dotenv::dotenv().ok();

    if let Err(err) = env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .try_init()
    {
        eprintln!("Error: failed to initialize logger: {err}");
        return ExitCode::FAILURE;
    }

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    convert(cli).with_context(|| format!("Failed to convert {}", cli.filepath.display()))?;

    Ok(())
}
