//! CLI argument parsing and the update run.

pub mod args;
pub mod settings;
pub mod update;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use std::ffi::OsString;

use crate::config::Config;
use crate::logging;
pub use settings::Settings;

/// Run the CLI application.
pub async fn run() -> Result<()> {
    run_from(std::env::args_os()).await
}

/// Run with an explicit argument list (the first item is the program name).
///
/// Malformed flags, `--help` and `--version` come back as a [`clap::Error`]
/// inside the returned error; the caller decides how to exit.
pub async fn run_from<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let cli = Cli::try_parse_from(args::normalize_args(args))?;

    logging::init(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    // Load configuration
    let config = Config::load(cli.config.as_deref())?;

    let settings = Settings::resolve(&cli, &config)
        .context("you must specify a zone ID, hostname and domain")?;

    let rendered = update::execute(&settings).await?;
    println!("{rendered}");

    Ok(())
}
