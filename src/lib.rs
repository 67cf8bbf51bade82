mod cli;
mod config;
pub mod display;
mod error;
pub mod ics;
pub mod models;
pub mod source;
pub mod timestamp;
pub mod upcoming;
mod utils;

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{error::ErrorKind, CommandFactory, Parser};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use cli::Cli;
use config::{AppConfig, Settings};
use display::Theme;

pub use error::FetchError;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn execute(cli: &Cli) -> Result<()> {
    let config = AppConfig::load(cli.config.as_deref()).context("failed to load config")?;
    let settings = Settings::resolve(cli, config, std::env::var_os("NO_COLOR").is_some());

    let Some(source) = settings.source.as_ref() else {
        Cli::command()
            .error(
                ErrorKind::MissingRequiredArgument,
                "Please provide either a URL or a file",
            )
            .exit();
    };

    let data = source
        .fetch(settings.timeout)
        .context("failed to load events")?;
    let events = ics::parse_events(&data);
    let selection = upcoming::select(&events, timestamp::now(), settings.limit);
    info!(
        parsed = events.len(),
        shown = selection.shown(),
        "rendering events"
    );

    let theme = if settings.color {
        Theme::default()
    } else {
        Theme::plain()
    };
    display::print(&selection, &theme);
    Ok(())
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match execute(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
