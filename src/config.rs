use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
    time::Duration,
};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::Cli;
use crate::source::FeedSource;
use crate::utils;

pub const DEFAULT_LIMIT: usize = 5;
const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Optional `config.json`; every key can be left out.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct AppConfig {
    pub url: Option<String>,
    pub file: Option<PathBuf>,
    pub limit: Option<usize>,
    pub timeout_secs: u64,
    pub color: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            url: None,
            file: None,
            limit: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            color: true,
        }
    }
}

impl AppConfig {
    /// An explicit path must exist; the default location is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => read_config(path, true),
            None => read_config(&utils::config_path(), false),
        }
    }
}

fn read_config(path: &Path, required: bool) -> Result<AppConfig> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == ErrorKind::NotFound && !required => {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(AppConfig::default());
        }
        Err(err) if err.kind() == ErrorKind::NotFound => {
            bail!("config file {} does not exist", path.display());
        }
        Err(err) => {
            return Err(err).with_context(|| format!("unable to read config {}", path.display()));
        }
    };
    let config = serde_json::from_str(&contents)
        .with_context(|| format!("invalid config {}", path.display()))?;
    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}

/// Command line merged over the config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub source: Option<FeedSource>,
    pub limit: usize,
    pub timeout: Duration,
    pub color: bool,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: AppConfig, no_color_env: bool) -> Self {
        // A source on the command line replaces both configured sources.
        let source = match (&cli.file, &cli.url) {
            (Some(file), _) => Some(FeedSource::File(file.clone())),
            (None, Some(url)) => Some(FeedSource::Url(url.clone())),
            (None, None) => match (config.file, config.url) {
                (Some(file), _) => Some(FeedSource::File(file)),
                (None, Some(url)) => Some(FeedSource::Url(url)),
                (None, None) => None,
            },
        };

        Self {
            source,
            limit: cli.limit.or(config.limit).unwrap_or(DEFAULT_LIMIT),
            timeout: Duration::from_secs(config.timeout_secs),
            color: config.color && !cli.no_color && !no_color_env,
        }
    }
}
