use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use reqwest::{blocking::Client, StatusCode};
use tracing::info;

use crate::error::FetchError;

const USER_AGENT: &str = concat!("agenda/", env!("CARGO_PKG_VERSION"));

/// Where the calendar feed comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedSource {
    File(PathBuf),
    Url(String),
}

impl FeedSource {
    /// Reads the whole feed into memory.
    pub fn fetch(&self, timeout: Duration) -> Result<String, FetchError> {
        match self {
            FeedSource::File(path) => read_file(path),
            FeedSource::Url(url) => fetch_url(url, timeout),
        }
    }
}

fn read_file(path: &Path) -> Result<String, FetchError> {
    info!(path = %path.display(), "reading feed file");
    fs::read_to_string(path).map_err(|source| FetchError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn fetch_url(url: &str, timeout: Duration) -> Result<String, FetchError> {
    info!(%url, "downloading feed");
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(FetchError::Client)?;

    let response = client
        .get(url)
        .send()
        .map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;

    let status = response.status();
    if status != StatusCode::OK {
        return Err(FetchError::Status {
            url: url.to_string(),
            status,
        });
    }

    let body = response.text().map_err(|source| FetchError::Body {
        url: url.to_string(),
        source,
    })?;
    info!(bytes = body.len(), "downloaded feed");
    Ok(body)
}
