use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("unable to build http client: {0}")]
    Client(reqwest::Error),
    #[error("request failed for {url}: {source}")]
    Request { url: String, source: reqwest::Error },
    #[error("{url} responded with {status}")]
    Status { url: String, status: StatusCode },
    #[error("unable to read response body for {url}: {source}")]
    Body { url: String, source: reqwest::Error },
}
