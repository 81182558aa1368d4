use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read catalog {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid catalog data: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum RelayError {
    #[error("Failed to reach email relay: {0}")]
    Request(#[from] reqwest::Error),
    #[error("Email relay rejected the message ({status}): {body}")]
    Rejected { status: u16, body: String },
    #[error("Email relay did not answer within {0:?}")]
    Timeout(Duration),
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{key} must be a number, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },
}
