//! Error types for mockbeat

use thiserror::Error;

pub type MockbeatResult<T> = Result<T, MockbeatError>;

#[derive(Error, Debug)]
pub enum MockbeatError {
    #[error("Failed to read config file {path}: {source}")]
    ConfigRead {
        path: String,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    ConfigParse {
        path: String,
        source: serde_json::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
