//! Harness-specific error types

use std::time::Duration;
use thiserror::Error;

use crate::services::supervisor::ProcessStatus;

/// Result type for harness operations
pub type HarnessResult<T> = Result<T, HarnessError>;

/// Harness error types
#[derive(Error, Debug)]
pub enum HarnessError {
    #[error("Failed to read config template {path}: {source}")]
    TemplateRead { path: String, source: std::io::Error },

    #[error("Failed to write rendered config {path}: {source}")]
    ConfigWrite { path: String, source: std::io::Error },

    #[error("Template placeholder '{name}' has no bound parameter")]
    UnboundPlaceholder { name: String },

    #[error("Template has no placeholder for parameter '{name}'")]
    UnusedParameter { name: String },

    #[error("Template placeholder '{name}' appears {count} times, expected once")]
    DuplicatePlaceholder { name: String, count: usize },

    #[error("Failed to spawn process '{command}': {source}")]
    SpawnFailed { command: String, source: std::io::Error },

    #[error("Spawned process '{command}' reported no pid")]
    SpawnUnidentified { command: String },

    #[error("Process {pid} is already terminal: {status}")]
    AlreadyTerminal { pid: u32, status: ProcessStatus },

    #[error("Process {pid} exited before termination was requested: {status}")]
    AlreadyExited { pid: u32, status: ProcessStatus },

    #[error("Failed to signal process {pid}: {source}")]
    SignalFailed { pid: u32, source: std::io::Error },

    #[error("Process {pid} did not confirm shutdown within {timeout:?}")]
    ShutdownUnconfirmed { pid: u32, timeout: Duration },

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
