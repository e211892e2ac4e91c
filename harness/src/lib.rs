//! Test harness for supervising log-emitting daemon processes
//!
//! This library provides the pieces a system test needs to drive a daemon
//! end to end: render a config file from a template, spawn the daemon with
//! that config, poll its log for a startup marker, and verify graceful
//! shutdown semantics. The four services are independent capabilities that
//! callers compose explicitly.

pub mod error;
pub mod services;

// Re-export commonly used types
pub use error::{HarnessError, HarnessResult};
pub use services::{
    ConditionWaiter, ConfigRenderer, LogReader, ProcessHandle, ProcessStatus, ProcessSupervisor,
    RenderedConfig,
};
#[cfg(unix)]
pub use services::process_exists;
