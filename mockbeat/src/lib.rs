//! Mockbeat, a minimal stand-in for a log-shipping daemon
//!
//! The binary loads a JSON config, announces itself in its log, and scans
//! a path glob on a fixed period until it is told to stop. The library
//! surface exposes the config schema so harness tests can validate
//! rendered config files against the same parser the daemon uses.

pub mod beat;
pub mod config;
pub mod error;

pub use beat::Mockbeat;
pub use config::Config;
pub use error::{MockbeatError, MockbeatResult};
