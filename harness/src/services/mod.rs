//! Service implementations
//!
//! This module contains the four supervision capabilities. Each is an
//! independent, explicitly instantiated service; tests compose them rather
//! than inheriting shared state.

pub mod config_renderer;
pub mod log_reader;
pub mod supervisor;
pub mod waiter;

#[cfg(test)]
pub mod tests;

// Re-export all service implementations
pub use config_renderer::{ConfigRenderer, RenderedConfig};
pub use log_reader::LogReader;
pub use supervisor::{ProcessHandle, ProcessStatus, ProcessSupervisor};
#[cfg(unix)]
pub use supervisor::process_exists;
pub use waiter::ConditionWaiter;
