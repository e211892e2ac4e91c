//! Configuration loading for mockbeat
//!
//! The config file is JSON with three keys. `path` is the glob the beat
//! scans for events, `period` is the scan interval in seconds, and `once`
//! makes the beat perform a single scan and exit.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;

use crate::error::{MockbeatError, MockbeatResult};

const DEFAULT_PERIOD_SECS: f64 = 60.0;

fn default_period() -> f64 {
    DEFAULT_PERIOD_SECS
}

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Glob pattern naming the files to scan for events
    #[serde(default)]
    pub path: String,

    /// Seconds between scans
    #[serde(default = "default_period")]
    pub period: f64,

    /// Scan once and exit instead of running until signalled
    #[serde(default)]
    pub once: bool,
}

impl Config {
    pub fn load(path: &Path) -> MockbeatResult<Config> {
        let raw = std::fs::read_to_string(path).map_err(|e| MockbeatError::ConfigRead {
            path: path.display().to_string(),
            source: e,
        })?;
        serde_json::from_str(&raw).map_err(|e| MockbeatError::ConfigParse {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// The scan interval, falling back to the default when the configured
    /// period cannot express a duration
    pub fn period_duration(&self) -> Duration {
        if self.period.is_finite() && self.period > 0.0 {
            Duration::from_secs_f64(self.period)
        } else {
            Duration::from_secs_f64(DEFAULT_PERIOD_SECS)
        }
    }
}
