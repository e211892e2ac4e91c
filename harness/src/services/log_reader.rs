//! Log file reader tolerant of files that do not exist yet
//!
//! Supervised processes create their log files at their own pace, so a read
//! of a missing or half-written file yields an empty string instead of an
//! error. Polling callers then see a uniform "not there yet" answer.

use std::fs;
use std::path::{Path, PathBuf};

/// Reads the current contents of a single log file
#[derive(Debug, Clone)]
pub struct LogReader {
    path: PathBuf,
}

impl LogReader {
    /// Create a reader observing the given path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this reader observes
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full current contents, or an empty string if the file cannot be read
    pub fn read(&self) -> String {
        fs::read_to_string(&self.path).unwrap_or_default()
    }

    /// Whether the log currently contains the given substring
    pub fn contains(&self, needle: &str) -> bool {
        self.read().contains(needle)
    }

    /// Number of non-overlapping occurrences of the given substring
    pub fn count(&self, needle: &str) -> usize {
        self.read().matches(needle).count()
    }
}
