//! Test helpers for system tests
//!
//! This module provides a scratch workspace for each test run and a way
//! to locate (or build) the mockbeat binary the tests drive.

use std::path::{Path, PathBuf};
use std::process::Command;

use anyhow::Context;
use tempfile::TempDir;

/// Per-test scratch directory laid out the way the system tests expect:
/// the config template and rendered config at the top level, and a log/
/// subdirectory the beat both writes to and scans.
pub struct BeatWorkspace {
    dir: TempDir,
}

impl BeatWorkspace {
    pub fn new() -> anyhow::Result<Self> {
        let dir = TempDir::new().context("create test workspace")?;
        std::fs::create_dir_all(dir.path().join("log"))
            .context("create log subdirectory")?;
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn template_path(&self) -> PathBuf {
        self.dir.path().join("mockbeat.template.json")
    }

    pub fn config_path(&self) -> PathBuf {
        self.dir.path().join("mockbeat.json")
    }

    /// The file the supervisor redirects the beat's output into
    pub fn log_path(&self) -> PathBuf {
        self.dir.path().join("log").join("mockbeat.log")
    }

    /// The glob the beat is configured to scan, covering its own log
    pub fn log_glob(&self) -> String {
        format!("{}/log/*", self.dir.path().display())
    }

    /// Write a config template into the workspace and return its path
    pub fn write_template(&self, contents: &str) -> anyhow::Result<PathBuf> {
        let path = self.template_path();
        std::fs::write(&path, contents)
            .with_context(|| format!("write template {}", path.display()))?;
        Ok(path)
    }
}

fn workspace_root() -> PathBuf {
    let crate_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    crate_dir
        .parent()
        .expect("resolve workspace root from crate path")
        .to_path_buf()
}

fn resolve_target_dir(workspace_root: &Path) -> PathBuf {
    match std::env::var_os("CARGO_TARGET_DIR") {
        Some(raw) => {
            let path = PathBuf::from(raw);
            if path.is_absolute() {
                path
            } else {
                workspace_root.join(path)
            }
        }
        None => workspace_root.join("target"),
    }
}

fn resolve_bin_path(name: &str) -> PathBuf {
    let root = workspace_root();
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "debug".to_string());
    resolve_target_dir(&root).join(profile).join(name)
}

/// Locate the mockbeat binary, building it if the workspace has not been
/// built yet. `MOCKBEAT_BIN` overrides the search for prebuilt setups.
pub fn ensure_mockbeat_binary() -> anyhow::Result<PathBuf> {
    if let Some(prebuilt) = std::env::var_os("MOCKBEAT_BIN") {
        return Ok(PathBuf::from(prebuilt));
    }

    let mockbeat = resolve_bin_path("mockbeat");
    if mockbeat.exists() {
        return Ok(mockbeat);
    }

    let status = Command::new("cargo")
        .arg("build")
        .arg("-p")
        .arg("mockbeat")
        .arg("--bin")
        .arg("mockbeat")
        .current_dir(workspace_root())
        .status()
        .context("run cargo build for mockbeat")?;

    anyhow::ensure!(status.success(), "cargo build for mockbeat must succeed");
    anyhow::ensure!(
        mockbeat.exists(),
        "mockbeat binary should exist at {} after build",
        mockbeat.display()
    );
    Ok(mockbeat)
}
