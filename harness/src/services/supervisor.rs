//! Child process lifecycle supervision
//!
//! Spawns the daemon under test with its config file, observes its status,
//! and terminates it gracefully while capturing the exit status. The child
//! runs as an independent OS process; the only cancellation mechanism is
//! the bounded wait inside `kill`.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Stdio};
use std::time::{Duration, Instant};

use tokio::process::{Child, Command};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::{HarnessError, HarnessResult};

/// Lifecycle status of a supervised process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessStatus {
    /// Alive as far as the supervisor has observed
    Running,
    /// Exited on its own terms; carries the exit code when the OS reports one
    Exited(Option<i32>),
    /// Terminated by a signal; carries the signal number
    Killed(i32),
}

impl ProcessStatus {
    /// Classify a captured exit status
    pub fn from_exit(exit: ExitStatus) -> Self {
        if let Some(code) = exit.code() {
            return ProcessStatus::Exited(Some(code));
        }
        #[cfg(unix)]
        {
            use std::os::unix::process::ExitStatusExt;
            if let Some(signal) = exit.signal() {
                return ProcessStatus::Killed(signal);
            }
        }
        ProcessStatus::Exited(None)
    }

    /// Whether the process has left the running state
    pub fn is_terminal(&self) -> bool {
        !matches!(self, ProcessStatus::Running)
    }
}

impl std::fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProcessStatus::Running => write!(f, "running"),
            ProcessStatus::Exited(Some(code)) => write!(f, "exited with code {code}"),
            ProcessStatus::Exited(None) => write!(f, "exited without a code"),
            ProcessStatus::Killed(signal) => write!(f, "killed by signal {signal}"),
        }
    }
}

/// Handle for a supervised process
///
/// Owns the child exclusively. The status transitions from `Running` to one
/// terminal value exactly once and never backward; only the supervisor that
/// created the handle records the transition.
#[derive(Debug)]
pub struct ProcessHandle {
    id: Uuid,
    pid: u32,
    command: String,
    started_at: Instant,
    status: ProcessStatus,
    child: Child,
}

impl ProcessHandle {
    /// Opaque handle identifier
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// OS process id captured at spawn, valid for signalling until reaped
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Instant the process was spawned
    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// Last status observed by the supervisor
    pub fn status(&self) -> ProcessStatus {
        self.status
    }

    /// Record a terminal status; the first observation wins
    fn record_exit(&mut self, exit: ExitStatus) -> ProcessStatus {
        if self.status == ProcessStatus::Running {
            self.status = ProcessStatus::from_exit(exit);
        }
        self.status
    }
}

impl Drop for ProcessHandle {
    fn drop(&mut self) {
        // Emergency cleanup: a handle dropped mid-test must not leak its child
        if self.status == ProcessStatus::Running && matches!(self.child.try_wait(), Ok(None)) {
            warn!("🚨 Emergency cleanup: force killing process {}", self.pid);
            let _ = self.child.start_kill();
        }
    }
}

/// Spawns and terminates supervised child processes
#[derive(Debug, Clone)]
pub struct ProcessSupervisor {
    /// File receiving the child's stdout and stderr, when configured
    log_path: Option<PathBuf>,

    /// How long `kill` waits for the OS to confirm death
    kill_timeout: Duration,
}

impl ProcessSupervisor {
    /// Create a supervisor with default settings
    pub fn new() -> Self {
        Self {
            log_path: None,
            kill_timeout: Duration::from_secs(5),
        }
    }

    /// Capture the child's stdout and stderr into the given file (fluent API)
    pub fn with_log_path(mut self, log_path: impl Into<PathBuf>) -> Self {
        self.log_path = Some(log_path.into());
        self
    }

    /// Configure how long `kill` waits for confirmed death (fluent API)
    pub fn with_kill_timeout(mut self, kill_timeout: Duration) -> Self {
        self.kill_timeout = kill_timeout;
        self
    }

    /// Spawn `command` with `args` plus the conventional `-c <config_path>`
    /// trailing pair. The environment is inherited and stdin is closed.
    /// Dropping the returned handle while the process still runs force-kills
    /// the child.
    pub async fn start(
        &self,
        command: &str,
        args: &[&str],
        config_path: impl AsRef<Path>,
    ) -> HarnessResult<ProcessHandle> {
        let config_path = config_path.as_ref();

        let mut cmd = Command::new(command);
        cmd.args(args).arg("-c").arg(config_path).stdin(Stdio::null());

        match &self.log_path {
            Some(log_path) => {
                let stdout_file = Self::open_log_file(log_path)?;
                let stderr_file = stdout_file.try_clone()?;
                cmd.stdout(Stdio::from(stdout_file)).stderr(Stdio::from(stderr_file));
            }
            None => {
                cmd.stdout(Stdio::inherit()).stderr(Stdio::inherit());
            }
        }

        let child = cmd.spawn().map_err(|e| HarnessError::SpawnFailed {
            command: command.to_string(),
            source: e,
        })?;

        let pid = child.id().ok_or_else(|| HarnessError::SpawnUnidentified {
            command: command.to_string(),
        })?;

        info!(
            "🚀 Started '{}' (PID: {}) with config {}",
            command,
            pid,
            config_path.display()
        );

        Ok(ProcessHandle {
            id: Uuid::new_v4(),
            pid,
            command: command.to_string(),
            started_at: Instant::now(),
            status: ProcessStatus::Running,
            child,
        })
    }

    /// Request termination and await the captured exit status.
    ///
    /// Sends SIGTERM, then waits up to the kill timeout for the OS to
    /// confirm death. Calling this on a handle already observed terminal is
    /// a precondition violation reported as `AlreadyTerminal`; a child that
    /// exited before the signal is reported as `AlreadyExited` with the
    /// handle updated to its real status.
    pub async fn kill(&self, handle: &mut ProcessHandle) -> HarnessResult<ExitStatus> {
        if handle.status != ProcessStatus::Running {
            return Err(HarnessError::AlreadyTerminal {
                pid: handle.pid,
                status: handle.status,
            });
        }

        // The child may have exited on its own without anyone observing it
        if let Some(exit) = handle.child.try_wait()? {
            let status = handle.record_exit(exit);
            return Err(HarnessError::AlreadyExited {
                pid: handle.pid,
                status,
            });
        }

        Self::send_sigterm(handle)?;
        debug!("📤 Sent SIGTERM to process {}", handle.pid);

        match tokio::time::timeout(self.kill_timeout, handle.child.wait()).await {
            Ok(Ok(exit)) => {
                let status = handle.record_exit(exit);
                info!(
                    "🛑 Stopped '{}' (PID: {}) after {:?}: {}",
                    handle.command,
                    handle.pid,
                    handle.started_at.elapsed(),
                    status
                );
                Ok(exit)
            }
            Ok(Err(e)) => Err(HarnessError::IoError(e)),
            Err(_) => {
                warn!(
                    "⏰ Process {} did not exit within {:?}",
                    handle.pid, self.kill_timeout
                );
                Err(HarnessError::ShutdownUnconfirmed {
                    pid: handle.pid,
                    timeout: self.kill_timeout,
                })
            }
        }
    }

    /// Observe the current status without blocking.
    ///
    /// Records the terminal status the first time an exit is seen, so later
    /// calls keep returning the same terminal value.
    pub fn poll_status(&self, handle: &mut ProcessHandle) -> HarnessResult<ProcessStatus> {
        if handle.status != ProcessStatus::Running {
            return Ok(handle.status);
        }

        match handle.child.try_wait()? {
            Some(exit) => Ok(handle.record_exit(exit)),
            None => Ok(ProcessStatus::Running),
        }
    }

    /// Open the capture file in append mode, creating parent directories
    fn open_log_file(log_path: &Path) -> HarnessResult<File> {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;
        Ok(file)
    }

    #[cfg(unix)]
    fn send_sigterm(handle: &mut ProcessHandle) -> HarnessResult<()> {
        use nix::sys::signal::{self, Signal};
        use nix::unistd::Pid;

        signal::kill(Pid::from_raw(handle.pid as i32), Signal::SIGTERM).map_err(|errno| {
            HarnessError::SignalFailed {
                pid: handle.pid,
                source: std::io::Error::from_raw_os_error(errno as i32),
            }
        })
    }

    #[cfg(not(unix))]
    fn send_sigterm(handle: &mut ProcessHandle) -> HarnessResult<()> {
        handle.child.start_kill().map_err(|e| HarnessError::SignalFailed {
            pid: handle.pid,
            source: e,
        })
    }
}

impl Default for ProcessSupervisor {
    fn default() -> Self {
        Self::new()
    }
}

/// Whether a process with the given pid currently exists
#[cfg(unix)]
pub fn process_exists(pid: u32) -> bool {
    use nix::errno::Errno;
    use nix::sys::signal;
    use nix::unistd::Pid;

    !matches!(signal::kill(Pid::from_raw(pid as i32), None), Err(Errno::ESRCH))
}
