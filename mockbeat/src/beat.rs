//! The mockbeat event loop
//!
//! Mockbeat stands in for a log-shipping daemon in system tests. It
//! announces itself on startup, scans its configured glob on a fixed
//! period, and shuts down cleanly on SIGTERM or SIGINT.

use tracing::info;

use crate::config::Config;
use crate::error::MockbeatResult;

pub struct Mockbeat {
    config: Config,
}

impl Mockbeat {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Run the beat until it is signalled, or through a single scan in
    /// once mode
    pub async fn run(&self) -> MockbeatResult<()> {
        // Startup marker. System tests watch the log for this line to
        // decide the beat is up.
        info!("mockbeat is running! Hit CTRL-C to stop it.");

        if self.config.once {
            self.scan();
            info!("🛑 Single scan complete, shutting down");
            return Ok(());
        }

        self.run_loop().await
    }

    #[cfg(unix)]
    async fn run_loop(&self) -> MockbeatResult<()> {
        use tokio::signal::unix::{SignalKind, signal};

        let mut sigterm = signal(SignalKind::terminate())?;
        let mut sigint = signal(SignalKind::interrupt())?;

        let mut ticker = tokio::time::interval(self.config.period_duration());
        // The interval's first tick completes immediately; consume it so
        // the first scan happens a full period after startup
        ticker.tick().await;

        loop {
            tokio::select! {
                _ = sigterm.recv() => {
                    info!("🛑 Received SIGTERM, shutting down");
                    break;
                }
                _ = sigint.recv() => {
                    info!("🛑 Received SIGINT, shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    self.scan();
                }
            }
        }

        Ok(())
    }

    #[cfg(not(unix))]
    async fn run_loop(&self) -> MockbeatResult<()> {
        let mut ticker = tokio::time::interval(self.config.period_duration());
        ticker.tick().await;

        loop {
            tokio::select! {
                result = tokio::signal::ctrl_c() => {
                    result?;
                    info!("🛑 Received Ctrl+C, shutting down");
                    break;
                }
                _ = ticker.tick() => {
                    self.scan();
                }
            }
        }

        Ok(())
    }

    fn scan(&self) {
        info!("Fetching events for path glob '{}'", self.config.path);
    }
}
