//! Condition polling with timeout
//!
//! Coarse check-then-sleep loop over an arbitrary predicate. Polling is the
//! right shape here because the observed resource is typically written by an
//! external process with untrusted timing; there is no notification to hook.

use std::time::{Duration, Instant};

use tracing::{debug, warn};

/// Polls a predicate at a fixed cadence until it holds or a timeout elapses
#[derive(Debug, Clone)]
pub struct ConditionWaiter {
    timeout: Duration,
    poll_interval: Duration,
}

impl ConditionWaiter {
    /// Create a waiter with the default 10s timeout and 100ms poll interval
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            poll_interval: Duration::from_millis(100),
        }
    }

    /// Configure the overall timeout (fluent API)
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Configure the poll cadence (fluent API)
    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }

    /// Repeatedly evaluate `predicate` until it returns true or the timeout
    /// elapses. The first evaluation happens immediately, so a predicate
    /// that already holds returns `true` without sleeping. Returns whether
    /// the predicate was ever satisfied; the caller decides whether a
    /// timeout is fatal.
    pub async fn wait_until<F>(&self, mut predicate: F) -> bool
    where
        F: FnMut() -> bool,
    {
        let start_time = Instant::now();

        loop {
            if predicate() {
                debug!("✅ Condition satisfied after {:?}", start_time.elapsed());
                return true;
            }

            if start_time.elapsed() >= self.timeout {
                warn!("⏰ Timeout after {:?} waiting for condition", self.timeout);
                return false;
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

impl Default for ConditionWaiter {
    fn default() -> Self {
        Self::new()
    }
}
