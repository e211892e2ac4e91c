//! Test fixtures and data for system tests
//!
//! This module provides consistent templates and marker strings used
//! across all test suites.

/// Standard test data and fixtures
pub struct TestFixtures;

impl TestFixtures {
    /// Startup line mockbeat writes once it is up. Substring of the full
    /// log line so it survives formatting in front of the message.
    pub const RUNNING_MARKER: &'static str = "mockbeat is running";

    /// Scan interval used by system tests, in seconds. Short enough that
    /// a test sees several scans, long enough not to spam the log.
    pub const SCAN_PERIOD_SECS: &'static str = "0.5";

    /// Config template for a beat that runs until signalled
    pub const CONFIG_TEMPLATE: &'static str = r#"{
    "path": "{{path}}",
    "period": {{period}}
}
"#;

    /// Config template for a beat that scans once and exits
    pub const ONCE_CONFIG_TEMPLATE: &'static str = r#"{
    "path": "{{path}}",
    "period": 0.1,
    "once": true
}
"#;
}
