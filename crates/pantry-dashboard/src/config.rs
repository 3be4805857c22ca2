//! Dashboard configuration.

use std::time::Duration;

/// Configuration for the dashboard service.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Maximum outstanding requests shown before the rest are
    /// summarized as an overflow count (default: 25).
    pub outstanding_request_limit: usize,
    /// Upper bound on each data-source read in seconds (default: 10).
    pub section_timeout_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            outstanding_request_limit: 25,
            section_timeout_secs: 10,
        }
    }
}

impl DashboardConfig {
    /// Timeout applied to each section of a build.
    pub fn section_timeout(&self) -> Duration {
        Duration::from_secs(self.section_timeout_secs)
    }

    /// Load configuration from environment variables.
    ///
    /// Reads `PANTRY_DASHBOARD_REQUEST_LIMIT` and
    /// `PANTRY_DASHBOARD_SECTION_TIMEOUT_SECS`; unset or unparsable
    /// values keep their defaults.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(limit) = env_parse("PANTRY_DASHBOARD_REQUEST_LIMIT") {
            config.outstanding_request_limit = limit;
        }
        if let Some(secs) = env_parse("PANTRY_DASHBOARD_SECTION_TIMEOUT_SECS") {
            config.section_timeout_secs = secs;
        }

        config
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.trim().parse().ok()
}
