//! Runtime configuration for the application.

use std::{path::PathBuf, time::Duration};

use crate::auth::DEFAULT_LOGIN_DELAY;

/// The settings the application needs to start.
///
/// There are deliberately few of them: where to keep the persisted session
/// entry and how long the artificial log-in delay should be.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Path of the JSON file holding the persisted session entry.
    pub session_path: PathBuf,
    /// The artificial latency applied to log-in attempts.
    pub login_delay: Duration,
}

impl AppConfig {
    /// Create a config persisting the session at `session_path` with the
    /// default log-in delay.
    pub fn new(session_path: impl Into<PathBuf>) -> Self {
        Self {
            session_path: session_path.into(),
            login_delay: DEFAULT_LOGIN_DELAY,
        }
    }

    /// Override the artificial log-in delay.
    pub fn with_login_delay(mut self, delay: Duration) -> Self {
        self.login_delay = delay;
        self
    }
}
