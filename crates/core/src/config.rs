//! Connection and retry configuration.
//!
//! Configuration is an explicitly constructed value passed to the client at
//! session-establishment time, never ambient process-global state. Nothing
//! reads these values mid-command.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Parameters a session connects with.
///
/// Read once when the session is established (and again on every
/// reconnect); reconnects reuse the last-known settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionSettings {
    /// Server address, e.g. `ssl:perforce.example.com:1666`.
    pub port: String,
    /// Authenticated user name.
    pub user: String,
    /// Client workspace name.
    pub client: String,
}

impl ConnectionSettings {
    /// Create settings for the given server, user, and workspace.
    pub fn new(port: impl Into<String>, user: impl Into<String>, client: impl Into<String>) -> Self {
        Self {
            port: port.into(),
            user: user.into(),
            client: client.into(),
        }
    }
}

/// Failure-handling policy for the command executor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetryPolicy {
    /// Default retry budget per command. Individual commands may override it.
    pub command_retries: u32,
    /// Number of completed commands after which the connection is
    /// proactively re-established. Long-lived connections degrade with age.
    pub refresh_threshold: u32,
    /// Fixed delay between retry attempts.
    pub retry_delay: Duration,
}

impl RetryPolicy {
    /// Delay used between retries unless configured otherwise.
    pub const DEFAULT_RETRY_DELAY: Duration = Duration::from_secs(5);
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            command_retries: 10,
            refresh_threshold: 100,
            retry_delay: Self::DEFAULT_RETRY_DELAY,
        }
    }
}
