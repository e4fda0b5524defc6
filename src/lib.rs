//! p4runner - resilient command execution over a long-lived Perforce connection
//!
//! p4runner issues discrete, typed commands over a persistent session to a
//! Helix Core style server, detects connection loss or server-side command
//! failure, and transparently recovers by reconnecting and retrying. The
//! connection is treated as an aging resource that is proactively refreshed
//! after a configured number of commands.
//!
//! # Quick Start
//!
//! ```ignore
//! use p4runner::{ConnectionSettings, P4Client, RetryPolicy};
//!
//! let settings = ConnectionSettings::new("ssl:perforce:1666", "builder", "build-ws");
//! let mut client = P4Client::connect(transport, settings, RetryPolicy::default())?;
//!
//! let changes = client.latest_change("//depot/main/...")?;
//! ```
//!
//! # Architecture
//!
//! All commands go through the generic retry executor on [`P4Client`], which
//! owns the failure-handling contract: classification of each attempt as
//! clean, recoverable, or fatal; reconnect-before-retry with a fixed delay;
//! and escalation to a distinguished [`FatalError`] once the retry budget is
//! exhausted. Fatal errors are never surfaced as partial results; embedding
//! binaries hand them to [`fatal_exit`] at the process boundary.
//!
//! The underlying wire protocol is behind the `Transport` trait and is not
//! interpreted here.

// Re-export the public API from p4runner-executor
pub use p4runner_executor::*;
