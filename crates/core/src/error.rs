//! Transport-level error types.
//!
//! We use `thiserror` for automatic `Display` and `Error` trait
//! implementations. Errors from the executor's own retry protocol live in
//! `p4runner-executor`; this crate only covers the connection primitive.

use thiserror::Error;

/// Errors reported by a [`Transport`](crate::traits::Transport).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    /// Establishing the connection failed.
    #[error("connection to {port} failed: {reason}")]
    ConnectFailed {
        /// Server address the connect was aimed at.
        port: String,
        /// Transport-provided failure description.
        reason: String,
    },

    /// A command was dispatched without a live connection.
    #[error("no live connection to dispatch on")]
    NotConnected,
}
