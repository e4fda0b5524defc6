//! Fatal-classification errors and the process boundary.
//!
//! A fatal outcome means the caller cannot safely reason about the session's
//! state, so no result value is ever handed back alongside one. The executor
//! propagates [`FatalError`] upward instead of exiting in place, which keeps
//! the core unit-testable; a single top-level boundary ([`fatal_exit`])
//! performs the actual termination.

use thiserror::Error;

/// Result alias for executor operations.
pub type Result<T> = std::result::Result<T, FatalError>;

/// Unrecoverable command-execution failure.
///
/// Operators must treat a process exit caused by one of these as "manual
/// intervention required", not a transient failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FatalError {
    /// The connection kept dropping after every retry in the budget.
    #[error("p4 {command}: connection still dropping after {retries} retries")]
    RetriesExhausted {
        /// Command that was being retried.
        command: String,
        /// Retry budget that was exhausted.
        retries: u32,
    },

    /// The server reported a fatal-severity diagnostic. Not retriable
    /// regardless of remaining budget.
    #[error("p4 {command}: fatal server error: {message}")]
    Command {
        /// Command that failed.
        command: String,
        /// Text of the fatal diagnostic.
        message: String,
    },

    /// The aged connection could not be re-established.
    #[error("could not refresh the connection after {retries} attempts")]
    RefreshFailed {
        /// Number of reinitialize attempts made.
        retries: u32,
    },
}

/// Terminal boundary for fatal classification.
///
/// Logs the error and exits with a non-zero status. The session has already
/// been deinitialized by the time a [`FatalError`] propagates here. Intended
/// to be called exactly once, at the top level of an embedding binary.
pub fn fatal_exit(err: &FatalError) -> ! {
    tracing::error!(error = %err, "unrecoverable failure, exiting");
    std::process::exit(1)
}
