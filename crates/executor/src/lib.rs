//! # p4runner executor
//!
//! The command-execution core: a [`P4Client`] owns one live session to the
//! server and runs every command through a single retry protocol.
//!
//! Per command invocation the executor:
//!
//! 1. Constructs a fresh result value and dispatches against the session.
//! 2. Classifies the outcome as clean, recoverable, or fatal.
//! 3. On a recoverable outcome, sleeps, reconnects, and re-dispatches until
//!    the retry budget runs out. Every retry reconnects first: a session
//!    that may have dropped is never reused blindly.
//! 4. Escalates to [`FatalError`] when the budget is exhausted while the
//!    connection is still dropping, or on a fatal-severity diagnostic. No
//!    result value is ever returned on that path.
//! 5. On completion, counts the command against the session's age and
//!    refreshes the connection once the configured threshold is reached.
//!
//! The library never terminates the process itself; embedding binaries pass
//! the propagated [`FatalError`] to [`fatal_exit`] at their top level.

#![warn(missing_docs)]

mod classify;
mod client;
mod error;
pub mod results;
mod session;

pub use classify::{classify, Outcome};
pub use client::P4Client;
pub use error::{fatal_exit, FatalError, Result};
pub use results::{
    Change, ChangesResult, ClientSpecResult, DescribeResult, DescribedFile, FileLogResult,
    FileRevision, InfoResult, PrintResult, PrintedFile, SizeEntry, SizesResult, StatusResult,
    StreamEntry, StreamsResult, SyncEntry, SyncResult, UserEntry, UsersResult,
};
pub use session::Session;

// Re-export the leaf vocabulary so embedders only need this crate.
pub use p4runner_core::{
    Clock, CommandResult, ConnectionSettings, Diagnostics, Message, Record, ResultSink, RetryPolicy,
    Severity, SystemClock, Transport, TransportError,
};
