//! Shared leaf types for the p4runner workspace.
//!
//! This crate defines the vocabulary the executor is built from: the server
//! diagnostic severity ladder, tagged output records, connection settings and
//! retry policy, and the trait seams (`Transport`, `ResultSink`, `Clock`)
//! that keep the executor testable with injected fakes.

pub mod config;
pub mod error;
pub mod message;
pub mod traits;

pub use config::{ConnectionSettings, RetryPolicy};
pub use error::TransportError;
pub use message::{Diagnostics, Message, Record, Severity};
pub use traits::{Clock, CommandResult, ResultSink, SystemClock, Transport};
