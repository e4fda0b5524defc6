//! Trait seams between the executor and its collaborators.
//!
//! The executor never interprets the server's wire format; it talks to a
//! [`Transport`] and streams whatever comes back into a [`ResultSink`].
//! Both traits (and [`Clock`]) exist so tests can inject deterministic
//! fakes for the transport and the retry delay.

use std::time::Duration;

use crate::config::ConnectionSettings;
use crate::error::TransportError;
use crate::message::{Diagnostics, Message, Record, Severity};

/// The underlying session primitive: connect, dispatch, and the post-dispatch
/// "was the connection dropped" signal.
///
/// Implementations wrap the real client API. The connection is stateful: a
/// `connect` must precede `run`, and `dropped` reports on the most recent
/// dispatch. The transport layer is known to misbehave when two connections
/// are established concurrently, so callers serialize `connect` process-wide.
pub trait Transport {
    /// Establish a connection using the given settings.
    fn connect(&mut self, settings: &ConnectionSettings) -> Result<(), TransportError>;

    /// Release the connection. Must be safe to call when already closed.
    fn disconnect(&mut self);

    /// Dispatch a named command, streaming output and diagnostics into `sink`.
    fn run(&mut self, command: &str, args: &[String], sink: &mut dyn ResultSink);

    /// Whether the connection was dropped during the most recent dispatch.
    ///
    /// The transport does not reliably distinguish "dropped" from "slow";
    /// a positive answer only means the session is not safe to reuse.
    fn dropped(&self) -> bool;
}

/// Receiver for a dispatched command's streamed output and diagnostics.
///
/// Every command result embeds a [`Diagnostics`] and exposes it through the
/// two accessor methods; message handling and the error-state queries are
/// provided on top of that. `record` and `text` default to discarding, for
/// results that only care about the error state.
pub trait ResultSink {
    /// Accumulated diagnostic state.
    fn diagnostics(&self) -> &Diagnostics;

    /// Mutable access for the provided `message` handler.
    fn diagnostics_mut(&mut self) -> &mut Diagnostics;

    /// One tagged output record from the server.
    fn record(&mut self, record: Record) {
        let _ = record;
    }

    /// A chunk of untagged text output (file content, raw listings).
    fn text(&mut self, data: &str) {
        let _ = data;
    }

    /// A diagnostic notification.
    fn message(&mut self, message: Message) {
        self.diagnostics_mut().push(message);
    }

    /// Maximum severity observed so far.
    fn severity(&self) -> Severity {
        self.diagnostics().severity()
    }

    /// Whether the command reported an error (`Failed` or worse).
    fn is_error(&self) -> bool {
        self.severity().is_error()
    }

    /// Whether the command reported an unrecoverable error.
    fn is_fatal(&self) -> bool {
        self.severity().is_fatal()
    }
}

/// Capability bound for the generic run operation: constructible fresh for
/// every attempt, accepts dispatch output, exposes error state.
pub trait CommandResult: ResultSink + Default {}

impl<T: ResultSink + Default> CommandResult for T {}

/// Source of retry delays.
///
/// Injected so retry timing is deterministic under test; production code
/// uses [`SystemClock`].
pub trait Clock {
    /// Block the calling thread for `duration`.
    fn sleep(&self, duration: Duration);
}

/// Real wall-clock delays via `std::thread::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
