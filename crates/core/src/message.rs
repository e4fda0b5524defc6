//! Server diagnostics: severity ladder, messages, and tagged output records.
//!
//! Every command result accumulates the diagnostics the server emitted while
//! the command ran. The severity ladder mirrors the Helix error levels; a
//! result "is an error" once anything at `Failed` or above was seen, and
//! "is fatal" at `Fatal`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One tagged output dictionary streamed from the server, one per entity
/// (changelist, file revision, user, ...). Keys and values are opaque here;
/// result types pick out the fields they care about.
pub type Record = BTreeMap<String, String>;

/// Severity of a server diagnostic.
///
/// Ordered: `Empty < Info < Warning < Failed < Fatal`. The maximum severity
/// observed over a command's lifetime decides its error state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// No diagnostic at all.
    #[default]
    Empty,
    /// Informational output.
    Info,
    /// Warning; the command still succeeded.
    Warning,
    /// The command failed but the failure is retriable.
    Failed,
    /// Unrecoverable failure (authentication, protocol incompatibility).
    Fatal,
}

impl Severity {
    /// Whether this severity counts as a command error.
    pub fn is_error(self) -> bool {
        self >= Severity::Failed
    }

    /// Whether this severity forbids retrying.
    pub fn is_fatal(self) -> bool {
        self >= Severity::Fatal
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Empty => "empty",
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Failed => "failed",
            Severity::Fatal => "fatal",
        };
        write!(f, "{}", s)
    }
}

/// A single diagnostic emitted by the server during a command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    /// Severity of the diagnostic.
    pub severity: Severity,
    /// Human-readable text.
    pub text: String,
}

impl Message {
    /// Create a message with an explicit severity.
    pub fn new(severity: Severity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
        }
    }

    /// Informational message.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Severity::Info, text)
    }

    /// Retriable failure message.
    pub fn failed(text: impl Into<String>) -> Self {
        Self::new(Severity::Failed, text)
    }

    /// Unrecoverable failure message.
    pub fn fatal(text: impl Into<String>) -> Self {
        Self::new(Severity::Fatal, text)
    }
}

/// Accumulated diagnostic state of one command attempt.
///
/// Tracks every message plus the maximum severity seen so far. A fresh
/// `Diagnostics` is created for every attempt, so output from a failed
/// attempt never leaks into a retried one.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Diagnostics {
    messages: Vec<Message>,
    severity: Severity,
}

impl Diagnostics {
    /// Record a diagnostic, raising the accumulated severity if needed.
    pub fn push(&mut self, message: Message) {
        self.severity = self.severity.max(message.severity);
        self.messages.push(message);
    }

    /// Maximum severity observed so far.
    pub fn severity(&self) -> Severity {
        self.severity
    }

    /// All diagnostics in arrival order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// The first message at the maximum severity, if any was recorded.
    pub fn worst(&self) -> Option<&Message> {
        self.messages.iter().find(|m| m.severity == self.severity)
    }
}
