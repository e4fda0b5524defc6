//! Outcome classification for one completed command attempt.
//!
//! Evaluated after every attempt, including the first. The classification is
//! pure over the two observable signals: the transport's dropped flag and
//! the result's accumulated severity. Retry-budget exhaustion is the run
//! loop's concern, not the classifier's.

use p4runner_core::Severity;

/// Classification of a completed command attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// No error, no drop: hand the result to the caller.
    Clean,
    /// Connection dropped, or the command reported a non-fatal error:
    /// eligible for reconnect-and-retry.
    Recoverable,
    /// Fatal-severity diagnostic: not retriable regardless of budget.
    Fatal,
}

/// Classify one attempt from the dropped signal and the result severity.
pub fn classify(dropped: bool, severity: Severity) -> Outcome {
    if severity.is_fatal() {
        Outcome::Fatal
    } else if dropped || severity.is_error() {
        Outcome::Recoverable
    } else {
        Outcome::Clean
    }
}
