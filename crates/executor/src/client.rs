//! The retry-aware command client.
//!
//! [`P4Client`] owns one [`Session`] and runs every command through the same
//! protocol: dispatch, classify, reconnect-and-retry on recoverable
//! failures, escalate to [`FatalError`] when the budget runs out, and
//! refresh the connection once it has served enough commands. The typed
//! command methods are thin wrappers that build the argument vector and call
//! the generic [`run`](P4Client::run).

use tracing::{error, info, warn};

use p4runner_core::{
    Clock, CommandResult, ConnectionSettings, RetryPolicy, SystemClock, Transport, TransportError,
};

use crate::classify::{classify, Outcome};
use crate::error::{FatalError, Result};
use crate::results::{
    ChangesResult, ClientSpecResult, DescribeResult, FileLogResult, InfoResult, PrintResult,
    SizesResult, StatusResult, StreamsResult, SyncResult, UsersResult,
};
use crate::session::Session;

/// A resilient client for one long-lived server connection.
///
/// Commands issued through one client are dispatched strictly in order: each
/// must complete (or escalate fatally) before the next begins. Multiple
/// independent clients may run on separate threads; they share only the
/// process-wide initialization lock around connection setup.
#[derive(Debug)]
pub struct P4Client<T: Transport, C: Clock = SystemClock> {
    session: Session<T>,
    policy: RetryPolicy,
    clock: C,
}

impl<T: Transport> P4Client<T, SystemClock> {
    /// Establish a session and wrap it in a client.
    pub fn connect(
        transport: T,
        settings: ConnectionSettings,
        policy: RetryPolicy,
    ) -> std::result::Result<Self, TransportError> {
        Self::connect_with_clock(transport, settings, policy, SystemClock)
    }
}

impl<T: Transport, C: Clock> P4Client<T, C> {
    /// Establish a session with an injected clock for retry delays.
    pub fn connect_with_clock(
        transport: T,
        settings: ConnectionSettings,
        policy: RetryPolicy,
        clock: C,
    ) -> std::result::Result<Self, TransportError> {
        let mut session = Session::new(transport, settings);
        session.initialize()?;
        Ok(Self {
            session,
            policy,
            clock,
        })
    }

    /// The client's failure-handling policy.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Commands completed on the current connection.
    pub fn usage(&self) -> u32 {
        self.session.usage()
    }

    /// Run a command with the default retry budget.
    pub fn run<R: CommandResult>(&mut self, command: &str, args: &[String]) -> Result<R> {
        self.run_with_retries(command, args, self.policy.command_retries)
    }

    /// Run a command with an explicit retry budget.
    ///
    /// A fresh result value is constructed for every attempt so partial
    /// output from a failed attempt never leaks into a retried one. Every
    /// retry reconnects before re-dispatching, even when the drop was not
    /// confirmed: the transport cannot tell "dropped" from "slow", and a
    /// stale session is never safe to reuse blindly.
    ///
    /// # Errors
    ///
    /// Returns a [`FatalError`] when the connection is still dropping after
    /// the whole budget, or when the server reports a fatal-severity
    /// diagnostic. The session is deinitialized before the error propagates.
    /// A persistent non-fatal command error is returned as a normal result
    /// with its error state queryable.
    pub fn run_with_retries<R: CommandResult>(
        &mut self,
        command: &str,
        args: &[String],
        retries: u32,
    ) -> Result<R> {
        let mut attempt = self.dispatch::<R>(command, args);
        let mut budget = retries;

        loop {
            match classify(self.session.dropped(), attempt.severity()) {
                Outcome::Clean => break,
                Outcome::Fatal => {
                    let message = attempt
                        .diagnostics()
                        .worst()
                        .map(|m| m.text.clone())
                        .unwrap_or_default();
                    return Err(self.escalate(FatalError::Command {
                        command: command.to_string(),
                        message,
                    }));
                }
                Outcome::Recoverable => {
                    if budget == 0 {
                        if self.session.dropped() {
                            return Err(self.escalate(FatalError::RetriesExhausted {
                                command: command.to_string(),
                                retries,
                            }));
                        }
                        // The command keeps failing below fatal severity on a
                        // live connection; hand the errored result back.
                        break;
                    }
                    budget -= 1;

                    error!(
                        command,
                        delay_secs = self.policy.retry_delay.as_secs(),
                        "connection dropped or command errored, retrying"
                    );
                    self.clock.sleep(self.policy.retry_delay);

                    match self.session.reinitialize() {
                        Ok(()) => info!("reinitialized server connection"),
                        Err(e) => error!(error = %e, "could not reinitialize server connection"),
                    }

                    warn!(command, ?args, "retrying command");
                    attempt = self.dispatch::<R>(command, args);
                }
            }
        }

        self.note_usage()?;
        Ok(attempt)
    }

    fn dispatch<R: CommandResult>(&mut self, command: &str, args: &[String]) -> R {
        let mut result = R::default();
        self.session.dispatch(command, args, &mut result);
        result
    }

    /// Best-effort cleanup before a fatal error propagates to the boundary.
    fn escalate(&mut self, err: FatalError) -> FatalError {
        error!(error = %err, "fatal command outcome, releasing session");
        self.session.deinitialize();
        err
    }

    /// Post-command usage hook: count the command and refresh an aged
    /// connection. Refresh retries reinitialization up to the default budget
    /// with the fixed delay between failures; total failure is fatal.
    fn note_usage(&mut self) -> Result<()> {
        let usage = self.session.record_use();
        if usage < self.policy.refresh_threshold {
            return Ok(());
        }

        let retries = self.policy.command_retries;
        let mut remaining = retries;
        while remaining > 0 {
            warn!(
                usage,
                threshold = self.policy.refresh_threshold,
                "refreshing connection due to age"
            );
            match self.session.reinitialize() {
                Ok(()) => {
                    info!("connection was refreshed");
                    return Ok(());
                }
                Err(e) => {
                    error!(
                        error = %e,
                        delay_secs = self.policy.retry_delay.as_secs(),
                        "could not refresh aged connection, retrying"
                    );
                }
            }
            self.clock.sleep(self.policy.retry_delay);
            remaining -= 1;
        }

        Err(self.escalate(FatalError::RefreshFailed { retries }))
    }

    // =========================================================================
    // Typed command surface
    // =========================================================================

    /// Probe connectivity with an explicit retry budget.
    ///
    /// A budget of zero gives fail-fast behavior for startup checks.
    pub fn test_connection(&mut self, retries: u32) -> Result<StatusResult> {
        self.run_with_retries("info", &[], retries)
    }

    /// Submitted changelists under `path`, with full descriptions.
    pub fn changes(&mut self, path: &str) -> Result<ChangesResult> {
        self.run("changes", &args(["-l", "-s", "submitted", path]))
    }

    /// Submitted changelists under `path`, short descriptions only.
    pub fn short_changes(&mut self, path: &str) -> Result<ChangesResult> {
        self.run("changes", &args(["-s", "submitted", path]))
    }

    /// Up to `max` submitted changelists at or after changelist `from`.
    pub fn changes_since(&mut self, path: &str, from: &str, max: i32) -> Result<ChangesResult> {
        self.run(
            "changes",
            &args([
                "-l",
                "-s",
                "submitted",
                "-m",
                &max.to_string(),
                &format!("{}@{},#head", path, from),
            ]),
        )
    }

    /// Submitted changelists between changelists `from` and `to` inclusive.
    pub fn changes_between(&mut self, path: &str, from: &str, to: &str) -> Result<ChangesResult> {
        self.run(
            "changes",
            &args(["-l", "-s", "submitted", &format!("{}@{},@{}", path, from, to)]),
        )
    }

    /// The most recent submitted changelist under `path`.
    pub fn latest_change(&mut self, path: &str) -> Result<ChangesResult> {
        self.run("changes", &args(["-m", "1", "-s", "submitted", path]))
    }

    /// The oldest submitted changelist under `path`.
    pub fn oldest_change(&mut self, path: &str) -> Result<ChangesResult> {
        self.run("changes", &args(["-r", "-m", "1", "-s", "submitted", path]))
    }

    /// Describe a changelist: metadata plus the files it touched.
    pub fn describe(&mut self, changelist: &str) -> Result<DescribeResult> {
        self.run("describe", &args(["-s", changelist]))
    }

    /// Revision history of the files in a changelist.
    pub fn filelog(&mut self, changelist: &str) -> Result<FileLogResult> {
        self.run("filelog", &args(["-c", changelist, "//..."]))
    }

    /// Size information for a file revision.
    pub fn sizes(&mut self, file: &str) -> Result<SizesResult> {
        self.run("sizes", &args([file]))
    }

    /// Sync the entire client workspace.
    pub fn sync(&mut self) -> Result<StatusResult> {
        self.run("sync", &[])
    }

    /// Sync a single path in the client workspace.
    pub fn sync_path(&mut self, path: &str) -> Result<StatusResult> {
        self.run("sync", &args([path]))
    }

    /// Preview which files a sync to `path@changelist` would transfer.
    pub fn files_to_sync_at(&mut self, path: &str, changelist: &str) -> Result<SyncResult> {
        self.run("sync", &args(["-n", &format!("{}@{}", path, changelist)]))
    }

    /// Print the contents of one file revision.
    pub fn print_file(&mut self, file_revision: &str) -> Result<PrintResult> {
        self.run("print", &args([file_revision]))
    }

    /// Print the contents of several file revisions in one command.
    pub fn print_files(&mut self, file_revisions: &[String]) -> Result<PrintResult> {
        self.run("print", file_revisions)
    }

    /// The client workspace spec the session is bound to.
    pub fn client_spec(&mut self) -> Result<ClientSpecResult> {
        self.run("client", &args(["-o"]))
    }

    /// Streams defined under `path`.
    pub fn streams(&mut self, path: &str) -> Result<StreamsResult> {
        self.run("streams", &args([path]))
    }

    /// All users known to the server.
    pub fn users(&mut self) -> Result<UsersResult> {
        self.run("users", &[])
    }

    /// Server and session information.
    pub fn info(&mut self) -> Result<InfoResult> {
        self.run("info", &[])
    }
}

fn args<const N: usize>(parts: [&str; N]) -> Vec<String> {
    parts.iter().map(|s| (*s).to_string()).collect()
}
