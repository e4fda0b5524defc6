//! Session lifecycle: initialize, deinitialize, reinitialize.
//!
//! A [`Session`] owns the transport handle, the connection settings, and the
//! per-connection usage counter. Exactly one executor owns a session;
//! sessions are never shared across threads. Only connection *establishment*
//! is serialized process-wide, because the underlying client library
//! misbehaves when two connections are set up concurrently.

use parking_lot::Mutex;
use p4runner_core::{ConnectionSettings, ResultSink, Transport, TransportError};

/// Process-wide lock around transport connect calls. Held only for the
/// duration of the connect itself, never across a command.
static INIT_LOCK: Mutex<()> = Mutex::new(());

/// A live connection to the server, plus its usage counter.
#[derive(Debug)]
pub struct Session<T: Transport> {
    transport: T,
    settings: ConnectionSettings,
    connected: bool,
    usage: u32,
}

impl<T: Transport> Session<T> {
    /// Wrap a transport without connecting yet.
    pub fn new(transport: T, settings: ConnectionSettings) -> Self {
        Self {
            transport,
            settings,
            connected: false,
            usage: 0,
        }
    }

    /// Establish a connection with the current settings.
    ///
    /// Resets the usage counter: a fresh connection has no age.
    pub fn initialize(&mut self) -> Result<(), TransportError> {
        let _guard = INIT_LOCK.lock();
        self.transport.connect(&self.settings)?;
        self.connected = true;
        self.usage = 0;
        Ok(())
    }

    /// Release the connection. Idempotent; safe on an already-closed session.
    pub fn deinitialize(&mut self) {
        if self.connected {
            self.transport.disconnect();
            self.connected = false;
        }
    }

    /// Tear down and re-establish the connection as one logical operation.
    ///
    /// Used both for error recovery and for age-based refresh. Reuses the
    /// last-known settings.
    pub fn reinitialize(&mut self) -> Result<(), TransportError> {
        self.deinitialize();
        self.initialize()
    }

    /// Dispatch a command against the live connection.
    pub fn dispatch(&mut self, command: &str, args: &[String], sink: &mut dyn ResultSink) {
        self.transport.run(command, args, sink);
    }

    /// Whether the connection dropped during the most recent dispatch.
    pub fn dropped(&self) -> bool {
        self.transport.dropped()
    }

    /// Count one completed command against this connection's age and return
    /// the new usage.
    pub fn record_use(&mut self) -> u32 {
        self.usage += 1;
        self.usage
    }

    /// Commands completed on the current connection.
    pub fn usage(&self) -> u32 {
        self.usage
    }

    /// Whether a connection is currently established.
    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Settings the session connects with.
    pub fn settings(&self) -> &ConnectionSettings {
        &self.settings
    }
}

impl<T: Transport> Drop for Session<T> {
    fn drop(&mut self) {
        self.deinitialize();
    }
}
