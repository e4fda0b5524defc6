//! Shared fakes for executor integration tests: a scripted transport and a
//! recording clock, observable through shared handles after the client takes
//! ownership.
//!
//! Not every test binary uses every helper.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use p4runner_core::{
    Clock, ConnectionSettings, Message, Record, ResultSink, Severity, Transport, TransportError,
};

/// What one dispatched attempt does.
#[derive(Debug, Clone)]
pub enum Step {
    /// Deliver records cleanly.
    Ok(Vec<Record>),
    /// Drop the connection during dispatch.
    Dropped,
    /// Report a diagnostic at the given severity.
    Error(Severity, &'static str),
}

/// Counters observable from the test after the transport moves into the client.
#[derive(Debug, Default)]
pub struct Counters {
    pub connects: u32,
    pub disconnects: u32,
    pub runs: Vec<(String, Vec<String>)>,
}

/// Transport that plays back a script, one step per dispatch. Steps beyond
/// the script succeed with no output.
pub struct FakeTransport {
    steps: Mutex<VecDeque<Step>>,
    dropped: bool,
    failing_connects: Arc<Mutex<u32>>,
    pub counters: Arc<Mutex<Counters>>,
}

impl FakeTransport {
    pub fn new(steps: impl IntoIterator<Item = Step>) -> (Self, Arc<Mutex<Counters>>) {
        let counters = Arc::new(Mutex::new(Counters::default()));
        let transport = Self {
            steps: Mutex::new(steps.into_iter().collect()),
            dropped: false,
            failing_connects: Arc::new(Mutex::new(0)),
            counters: Arc::clone(&counters),
        };
        (transport, counters)
    }

    /// Handle for making future connect calls fail after the transport has
    /// moved into the client. Setting it to `n` fails the next `n` connects.
    pub fn failing_connects_handle(&self) -> Arc<Mutex<u32>> {
        Arc::clone(&self.failing_connects)
    }
}

impl Transport for FakeTransport {
    fn connect(&mut self, settings: &ConnectionSettings) -> Result<(), TransportError> {
        self.counters.lock().connects += 1;
        let mut failing = self.failing_connects.lock();
        if *failing > 0 {
            *failing -= 1;
            return Err(TransportError::ConnectFailed {
                port: settings.port.clone(),
                reason: "scripted failure".to_string(),
            });
        }
        self.dropped = false;
        Ok(())
    }

    fn disconnect(&mut self) {
        self.counters.lock().disconnects += 1;
    }

    fn run(&mut self, command: &str, args: &[String], sink: &mut dyn ResultSink) {
        self.counters
            .lock()
            .runs
            .push((command.to_string(), args.to_vec()));

        let step = self.steps.lock().pop_front().unwrap_or(Step::Ok(vec![]));
        match step {
            Step::Ok(records) => {
                self.dropped = false;
                for record in records {
                    sink.record(record);
                }
            }
            Step::Dropped => {
                self.dropped = true;
            }
            Step::Error(severity, text) => {
                self.dropped = false;
                sink.message(Message::new(severity, text));
            }
        }
    }

    fn dropped(&self) -> bool {
        self.dropped
    }
}

/// Clock that records requested delays instead of sleeping.
#[derive(Clone, Default)]
pub struct FakeClock {
    pub sleeps: Arc<Mutex<Vec<Duration>>>,
}

impl Clock for FakeClock {
    fn sleep(&self, duration: Duration) {
        self.sleeps.lock().push(duration);
    }
}

pub fn settings() -> ConnectionSettings {
    ConnectionSettings::new("p4:1666", "tester", "test-ws")
}

pub fn record(pairs: &[(&str, &str)]) -> Record {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
