//! Result of `p4 streams`.

use serde::{Deserialize, Serialize};

use p4runner_core::{Diagnostics, Record, ResultSink};

use super::field;

/// One stream definition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamEntry {
    /// Stream depot path.
    pub stream: String,
    /// Stream name.
    pub name: String,
    /// Parent stream, or the server's "none" marker.
    pub parent: String,
    /// Stream type (mainline, development, release, ...).
    pub stream_type: String,
}

/// Streams defined under the queried path.
#[derive(Debug, Default)]
pub struct StreamsResult {
    /// Entries in arrival order.
    pub streams: Vec<StreamEntry>,
    diagnostics: Diagnostics,
}

impl ResultSink for StreamsResult {
    fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    fn record(&mut self, record: Record) {
        self.streams.push(StreamEntry {
            stream: field(&record, "Stream"),
            name: field(&record, "Name"),
            parent: field(&record, "Parent"),
            stream_type: field(&record, "Type"),
        });
    }
}
