//! Result of `p4 sync -n` (sync preview).

use serde::{Deserialize, Serialize};

use p4runner_core::{Diagnostics, Record, ResultSink};

use super::field;

/// One file a sync would transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncEntry {
    /// Depot path of the file.
    pub depot_file: String,
    /// Revision the sync would bring the file to.
    pub revision: String,
    /// Action the sync would take (added, updated, deleted, ...).
    pub action: String,
    /// Transfer size in bytes; zero when the server omits it.
    pub file_size: u64,
}

/// The manifest of files a sync to a given changelist would touch.
#[derive(Debug, Default)]
pub struct SyncResult {
    /// Entries in arrival order.
    pub files: Vec<SyncEntry>,
    diagnostics: Diagnostics,
}

impl ResultSink for SyncResult {
    fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    fn record(&mut self, record: Record) {
        self.files.push(SyncEntry {
            depot_file: field(&record, "depotFile"),
            revision: field(&record, "rev"),
            action: field(&record, "action"),
            file_size: field(&record, "fileSize").parse().unwrap_or(0),
        });
    }
}
