//! Result of `p4 filelog`.

use serde::{Deserialize, Serialize};

use p4runner_core::{Diagnostics, Record, ResultSink};

use super::{field, indexed};

/// One revision in a file's history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRevision {
    /// Depot path the revision belongs to.
    pub depot_file: String,
    /// Revision number.
    pub revision: String,
    /// Changelist that created the revision.
    pub change: String,
    /// Action performed at this revision.
    pub action: String,
}

/// Revision history, one record per file with indexed revision fields.
#[derive(Debug, Default)]
pub struct FileLogResult {
    /// All revisions across all files, in server order.
    pub revisions: Vec<FileRevision>,
    diagnostics: Diagnostics,
}

impl ResultSink for FileLogResult {
    fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    fn record(&mut self, record: Record) {
        let depot_file = field(&record, "depotFile");
        let mut i = 0;
        while let Some(revision) = indexed(&record, "rev", i) {
            self.revisions.push(FileRevision {
                depot_file: depot_file.clone(),
                revision: revision.to_string(),
                change: indexed(&record, "change", i).unwrap_or_default().to_string(),
                action: indexed(&record, "action", i).unwrap_or_default().to_string(),
            });
            i += 1;
        }
    }
}
