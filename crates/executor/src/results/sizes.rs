//! Result of `p4 sizes`.

use serde::{Deserialize, Serialize};

use p4runner_core::{Diagnostics, Record, ResultSink};

use super::field;

/// Size information for one file revision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeEntry {
    /// Depot path of the file.
    pub depot_file: String,
    /// Revision the size applies to.
    pub revision: String,
    /// Size in bytes; zero when the server omits it.
    pub file_size: u64,
}

/// Accumulated size entries.
#[derive(Debug, Default)]
pub struct SizesResult {
    /// Entries in arrival order.
    pub sizes: Vec<SizeEntry>,
    diagnostics: Diagnostics,
}

impl ResultSink for SizesResult {
    fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    fn record(&mut self, record: Record) {
        self.sizes.push(SizeEntry {
            depot_file: field(&record, "depotFile"),
            revision: field(&record, "rev"),
            file_size: field(&record, "fileSize").parse().unwrap_or(0),
        });
    }
}
