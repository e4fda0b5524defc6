//! Result of `p4 describe`.

use serde::{Deserialize, Serialize};

use p4runner_core::{Diagnostics, Record, ResultSink};

use super::{field, indexed};

/// One file touched by a described changelist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DescribedFile {
    /// Depot path of the file.
    pub depot_file: String,
    /// Revision created by the changelist.
    pub revision: String,
    /// Action performed (add, edit, delete, ...).
    pub action: String,
}

/// Changelist metadata plus the files it touched.
///
/// `describe` streams the files as indexed fields (`depotFile0`,
/// `action0`, `rev0`, ...) within one record per changelist.
#[derive(Debug, Default)]
pub struct DescribeResult {
    /// Changelist number.
    pub change: String,
    /// Submitting user.
    pub user: String,
    /// Changelist description.
    pub description: String,
    /// Files touched, in server order.
    pub files: Vec<DescribedFile>,
    diagnostics: Diagnostics,
}

impl ResultSink for DescribeResult {
    fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    fn record(&mut self, record: Record) {
        self.change = field(&record, "change");
        self.user = field(&record, "user");
        self.description = field(&record, "desc");

        let mut i = 0;
        while let Some(depot_file) = indexed(&record, "depotFile", i) {
            self.files.push(DescribedFile {
                depot_file: depot_file.to_string(),
                revision: indexed(&record, "rev", i).unwrap_or_default().to_string(),
                action: indexed(&record, "action", i).unwrap_or_default().to_string(),
            });
            i += 1;
        }
    }
}
