//! Result of `p4 client -o`.

use p4runner_core::{Diagnostics, Record, ResultSink};

use super::{field, indexed};

/// The client workspace spec the session is bound to.
#[derive(Debug, Default)]
pub struct ClientSpecResult {
    /// Workspace name.
    pub client: String,
    /// Workspace owner.
    pub owner: String,
    /// Workspace root directory on disk.
    pub root: String,
    /// Stream the workspace is bound to, if any.
    pub stream: Option<String>,
    /// View mapping lines (`View0`, `View1`, ...).
    pub view: Vec<String>,
    diagnostics: Diagnostics,
}

impl ResultSink for ClientSpecResult {
    fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    fn record(&mut self, record: Record) {
        self.client = field(&record, "Client");
        self.owner = field(&record, "Owner");
        self.root = field(&record, "Root");
        self.stream = record.get("Stream").cloned();

        let mut i = 0;
        while let Some(line) = indexed(&record, "View", i) {
            self.view.push(line.to_string());
            i += 1;
        }
    }
}
