//! Result for commands where only the error state matters.

use p4runner_core::{Diagnostics, ResultSink};

/// Bare result: accumulates diagnostics and discards output.
///
/// Used for `sync` and for connectivity probes, where the caller only asks
/// "did it work".
#[derive(Debug, Default)]
pub struct StatusResult {
    diagnostics: Diagnostics,
}

impl ResultSink for StatusResult {
    fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }
}
