//! Result of `p4 info`.

use p4runner_core::{Diagnostics, Record, ResultSink};

use super::field;

/// Server and session information from `p4 info`.
///
/// The command emits a single tagged record; the commonly needed fields are
/// lifted out and the rest stays available in `raw`.
#[derive(Debug, Default)]
pub struct InfoResult {
    /// Server address as the server reports it.
    pub server_address: String,
    /// Server version string.
    pub server_version: String,
    /// Authenticated user name.
    pub user_name: String,
    /// Bound client workspace name.
    pub client_name: String,
    /// The full record for fields not lifted out.
    pub raw: Record,
    diagnostics: Diagnostics,
}

impl ResultSink for InfoResult {
    fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    fn record(&mut self, record: Record) {
        self.server_address = field(&record, "serverAddress");
        self.server_version = field(&record, "serverVersion");
        self.user_name = field(&record, "userName");
        self.client_name = field(&record, "clientName");
        self.raw = record;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(pairs: &[(&str, &str)]) -> Record {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn lifts_common_fields_and_keeps_the_rest() {
        let mut result = InfoResult::default();
        result.record(rec(&[
            ("serverAddress", "perforce:1666"),
            ("serverVersion", "P4D/LINUX26X86_64/2023.1"),
            ("userName", "builder"),
            ("clientName", "build-ws"),
            ("serverUptime", "72:10:01"),
        ]));

        assert_eq!(result.server_address, "perforce:1666");
        assert_eq!(result.client_name, "build-ws");
        assert_eq!(result.raw.get("serverUptime").unwrap(), "72:10:01");
    }
}
