//! Result of `p4 changes`.

use serde::{Deserialize, Serialize};

use p4runner_core::{Diagnostics, Record, ResultSink};

use super::field;

/// One submitted changelist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Change {
    /// Changelist number, as the server prints it.
    pub change: String,
    /// Submitting user.
    pub user: String,
    /// Client workspace the change was submitted from.
    pub client: String,
    /// Submission time (epoch seconds, server-formatted).
    pub time: String,
    /// Changelist description; short or full depending on the flags used.
    pub description: String,
}

/// Accumulated changelists, newest first as the server streams them.
#[derive(Debug, Default)]
pub struct ChangesResult {
    /// Changelists in arrival order.
    pub changes: Vec<Change>,
    diagnostics: Diagnostics,
}

impl ResultSink for ChangesResult {
    fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    fn record(&mut self, record: Record) {
        self.changes.push(Change {
            change: field(&record, "change"),
            user: field(&record, "user"),
            client: field(&record, "client"),
            time: field(&record, "time"),
            description: field(&record, "desc"),
        });
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
    fn collects_changelists_in_arrival_order() {
        let mut result = ChangesResult::default();
        result.record(rec(&[
            ("change", "42"),
            ("user", "alice"),
            ("client", "alice-ws"),
            ("time", "1700000000"),
            ("desc", "Fix the build"),
        ]));
        result.record(rec(&[("change", "41"), ("user", "bob")]));

        assert_eq!(result.changes.len(), 2);
        assert_eq!(result.changes[0].change, "42");
        assert_eq!(result.changes[0].description, "Fix the build");
        // Missing fields come back empty rather than failing the command.
        assert_eq!(result.changes[1].description, "");
    }

    #[test]
    fn change_entries_round_trip_through_json() {
        let change = Change {
            change: "42".to_string(),
            user: "alice".to_string(),
            client: "alice-ws".to_string(),
            time: "1700000000".to_string(),
            description: "Fix the build".to_string(),
        };
        let json = serde_json::to_string(&change).unwrap();
        let back: Change = serde_json::from_str(&json).unwrap();
        assert_eq!(back, change);
    }
}
