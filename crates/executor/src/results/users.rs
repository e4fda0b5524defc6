//! Result of `p4 users`.

use serde::{Deserialize, Serialize};

use p4runner_core::{Diagnostics, Record, ResultSink};

use super::field;

/// One user known to the server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserEntry {
    /// User name.
    pub user: String,
    /// Email address.
    pub email: String,
    /// Full display name.
    pub full_name: String,
}

/// Accumulated user entries.
#[derive(Debug, Default)]
pub struct UsersResult {
    /// Entries in arrival order.
    pub users: Vec<UserEntry>,
    diagnostics: Diagnostics,
}

impl ResultSink for UsersResult {
    fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    fn record(&mut self, record: Record) {
        self.users.push(UserEntry {
            user: field(&record, "User"),
            email: field(&record, "Email"),
            full_name: field(&record, "FullName"),
        });
    }
}
