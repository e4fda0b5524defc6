//! Concrete command results.
//!
//! One small type per command shape. Each embeds a [`Diagnostics`] for the
//! shared error-state contract and extracts a handful of fields from the
//! tagged records the server streams back. Deep semantic parsing of command
//! output is deliberately not done here; callers that need more read the
//! raw fields themselves.
//!
//! [`Diagnostics`]: p4runner_core::Diagnostics

mod changes;
mod client_spec;
mod describe;
mod filelog;
mod info;
mod print;
mod sizes;
mod status;
mod streams;
mod sync;
mod users;

pub use changes::{Change, ChangesResult};
pub use client_spec::ClientSpecResult;
pub use describe::{DescribeResult, DescribedFile};
pub use filelog::{FileLogResult, FileRevision};
pub use info::InfoResult;
pub use print::{PrintResult, PrintedFile};
pub use sizes::{SizeEntry, SizesResult};
pub use status::StatusResult;
pub use streams::{StreamEntry, StreamsResult};
pub use sync::{SyncEntry, SyncResult};
pub use users::{UserEntry, UsersResult};

use p4runner_core::Record;

/// Look up an indexed tagged field, e.g. `depotFile0`, `depotFile1`, ...
pub(crate) fn indexed<'a>(record: &'a Record, prefix: &str, index: usize) -> Option<&'a str> {
    record.get(&format!("{}{}", prefix, index)).map(String::as_str)
}

/// Look up a plain tagged field, cloning it out of the record.
pub(crate) fn field(record: &Record, key: &str) -> String {
    record.get(key).cloned().unwrap_or_default()
}
