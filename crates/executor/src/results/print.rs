//! Result of `p4 print`.

use p4runner_core::{Diagnostics, Record, ResultSink};

use super::field;

/// Contents of one printed file revision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintedFile {
    /// Depot path of the file.
    pub depot_file: String,
    /// Concatenated content chunks.
    pub contents: String,
}

/// Printed file contents.
///
/// The server announces each file with a tagged record and then streams its
/// content as text chunks; chunks are appended to the most recently
/// announced file.
#[derive(Debug, Default)]
pub struct PrintResult {
    /// Printed files in announcement order.
    pub files: Vec<PrintedFile>,
    diagnostics: Diagnostics,
}

impl ResultSink for PrintResult {
    fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    fn record(&mut self, record: Record) {
        self.files.push(PrintedFile {
            depot_file: field(&record, "depotFile"),
            contents: String::new(),
        });
    }

    fn text(&mut self, data: &str) {
        // Text before any announcement record has nowhere to belong; attach
        // it to an unnamed file so it is not silently lost.
        if self.files.is_empty() {
            self.files.push(PrintedFile::default());
        }
        if let Some(file) = self.files.last_mut() {
            file.contents.push_str(data);
        }
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
    fn routes_chunks_to_the_announced_file() {
        let mut result = PrintResult::default();
        result.record(rec(&[("depotFile", "//depot/a.txt")]));
        result.text("hello ");
        result.text("world");
        result.record(rec(&[("depotFile", "//depot/b.txt")]));
        result.text("other");

        assert_eq!(result.files.len(), 2);
        assert_eq!(result.files[0].contents, "hello world");
        assert_eq!(result.files[1].contents, "other");
    }

    #[test]
    fn orphan_text_is_kept() {
        let mut result = PrintResult::default();
        result.text("stray");
        assert_eq!(result.files[0].depot_file, "");
        assert_eq!(result.files[0].contents, "stray");
    }
}
