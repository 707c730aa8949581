//! Run summary for aggregation results.

use std::path::PathBuf;

/// Summary of a completed aggregation run.
///
/// Transient: reported once at the end of a run, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AggregateSummary {
    /// Total files written, in walk order.
    pub files_written: usize,
    /// Total content bytes copied (headers and markers excluded).
    pub content_bytes: u64,
    /// Per-root file counts, in configured root order.
    pub per_root: Vec<(PathBuf, usize)>,
}

impl AggregateSummary {
    /// Create an empty summary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting for the next root.
    pub fn start_root(&mut self, root: PathBuf) {
        self.per_root.push((root, 0));
    }

    /// Record one written file against the current root.
    pub fn record_file(&mut self, content_bytes: u64) {
        self.files_written += 1;
        self.content_bytes += content_bytes;
        if let Some(last) = self.per_root.last_mut() {
            last.1 += 1;
        }
    }

    /// Check if no files were written.
    pub fn is_empty(&self) -> bool {
        self.files_written == 0
    }
}
