//! Source aggregation: the walk, read, write core.

mod record;
mod summary;

pub use record::{MARKER_LINE, RecordWriter};
pub use summary::AggregateSummary;

use crate::config::AggregateConfig;
use crate::discovery::{DirectoryWalker, WalkConfig};
use crate::error::{Result, SrccatError};
use std::fs::{self, File};
use std::io::BufWriter;
use tracing::{debug, info};

/// Aggregates matching files from the configured roots into one output file.
///
/// The output file is opened fresh (truncate-or-create) at the start of a
/// run and held open for its duration. Each input file is read fully as
/// UTF-8 and closed before the next is processed. Any read or write
/// failure aborts the run, leaving the output in its partial state.
pub struct Aggregator {
    config: AggregateConfig,
}

impl Aggregator {
    /// Create a new Aggregator with the given settings.
    pub fn new(config: AggregateConfig) -> Self {
        Self { config }
    }

    /// Run the aggregation and return a summary of what was written.
    pub fn run(&self) -> Result<AggregateSummary> {
        let output = File::create(&self.config.output).map_err(|e| SrccatError::CreateOutput {
            path: self.config.output.clone(),
            source: e,
        })?;
        let mut writer = RecordWriter::new(
            BufWriter::new(output),
            self.config.prefix.clone(),
            self.config.output.clone(),
        );

        let walker = DirectoryWalker::new(
            WalkConfig::new(self.config.roots.iter().cloned())
                .with_suffixes(self.config.suffixes.iter().cloned()),
        );

        let mut summary = AggregateSummary::new();
        for root in &self.config.roots {
            summary.start_root(root.clone());
            for file in walker.walk_root(root) {
                let contents = fs::read_to_string(&file.path)
                    .map_err(|e| SrccatError::read_error(&file.path, e))?;
                writer.write_record(&file.relative, &contents)?;
                summary.record_file(contents.len() as u64);
                debug!(
                    path = %file.path.display(),
                    bytes = contents.len(),
                    "Wrote record"
                );
            }
        }

        writer.flush()?;
        info!(
            files = summary.files_written,
            bytes = summary.content_bytes,
            output = %self.config.output.display(),
            "Aggregation completed"
        );

        Ok(summary)
    }
}
