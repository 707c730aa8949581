//! Per-file record writing.

use crate::error::{Result, SrccatError};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Literal marker line written between a record's header and its contents.
pub const MARKER_LINE: &str = "// code here";

/// Writes per-file records to the output stream.
///
/// A record is three parts: a header line (prefix followed by the
/// root-relative path), the marker line, and the file's verbatim contents
/// followed by one blank line. The blank line is appended whether or not
/// the contents end in a newline.
pub struct RecordWriter<W: Write> {
    inner: W,
    prefix: String,
    /// Output path, carried for error reporting only.
    output_path: PathBuf,
}

impl<W: Write> RecordWriter<W> {
    /// Create a new RecordWriter over an output stream.
    pub fn new(inner: W, prefix: impl Into<String>, output_path: impl Into<PathBuf>) -> Self {
        Self {
            inner,
            prefix: prefix.into(),
            output_path: output_path.into(),
        }
    }

    /// Write one record for a file at `relative` with the given contents.
    pub fn write_record(&mut self, relative: &Path, contents: &str) -> Result<()> {
        write!(
            self.inner,
            "{}{}\n{MARKER_LINE}\n{contents}\n\n",
            self.prefix,
            relative.display()
        )
        .map_err(|e| SrccatError::write_error(&self.output_path, e))
    }

    /// Flush buffered records to the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        self.inner
            .flush()
            .map_err(|e| SrccatError::write_error(&self.output_path, e))
    }

    /// Consume the writer and return the underlying stream.
    pub fn into_inner(self) -> W {
        self.inner
    }
}
