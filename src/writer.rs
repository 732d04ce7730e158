//! CSV output with the fixed annotation schema.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::annotation::UserRecord;
use crate::catalog::COLUMNS;
use crate::error::{Error, Result};

/// Writes the header on construction, then one row per user.
///
/// Rows are flushed as they are written, so an aborted run leaves every
/// completed user on disk.
pub struct AnnotationWriter<W: Write> {
    inner: csv::Writer<W>,
    rows: usize,
}

impl AnnotationWriter<File> {
    /// Creates (or truncates) `path` and writes the header.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| Error::io(path, e))?;
        Self::new(file)
    }
}

impl<W: Write> AnnotationWriter<W> {
    pub fn new(writer: W) -> Result<Self> {
        let mut inner = csv::WriterBuilder::new()
            .terminator(csv::Terminator::CRLF)
            .from_writer(writer);
        inner.write_record(COLUMNS)?;
        inner.flush()?;
        Ok(Self { inner, rows: 0 })
    }

    /// Writes `record` in schema order. Columns the record lacks are left
    /// blank; columns outside the schema are dropped.
    pub fn write_record(&mut self, record: &UserRecord) -> Result<()> {
        self.inner
            .write_record(COLUMNS.iter().map(|column| record.get(column).unwrap_or("")))?;
        self.inner.flush()?;
        self.rows += 1;
        Ok(())
    }

    pub fn rows_written(&self) -> usize {
        self.rows
    }

    /// Flushes and hands back the underlying writer.
    pub fn into_inner(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|e| Error::Output(e.into_error()))
    }
}
