//! CSV export of contact records
//!
//! The file layout is `Website,Contact,Type`, one row per record, UTF-8,
//! CRLF line endings.

use crate::output::traits::{OutputError, OutputHandler, OutputResult};
use crate::state::ContactRecord;
use csv::{Terminator, Writer, WriterBuilder};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Header row of every export
pub const CSV_HEADER: [&str; 3] = ["Website", "Contact", "Type"];

/// CSV output handler over any writer
pub struct CsvOutputHandler<W: Write> {
    writer: Writer<W>,
    rows_written: usize,
}

impl<W: Write> CsvOutputHandler<W> {
    /// Creates a handler and writes the header row
    pub fn new(inner: W) -> OutputResult<Self> {
        let mut writer = WriterBuilder::new()
            .terminator(Terminator::CRLF)
            .from_writer(inner);
        writer.write_record(CSV_HEADER)?;

        Ok(Self {
            writer,
            rows_written: 0,
        })
    }

    /// Number of record rows written so far (header excluded)
    pub fn rows_written(&self) -> usize {
        self.rows_written
    }

    /// Flushes and returns the underlying writer
    pub fn into_inner(self) -> OutputResult<W> {
        self.writer
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }
}

impl<W: Write> OutputHandler for CsvOutputHandler<W> {
    fn write_records(&mut self, records: &[ContactRecord]) -> OutputResult<()> {
        for record in records {
            self.writer.write_record([
                record.source_url.as_str(),
                record.value.as_str(),
                record.kind.as_str(),
            ])?;
            self.rows_written += 1;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.writer.flush()?;
        Ok(())
    }
}

/// Serializes records to CSV bytes
pub fn records_to_csv_bytes(records: &[ContactRecord]) -> OutputResult<Vec<u8>> {
    let mut handler = CsvOutputHandler::new(Vec::new())?;
    handler.write_records(records)?;
    handler.finish()?;
    handler.into_inner()
}

/// Writes records to a CSV file, replacing any existing file
///
/// # Returns
///
/// * `Ok(usize)` - Number of record rows written
/// * `Err(OutputError)` - Failed to create or write the file
pub fn write_csv_file(path: &Path, records: &[ContactRecord]) -> OutputResult<usize> {
    let file = File::create(path)?;
    let mut handler = CsvOutputHandler::new(file)?;
    handler.write_records(records)?;
    handler.finish()?;

    tracing::info!(
        "Wrote {} contact records to {}",
        handler.rows_written(),
        path.display()
    );

    Ok(handler.rows_written())
}
