//! Output handler traits and types
//!
//! This module defines the trait interface for exporting contact records.

use crate::state::ContactRecord;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Trait for output handlers that export contact records
///
/// Records are handed over in the order the crawl produced them; handlers
/// must keep that order.
pub trait OutputHandler {
    /// Writes a batch of records
    fn write_records(&mut self, records: &[ContactRecord]) -> OutputResult<()>;

    /// Flushes and finalizes the output
    fn finish(&mut self) -> OutputResult<()>;
}
