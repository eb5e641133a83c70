//! Output module for presenting and exporting crawl results
//!
//! This module handles:
//! - Exporting contact records as CSV
//! - Listing contact records on the console
//! - Recording and printing crawl statistics

mod csv_output;
pub mod stats;
mod traits;

pub use csv_output::{records_to_csv_bytes, write_csv_file, CsvOutputHandler, CSV_HEADER};
pub use stats::{print_statistics, CrawlStatistics};
pub use traits::{OutputError, OutputHandler, OutputResult};

use crate::state::ContactRecord;

/// Formats one record the way the console listing shows it
///
/// # Example
///
/// ```
/// use contact_scraper::output::format_contact_line;
/// use contact_scraper::ContactRecord;
///
/// let record = ContactRecord::phone("http://example.com", "555-000-1111");
/// assert_eq!(format_contact_line(&record), "Phone from http://example.com: 555-000-1111");
/// ```
pub fn format_contact_line(record: &ContactRecord) -> String {
    format!(
        "{} from {}: {}",
        record.kind.label(),
        record.source_url,
        record.value
    )
}

/// Prints the contact listing, or a notice when nothing was found
pub fn print_contacts(records: &[ContactRecord]) {
    if records.is_empty() {
        println!("No contact info found.");
        return;
    }

    println!("Contact info found:");
    for record in records {
        println!("  {}", format_contact_line(record));
    }
}
