//! Phone number extraction
//!
//! Pages are scanned as raw markup, not rendered text, so numbers inside
//! attributes (`href="tel:..."`, data attributes) are found as well.

use crate::state::{ContactRecord, SeenPhones};
use regex::Regex;
use std::sync::LazyLock;

/// North-American-style phone numbers: optional 1-2 digit country code,
/// optionally parenthesized area code, exchange, subscriber number, optional
/// separators and an optional extension suffix.
const PHONE_PATTERN: &str =
    r"(\+?\d{1,2}\s?)?(\(?\d{3}\)?|\d{3})[-.\s]?\d{3}[-.\s]?\d{4}(?:\s?(?:ext|x|ext.)\s?\d{1,5})?";

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(PHONE_PATTERN).expect("valid phone regex"));

/// The same pattern, anchored at the start of the candidate
static PHONE_ANCHORED_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^(?:{})", PHONE_PATTERN)).expect("valid phone regex"));

/// Returns true if `candidate` begins with a valid phone number
///
/// # Examples
///
/// ```
/// use contact_scraper::crawler::is_valid_phone;
///
/// assert!(is_valid_phone("(555) 123-4567"));
/// assert!(is_valid_phone("555.123.4567 ext 89"));
/// assert!(!is_valid_phone("call 555-123-4567"));
/// assert!(!is_valid_phone("abc123"));
/// ```
pub fn is_valid_phone(candidate: &str) -> bool {
    PHONE_ANCHORED_RE.is_match(candidate)
}

/// Extracts phone records from raw page text
///
/// Every match of the phone pattern is trimmed, re-validated with the anchored
/// pattern, and checked against `seen`. Values that pass are added to `seen`
/// immediately, so a number repeated on the same page or on any later page of
/// the run produces no further record.
///
/// # Arguments
///
/// * `text` - Raw page body
/// * `source_url` - URL recorded as the source of every new record
/// * `seen` - Phone values already emitted in this run
///
/// # Returns
///
/// New records in the order their numbers appear in `text`
pub fn extract_phones(text: &str, source_url: &str, seen: &mut SeenPhones) -> Vec<ContactRecord> {
    let mut records = Vec::new();

    for found in PHONE_RE.find_iter(text) {
        let candidate = found.as_str().trim();

        if !is_valid_phone(candidate) {
            tracing::trace!("Rejected phone candidate {:?} on {}", candidate, source_url);
            continue;
        }

        if seen.insert(candidate) {
            records.push(ContactRecord::phone(source_url, candidate));
        }
    }

    if !records.is_empty() {
        tracing::debug!("Extracted {} phone numbers from {}", records.len(), source_url);
    }

    records
}
