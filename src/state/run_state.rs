//! Per-run bookkeeping: visited URLs, emitted phones and the ordered record list
//!
//! All three live for exactly one crawl run and are owned by the coordinator.

use crate::state::ContactRecord;
use std::collections::HashSet;

/// URLs already fetched for contact extraction by the seed and one-hop passes
#[derive(Debug, Default, Clone)]
pub struct VisitedSet {
    urls: HashSet<String>,
}

impl VisitedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a URL visited. Returns true if it was not visited before.
    pub fn mark(&mut self, url: &str) -> bool {
        self.urls.insert(url.to_string())
    }

    pub fn contains(&self, url: &str) -> bool {
        self.urls.contains(url)
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }
}

/// Normalized phone values already emitted in this run
///
/// A value enters the set as soon as it passes validation, which makes phone
/// uniqueness global to the run rather than per page.
#[derive(Debug, Default, Clone)]
pub struct SeenPhones {
    values: HashSet<String>,
}

impl SeenPhones {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a phone value. Returns true if it had not been seen yet.
    pub fn insert(&mut self, value: &str) -> bool {
        if self.values.contains(value) {
            return false;
        }
        self.values.insert(value.to_string())
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.contains(value)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Accumulated contact records in first-seen order, unique by full tuple
#[derive(Debug, Default, Clone)]
pub struct ContactList {
    records: Vec<ContactRecord>,
    index: HashSet<ContactRecord>,
}

impl ContactList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record unless an identical one is already present.
    /// Returns true if the record was appended.
    pub fn push_unique(&mut self, record: ContactRecord) -> bool {
        if self.index.contains(&record) {
            return false;
        }
        self.index.insert(record.clone());
        self.records.push(record);
        true
    }

    /// Appends every record not already present; returns how many were added
    pub fn extend_unique(&mut self, records: impl IntoIterator<Item = ContactRecord>) -> usize {
        let mut added = 0;
        for record in records {
            if self.push_unique(record) {
                added += 1;
            }
        }
        added
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_vec(self) -> Vec<ContactRecord> {
        self.records
    }
}
