/// Contact record definitions
///
/// A record ties one extracted contact value to the page it was first seen on.
use std::fmt;

/// Kind of contact held by a record
///
/// Only phone numbers are extracted; the kind still travels with every record
/// because it is part of the exported schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactKind {
    /// A phone number
    Phone,
}

impl ContactKind {
    /// Lower-case name used in exports (`Type` column)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phone => "phone",
        }
    }

    /// Capitalized label used in console listings
    pub fn label(&self) -> &'static str {
        match self {
            Self::Phone => "Phone",
        }
    }
}

impl fmt::Display for ContactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One extracted contact: `(source_url, value, kind)`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactRecord {
    /// Page the value was extracted from
    pub source_url: String,

    /// Normalized contact value
    pub value: String,

    /// Kind of contact
    pub kind: ContactKind,
}

impl ContactRecord {
    /// Creates a phone record
    pub fn phone(source_url: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            source_url: source_url.into(),
            value: value.into(),
            kind: ContactKind::Phone,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_names() {
        assert_eq!(ContactKind::Phone.as_str(), "phone");
        assert_eq!(ContactKind::Phone.label(), "Phone");
        assert_eq!(ContactKind::Phone.to_string(), "phone");
    }

    #[test]
    fn test_records_equal_by_full_tuple() {
        let a = ContactRecord::phone("http://example.com", "555-000-1111");
        let b = ContactRecord::phone("http://example.com", "555-000-1111");
        let c = ContactRecord::phone("http://example.com/about", "555-000-1111");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
