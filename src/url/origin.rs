use crate::{UrlError, UrlResult};
use std::fmt;
use url::Url;

/// Scheme + host (+ non-default port) of a URL
///
/// Two URLs are same-origin when their `Origin` values compare equal. The
/// host is lower-cased by the URL parser and default ports are omitted, so
/// `HTTP://Example.com:80/a` and `http://example.com/b` share an origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Origin(String);

impl Origin {
    /// Derives the origin of a parsed URL
    ///
    /// Returns `None` for URLs without a tuple origin (`mailto:`, `data:`,
    /// `file:` and similar).
    ///
    /// # Examples
    ///
    /// ```
    /// use contact_scraper::url::Origin;
    /// use url::Url;
    ///
    /// let url = Url::parse("https://Example.com:8080/path?q=1").unwrap();
    /// assert_eq!(Origin::of(&url).unwrap().as_str(), "https://example.com:8080");
    /// ```
    pub fn of(url: &Url) -> Option<Self> {
        let origin = url.origin();
        if origin.is_tuple() {
            Some(Self(origin.ascii_serialization()))
        } else {
            None
        }
    }

    /// Parses a URL string and derives its origin
    pub fn parse(url: &str) -> UrlResult<Self> {
        let parsed = Url::parse(url).map_err(|e| UrlError::Parse(e.to_string()))?;
        Self::of(&parsed).ok_or(UrlError::MissingHost)
    }

    /// Returns true if the URL shares this origin
    pub fn contains(&self, url: &Url) -> bool {
        Self::of(url).as_ref() == Some(self)
    }

    /// Resolves a root-relative path (`/contact`) against this origin
    pub fn join(&self, path: &str) -> Option<Url> {
        Url::parse(&self.0).ok()?.join(path).ok()
    }

    /// The serialized origin, e.g. `http://example.com`
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
