use crate::{UrlError, UrlResult};
use url::Url;

/// Scheme prepended to seeds that arrive without one
const DEFAULT_SCHEME: &str = "http://";

/// Normalizes a user-supplied seed into an absolute URL string
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace; reject empty input
/// 2. Keep an explicit `http://` or `https://` scheme (case-insensitive)
/// 3. Reject any other explicit scheme (`ftp://`, `file://`, ...)
/// 4. Otherwise prepend `http://`
/// 5. Check that the result parses and has a host
///
/// The returned string is the seed text itself plus the scheme, not the
/// re-serialized `Url`, so `example.com` becomes `http://example.com` with
/// no trailing slash added.
///
/// # Examples
///
/// ```
/// use contact_scraper::url::normalize_seed;
///
/// assert_eq!(normalize_seed("example.com").unwrap(), "http://example.com");
/// assert_eq!(normalize_seed("https://example.com/a").unwrap(), "https://example.com/a");
/// ```
pub fn normalize_seed(raw: &str) -> UrlResult<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(UrlError::Empty);
    }

    let lowered = trimmed.to_ascii_lowercase();
    let with_scheme = if lowered.starts_with("http://") || lowered.starts_with("https://") {
        trimmed.to_string()
    } else if let Some(scheme) = explicit_scheme(trimmed) {
        return Err(UrlError::InvalidScheme(format!(
            "Only HTTP and HTTPS schemes are supported, got: {}",
            scheme
        )));
    } else {
        format!("{}{}", DEFAULT_SCHEME, trimmed)
    };

    let parsed = Url::parse(&with_scheme).map_err(|e| UrlError::Parse(e.to_string()))?;
    if parsed.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost);
    }

    Ok(with_scheme)
}

/// Returns the scheme of `text` if it starts with `scheme://`
///
/// A `://` inside a path or query (`example.com/go?to=https://x`) is not a
/// scheme separator.
fn explicit_scheme(text: &str) -> Option<&str> {
    let (scheme, _) = text.split_once("://")?;
    let mut chars = scheme.chars();
    let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    valid.then_some(scheme)
}

/// Splits free-form text into seed entries, one per line
///
/// Lines are trimmed and blank lines dropped. Entries are returned as typed;
/// scheme normalization happens when the crawl starts.
pub fn parse_seed_list(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
