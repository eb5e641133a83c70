//! HTML parser for link discovery and visible text
//!
//! This module handles parsing HTML content to extract:
//! - Same-origin links to follow (from <a> tags)
//! - The document's visible text, for keyword probing

use crate::url::Origin;
use scraper::{Html, Selector};
use std::collections::HashSet;
use url::Url;

/// Discovers the same-origin links of a page
///
/// # Link Rules
///
/// **Include:**
/// - Root-relative `<a href="/...">`, resolved against the page's origin
/// - Absolute `http(s)` `<a href>` on the page's origin
///
/// **Exclude:**
/// - Links to any other origin (including protocol-relative `//host/...`)
/// - `javascript:`, `mailto:`, `tel:` and other non-HTTP schemes
/// - Path-relative references (`other.html`, `../x`) and fragment-only links
/// - Anchors without an `href`
///
/// Markup is parsed with the tolerant html5ever parser, so broken HTML still
/// yields whatever anchors it contains. The result is deduplicated and kept in
/// document order.
///
/// # Example
///
/// ```
/// use contact_scraper::crawler::discover_links;
/// use url::Url;
///
/// let html = r#"<a href="/contact">Contact</a><a href="https://other.com/">Other</a>"#;
/// let page = Url::parse("https://example.com/home").unwrap();
/// assert_eq!(discover_links(html, &page), vec!["https://example.com/contact"]);
/// ```
pub fn discover_links(html: &str, page_url: &Url) -> Vec<String> {
    let Some(origin) = Origin::of(page_url) else {
        return Vec::new();
    };

    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    if let Ok(a_selector) = Selector::parse("a[href]") {
        for element in document.select(&a_selector) {
            if let Some(href) = element.value().attr("href") {
                if let Some(link) = resolve_same_origin(href, &origin) {
                    if seen.insert(link.clone()) {
                        links.push(link);
                    }
                }
            }
        }
    }

    links
}

/// Resolves an href to an absolute same-origin URL
///
/// Returns None if the link should be excluded.
fn resolve_same_origin(href: &str, origin: &Origin) -> Option<String> {
    let href = href.trim();

    if href.is_empty() {
        return None;
    }

    let absolute = if href.starts_with('/') {
        origin.join(href)?
    } else {
        let parsed = Url::parse(href).ok()?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return None;
        }
        parsed
    };

    if origin.contains(&absolute) {
        Some(absolute.to_string())
    } else {
        None
    }
}

/// Returns the text content of an HTML document
///
/// All text nodes are concatenated in document order, the same text a reader
/// would get from stripping every tag.
pub fn visible_text(html: &str) -> String {
    Html::parse_document(html).root_element().text().collect()
}
