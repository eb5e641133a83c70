//! Contact-page prioritizer
//!
//! Links whose URL or page text mention a contact keyword are mined for
//! phone numbers before the coordinator's general one-hop pass.

use crate::config::DEFAULT_KEYWORDS;
use crate::crawler::coordinator::Coordinator;
use crate::crawler::fetcher::PageSource;
use crate::crawler::parser::visible_text;
use crate::state::ContactRecord;

/// Keyword test deciding whether a page is likely to hold contact details
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPageHeuristic {
    keywords: Vec<String>,
}

impl ContactPageHeuristic {
    /// Creates a heuristic from keywords; matching is case-insensitive
    pub fn new<I, K>(keywords: I) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<String>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.into().to_lowercase())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Returns true if the URL contains any keyword
    pub fn matches_url(&self, url: &str) -> bool {
        self.contains_keyword(&url.to_lowercase())
    }

    /// Returns true if the text contains any keyword
    pub fn matches_text(&self, text: &str) -> bool {
        self.contains_keyword(&text.to_lowercase())
    }

    fn contains_keyword(&self, haystack: &str) -> bool {
        self.keywords.iter().any(|k| haystack.contains(k.as_str()))
    }
}

impl Default for ContactPageHeuristic {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORDS.iter().copied())
    }
}

impl<S: PageSource> Coordinator<S> {
    /// Extracts contacts from the links that look like contact pages
    ///
    /// Every link goes through two independent checks:
    /// 1. URL check: a keyword in the URL triggers a fetch-and-extract
    /// 2. Text check: the page is fetched, and a keyword in its visible text
    ///    triggers another fetch-and-extract
    ///
    /// A link that passes both checks is fetched three times. No budget check
    /// happens here; the coordinator checks before each seed and link.
    pub(super) async fn prioritized_contacts(&mut self, links: &[String]) -> Vec<ContactRecord> {
        let mut contacts = Vec::new();

        for link in links {
            if self.heuristic.matches_url(link) {
                tracing::debug!("{} looks like a contact page (URL)", link);
                contacts.extend(self.contacts_from_url(link).await);
            }

            let Some(body) = self.fetch(link, "keyword probe").await else {
                continue;
            };

            if self.heuristic.matches_text(&visible_text(&body)) {
                tracing::debug!("{} looks like a contact page (text)", link);
                contacts.extend(self.contacts_from_url(link).await);
            }
        }

        contacts
    }
}
