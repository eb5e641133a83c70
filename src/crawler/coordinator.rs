//! Crawler coordinator - main crawl orchestration logic
//!
//! This module contains the crawl loop that coordinates a run:
//! - Normalizing seeds and starting the time budget
//! - Extracting contacts from each seed page
//! - Discovering the seed's same-origin links
//! - Running the contact-page prioritizer over those links
//! - Visiting every remaining one-hop link once
//!
//! A run is strictly sequential: one request in flight, one page processed at
//! a time. All run state is owned by the coordinator, so independent runs can
//! execute side by side without sharing anything.

use crate::config::{Config, CrawlerConfig};
use crate::crawler::budget::CrawlBudget;
use crate::crawler::extractor::extract_phones;
use crate::crawler::fetcher::{HttpFetcher, PageSource};
use crate::crawler::parser::discover_links;
use crate::crawler::prioritizer::ContactPageHeuristic;
use crate::output::{write_csv_file, CrawlStatistics};
use crate::state::{ContactList, ContactRecord, SeenPhones, VisitedSet};
use crate::url::normalize_seed;
use std::path::Path;
use std::time::Duration;
use url::Url;

/// Result of a crawl run
#[derive(Debug, Clone, Default)]
pub struct CrawlOutcome {
    /// Contact records in first-seen order
    pub records: Vec<ContactRecord>,

    /// Counters for the run
    pub stats: CrawlStatistics,
}

impl CrawlOutcome {
    /// Writes the records to a CSV file, replacing any existing file
    ///
    /// Returns the number of data rows written.
    pub fn export_csv(&self, path: &Path) -> crate::Result<usize> {
        Ok(write_csv_file(path, &self.records)?)
    }
}

/// Main crawler coordinator structure
///
/// One coordinator drives one run; [`Coordinator::run`] consumes it.
pub struct Coordinator<S: PageSource> {
    source: S,
    pub(super) heuristic: ContactPageHeuristic,
    budget: Duration,
    visited: VisitedSet,
    seen_phones: SeenPhones,
    contacts: ContactList,
    stats: CrawlStatistics,
}

impl<S: PageSource> Coordinator<S> {
    /// Creates a new coordinator instance
    ///
    /// # Arguments
    ///
    /// * `source` - Where page bodies come from
    /// * `config` - Crawl budget and contact-page keywords
    pub fn new(source: S, config: &CrawlerConfig) -> Self {
        Self {
            source,
            heuristic: ContactPageHeuristic::new(config.keywords.iter().cloned()),
            budget: Duration::from_secs(config.time_budget_secs),
            visited: VisitedSet::new(),
            seen_phones: SeenPhones::new(),
            contacts: ContactList::new(),
            stats: CrawlStatistics::default(),
        }
    }

    /// Runs the crawl with a budget starting now
    pub async fn run(self, seeds: &[String]) -> CrawlOutcome {
        let budget = CrawlBudget::start(self.budget);
        self.run_with_budget(seeds, budget).await
    }

    /// Runs the crawl against an explicit budget
    ///
    /// The budget is checked before every seed and before every one-hop link.
    /// When it runs out the records gathered so far are returned; running out
    /// is a normal way for a run to end, not an error.
    pub async fn run_with_budget(mut self, seeds: &[String], budget: CrawlBudget) -> CrawlOutcome {
        let seeds = self.normalize_seeds(seeds);

        tracing::info!(
            "Starting crawl of {} seeds ({:.0}s budget)",
            seeds.len(),
            budget.remaining().as_secs_f64()
        );

        'seeds: for seed in &seeds {
            if budget.is_exhausted() {
                self.note_budget_exhausted(seed);
                break;
            }

            tracing::info!("Crawling seed {}", seed);
            self.stats.seeds_processed += 1;

            let records = self.contacts_from_url(seed).await;
            self.merge(records);
            self.visited.mark(seed);

            let links = self.links_from_url(seed).await;
            self.stats.links_discovered += links.len() as u64;

            let prioritized = self.prioritized_contacts(&links).await;
            self.merge(prioritized);

            for link in &links {
                if budget.is_exhausted() {
                    self.note_budget_exhausted(link);
                    break 'seeds;
                }

                if self.visited.contains(link) {
                    continue;
                }

                let records = self.contacts_from_url(link).await;
                self.merge(records);
                self.visited.mark(link);
            }
        }

        self.finish(&budget)
    }

    /// Fetches a page and extracts phone records from it
    ///
    /// A fetch failure yields no records.
    pub(super) async fn contacts_from_url(&mut self, url: &str) -> Vec<ContactRecord> {
        match self.fetch(url, "contact info").await {
            Some(body) => extract_phones(&body, url, &mut self.seen_phones),
            None => Vec::new(),
        }
    }

    /// Fetches a page and discovers its same-origin links
    ///
    /// A fetch failure or an unparseable URL yields no links.
    async fn links_from_url(&mut self, url: &str) -> Vec<String> {
        let page_url = match Url::parse(url) {
            Ok(u) => u,
            Err(e) => {
                tracing::warn!("Cannot parse {} for link discovery: {}", url, e);
                return Vec::new();
            }
        };

        match self.fetch(url, "links").await {
            Some(body) => {
                let links = discover_links(&body, &page_url);
                tracing::debug!("Discovered {} same-origin links on {}", links.len(), url);
                links
            }
            None => Vec::new(),
        }
    }

    /// Fetches a page body, logging and counting failures
    pub(super) async fn fetch(&mut self, url: &str, purpose: &str) -> Option<String> {
        self.stats.pages_fetched += 1;

        match self.source.fetch(url).await {
            Ok(body) => Some(body),
            Err(e) => {
                self.stats.fetch_failures += 1;
                tracing::warn!("Error fetching {} from {}: {}", purpose, url, e);
                None
            }
        }
    }

    /// Appends records not already in the result list
    fn merge(&mut self, records: Vec<ContactRecord>) {
        let added = self.contacts.extend_unique(records);
        if added > 0 {
            tracing::debug!("{} new contact records ({} total)", added, self.contacts.len());
        }
    }

    /// Normalizes seeds, dropping the ones that are not usable URLs
    fn normalize_seeds(&mut self, seeds: &[String]) -> Vec<String> {
        self.stats.seeds_total = seeds.len() as u64;

        seeds
            .iter()
            .filter_map(|raw| match normalize_seed(raw) {
                Ok(seed) => Some(seed),
                Err(e) => {
                    tracing::warn!("Skipping seed {:?}: {}", raw, e);
                    self.stats.seeds_invalid += 1;
                    None
                }
            })
            .collect()
    }

    fn note_budget_exhausted(&mut self, next_url: &str) {
        tracing::warn!("Time budget exhausted, stopping before {}", next_url);
        self.stats.budget_exhausted = true;
    }

    fn finish(mut self, budget: &CrawlBudget) -> CrawlOutcome {
        self.stats.contacts_found = self.contacts.len() as u64;
        self.stats.elapsed = budget.elapsed();

        tracing::info!(
            "Crawl finished: {} contacts from {} fetches in {:?}",
            self.stats.contacts_found,
            self.stats.pages_fetched,
            self.stats.elapsed
        );

        CrawlOutcome {
            records: self.contacts.into_vec(),
            stats: self.stats,
        }
    }
}

/// Runs a crawl over the network
///
/// Builds the HTTP fetcher from `config.http` and crawls `seeds` with the
/// budget and keywords from `config.crawler`.
///
/// # Example
///
/// ```no_run
/// use contact_scraper::config::Config;
/// use contact_scraper::crawler::crawl;
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let seeds = vec!["example.com".to_string()];
/// let outcome = crawl(&Config::default(), &seeds).await?;
/// for record in &outcome.records {
///     println!("{} {}", record.source_url, record.value);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn crawl(config: &Config, seeds: &[String]) -> crate::Result<CrawlOutcome> {
    let fetcher = HttpFetcher::from_config(&config.http)?;
    let coordinator = Coordinator::new(fetcher, &config.crawler);
    Ok(coordinator.run(seeds).await)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawler::fetcher::FetchError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};
    use std::time::Instant;

    /// In-memory page source that records every request
    #[derive(Default, Clone)]
    struct StaticPages {
        pages: HashMap<String, String>,
        delay: Duration,
        requests: Arc<Mutex<Vec<String>>>,
    }

    impl StaticPages {
        fn with(mut self, url: &str, body: &str) -> Self {
            self.pages.insert(url.to_string(), body.to_string());
            self
        }

        fn requests(&self) -> Vec<String> {
            self.requests.lock().unwrap().clone()
        }

        fn count(&self, url: &str) -> usize {
            self.requests().iter().filter(|r| r.as_str() == url).count()
        }
    }

    #[async_trait]
    impl PageSource for StaticPages {
        async fn fetch(&self, url: &str) -> Result<String, FetchError> {
            self.requests.lock().unwrap().push(url.to_string());
            if !self.delay.is_zero() {
                tokio::time::sleep(self.delay).await;
            }
            self.pages.get(url).cloned().ok_or(FetchError::Status(404))
        }
    }

    fn seeds(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn coordinator(pages: &StaticPages) -> Coordinator<StaticPages> {
        Coordinator::new(pages.clone(), &CrawlerConfig::default())
    }

    #[tokio::test]
    async fn test_seed_then_contact_page_scenario() {
        let pages = StaticPages::default()
            .with(
                "http://example.com",
                r#"<html><body><p>Main office 555-000-1111</p><a href="/contact-us">Reach us</a></body></html>"#,
            )
            .with(
                "http://example.com/contact-us",
                r#"<html><body><p>Call 555-222-3333</p></body></html>"#,
            );

        let outcome = coordinator(&pages).run(&seeds(&["example.com"])).await;

        assert_eq!(
            outcome.records,
            vec![
                ContactRecord::phone("http://example.com", "555-000-1111"),
                ContactRecord::phone("http://example.com/contact-us", "555-222-3333"),
            ]
        );
        assert_eq!(outcome.stats.contacts_found, 2);
        assert_eq!(outcome.stats.seeds_processed, 1);
        assert_eq!(outcome.stats.links_discovered, 1);
    }

    #[tokio::test]
    async fn test_past_deadline_yields_nothing_and_fetches_nothing() {
        let pages = StaticPages::default().with("http://example.com", "555-000-1111");

        let budget = CrawlBudget::until(Instant::now());
        let outcome = coordinator(&pages)
            .run_with_budget(&seeds(&["example.com", "other.com"]), budget)
            .await;

        assert!(outcome.records.is_empty());
        assert!(pages.requests().is_empty());
        assert!(outcome.stats.budget_exhausted);
        assert_eq!(outcome.stats.seeds_processed, 0);
    }

    #[tokio::test]
    async fn test_budget_runs_out_mid_crawl() {
        let mut pages = StaticPages::default()
            .with("http://a.com", r#"555-000-1111 <a href="/x">x</a>"#)
            .with("http://a.com/x", "555-000-2222")
            .with("http://b.com", "555-000-3333");
        pages.delay = Duration::from_millis(40);

        let budget = CrawlBudget::start(Duration::from_millis(20));
        let outcome = coordinator(&pages)
            .run_with_budget(&seeds(&["a.com", "b.com"]), budget)
            .await;

        assert_eq!(
            outcome.records,
            vec![ContactRecord::phone("http://a.com", "555-000-1111")]
        );
        assert!(outcome.stats.budget_exhausted);
        assert_eq!(outcome.stats.seeds_processed, 1);
        assert_eq!(pages.count("http://b.com"), 0);
    }

    #[tokio::test]
    async fn test_same_phone_on_two_pages_kept_once() {
        let pages = StaticPages::default()
            .with(
                "http://example.com",
                r#"Call 555-123-4567 <a href="/team">Team</a>"#,
            )
            .with("http://example.com/team", "Also 555-123-4567");

        let outcome = coordinator(&pages).run(&seeds(&["example.com"])).await;

        assert_eq!(
            outcome.records,
            vec![ContactRecord::phone("http://example.com", "555-123-4567")]
        );
    }

    #[tokio::test]
    async fn test_no_two_records_share_a_value() {
        let pages = StaticPages::default()
            .with(
                "http://one.com",
                r#"555-111-1111 <a href="/about">About</a>"#,
            )
            .with("http://one.com/about", "About us: 555-111-1111, 555-222-2222")
            .with("http://two.com", "555-222-2222 and 555-333-3333");

        let outcome = coordinator(&pages)
            .run(&seeds(&["one.com", "two.com"]))
            .await;

        let mut values: Vec<_> = outcome.records.iter().map(|r| r.value.clone()).collect();
        let total = values.len();
        values.sort();
        values.dedup();
        assert_eq!(values.len(), total);
        assert_eq!(total, 3);
        assert_eq!(
            outcome.records.last().unwrap(),
            &ContactRecord::phone("http://two.com", "555-333-3333")
        );
    }

    #[tokio::test]
    async fn test_crawl_is_one_hop_only() {
        let pages = StaticPages::default()
            .with("http://example.com", r#"<a href="/level1">1</a>"#)
            .with(
                "http://example.com/level1",
                r#"555-100-1000 <a href="/level2">2</a>"#,
            )
            .with("http://example.com/level2", "555-200-2000");

        let outcome = coordinator(&pages).run(&seeds(&["example.com"])).await;

        assert_eq!(
            outcome.records,
            vec![ContactRecord::phone("http://example.com/level1", "555-100-1000")]
        );
        assert_eq!(pages.count("http://example.com/level2"), 0);
    }

    #[tokio::test]
    async fn test_failing_seed_does_not_abort_run() {
        let pages = StaticPages::default().with("http://good.com", "555-444-5555");

        let outcome = coordinator(&pages)
            .run(&seeds(&["missing.com", "good.com"]))
            .await;

        assert_eq!(
            outcome.records,
            vec![ContactRecord::phone("http://good.com", "555-444-5555")]
        );
        assert_eq!(outcome.stats.seeds_processed, 2);
        // contact fetch + link fetch for the missing seed
        assert_eq!(outcome.stats.fetch_failures, 2);
    }

    #[tokio::test]
    async fn test_invalid_seed_is_skipped() {
        let pages = StaticPages::default().with("http://good.com", "555-444-5555");

        let outcome = coordinator(&pages)
            .run(&seeds(&["ftp://files.com", "   ", "good.com"]))
            .await;

        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.stats.seeds_total, 3);
        assert_eq!(outcome.stats.seeds_invalid, 2);
        assert_eq!(outcome.stats.seeds_processed, 1);
    }

    #[tokio::test]
    async fn test_link_shared_by_two_seeds_is_visited_once() {
        let page = r#"<a href="/shared">Shared</a>"#;
        let pages = StaticPages::default()
            .with("http://example.com", page)
            .with("http://example.com/other", page)
            .with("http://example.com/shared", "555-600-7000");

        let outcome = coordinator(&pages)
            .run(&seeds(&["example.com", "example.com/other"]))
            .await;

        assert_eq!(outcome.records.len(), 1);
        // one keyword probe per seed, one extraction visit in total
        assert_eq!(pages.count("http://example.com/shared"), 3);
    }

    #[tokio::test]
    async fn test_seed_page_is_fetched_for_contacts_and_links() {
        let pages = StaticPages::default().with("http://example.com", "no links here");

        let outcome = coordinator(&pages).run(&seeds(&["example.com"])).await;

        assert!(outcome.records.is_empty());
        assert_eq!(pages.count("http://example.com"), 2);
        assert_eq!(outcome.stats.pages_fetched, 2);
    }

    #[tokio::test]
    async fn test_runs_do_not_share_state() {
        let pages = StaticPages::default().with("http://example.com", "555-000-1111");

        let first = coordinator(&pages).run(&seeds(&["example.com"])).await;
        let second = coordinator(&pages).run(&seeds(&["example.com"])).await;

        assert_eq!(first.records, second.records);
        assert_eq!(second.records.len(), 1);
    }
}
