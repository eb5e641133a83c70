//! Crawler module for fetching pages and harvesting contacts
//!
//! This module contains the crawl-and-extract engine, including:
//! - HTTP fetching with connection retries
//! - Same-origin link discovery
//! - Phone number extraction and validation
//! - Contact-page prioritization
//! - The time budget and overall crawl coordination

mod budget;
mod coordinator;
mod extractor;
mod fetcher;
mod parser;
mod prioritizer;

pub use budget::CrawlBudget;
pub use coordinator::{crawl, Coordinator, CrawlOutcome};
pub use extractor::{extract_phones, is_valid_phone};
pub use fetcher::{build_http_client, FetchError, HttpFetcher, PageSource, RetryPolicy};
pub use parser::{discover_links, visible_text};
pub use prioritizer::ContactPageHeuristic;
