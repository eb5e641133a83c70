//! Run statistics
//!
//! Counters collected by the coordinator during one crawl and printed by the
//! CLI when the run finishes.

use std::time::Duration;

/// Crawl statistics summary
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlStatistics {
    /// Number of seed entries supplied
    pub seeds_total: u64,

    /// Seeds that were crawled before the run ended
    pub seeds_processed: u64,

    /// Seeds dropped because they could not be normalized
    pub seeds_invalid: u64,

    /// Fetch calls made (each counts once, whatever its retries)
    pub pages_fetched: u64,

    /// Fetch calls that ended in an error
    pub fetch_failures: u64,

    /// Same-origin links discovered on seed pages
    pub links_discovered: u64,

    /// Contact records in the final result
    pub contacts_found: u64,

    /// Wall-clock duration of the run
    pub elapsed: Duration,

    /// True if the run stopped at the deadline
    pub budget_exhausted: bool,
}

impl CrawlStatistics {
    /// Fetch calls that returned a body
    pub fn successful_fetches(&self) -> u64 {
        self.pages_fetched.saturating_sub(self.fetch_failures)
    }
}

/// Prints statistics to stdout in a formatted manner
pub fn print_statistics(stats: &CrawlStatistics) {
    println!("=== Crawl Statistics ===\n");

    println!("Seeds:");
    println!("  Supplied: {}", stats.seeds_total);
    println!("  Crawled: {}", stats.seeds_processed);
    if stats.seeds_invalid > 0 {
        println!("  Invalid: {}", stats.seeds_invalid);
    }

    println!("\nRequests:");
    println!("  Fetches: {}", stats.pages_fetched);
    println!("  Succeeded: {}", stats.successful_fetches());
    println!("  Failed: {}", stats.fetch_failures);
    println!("  Links discovered: {}", stats.links_discovered);

    println!("\nResults:");
    println!("  Contacts found: {}", stats.contacts_found);
    println!("  Elapsed: {:.1}s", stats.elapsed.as_secs_f64());
    if stats.budget_exhausted {
        println!("  Time budget exhausted before all pages were visited");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_successful_fetches() {
        let stats = CrawlStatistics {
            pages_fetched: 10,
            fetch_failures: 3,
            ..Default::default()
        };
        assert_eq!(stats.successful_fetches(), 7);
    }

    #[test]
    fn test_default_is_empty() {
        let stats = CrawlStatistics::default();
        assert_eq!(stats.pages_fetched, 0);
        assert_eq!(stats.successful_fetches(), 0);
        assert!(!stats.budget_exhausted);
    }
}
