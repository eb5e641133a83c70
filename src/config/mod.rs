//! Configuration module for the contact scraper
//!
//! This module handles loading, parsing, and validating TOML configuration files.
//! A missing file is not an error at this level: callers fall back to
//! [`Config::default`], which carries the stock crawl budget, keyword list and
//! HTTP behavior.
//!
//! # Example
//!
//! ```no_run
//! use contact_scraper::config::load_config;
//! use std::path::Path;
//!
//! let config = load_config(Path::new("scraper.toml")).unwrap();
//! println!("Crawl budget: {}s", config.crawler.time_budget_secs);
//! ```

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{
    Config, CrawlerConfig, HttpConfig, OutputConfig, DEFAULT_KEYWORDS, DEFAULT_USER_AGENT,
};

// Re-export parser functions
pub use parser::{compute_config_hash, load_config, load_config_with_hash, parse_config};
pub use validation::validate;
