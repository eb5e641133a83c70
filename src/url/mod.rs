//! URL handling module for the contact scraper
//!
//! This module provides seed normalization and origin derivation, the two
//! pieces of URL logic the crawl needs to decide what to fetch.

mod normalize;
mod origin;

// Re-export main functions
pub use normalize::{normalize_seed, parse_seed_list};
pub use origin::Origin;
