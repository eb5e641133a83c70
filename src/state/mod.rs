//! State module for tracking one crawl run
//!
//! # Components
//!
//! - `ContactRecord`: one extracted contact and the page it came from
//! - `VisitedSet`: URLs the coordinator has already fetched for extraction
//! - `SeenPhones`: phone values already emitted, for run-wide uniqueness
//! - `ContactList`: the ordered, deduplicated result list

mod record;
mod run_state;

// Re-export main types
pub use record::{ContactKind, ContactRecord};
pub use run_state::{ContactList, SeenPhones, VisitedSet};
