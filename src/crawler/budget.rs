//! Wall-clock budget for a crawl run
//!
//! The coordinator consults the budget before each seed and each one-hop
//! link. In-flight requests are never interrupted, so a run can overshoot the
//! deadline by at most one request.

use std::time::{Duration, Instant};

/// A deadline fixed at the start of a run
#[derive(Debug, Clone, Copy)]
pub struct CrawlBudget {
    started: Instant,
    deadline: Instant,
}

impl CrawlBudget {
    /// Starts a budget of `duration` from now
    pub fn start(duration: Duration) -> Self {
        let started = Instant::now();
        Self {
            started,
            deadline: started + duration,
        }
    }

    /// Starts a budget with an explicit deadline
    pub fn until(deadline: Instant) -> Self {
        Self {
            started: Instant::now(),
            deadline,
        }
    }

    /// Returns true once the deadline has been reached
    pub fn is_exhausted(&self) -> bool {
        Instant::now() >= self.deadline
    }

    /// Time left before the deadline (zero once exhausted)
    pub fn remaining(&self) -> Duration {
        self.deadline.saturating_duration_since(Instant::now())
    }

    /// Time since the budget started
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
