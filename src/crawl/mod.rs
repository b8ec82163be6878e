// src/crawl/mod.rs
// =============================================================================
// This module is the parallel crawler itself.
//
// Submodules:
// - scheduler: `ParallelCrawler`, which starts one traversal unit per seed
//              URL and assembles the final `CrawlResult`
// - task: the traversal unit, "visit a URL, then visit its links"
// - state: the visited-URL set and word-count map shared by all units
// - clock: the injectable time source used for the deadline
// - ranking: picks the most popular words out of the final counts
// - result: the `CrawlResult` report and its JSON shape
// =============================================================================

mod clock;
mod ranking;
mod result;
mod scheduler;
mod state;
mod task;

pub use clock::{Clock, SystemClock};
pub use result::CrawlResult;
pub use scheduler::ParallelCrawler;

#[cfg(test)]
pub use clock::FakeClock;

use crate::pattern::{matches_any, Pattern};
use std::time::Instant;

/// The fixed parameters of one crawl, shared by all of its units
#[derive(Debug)]
pub struct CrawlRequest {
    pub seed_urls: Vec<String>,
    pub max_depth: usize,
    /// No fetch may start at or after this instant
    pub deadline: Instant,
    pub ignored_urls: Vec<Pattern>,
    pub popular_word_count: usize,
}

impl CrawlRequest {
    /// True when `url` fully matches one of the ignored-URL patterns
    pub fn is_ignored(&self, url: &str) -> bool {
        matches_any(&self.ignored_urls, url)
    }
}
