// src/crawl/state.rs
// =============================================================================
// The only mutable state shared by all traversal units of one crawl:
//
// - `visited`: every URL a unit has claimed for fetching
// - `word_counts`: the running word tally across all fetched pages
//
// Both are `dashmap` containers. DashMap splits its entries into shards, each
// with its own lock, so units touching different words or URLs rarely wait on
// each other, and no single lock ever covers the whole map. The two containers
// are independent: nothing needs them to change together.
// =============================================================================

use dashmap::{DashMap, DashSet};
use std::collections::HashMap;

/// Visited URLs and merged word counts for a single crawl
#[derive(Debug, Default)]
pub struct SharedCrawlState {
    word_counts: DashMap<String, usize>,
    visited: DashSet<String>,
}

impl SharedCrawlState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `url` for fetching.
    ///
    /// Returns true only for the first caller. `DashSet::insert` checks and
    /// inserts under the same shard lock, so two units racing on the same URL
    /// can never both see `true`.
    pub fn mark_visited(&self, url: &str) -> bool {
        self.visited.insert(url.to_string())
    }

    /// Adds one page's word counts to the shared tally.
    ///
    /// Each word is updated through the entry API, which holds only that
    /// word's shard lock for the duration of the increment.
    pub fn merge_counts(&self, counts: HashMap<String, usize>) {
        for (word, count) in counts {
            self.word_counts
                .entry(word)
                .and_modify(|total| *total += count)
                .or_insert(count);
        }
    }

    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Copies the tally out into a plain map once the crawl has finished
    pub fn word_counts(&self) -> HashMap<String, usize> {
        self.word_counts
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect()
    }
}

// -----------------------------------------------------------------------------
// NOTES:
//
// 1. Why not "if !visited.contains(url) { visited.insert(url) }"?
//    - Two tasks could both pass the contains() check before either inserts,
//      and the page would be fetched twice
//    - insert() returning a bool does the check and the insert in one step
//
// 2. Why is there no Mutex around SharedCrawlState?
//    - Every method takes &self; DashMap does its own (sharded) locking
//    - The crawler shares the state as Arc<SharedCrawlState>
// -----------------------------------------------------------------------------
