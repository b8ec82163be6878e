// src/page/fake.rs
// =============================================================================
// An in-memory web graph for tests.
//
// Pages are registered up front; fetching an unknown URL (or one registered
// as failing) returns an error, just like a dead link would. Every fetch is
// counted so tests can assert that no URL was fetched twice.
// =============================================================================

use super::{FetchError, PageContent, PageSource};
use crate::crawl::FakeClock;
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

#[derive(Default)]
pub struct FakePageSource {
    pages: HashMap<String, PageContent>,
    failing: HashSet<String>,
    fetches: DashMap<String, usize>,
    clock_step: Option<(Arc<FakeClock>, Duration)>,
    delay: Option<Duration>,
    in_flight: AtomicUsize,
    max_in_flight: AtomicUsize,
}

impl FakePageSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a page with the given (word, count) pairs and outbound links.
    pub fn page(mut self, url: &str, words: &[(&str, usize)], links: &[&str]) -> Self {
        let mut word_counts = HashMap::new();
        for (word, count) in words {
            *word_counts.entry(word.to_string()).or_insert(0) += count;
        }
        self.pages.insert(
            url.to_string(),
            PageContent {
                word_counts,
                links: links.iter().map(|l| l.to_string()).collect(),
            },
        );
        self
    }

    /// Registers a URL whose fetch always fails
    pub fn failing(mut self, url: &str) -> Self {
        self.failing.insert(url.to_string());
        self
    }

    /// Advances `clock` by `step` during every fetch, simulating slow pages
    pub fn advance_clock_on_fetch(mut self, clock: Arc<FakeClock>, step: Duration) -> Self {
        self.clock_step = Some((clock, step));
        self
    }

    /// Sleeps for `delay` inside every fetch so sibling units overlap
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// How many times `url` has been fetched
    pub fn fetch_count(&self, url: &str) -> usize {
        self.fetches.get(url).map(|count| *count).unwrap_or(0)
    }

    /// Largest fetch count over all URLs (1 means no URL was fetched twice)
    pub fn max_fetch_count(&self) -> usize {
        self.fetches.iter().map(|entry| *entry.value()).max().unwrap_or(0)
    }

    /// Highest number of fetches that were running at the same time
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    /// Number of distinct URLs that were fetched
    pub fn distinct_fetches(&self) -> usize {
        self.fetches.len()
    }
}

#[async_trait]
impl PageSource for FakePageSource {
    async fn fetch(&self, url: &str) -> Result<PageContent, FetchError> {
        *self.fetches.entry(url.to_string()).or_insert(0) += 1;

        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        if let Some((clock, step)) = &self.clock_step {
            clock.advance(*step);
        }

        if self.failing.contains(url) {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: 500,
            });
        }

        self.pages.get(url).cloned().ok_or_else(|| FetchError::Status {
            url: url.to_string(),
            status: 404,
        })
    }
}
