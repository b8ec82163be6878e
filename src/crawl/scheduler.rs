// src/crawl/scheduler.rs
// =============================================================================
// `ParallelCrawler` runs one crawl from a list of seed URLs.
//
// How a crawl goes:
// 1. deadline = clock.now() + timeout
// 2. fresh shared state (visited set + word counts) for this crawl only
// 3. one root traversal unit per seed URL, all spawned on tokio
// 4. wait for the roots; each root waits for its own subtree, so when the
//    roots are done every unit of the crawl is done
// 5. rank the merged word counts and build the `CrawlResult`
//
// The worker pool is a semaphore with `pool_size` permits, where pool_size is
// min(configured parallelism, number of CPUs). Tokio tasks are cheap, so a
// page with thousands of links creates thousands of tasks, but at most
// `pool_size` of them are checking/fetching/merging at any moment. The rest
// wait in the semaphore's queue.
// =============================================================================

use super::Clock;
use super::ranking::top_words;
use super::state::SharedCrawlState;
use super::task::{join_units, CrawlContext, TraversalUnit};
use super::{CrawlRequest, CrawlResult};
use crate::config::Settings;
use crate::page::PageSource;
use crate::pattern::Pattern;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{info, instrument};

// Used instead of a deadline that would overflow `Instant`
const FAR_FUTURE: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// Crawls seed URLs in parallel and reports the most popular words
pub struct ParallelCrawler {
    page_source: Arc<dyn PageSource>,
    clock: Arc<dyn Clock>,
    timeout: Duration,
    max_depth: usize,
    ignored_urls: Vec<Pattern>,
    popular_word_count: usize,
    pool_size: usize,
}

impl ParallelCrawler {
    pub fn new(settings: &Settings, page_source: Arc<dyn PageSource>, clock: Arc<dyn Clock>) -> Self {
        let pool_size = settings.parallelism.min(Self::max_parallelism()).max(1);

        Self {
            page_source,
            clock,
            timeout: settings.timeout,
            max_depth: settings.max_depth,
            ignored_urls: settings.ignored_urls.clone(),
            popular_word_count: settings.popular_word_count,
            pool_size,
        }
    }

    /// The hardware concurrency of this machine
    pub fn max_parallelism() -> usize {
        num_cpus::get()
    }

    /// How many units may check, fetch and merge at the same time
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    /// Crawls from `seed_urls` until every reachable unit is done.
    ///
    /// Never fails: unreachable pages are logged and contribute nothing.
    #[instrument(skip_all, fields(seeds = seed_urls.len(), pool_size = self.pool_size))]
    pub async fn crawl(&self, seed_urls: &[String]) -> CrawlResult {
        let now = self.clock.now();
        let deadline = now
            .checked_add(self.timeout)
            .unwrap_or_else(|| now + FAR_FUTURE);

        let request = Arc::new(CrawlRequest {
            seed_urls: seed_urls.to_vec(),
            max_depth: self.max_depth,
            deadline,
            ignored_urls: self.ignored_urls.clone(),
            popular_word_count: self.popular_word_count,
        });
        let state = Arc::new(SharedCrawlState::new());
        let context = Arc::new(CrawlContext {
            request: Arc::clone(&request),
            state: Arc::clone(&state),
            page_source: Arc::clone(&self.page_source),
            clock: Arc::clone(&self.clock),
            workers: Arc::new(Semaphore::new(self.pool_size)),
        });

        info!(max_depth = request.max_depth, timeout = ?self.timeout, "starting crawl");

        let mut roots = JoinSet::new();
        for url in &request.seed_urls {
            roots.spawn(TraversalUnit::root(url.clone(), Arc::clone(&context)).run());
        }
        join_units(roots).await;

        let counts = state.word_counts();
        let urls_visited = state.visited_count();

        info!(urls_visited, distinct_words = counts.len(), "crawl finished");

        if counts.is_empty() {
            return CrawlResult {
                word_counts: Vec::new(),
                urls_visited,
            };
        }

        CrawlResult {
            word_counts: top_words(&counts, request.popular_word_count),
            urls_visited,
        }
    }
}
