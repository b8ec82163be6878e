// src/crawl/task.rs
// =============================================================================
// One traversal unit = "visit this URL, then visit its links".
//
// Lifecycle of a unit:
// 1. Wait for a worker permit (the pool is bounded, extra units queue here)
// 2. Entry checks, in this exact order:
//      a. depth exhausted or deadline reached  -> stop
//      b. URL fully matches an ignore pattern   -> stop
//      c. URL already claimed by another unit   -> stop
//    a and b have no side effects; c is the claim itself.
// 3. Fetch the page and merge its word counts into the shared tally
// 4. Give the permit back, spawn one child unit per link (depth - 1), and
//    wait for every child before finishing
//
// Units form a tree: a parent owns the JoinSet of its children and never
// completes before them, so when the roots are done, the whole crawl is done.
// =============================================================================

use super::Clock;
use super::state::SharedCrawlState;
use super::CrawlRequest;
use crate::page::{PageContent, PageSource};
use futures::future::{BoxFuture, FutureExt};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, error, trace, warn};

/// Everything a unit shares with every other unit of the same crawl
pub struct CrawlContext {
    pub request: Arc<CrawlRequest>,
    pub state: Arc<SharedCrawlState>,
    pub page_source: Arc<dyn PageSource>,
    pub clock: Arc<dyn Clock>,
    pub workers: Arc<Semaphore>,
}

// Why a unit stopped without fetching
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Prune {
    DepthExhausted,
    DeadlinePassed,
    Ignored,
    AlreadyVisited,
}

pub struct TraversalUnit {
    url: String,
    remaining_depth: usize,
    context: Arc<CrawlContext>,
}

impl TraversalUnit {
    /// A unit for a seed URL, with the full depth budget
    pub fn root(url: String, context: Arc<CrawlContext>) -> Self {
        let remaining_depth = context.request.max_depth;
        Self {
            url,
            remaining_depth,
            context,
        }
    }

    fn child(&self, url: String) -> Self {
        Self {
            url,
            remaining_depth: self.remaining_depth.saturating_sub(1),
            context: Arc::clone(&self.context),
        }
    }

    /// Runs this unit and its whole subtree.
    ///
    /// The future is boxed because a unit spawns more units of its own type;
    /// naming it as `BoxFuture<'static, ()>` gives it a fixed, `Send` type.
    pub fn run(self) -> BoxFuture<'static, ()> {
        async move {
            let links = {
                // A closed semaphore means the crawl is being torn down
                let Ok(_permit) = self.context.workers.acquire().await else {
                    return;
                };
                match self.visit().await {
                    Some(links) => links,
                    None => return,
                }
            };

            if links.is_empty() {
                return;
            }

            let mut children = JoinSet::new();
            for link in links {
                children.spawn(self.child(link).run());
            }
            join_units(children).await;
        }
        .boxed()
    }

    // Entry checks, fetch and merge. Returns the links to fan out to, or
    // None when the unit was pruned.
    async fn visit(&self) -> Option<Vec<String>> {
        if let Some(reason) = self.entry_check() {
            trace!(url = %self.url, ?reason, "pruned");
            return None;
        }

        debug!(url = %self.url, depth = self.remaining_depth, "fetching");

        let page = match self.context.page_source.fetch(&self.url).await {
            Ok(page) => page,
            Err(e) => {
                warn!(url = %self.url, error = %e, "fetch failed, treating page as empty");
                PageContent::default()
            }
        };

        self.context.state.merge_counts(page.word_counts);
        Some(page.links)
    }

    fn entry_check(&self) -> Option<Prune> {
        let request = &self.context.request;

        if self.remaining_depth == 0 {
            return Some(Prune::DepthExhausted);
        }
        if self.context.clock.now() >= request.deadline {
            return Some(Prune::DeadlinePassed);
        }
        if request.is_ignored(&self.url) {
            return Some(Prune::Ignored);
        }
        if !self.context.state.mark_visited(&self.url) {
            return Some(Prune::AlreadyVisited);
        }
        None
    }
}

/// Waits for every unit in `units`.
///
/// A unit that panicked is logged and otherwise ignored: one bad page must
/// never take the rest of the crawl down with it.
pub async fn join_units(mut units: JoinSet<()>) {
    while let Some(joined) = units.join_next().await {
        if let Err(e) = joined {
            error!(error = %e, "traversal unit did not complete");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crawl::FakeClock;
    use crate::page::fake::FakePageSource;
    use crate::pattern::Pattern;
    use std::time::Duration;

    struct Harness {
        context: Arc<CrawlContext>,
        clock: Arc<FakeClock>,
    }

    fn harness(source: FakePageSource, max_depth: usize, ignored: &[&str]) -> (Harness, Arc<FakePageSource>) {
        let clock = Arc::new(FakeClock::new());
        let source = Arc::new(source);
        let request = CrawlRequest {
            seed_urls: Vec::new(),
            max_depth,
            deadline: clock.now() + Duration::from_secs(60),
            ignored_urls: ignored.iter().map(|p| Pattern::new(p).unwrap()).collect(),
            popular_word_count: 10,
        };
        let context = Arc::new(CrawlContext {
            request: Arc::new(request),
            state: Arc::new(SharedCrawlState::new()),
            page_source: source.clone(),
            clock: clock.clone(),
            workers: Arc::new(Semaphore::new(1)),
        });
        (Harness { context, clock }, source)
    }

    fn unit(harness: &Harness, url: &str) -> TraversalUnit {
        TraversalUnit::root(url.to_string(), harness.context.clone())
    }

    #[tokio::test]
    async fn test_depth_zero_has_no_side_effects() {
        let (h, source) = harness(FakePageSource::new().page("a", &[("x", 1)], &[]), 0, &[]);

        assert_eq!(unit(&h, "a").entry_check(), Some(Prune::DepthExhausted));
        assert_eq!(h.context.state.visited_count(), 0);
        assert_eq!(source.fetch_count("a"), 0);
    }

    #[tokio::test]
    async fn test_deadline_is_checked_before_ignore_and_visit() {
        let (h, _) = harness(FakePageSource::new(), 3, &["a"]);
        h.clock.advance(Duration::from_secs(60));

        // Exactly at the deadline counts as too late
        assert_eq!(unit(&h, "a").entry_check(), Some(Prune::DeadlinePassed));
        assert_eq!(unit(&h, "b").entry_check(), Some(Prune::DeadlinePassed));
        assert_eq!(h.context.state.visited_count(), 0);
    }

    #[tokio::test]
    async fn test_ignored_url_is_not_marked_visited() {
        let (h, _) = harness(FakePageSource::new(), 3, &["http://x\\.com"]);

        assert_eq!(unit(&h, "http://x.com").entry_check(), Some(Prune::Ignored));
        assert_eq!(h.context.state.visited_count(), 0);

        // Full-string match only
        assert_eq!(unit(&h, "http://x.com/page").entry_check(), None);
        assert_eq!(h.context.state.visited_count(), 1);
    }

    #[tokio::test]
    async fn test_second_visit_is_pruned() {
        let (h, _) = harness(FakePageSource::new(), 3, &[]);

        assert_eq!(unit(&h, "a").entry_check(), None);
        assert_eq!(unit(&h, "a").entry_check(), Some(Prune::AlreadyVisited));
    }

    #[tokio::test]
    async fn test_failed_fetch_counts_as_empty_page() {
        let (h, source) = harness(FakePageSource::new().failing("a"), 3, &[]);

        unit(&h, "a").run().await;

        assert_eq!(source.fetch_count("a"), 1);
        assert_eq!(h.context.state.visited_count(), 1);
        assert!(h.context.state.word_counts().is_empty());
    }

    #[tokio::test]
    async fn test_children_get_one_less_depth() {
        let source = FakePageSource::new()
            .page("a", &[("x", 1)], &["b"])
            .page("b", &[("x", 1)], &["c"])
            .page("c", &[("x", 1)], &[]);
        let (h, source) = harness(source, 2, &[]);

        // With a pool of one permit, a parent must release it before its
        // children can run, otherwise this would hang
        unit(&h, "a").run().await;

        assert_eq!(source.fetch_count("a"), 1);
        assert_eq!(source.fetch_count("b"), 1);
        assert_eq!(source.fetch_count("c"), 0);
        assert_eq!(h.context.state.word_counts().get("x"), Some(&2));
    }
}
