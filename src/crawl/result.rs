// src/crawl/result.rs
// =============================================================================
// The outcome of one crawl, and how it looks as JSON:
//
//   {
//     "wordCounts": { "rust": 12, "crab": 7 },
//     "urlsVisited": 4
//   }
//
// `wordCounts` is written as a JSON object whose keys appear in rank order
// (most popular first), so we keep the words in a Vec and serialize it as a
// map by hand instead of using a HashMap, which has no order.
// =============================================================================

use serde::{Serialize, Serializer};

/// Final report of a crawl
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CrawlResult {
    /// Most popular words, most frequent first
    #[serde(serialize_with = "ranked_map")]
    pub word_counts: Vec<(String, usize)>,
    /// Number of distinct URLs whose fetch was attempted
    pub urls_visited: usize,
}

fn ranked_map<S: Serializer>(counts: &[(String, usize)], serializer: S) -> Result<S::Ok, S::Error> {
    serializer.collect_map(counts.iter().map(|(word, count)| (word, count)))
}
