// src/crawl/ranking.rs
// Picks the most popular words out of a finished word-count map.

use std::cmp::Ordering;
use std::collections::HashMap;

/// Returns the `k` most frequent words, most frequent first.
///
/// Ties on count go to the longer word (by character count), then to the
/// alphabetically smaller one. Words are unique keys, so the order is total
/// and the result never depends on the map's iteration order.
pub fn top_words(counts: &HashMap<String, usize>, k: usize) -> Vec<(String, usize)> {
    let mut entries: Vec<(&String, &usize)> = counts.iter().collect();
    entries.sort_by(|a, b| rank(a, b));

    entries
        .into_iter()
        .take(k)
        .map(|(word, count)| (word.clone(), *count))
        .collect()
}

fn rank((word_a, count_a): &(&String, &usize), (word_b, count_b): &(&String, &usize)) -> Ordering {
    count_b
        .cmp(count_a)
        .then_with(|| word_b.chars().count().cmp(&word_a.chars().count()))
        .then_with(|| word_a.cmp(word_b))
}
