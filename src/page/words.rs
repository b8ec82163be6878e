// src/page/words.rs
// =============================================================================
// Word counting for page text.
//
// Every whitespace-separated token is normalized by:
// 1. dropping every character that is not a letter or digit ("don't!" -> "dont")
// 2. lowercasing it ("Rust" -> "rust")
//
// Tokens that end up empty (pure punctuation) are skipped, and so are tokens
// that fully match one of the ignored-word patterns (e.g. "the|a|an").
// =============================================================================

use crate::pattern::{matches_any, Pattern};
use std::collections::HashMap;

/// Counts normalized words across all text fragments of a page.
pub fn count_words<'a, I>(fragments: I, ignored_words: &[Pattern]) -> HashMap<String, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts = HashMap::new();

    for fragment in fragments {
        for token in fragment.split_whitespace() {
            let word = normalize(token);
            if word.is_empty() || matches_any(ignored_words, &word) {
                continue;
            }
            *counts.entry(word).or_insert(0) += 1;
        }
    }

    counts
}

fn normalize(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_and_normalizes() {
        let counts = count_words(["Rust is fast.", "rust, RUST!"], &[]);
        assert_eq!(counts.get("rust"), Some(&3));
        assert_eq!(counts.get("is"), Some(&1));
        assert_eq!(counts.get("fast"), Some(&1));
        assert_eq!(counts.len(), 3);
    }

    #[test]
    fn test_skips_punctuation_only_tokens() {
        let counts = count_words(["-- ... !!! word"], &[]);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("word"), Some(&1));
    }

    #[test]
    fn test_ignored_words_match_whole_word() {
        let ignored = vec![Pattern::new("the|a").unwrap()];
        let counts = count_words(["The theory of a cat"], &ignored);
        assert!(!counts.contains_key("the"));
        assert!(!counts.contains_key("a"));
        assert_eq!(counts.get("theory"), Some(&1));
        assert_eq!(counts.get("cat"), Some(&1));
    }

    #[test]
    fn test_ignored_words_apply_after_normalizing() {
        let ignored = vec![Pattern::new("dont").unwrap()];
        let counts = count_words(["Don't panic"], &ignored);
        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("panic"), Some(&1));
    }

    #[test]
    fn test_empty_input() {
        assert!(count_words(Vec::<&str>::new(), &[]).is_empty());
    }
}
