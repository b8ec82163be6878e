// src/pattern.rs
// =============================================================================
// Full-string regex patterns used for ignored URLs and ignored words.
//
// A plain `Regex::is_match` answers "does the pattern occur anywhere in the
// text?". For ignore rules we want "does the pattern describe the WHOLE text?",
// so `http://x\.com` must not prune `http://x.com/page`. We get that by
// anchoring the user's pattern as `^(?:pattern)$` when compiling it.
// =============================================================================

use regex::Regex;
use std::fmt;

/// A regex that only matches when it covers the entire input.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compiles `source` as a full-match pattern.
    pub fn new(source: &str) -> Result<Self, regex::Error> {
        let regex = Regex::new(&format!("^(?:{})$", source))?;
        Ok(Self {
            source: source.to_string(),
            regex,
        })
    }

    /// True when the whole of `text` matches the pattern
    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }

    /// The pattern as the user wrote it (without our anchors)
    pub fn as_str(&self) -> &str {
        &self.source
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

/// True when any of `patterns` fully matches `text`
pub fn matches_any(patterns: &[Pattern], text: &str) -> bool {
    patterns.iter().any(|p| p.matches(text))
}
