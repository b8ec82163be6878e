// src/config/settings.rs
// Validated configuration, ready to hand to the crawler.

use super::{ConfigError, CrawlerConfig};
use crate::pattern::Pattern;
use std::path::PathBuf;
use std::time::Duration;

/// A configuration that passed validation
#[derive(Debug, Clone)]
pub struct Settings {
    pub start_pages: Vec<String>,
    pub ignored_urls: Vec<Pattern>,
    pub ignored_words: Vec<Pattern>,
    pub parallelism: usize,
    pub max_depth: usize,
    pub timeout: Duration,
    pub popular_word_count: usize,
    pub result_path: Option<PathBuf>,
}

impl CrawlerConfig {
    /// Checks the configuration and compiles its patterns.
    pub fn validate(&self) -> Result<Settings, ConfigError> {
        if self.start_pages.is_empty() {
            return Err(ConfigError::NoStartPages);
        }
        if self.parallelism == 0 {
            return Err(ConfigError::ZeroParallelism);
        }
        if self.popular_word_count == 0 {
            return Err(ConfigError::ZeroPopularWordCount);
        }

        Ok(Settings {
            start_pages: self.start_pages.clone(),
            ignored_urls: compile_all("ignored URL", &self.ignored_urls)?,
            ignored_words: compile_all("ignored word", &self.ignored_words)?,
            parallelism: self.parallelism,
            max_depth: self.max_depth,
            timeout: Duration::from_secs(self.timeout_seconds),
            popular_word_count: self.popular_word_count,
            result_path: self.result_path.clone(),
        })
    }
}

fn compile_all(kind: &'static str, patterns: &[String]) -> Result<Vec<Pattern>, ConfigError> {
    patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|source| ConfigError::Pattern {
                kind,
                pattern: pattern.clone(),
                source,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> CrawlerConfig {
        CrawlerConfig {
            start_pages: vec!["https://example.com/".to_string()],
            ..CrawlerConfig::default()
        }
    }

    #[test]
    fn test_valid_config() {
        let mut config = config();
        config.ignored_urls = vec![r"https://ads\..*".to_string()];
        config.timeout_seconds = 3;

        let settings = config.validate().unwrap();

        assert_eq!(settings.timeout, Duration::from_secs(3));
        assert_eq!(settings.ignored_urls.len(), 1);
        assert!(settings.ignored_urls[0].matches("https://ads.example.com"));
    }

    #[test]
    fn test_zero_parallelism_is_rejected() {
        let mut config = config();
        config.parallelism = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroParallelism)));
    }

    #[test]
    fn test_zero_popular_word_count_is_rejected() {
        let mut config = config();
        config.popular_word_count = 0;
        assert!(matches!(config.validate(), Err(ConfigError::ZeroPopularWordCount)));
    }

    #[test]
    fn test_no_start_pages_is_rejected() {
        let config = CrawlerConfig::default();
        assert!(matches!(config.validate(), Err(ConfigError::NoStartPages)));
    }

    #[test]
    fn test_bad_pattern_is_rejected() {
        let mut config = config();
        config.ignored_words = vec!["ok".to_string(), "(broken".to_string()];

        match config.validate() {
            Err(ConfigError::Pattern { kind, pattern, .. }) => {
                assert_eq!(kind, "ignored word");
                assert_eq!(pattern, "(broken");
            }
            other => panic!("expected a pattern error, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_depth_and_timeout_are_allowed() {
        let mut config = config();
        config.max_depth = 0;
        config.timeout_seconds = 0;
        assert!(config.validate().is_ok());
    }
}
