// src/config/file.rs
// =============================================================================
// The raw, user-facing configuration and how it is loaded from JSON.
//
// Every field has a default, so a config file only needs the keys the user
// cares about (and with --seed on the command line, no file is needed at
// all). Negative numbers are rejected by serde already, because the numeric
// fields are unsigned.
// =============================================================================

use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Crawler configuration as written by the user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct CrawlerConfig {
    /// Seed URLs the crawl starts from
    pub start_pages: Vec<String>,
    /// Regexes; a URL that fully matches one of them is never visited
    pub ignored_urls: Vec<String>,
    /// Regexes; a word that fully matches one of them is never counted
    pub ignored_words: Vec<String>,
    /// Requested number of concurrent workers (capped at the CPU count)
    pub parallelism: usize,
    /// How many links deep to go; 1 = only the start pages
    pub max_depth: usize,
    /// Time budget for the whole crawl
    pub timeout_seconds: u64,
    /// How many of the most popular words to report
    pub popular_word_count: usize,
    /// Where to write the JSON result (in addition to stdout)
    pub result_path: Option<PathBuf>,
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            start_pages: Vec::new(),
            ignored_urls: Vec::new(),
            ignored_words: Vec::new(),
            parallelism: num_cpus::get(),
            max_depth: 2,
            timeout_seconds: 10,
            popular_word_count: 10,
            result_path: None,
        }
    }
}

impl CrawlerConfig {
    /// Loads a configuration from a JSON file
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
