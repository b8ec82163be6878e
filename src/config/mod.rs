// src/config/mod.rs
// =============================================================================
// Crawler configuration.
//
// Two steps, so that nothing is crawled with a bad configuration:
// 1. `CrawlerConfig` is what the user wrote: a JSON file (camelCase keys)
//    merged with command-line overrides. Plain strings and numbers.
// 2. `CrawlerConfig::validate()` turns it into `Settings`: regexes compiled,
//    durations built, nonsense values rejected with a `ConfigError`.
//
// Example file:
//   {
//     "startPages": ["https://www.rust-lang.org/"],
//     "ignoredUrls": ["https://.*\\.github\\.com/.*"],
//     "ignoredWords": ["the|a|an|and|of|to"],
//     "parallelism": 4,
//     "maxDepth": 2,
//     "timeoutSeconds": 10,
//     "popularWordCount": 10,
//     "resultPath": "crawl-result.json"
//   }
// =============================================================================

mod file;
mod settings;

pub use file::CrawlerConfig;
pub use settings::Settings;

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can be wrong with a configuration
///
/// These are the only fatal errors of a crawl, and they are all reported
/// before the first page is fetched.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("no start pages given (use \"startPages\" or --seed)")]
    NoStartPages,

    #[error("parallelism must be at least 1")]
    ZeroParallelism,

    #[error("popular word count must be at least 1")]
    ZeroPopularWordCount,

    #[error("invalid {kind} pattern '{pattern}': {source}")]
    Pattern {
        kind: &'static str,
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
