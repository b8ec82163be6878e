// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// Everything can come from a JSON config file, from flags, or from both.
// Flags win over the file, so a shared config can be tweaked per run:
//
//   word-crawler crawl.json --max-depth 3 --json
//   word-crawler --seed https://www.rust-lang.org/ --popular-word-count 20
// =============================================================================

use crate::config::{ConfigError, CrawlerConfig};
use clap::Parser;
use std::path::PathBuf;

// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "word-crawler",
    version,
    about = "Crawl websites in parallel and report the most popular words",
    long_about = "word-crawler starts from one or more seed URLs, follows links up to a depth and \
                  time budget using a bounded pool of workers, and reports how often each word \
                  appears across every page it reached."
)]
pub struct Cli {
    /// JSON configuration file (camelCase keys, e.g. "startPages", "maxDepth")
    ///
    /// This is an optional positional argument
    pub config: Option<PathBuf>,

    /// Seed URL to start crawling from (repeatable, replaces "startPages")
    #[arg(long = "seed", value_name = "URL")]
    pub seeds: Vec<String>,

    /// Maximum crawl depth (1 = only the seed pages)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Time budget for the whole crawl, in seconds
    #[arg(long)]
    pub timeout_seconds: Option<u64>,

    /// Number of parallel workers (capped at the number of CPUs)
    #[arg(long)]
    pub parallelism: Option<usize>,

    /// Regex of URLs to skip, matched against the whole URL (repeatable)
    #[arg(long = "ignore-url", value_name = "REGEX")]
    pub ignored_urls: Vec<String>,

    /// Regex of words to leave out of the counts (repeatable)
    #[arg(long = "ignore-word", value_name = "REGEX")]
    pub ignored_words: Vec<String>,

    /// How many of the most popular words to report
    #[arg(long)]
    pub popular_word_count: Option<usize>,

    /// Also write the JSON result to this file
    #[arg(long)]
    pub result_path: Option<PathBuf>,

    /// Print the result as JSON instead of a table
    #[arg(long)]
    pub json: bool,

    /// Log debug details (which pages are fetched, pruned or failing) to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Loads the config file (if any) and applies the command-line overrides
    pub fn load_config(&self) -> Result<CrawlerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => CrawlerConfig::from_path(path)?,
            None => CrawlerConfig::default(),
        };
        self.apply_to(&mut config);
        Ok(config)
    }

    fn apply_to(&self, config: &mut CrawlerConfig) {
        if !self.seeds.is_empty() {
            config.start_pages = self.seeds.clone();
        }
        // Patterns add up: the file's ignore list plus the ones given here
        config.ignored_urls.extend(self.ignored_urls.iter().cloned());
        config.ignored_words.extend(self.ignored_words.iter().cloned());

        if let Some(max_depth) = self.max_depth {
            config.max_depth = max_depth;
        }
        if let Some(timeout_seconds) = self.timeout_seconds {
            config.timeout_seconds = timeout_seconds;
        }
        if let Some(parallelism) = self.parallelism {
            config.parallelism = parallelism;
        }
        if let Some(popular_word_count) = self.popular_word_count {
            config.popular_word_count = popular_word_count;
        }
        if let Some(result_path) = &self.result_path {
            config.result_path = Some(result_path.clone());
        }
    }
}
