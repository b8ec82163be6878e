// src/page/mod.rs
// =============================================================================
// This module turns a URL into "what words are on this page, and where does
// it link to?".
//
// Submodules:
// - html: the real page source (HTTP via reqwest, file:// via tokio::fs,
//         parsing via scraper)
// - words: splitting visible text into normalized, countable words
//
// The crawler only ever talks to the `PageSource` trait, so tests can swap in
// an in-memory web graph instead of the network.
// =============================================================================

mod html;
mod words;

#[cfg(test)]
pub mod fake;

pub use html::HtmlPageSource;

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// Everything the crawler needs from one page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageContent {
    /// How many times each (normalized) word appears on the page
    pub word_counts: HashMap<String, usize>,
    /// Absolute URLs of the outbound links, in document order
    pub links: Vec<String>,
}

/// Why a page could not be fetched
///
/// The crawler never propagates these: a failed page is logged and then
/// treated as a page with no words and no links.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("unsupported URL scheme '{0}'")]
    UnsupportedScheme(String),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

/// Something that can fetch a page and report its words and links.
///
/// Implementations must be shareable across tasks because every traversal
/// unit holds the same `Arc<dyn PageSource>`.
#[async_trait]
pub trait PageSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<PageContent, FetchError>;
}
