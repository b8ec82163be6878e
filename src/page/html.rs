// src/page/html.rs
// =============================================================================
// The real page source: loads a page and parses it with `scraper`.
//
// Supported URLs:
// - http:// and https:// are fetched with a shared reqwest Client
// - file:// is read from disk, which makes offline crawls of local HTML
//   trees possible
//
// From the parsed document we extract:
// - the visible text of <body> (script/style/noscript contents excluded),
//   turned into word counts by the `words` module
// - every <a href> resolved to an absolute URL, without its #fragment
// =============================================================================

use super::words::count_words;
use super::{FetchError, PageContent, PageSource};
use crate::pattern::Pattern;
use async_trait::async_trait;
use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::debug;
use url::Url;

// Elements whose text never shows up on the rendered page
const HIDDEN_ELEMENTS: [&str; 4] = ["script", "style", "noscript", "template"];

const USER_AGENT: &str = concat!("word-crawler/", env!("CARGO_PKG_VERSION"));

/// Fetches pages over HTTP(S) or from the local filesystem and counts their words.
pub struct HtmlPageSource {
    client: Client,
    ignored_words: Vec<Pattern>,
}

impl HtmlPageSource {
    /// Creates a page source that drops words matching `ignored_words`.
    ///
    /// The HTTP client is created once here and reused for every fetch so
    /// that connections are pooled across the whole crawl.
    pub fn new(ignored_words: Vec<Pattern>) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .redirect(reqwest::redirect::Policy::limited(5))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            ignored_words,
        })
    }

    async fn load(&self, url: &Url) -> Result<String, FetchError> {
        match url.scheme() {
            "http" | "https" => {
                let response = self.client.get(url.as_str()).send().await?;

                if !response.status().is_success() {
                    return Err(FetchError::Status {
                        url: url.to_string(),
                        status: response.status().as_u16(),
                    });
                }

                Ok(response.text().await?)
            }
            "file" => {
                let path = url.to_file_path().map_err(|_| FetchError::Io {
                    path: url.to_string(),
                    source: std::io::Error::new(
                        std::io::ErrorKind::InvalidInput,
                        "not a local file path",
                    ),
                })?;

                tokio::fs::read_to_string(&path)
                    .await
                    .map_err(|source| FetchError::Io {
                        path: path.display().to_string(),
                        source,
                    })
            }
            other => Err(FetchError::UnsupportedScheme(other.to_string())),
        }
    }

    /// Parses an HTML document that was loaded from `page_url`.
    ///
    /// This is synchronous on purpose: `scraper::Html` is not `Send`, so it
    /// must never be held across an `.await`.
    pub fn parse(&self, html: &str, page_url: &Url) -> PageContent {
        let document = Html::parse_document(html);

        PageContent {
            word_counts: count_words(visible_text(&document), &self.ignored_words),
            links: extract_links(&document, page_url),
        }
    }
}

#[async_trait]
impl PageSource for HtmlPageSource {
    async fn fetch(&self, url: &str) -> Result<PageContent, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let html = self.load(&parsed).await?;
        let page = self.parse(&html, &parsed);

        debug!(
            url,
            words = page.word_counts.len(),
            links = page.links.len(),
            "parsed page"
        );

        Ok(page)
    }
}

// Collects the text nodes of <body> (or the whole document when there is no
// body), skipping anything nested inside a hidden element.
fn visible_text(document: &Html) -> Vec<&str> {
    // The selector is a constant, so parsing it can only fail on a typo here
    let body = Selector::parse("body").expect("static selector is valid");

    let scope = match document.select(&body).next() {
        Some(element) => *element,
        None => document.tree.root(),
    };

    scope
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node.ancestors().any(|ancestor| {
                ancestor
                    .value()
                    .as_element()
                    .is_some_and(|element| HIDDEN_ELEMENTS.contains(&element.name()))
            });
            if hidden {
                None
            } else {
                Some(&**text)
            }
        })
        .collect()
}

fn extract_links(document: &Html, page_url: &Url) -> Vec<String> {
    let selector = Selector::parse("a[href]").expect("static selector is valid");

    document
        .select(&selector)
        .filter_map(|element| element.value().attr("href"))
        .filter_map(|href| resolve_link(page_url, href))
        .collect()
}

// Resolves a (possibly relative) href against the page URL.
//
// Returns None for in-page anchors, for schemes we cannot crawl (mailto:,
// javascript:, ...) and for file:// links found on remote pages.
fn resolve_link(base: &Url, href: &str) -> Option<String> {
    let href = href.trim();
    if href.is_empty() || href.starts_with('#') {
        return None;
    }

    let mut url = base.join(href).ok()?;

    let allowed = match url.scheme() {
        "http" | "https" => true,
        "file" => base.scheme() == "file",
        _ => false,
    };
    if !allowed {
        return None;
    }

    url.set_fragment(None);
    Some(url.to_string())
}
