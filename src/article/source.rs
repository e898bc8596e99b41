//! Article sources
//!
//! An [`ArticleSource`] turns a page name into an article title and its
//! plain-text body. [`StaticSource`] serves articles from memory;
//! `WikipediaSource` (feature `fetch`) queries the MediaWiki extracts API.

use crate::errors::{Result, SummarizerError};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// A retrieved article: its canonical title and raw extract text
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub text: String,
}

impl Article {
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
        }
    }
}

/// Supplies articles by page name
pub trait ArticleSource: Send + Sync {
    /// Fetch the article for `page_name`.
    ///
    /// Fails with [`SummarizerError::ArticleNotFound`] when the page does not
    /// exist and [`SummarizerError::Fetch`] on transport or decoding errors.
    fn fetch(&self, page_name: &str) -> Result<Article>;
}

/// In-memory article source
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    articles: FxHashMap<String, Article>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method: register an article under `page_name`
    pub fn with_article(mut self, page_name: impl Into<String>, article: Article) -> Self {
        self.articles.insert(page_name.into(), article);
        self
    }
}

impl ArticleSource for StaticSource {
    fn fetch(&self, page_name: &str) -> Result<Article> {
        self.articles
            .get(page_name)
            .cloned()
            .ok_or_else(|| SummarizerError::not_found(page_name))
    }
}

#[cfg(feature = "fetch")]
pub use wikipedia::WikipediaSource;

#[cfg(feature = "fetch")]
mod wikipedia {
    use super::{Article, ArticleSource};
    use crate::errors::{Result, SummarizerError};
    use serde::Deserialize;
    use std::time::Duration;

    /// English Wikipedia API endpoint
    pub const DEFAULT_API_URL: &str = "https://en.wikipedia.org/w/api.php";

    const USER_AGENT: &str = concat!("section-summarizer/", env!("CARGO_PKG_VERSION"));

    /// Fetches plain-text extracts from a MediaWiki API
    #[derive(Debug, Clone)]
    pub struct WikipediaSource {
        http: reqwest::blocking::Client,
        api_url: String,
    }

    #[derive(Debug, Deserialize)]
    struct ApiResponse {
        #[serde(default)]
        query: Option<ApiQuery>,
    }

    #[derive(Debug, Deserialize)]
    struct ApiQuery {
        #[serde(default)]
        pages: Vec<ApiPage>,
    }

    #[derive(Debug, Deserialize)]
    struct ApiPage {
        #[serde(default)]
        title: String,
        #[serde(default)]
        extract: String,
        #[serde(default)]
        missing: bool,
        #[serde(default)]
        invalid: bool,
    }

    impl WikipediaSource {
        /// Client for English Wikipedia
        pub fn new() -> Result<Self> {
            Self::with_api_url(DEFAULT_API_URL)
        }

        /// Client for another MediaWiki installation
        pub fn with_api_url(api_url: impl Into<String>) -> Result<Self> {
            let http = reqwest::blocking::Client::builder()
                .timeout(Duration::from_secs(30))
                .user_agent(USER_AGENT)
                .build()
                .map_err(|e| SummarizerError::fetch(format!("failed to create HTTP client: {e}")))?;

            Ok(Self {
                http,
                api_url: api_url.into(),
            })
        }
    }

    impl ArticleSource for WikipediaSource {
        fn fetch(&self, page_name: &str) -> Result<Article> {
            debug_event!(page_name, "fetching article");

            let response = self
                .http
                .get(&self.api_url)
                .query(&[
                    ("action", "query"),
                    ("prop", "extracts"),
                    ("exlimit", "1"),
                    ("explaintext", ""),
                    ("format", "json"),
                    ("formatversion", "2"),
                    ("titles", page_name),
                ])
                .send()
                .and_then(|r| r.error_for_status())
                .map_err(|e| SummarizerError::fetch(e.to_string()))?;

            let body: ApiResponse = response
                .json()
                .map_err(|e| SummarizerError::fetch(format!("invalid API response: {e}")))?;

            let page = body
                .query
                .and_then(|q| q.pages.into_iter().next())
                .ok_or_else(|| SummarizerError::not_found(page_name))?;

            if page.missing || page.invalid {
                return Err(SummarizerError::not_found(page_name));
            }

            debug_event!(
                page_name,
                title = page.title.as_str(),
                bytes = page.extract.len(),
                "fetched article"
            );

            Ok(Article::new(page.title, page.extract))
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_decode_page() {
            let json = r#"{"batchcomplete":true,"query":{"pages":[{"pageid":6678,"ns":0,"title":"Cat","extract":"The cat is small.\n== Etymology ==\nFrom Latin."}]}}"#;
            let body: ApiResponse = serde_json::from_str(json).unwrap();
            let page = body.query.unwrap().pages.into_iter().next().unwrap();

            assert_eq!(page.title, "Cat");
            assert!(page.extract.starts_with("The cat is small."));
            assert!(!page.missing);
        }

        #[test]
        fn test_decode_missing_page() {
            let json = r#"{"query":{"pages":[{"ns":0,"title":"Nope Nope","missing":true}]}}"#;
            let body: ApiResponse = serde_json::from_str(json).unwrap();
            let page = body.query.unwrap().pages.into_iter().next().unwrap();

            assert!(page.missing);
            assert!(page.extract.is_empty());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_source() {
        let source = StaticSource::new().with_article("Cat", Article::new("Cat", "Cats purr."));

        assert_eq!(source.fetch("Cat").unwrap().text, "Cats purr.");
        assert_eq!(
            source.fetch("Dog"),
            Err(SummarizerError::ArticleNotFound("Dog".to_string()))
        );
    }
}
