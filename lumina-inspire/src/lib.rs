//! Lumina Inspire - aesthetic inspiration search backed by an external AI service.
//!
//! The service is consumed as a single request/response call: a text query
//! goes out, a summary plus a list of web sources comes back. Failures never
//! reach the caller as errors; they degrade to a gentle fallback result.

mod config;
mod error;
mod gemini;
mod links;

pub use config::InspireConfig;
pub use error::InspireError;
pub use gemini::GeminiClient;
pub use links::ExternalPlatform;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Text used when the service answers without any summary.
pub const EMPTY_SUMMARY_TEXT: &str =
    "I couldn't find specific details for that, but here are some sources to explore.";

/// Text used when the service could not be reached or answered badly.
pub const FALLBACK_TEXT: &str =
    "I encountered a quiet moment of technical difficulty. Please try searching on Google directly.";

/// A web page the service grounded its answer on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebSource {
    pub uri: String,
    pub title: String,
}

/// The answer to an inspiration query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub text: String,
    pub sources: Vec<WebSource>,
}

impl SearchResult {
    /// The result shown when the service fails.
    pub fn fallback() -> Self {
        Self {
            text: FALLBACK_TEXT.to_string(),
            sources: Vec::new(),
        }
    }
}

/// Anything that can answer an inspiration query.
#[async_trait]
pub trait InspirationSource: Send + Sync {
    /// Source name, for logs.
    fn name(&self) -> &str;

    /// Perform one request for `query`.
    async fn fetch(&self, query: &str) -> Result<SearchResult, InspireError>;
}

/// Inspiration search with the fallback policy applied.
pub struct Inspiration<S> {
    source: S,
}

impl<S: InspirationSource> Inspiration<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Search for inspiration.
    ///
    /// Only a blank query is an error. Any failure of the source is logged
    /// and replaced by [`SearchResult::fallback`]. There is a single attempt.
    pub async fn search(&self, query: &str) -> Result<SearchResult, InspireError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(InspireError::EmptyQuery);
        }

        match self.source.fetch(query).await {
            Ok(mut result) => {
                if result.text.trim().is_empty() {
                    result.text = EMPTY_SUMMARY_TEXT.to_string();
                }
                tracing::debug!(
                    source = self.source.name(),
                    sources = result.sources.len(),
                    "inspiration found"
                );
                Ok(result)
            }
            Err(e) => {
                tracing::warn!(source = self.source.name(), "inspiration search failed: {}", e);
                Ok(SearchResult::fallback())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Canned(Result<SearchResult, fn() -> InspireError>);

    #[async_trait]
    impl InspirationSource for Canned {
        fn name(&self) -> &str {
            "canned"
        }

        async fn fetch(&self, _query: &str) -> Result<SearchResult, InspireError> {
            match &self.0 {
                Ok(result) => Ok(result.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    #[tokio::test]
    async fn test_blank_query_is_rejected() {
        let inspiration = Inspiration::new(Canned(Ok(SearchResult::fallback())));
        assert!(matches!(
            inspiration.search("   ").await,
            Err(InspireError::EmptyQuery)
        ));
    }

    #[tokio::test]
    async fn test_failure_degrades_to_fallback() {
        let inspiration = Inspiration::new(Canned(Err(|| InspireError::MissingApiKey)));
        let result = inspiration.search("cottagecore").await.unwrap();
        assert_eq!(result, SearchResult::fallback());
    }

    #[tokio::test]
    async fn test_empty_summary_gets_placeholder() {
        let canned = SearchResult {
            text: String::new(),
            sources: vec![WebSource {
                uri: "https://example.com".into(),
                title: "Example".into(),
            }],
        };
        let inspiration = Inspiration::new(Canned(Ok(canned)));
        let result = inspiration.search("dark academia").await.unwrap();
        assert_eq!(result.text, EMPTY_SUMMARY_TEXT);
        assert_eq!(result.sources.len(), 1);
    }
}
