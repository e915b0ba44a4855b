//! Gemini client - one `generateContent` call with Google Search grounding.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::{InspirationSource, InspireConfig, InspireError, SearchResult, WebSource};

/// Calls the Gemini `generateContent` endpoint.
pub struct GeminiClient {
    http: Client,
    config: InspireConfig,
}

impl GeminiClient {
    pub fn new(config: InspireConfig) -> Result<Self, InspireError> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { http, config })
    }

    fn url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.endpoint.trim_end_matches('/'),
            self.config.model
        )
    }
}

/// The instruction sent along with the user's query.
pub fn prompt(query: &str) -> String {
    format!(
        "User is looking for aesthetic inspiration for: \"{query}\".\n\
         Use Google Search to find real, current trends, artists, or specific visual directions.\n\
         Provide a calm, poetic summary of what you found and offer specific keywords for Pinterest or YouTube.\n\
         Focus only on real information found on the web."
    )
}

#[async_trait]
impl InspirationSource for GeminiClient {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn fetch(&self, query: &str) -> Result<SearchResult, InspireError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(InspireError::MissingApiKey)?;

        let request = GenerateRequest {
            contents: vec![Content {
                role: Some("user".to_string()),
                parts: vec![Part {
                    text: Some(prompt(query)),
                }],
            }],
            tools: vec![Tool {
                google_search: GoogleSearch {},
            }],
        };

        tracing::debug!(model = %self.config.model, "requesting inspiration");
        let response = self
            .http
            .post(self.url())
            .header("x-goog-api-key", api_key)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(InspireError::Status { status, body });
        }

        let body = response.text().await?;
        parse_response(&body)
    }
}

/// Extract the summary text and web sources from a `generateContent` response.
///
/// Only the first candidate is used. Grounding chunks without a web page are
/// skipped.
pub fn parse_response(body: &str) -> Result<SearchResult, InspireError> {
    let response: GenerateResponse =
        serde_json::from_str(body).map_err(|e| InspireError::Decode(e.to_string()))?;

    let Some(candidate) = response.candidates.into_iter().next() else {
        return Ok(SearchResult {
            text: String::new(),
            sources: Vec::new(),
        });
    };

    let text = candidate
        .content
        .map(|content| {
            content
                .parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<String>()
        })
        .unwrap_or_default();

    let sources = candidate
        .grounding_metadata
        .map(|metadata| {
            metadata
                .grounding_chunks
                .into_iter()
                .filter_map(|chunk| chunk.web)
                .map(|web| WebSource {
                    title: web.title.unwrap_or_else(|| web.uri.clone()),
                    uri: web.uri,
                })
                .collect()
        })
        .unwrap_or_default();

    Ok(SearchResult { text, sources })
}

// =========================================================================
// Wire format
// =========================================================================

#[derive(Debug, Serialize)]
struct GenerateRequest {
    contents: Vec<Content>,
    tools: Vec<Tool>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    role: Option<String>,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    text: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Tool {
    google_search: GoogleSearch,
}

#[derive(Debug, Serialize)]
struct GoogleSearch {}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    content: Option<Content>,
    grounding_metadata: Option<GroundingMetadata>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroundingMetadata {
    #[serde(default)]
    grounding_chunks: Vec<GroundingChunk>,
}

#[derive(Debug, Deserialize)]
struct GroundingChunk {
    web: Option<WebChunk>,
}

#[derive(Debug, Deserialize)]
struct WebChunk {
    uri: String,
    title: Option<String>,
}
