//! Inspiration search error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InspireError {
    #[error("query is empty")]
    EmptyQuery,

    #[error("no API key configured (set GEMINI_API_KEY)")]
    MissingApiKey,

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("invalid response: {0}")]
    Decode(String),
}
