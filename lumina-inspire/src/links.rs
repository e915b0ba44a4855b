//! Search links to external platforms for a query.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExternalPlatform {
    Google,
    Pinterest,
    YouTube,
}

impl ExternalPlatform {
    pub const ALL: [ExternalPlatform; 3] = [
        ExternalPlatform::Google,
        ExternalPlatform::Pinterest,
        ExternalPlatform::YouTube,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ExternalPlatform::Google => "Google",
            ExternalPlatform::Pinterest => "Pinterest",
            ExternalPlatform::YouTube => "YouTube",
        }
    }

    /// Search URL for `query` on this platform, or `None` for a blank query.
    pub fn search_url(&self, query: &str) -> Option<String> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        let q = urlencoding::encode(query);
        Some(match self {
            ExternalPlatform::Google => format!("https://www.google.com/search?q={q}+aesthetic"),
            ExternalPlatform::Pinterest => format!("https://www.pinterest.com/search/pins/?q={q}"),
            ExternalPlatform::YouTube => {
                format!("https://www.youtube.com/results?search_query={q}+mood")
            }
        })
    }
}
