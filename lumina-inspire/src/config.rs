//! Inspiration client configuration.

use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for [`crate::GeminiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspireConfig {
    pub api_key: Option<String>,
    pub model: String,
    /// Base URL, without a trailing path.
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for InspireConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl InspireConfig {
    /// Read settings from the process environment, falling back to defaults.
    ///
    /// - `GEMINI_API_KEY` (or `API_KEY`)
    /// - `LUMINA_MODEL`
    /// - `LUMINA_ENDPOINT`
    /// - `LUMINA_TIMEOUT_SECS`
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let timeout = match non_empty("LUMINA_TIMEOUT_SECS").map(|v| v.trim().parse::<u64>()) {
            Some(Ok(secs)) if secs > 0 => Duration::from_secs(secs),
            Some(_) => {
                tracing::warn!("ignoring invalid LUMINA_TIMEOUT_SECS");
                defaults.timeout
            }
            None => defaults.timeout,
        };

        Self {
            api_key: non_empty("GEMINI_API_KEY").or_else(|| non_empty("API_KEY")),
            model: non_empty("LUMINA_MODEL").unwrap_or(defaults.model),
            endpoint: non_empty("LUMINA_ENDPOINT")
                .map(|e| e.trim_end_matches('/').to_string())
                .unwrap_or(defaults.endpoint),
            timeout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        assert_eq!(InspireConfig::from_lookup(lookup(&[])), InspireConfig::default());
    }

    #[test]
    fn test_reads_overrides() {
        let config = InspireConfig::from_lookup(lookup(&[
            ("API_KEY", "legacy"),
            ("LUMINA_MODEL", "gemini-test"),
            ("LUMINA_ENDPOINT", "http://localhost:9000/"),
            ("LUMINA_TIMEOUT_SECS", "5"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("legacy"));
        assert_eq!(config.model, "gemini-test");
        assert_eq!(config.endpoint, "http://localhost:9000");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_gemini_key_wins_and_bad_timeout_ignored() {
        let config = InspireConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "primary"),
            ("API_KEY", "legacy"),
            ("LUMINA_TIMEOUT_SECS", "soon"),
        ]));
        assert_eq!(config.api_key.as_deref(), Some("primary"));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }
}
