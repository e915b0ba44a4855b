//! Runtime configuration: `.env`, environment variables, then CLI flags.

use std::time::Duration;

use lumina_inspire::InspireConfig;

/// Command-line overrides for the inspiration client.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspireOverrides {
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl InspireOverrides {
    /// Apply the overrides on top of `base`.
    pub fn apply(self, mut base: InspireConfig) -> InspireConfig {
        if let Some(model) = self.model {
            base.model = model;
        }
        if let Some(endpoint) = self.endpoint {
            base.endpoint = endpoint.trim_end_matches('/').to_string();
        }
        if let Some(secs) = self.timeout_secs.filter(|s| *s > 0) {
            base.timeout = Duration::from_secs(secs);
        }
        base
    }
}

/// Load `.env` (if present) and build the inspiration config.
pub fn load_inspire_config(overrides: InspireOverrides) -> InspireConfig {
    if let Ok(path) = dotenv::dotenv() {
        tracing::debug!("loaded environment from {}", path.display());
    }
    overrides.apply(InspireConfig::from_env())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_environment() {
        let base = InspireConfig {
            api_key: Some("k".into()),
            ..InspireConfig::default()
        };
        let config = InspireOverrides {
            model: Some("gemini-lite".into()),
            endpoint: Some("http://localhost:8080/".into()),
            timeout_secs: Some(3),
        }
        .apply(base);

        assert_eq!(config.api_key.as_deref(), Some("k"));
        assert_eq!(config.model, "gemini-lite");
        assert_eq!(config.endpoint, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_zero_timeout_is_ignored() {
        let config = InspireOverrides {
            timeout_secs: Some(0),
            ..InspireOverrides::default()
        }
        .apply(InspireConfig::default());
        assert_eq!(config, InspireConfig::default());
    }
}
