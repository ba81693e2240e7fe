//! Environment-backed configuration
//!
//! All configuration is read once from the process environment at startup
//! (a `.env` file is honored via dotenvy) and held read-only for the process
//! lifetime. The resulting sections are passed into the client constructors
//! explicitly; nothing reads the environment after startup.

use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Default hosted text-generation endpoint
pub const DEFAULT_MODEL_ENDPOINT: &str =
    "https://api-inference.huggingface.co/models/tiiuae/falcon-7b-instruct";

/// Default JSON search backend
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://google.serper.dev/search";

const DEFAULT_MODEL_TIMEOUT_SECS: u64 = 30;
const DEFAULT_SEARCH_TIMEOUT_SECS: u64 = 10;
const DEFAULT_SEARCH_MAX_RESULTS: usize = 3;

/// Main agent configuration
#[derive(Debug, Clone)]
pub struct AgentConfig {
    pub model: ModelConfig,
    pub search: SearchConfig,
}

/// Model endpoint section
#[derive(Debug, Clone)]
pub struct ModelConfig {
    /// Model-serving URL, `MODEL_ENDPOINT`
    pub endpoint: String,
    /// Bearer credential, `HUGGINGFACEHUB_API_TOKEN` (required, never logged)
    pub api_token: String,
    /// Per-request timeout, `MODEL_TIMEOUT_SECS`
    pub timeout: Duration,
}

/// Search backend section
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Search API URL, `SEARCH_ENDPOINT`
    pub endpoint: String,
    /// API key, `SERPER_API_KEY`. Empty means searches fail as error text
    /// rather than aborting startup.
    pub api_key: String,
    /// Result count per query, `SEARCH_MAX_RESULTS`
    pub max_results: usize,
    /// Per-request timeout, `SEARCH_TIMEOUT_SECS`
    pub timeout: Duration,
}

impl AgentConfig {
    /// Load configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok().filter(|v| !v.is_empty()))
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            model: ModelConfig::from_lookup(&lookup)?,
            search: SearchConfig::from_lookup(&lookup)?,
        })
    }
}

impl ModelConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint =
            lookup("MODEL_ENDPOINT").unwrap_or_else(|| DEFAULT_MODEL_ENDPOINT.to_string());
        validate_url("MODEL_ENDPOINT", &endpoint)?;

        let api_token = lookup("HUGGINGFACEHUB_API_TOKEN").ok_or(ConfigError::MissingVar {
            name: "HUGGINGFACEHUB_API_TOKEN".to_string(),
        })?;

        let timeout = parse_secs(lookup, "MODEL_TIMEOUT_SECS", DEFAULT_MODEL_TIMEOUT_SECS)?;

        Ok(Self {
            endpoint,
            api_token,
            timeout,
        })
    }
}

impl SearchConfig {
    fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let endpoint =
            lookup("SEARCH_ENDPOINT").unwrap_or_else(|| DEFAULT_SEARCH_ENDPOINT.to_string());
        validate_url("SEARCH_ENDPOINT", &endpoint)?;

        let api_key = lookup("SERPER_API_KEY").unwrap_or_default();

        let max_results = match lookup("SEARCH_MAX_RESULTS") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidVar {
                name: "SEARCH_MAX_RESULTS".to_string(),
                value: raw,
            })?,
            None => DEFAULT_SEARCH_MAX_RESULTS,
        };

        let timeout = parse_secs(lookup, "SEARCH_TIMEOUT_SECS", DEFAULT_SEARCH_TIMEOUT_SECS)?;

        Ok(Self {
            endpoint,
            api_key,
            max_results,
            timeout,
        })
    }
}

fn parse_secs<F>(lookup: &F, name: &str, default: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(raw) => {
            let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidVar {
                name: name.to_string(),
                value: raw,
            })?;
            Ok(Duration::from_secs(secs))
        }
        None => Ok(Duration::from_secs(default)),
    }
}

fn validate_url(name: &str, value: &str) -> Result<(), ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        name: name.to_string(),
        message: e.to_string(),
    })?;
    Ok(())
}

/// Configuration loading errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable {name}")]
    MissingVar { name: String },

    #[error("environment variable {name} has invalid value {value:?}")]
    InvalidVar { name: String, value: String },

    #[error("environment variable {name} is not a valid URL: {message}")]
    InvalidUrl { name: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_applied_when_only_token_is_set() {
        let lookup = lookup_from(&[("HUGGINGFACEHUB_API_TOKEN", "hf_test")]);
        let config = AgentConfig::from_lookup(lookup).unwrap();

        assert_eq!(config.model.endpoint, DEFAULT_MODEL_ENDPOINT);
        assert_eq!(config.model.api_token, "hf_test");
        assert_eq!(config.model.timeout, Duration::from_secs(30));
        assert_eq!(config.search.endpoint, DEFAULT_SEARCH_ENDPOINT);
        assert_eq!(config.search.api_key, "");
        assert_eq!(config.search.max_results, 3);
        assert_eq!(config.search.timeout, Duration::from_secs(10));
    }

    #[test]
    fn test_missing_model_token_is_an_error() {
        let lookup = lookup_from(&[]);
        let result = AgentConfig::from_lookup(lookup);

        assert!(matches!(result, Err(ConfigError::MissingVar { name }) if name == "HUGGINGFACEHUB_API_TOKEN"));
    }

    #[test]
    fn test_overrides_are_honored() {
        let lookup = lookup_from(&[
            ("HUGGINGFACEHUB_API_TOKEN", "hf_test"),
            ("MODEL_ENDPOINT", "https://models.example.com/generate"),
            ("MODEL_TIMEOUT_SECS", "5"),
            ("SEARCH_ENDPOINT", "https://search.example.com/api"),
            ("SERPER_API_KEY", "sk_test"),
            ("SEARCH_MAX_RESULTS", "7"),
            ("SEARCH_TIMEOUT_SECS", "2"),
        ]);
        let config = AgentConfig::from_lookup(lookup).unwrap();

        assert_eq!(config.model.endpoint, "https://models.example.com/generate");
        assert_eq!(config.model.timeout, Duration::from_secs(5));
        assert_eq!(config.search.endpoint, "https://search.example.com/api");
        assert_eq!(config.search.api_key, "sk_test");
        assert_eq!(config.search.max_results, 7);
        assert_eq!(config.search.timeout, Duration::from_secs(2));
    }

    #[test]
    fn test_invalid_timeout_is_an_error() {
        let lookup = lookup_from(&[
            ("HUGGINGFACEHUB_API_TOKEN", "hf_test"),
            ("MODEL_TIMEOUT_SECS", "soon"),
        ]);
        let result = AgentConfig::from_lookup(lookup);

        assert!(matches!(result, Err(ConfigError::InvalidVar { name, .. }) if name == "MODEL_TIMEOUT_SECS"));
    }

    #[test]
    fn test_invalid_endpoint_url_is_an_error() {
        let lookup = lookup_from(&[
            ("HUGGINGFACEHUB_API_TOKEN", "hf_test"),
            ("MODEL_ENDPOINT", "not a url"),
        ]);
        let result = AgentConfig::from_lookup(lookup);

        assert!(matches!(result, Err(ConfigError::InvalidUrl { name, .. }) if name == "MODEL_ENDPOINT"));
    }

    #[test]
    fn test_empty_env_value_falls_back_to_default() {
        // from_env filters out empty values; from_lookup sees them as absent.
        let lookup = lookup_from(&[("HUGGINGFACEHUB_API_TOKEN", "hf_test")]);
        let config = AgentConfig::from_lookup(lookup).unwrap();
        assert_eq!(config.search.max_results, 3);
    }
}
