use crate::{env_or_default, ConfigError, FromEnv};
use std::time::Duration;

/// Configuration for the upstream product API.
///
/// The upstream service owns all product data; this application only
/// forwards requests to it. The base URL points at the service root,
/// without the `/api/web/v1` prefix.
#[derive(Clone, Debug)]
pub struct UpstreamConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl UpstreamConfig {
    /// Build a full upstream URL for an absolute path like `/api/web/v1/products`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl FromEnv for UpstreamConfig {
    /// Reads from environment variables with sensible defaults:
    /// - UPSTREAM_API_BASE: defaults to http://localhost:8001
    /// - UPSTREAM_TIMEOUT_SECS: defaults to 30
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = env_or_default("UPSTREAM_API_BASE", "http://localhost:8001");
        let timeout_secs: u64 = env_or_default("UPSTREAM_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "UPSTREAM_TIMEOUT_SECS".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self {
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8001".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upstream_config_defaults() {
        temp_env::with_vars(
            [
                ("UPSTREAM_API_BASE", None::<&str>),
                ("UPSTREAM_TIMEOUT_SECS", None::<&str>),
            ],
            || {
                let config = UpstreamConfig::from_env().unwrap();
                assert_eq!(config.base_url, "http://localhost:8001");
                assert_eq!(config.timeout, Duration::from_secs(30));
            },
        );
    }

    #[test]
    fn test_upstream_config_custom_values() {
        temp_env::with_vars(
            [
                ("UPSTREAM_API_BASE", Some("http://catalog.internal:9000/")),
                ("UPSTREAM_TIMEOUT_SECS", Some("5")),
            ],
            || {
                let config = UpstreamConfig::from_env().unwrap();
                assert_eq!(config.base_url, "http://catalog.internal:9000/");
                assert_eq!(config.timeout, Duration::from_secs(5));
            },
        );
    }

    #[test]
    fn test_upstream_config_invalid_timeout() {
        temp_env::with_var("UPSTREAM_TIMEOUT_SECS", Some("soon"), || {
            let err = UpstreamConfig::from_env().unwrap_err();
            assert!(err.to_string().contains("UPSTREAM_TIMEOUT_SECS"));
        });
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let config = UpstreamConfig {
            base_url: "http://localhost:8001/".to_string(),
            timeout: Duration::from_secs(30),
        };
        assert_eq!(
            config.endpoint("/api/web/v1/products"),
            "http://localhost:8001/api/web/v1/products"
        );
    }

    #[test]
    fn test_endpoint_with_default_base() {
        let config = UpstreamConfig::default();
        assert_eq!(
            config.endpoint("/api/web/v1/product"),
            "http://localhost:8001/api/web/v1/product"
        );
    }
}
