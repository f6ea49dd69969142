//! Oracle configuration loaded from environment variables.

use std::time::Duration;

/// Feed queried when `ORACLE_URL` is unset.
pub const DEFAULT_SOURCE_URL: &str = "https://powerhabits-server.vercel.app/api/health";

/// Request timeout when `ORACLE_TIMEOUT_MS` is unset.
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Reads from environment variables:
/// - `ORACLE_URL`: feed endpoint (default: [`DEFAULT_SOURCE_URL`])
/// - `ORACLE_TIMEOUT_MS`: request timeout in milliseconds (default: `3000`)
/// - `RUST_LOG`: tracing filter directive (default: `"info"`)
#[derive(Debug, Clone)]
pub struct OracleConfig {
    pub url: String,
    pub timeout: Duration,
    pub log_level: String,
}

impl OracleConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Missing or unparsable values fall back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            url: lookup("ORACLE_URL")
                .filter(|u| !u.trim().is_empty())
                .unwrap_or(defaults.url),
            timeout: lookup("ORACLE_TIMEOUT_MS")
                .and_then(|ms| ms.parse().ok())
                .filter(|ms| *ms > 0)
                .map(Duration::from_millis)
                .unwrap_or(defaults.timeout),
            log_level: lookup("RUST_LOG").unwrap_or(defaults.log_level),
        }
    }
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            log_level: "info".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_values() {
        let config = OracleConfig::default();
        assert_eq!(config.url, DEFAULT_SOURCE_URL);
        assert_eq!(config.timeout, Duration::from_millis(3000));
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_lookup_overrides() {
        let config = OracleConfig::from_lookup(|key| match key {
            "ORACLE_URL" => Some("http://localhost:3000/api/health".to_string()),
            "ORACLE_TIMEOUT_MS" => Some("750".to_string()),
            _ => None,
        });
        assert_eq!(config.url, "http://localhost:3000/api/health");
        assert_eq!(config.timeout, Duration::from_millis(750));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = OracleConfig::from_lookup(|key| match key {
            "ORACLE_URL" => Some("  ".to_string()),
            "ORACLE_TIMEOUT_MS" => Some("0".to_string()),
            _ => None,
        });
        assert_eq!(config.url, DEFAULT_SOURCE_URL);
        assert_eq!(config.timeout, Duration::from_millis(DEFAULT_TIMEOUT_MS));
    }
}
