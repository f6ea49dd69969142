//! Where the oracle reads health records from.

use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;

use crate::config::OracleConfig;
use crate::error::{OracleError, Result};

/// Produces one health record document per call.
#[async_trait]
pub trait HealthSource: Send + Sync {
    /// Fetches and parses a single document.
    async fn fetch(&self) -> Result<Value>;
}

/// Fetches records from the feed over HTTP with a single GET.
#[derive(Debug, Clone)]
pub struct HttpHealthSource {
    url: String,
    client: reqwest::Client,
}

impl HttpHealthSource {
    /// Creates a source for `url`; every request is bounded by `timeout`.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(OracleError::Client)?;

        Ok(Self::with_client(url, client))
    }

    /// Creates a source around a caller-built client (proxy, TLS or timeout
    /// settings are taken from it as-is).
    pub fn with_client(url: impl Into<String>, client: reqwest::Client) -> Self {
        Self {
            url: url.into(),
            client,
        }
    }

    pub fn from_config(config: &OracleConfig) -> Result<Self> {
        Self::new(config.url.clone(), config.timeout)
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl HealthSource for HttpHealthSource {
    #[tracing::instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<Value> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(OracleError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await?;
        tracing::debug!(bytes = bytes.len(), "received feed response");

        Ok(serde_json::from_slice(&bytes)?)
    }
}

/// Serves the same document on every call.
#[derive(Debug, Clone)]
pub struct StaticHealthSource {
    body: Value,
}

impl StaticHealthSource {
    pub fn new(body: Value) -> Self {
        Self { body }
    }
}

#[async_trait]
impl HealthSource for StaticHealthSource {
    async fn fetch(&self) -> Result<Value> {
        Ok(self.body.clone())
    }
}
