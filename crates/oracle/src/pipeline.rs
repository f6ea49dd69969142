//! The fetch, extract and encode pipeline.

use crate::encoding::{Uint256, encode_uint256};
use crate::error::Result;
use crate::extract::extract_steps;
use crate::source::HealthSource;

/// Reports the current step count from a [`HealthSource`] as a `uint256` word.
pub struct StepsOracle<S: HealthSource> {
    source: S,
}

impl<S: HealthSource> StepsOracle<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Fetches one record and returns its `steps` field.
    pub async fn fetch_steps(&self) -> Result<u64> {
        let body = self.source.fetch().await?;
        extract_steps(&body)
    }

    /// Fetches, extracts and encodes. Any failure is returned as-is.
    #[tracing::instrument(skip(self))]
    pub async fn run(&self) -> Result<Uint256> {
        metrics::counter!("oracle_fetch_total").increment(1);

        match self.fetch_steps().await {
            Ok(steps) => {
                tracing::info!(steps, "fetched step count");
                Ok(encode_uint256(steps))
            }
            Err(err) => {
                metrics::counter!("oracle_fetch_failures_total").increment(1);
                tracing::error!(error = %err, "steps oracle run failed");
                Err(err)
            }
        }
    }
}
