//! External chain-data providers.
//!
//! # Responsibilities
//! - Share one HTTP client with a conservative fixed timeout
//! - Map transport, status and decode failures to `ProviderUnavailable`
//!   so the fee/UTXO policies can fall through to the next option
//! - Record provider health for observability

pub mod blockcypher;
pub mod cryptoid;

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::ProviderConfig;
use crate::error::{NetworkError, Result};
use crate::observability::metrics;

pub use blockcypher::Blockcypher;
pub use cryptoid::Cryptoid;

/// Shared HTTP client for provider calls.
///
/// Cloning is cheap; all clones reuse the same connection pool.
#[derive(Debug, Clone)]
pub struct ProviderClient {
    http: reqwest::Client,
}

impl ProviderClient {
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|e| NetworkError::Config(format!("cannot build HTTP client: {}", e)))?;
        Ok(Self { http })
    }

    /// GET a JSON document from one provider.
    ///
    /// Any failure (connect, timeout, non-2xx status, malformed body) is
    /// logged, counted and returned as `ProviderUnavailable`; the caller
    /// decides whether another option remains.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        provider: &'static str,
        url: &str,
    ) -> Result<T> {
        match self.request(url).await {
            Ok(value) => {
                metrics::record_provider_health(provider, true);
                Ok(value)
            }
            Err(reason) => {
                tracing::warn!(provider, url, %reason, "provider request failed");
                metrics::record_provider_health(provider, false);
                Err(NetworkError::ProviderUnavailable { provider, reason })
            }
        }
    }

    async fn request<T: DeserializeOwned>(&self, url: &str) -> std::result::Result<T, String> {
        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| e.to_string())?
            .error_for_status()
            .map_err(|e| e.to_string())?;
        response
            .json::<T>()
            .await
            .map_err(|e| format!("malformed payload: {}", e))
    }
}
