//! Fee-per-kilobyte estimation.
//!
//! # Responsibilities
//! - Decide which fee sources apply to a network, and in what order
//! - Absorb single-provider failures until the chain is exhausted
//!
//! Policy, first success wins:
//! 1. a network-declared native fee endpoint, returned as-is;
//! 2. the BlockCypher chain-info figure, when BlockCypher carries the coin;
//! 3. the average fee density of a recent-transactions sample from the
//!    cryptoid explorer (mainnet symbols only).
//! Networks matching none of these fail with `NotImplemented`; exhausting
//! the applicable options fails with `FeeUnavailable`.

use serde::Deserialize;

use crate::error::{NetworkError, Result};
use crate::network::record::{FeeSource, NetworkRecord};
use crate::providers::{blockcypher, cryptoid, Blockcypher, Cryptoid, ProviderClient};

#[derive(Debug, Deserialize)]
struct NativeFeeResponse {
    fee_per_kb: f64,
}

/// Per-network fee estimation policy.
#[derive(Debug, Clone)]
pub struct FeeEstimator {
    client: ProviderClient,
    blockcypher: Blockcypher,
    cryptoid: Cryptoid,
    fee_sample_size: usize,
}

impl FeeEstimator {
    pub fn new(
        client: ProviderClient,
        blockcypher: Blockcypher,
        cryptoid: Cryptoid,
        fee_sample_size: usize,
    ) -> Self {
        Self {
            client,
            blockcypher,
            cryptoid,
            fee_sample_size,
        }
    }

    /// Current fee-per-kilobyte for a network, in coin units. Fresh on
    /// every call; nothing is cached.
    pub async fn estimate_fee(&self, record: &NetworkRecord) -> Result<f64> {
        if let Some(FeeSource::Native { url }) = record.fee_source {
            return match self.client.get_json::<NativeFeeResponse>("native", url).await {
                Ok(response) => Ok(response.fee_per_kb),
                Err(NetworkError::ProviderUnavailable { .. }) => {
                    Err(NetworkError::FeeUnavailable(record.name.to_string()))
                }
                Err(other) => Err(other),
            };
        }

        let symbol = record.default_symbol().unwrap_or_default().to_lowercase();
        let try_blockcypher = blockcypher::supports(record);
        let try_cryptoid = !record.is_testnet && cryptoid::supports_symbol(&symbol);

        if !try_blockcypher && !try_cryptoid {
            return Err(NetworkError::not_implemented(record.name, "fee estimation"));
        }

        if try_blockcypher {
            match self.blockcypher.get_fee_per_kb(record).await {
                Ok(fee) => return Ok(fee),
                // Already logged by the provider client; try the next option.
                Err(NetworkError::ProviderUnavailable { .. }) => {}
                Err(other) => return Err(other),
            }
        }

        if try_cryptoid {
            match self
                .cryptoid
                .get_fee_from_last_transactions(record, self.fee_sample_size)
                .await
            {
                Ok(fee) => return Ok(fee),
                Err(NetworkError::ProviderUnavailable { .. }) => {}
                Err(other) => return Err(other),
            }
        }

        Err(NetworkError::FeeUnavailable(record.name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::registry;

    /// Mirrors the policy table: which networks have any fee source at all.
    #[test]
    fn test_fee_source_classification() {
        for record in registry::all() {
            let symbol = record.default_symbol().unwrap_or_default().to_lowercase();
            let has_source = record.fee_source.is_some()
                || blockcypher::supports(record)
                || (!record.is_testnet && cryptoid::supports_symbol(&symbol));
            match record.name {
                "bitcoin" | "test-bitcoin" | "litecoin" | "dogecoin" | "dash" | "raven"
                | "monacoin" => {
                    assert!(has_source, "{} should have a fee source", record.name)
                }
                _ => assert!(!has_source, "{} should have no fee source", record.name),
            }
        }
    }
}
