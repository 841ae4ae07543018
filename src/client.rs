//! Top-level client wiring configuration to the provider policies.

use crate::config::{validate_config, NetworkConfig};
use crate::error::Result;
use crate::fees::FeeEstimator;
use crate::network::record::NetworkRecord;
use crate::providers::{Blockcypher, Cryptoid, ProviderClient};
use crate::utxo::{Utxo, UtxoFetcher};

/// Entry point for chain-data operations.
///
/// Resolve a network first (`network::resolve`), then ask this client for
/// fees or UTXOs on the resolved record.
#[derive(Debug, Clone)]
pub struct NetworkClient {
    fees: FeeEstimator,
    utxo: UtxoFetcher,
}

impl NetworkClient {
    pub fn new(config: NetworkConfig) -> Result<Self> {
        validate_config(&config)?;
        let client = ProviderClient::new(&config.providers)?;
        let blockcypher =
            Blockcypher::new(client.clone(), config.providers.blockcypher_url.clone());
        let cryptoid = Cryptoid::new(client.clone(), config.providers.cryptoid_url.clone());
        let fees = FeeEstimator::new(
            client,
            blockcypher.clone(),
            cryptoid.clone(),
            config.providers.fee_sample_size,
        );
        let utxo = UtxoFetcher::new(blockcypher, cryptoid);
        Ok(Self { fees, utxo })
    }

    /// Client with the built-in provider endpoints.
    pub fn with_defaults() -> Result<Self> {
        Self::new(NetworkConfig::default())
    }

    /// Current fee-per-kilobyte for a network, in coin units.
    pub async fn estimate_fee(&self, record: &NetworkRecord) -> Result<f64> {
        self.fees.estimate_fee(record).await
    }

    /// Unspent outputs covering `minimum_amount`, greedily selected in
    /// provider order.
    pub async fn get_utxo(
        &self,
        record: &NetworkRecord,
        address: &str,
        minimum_amount: f64,
    ) -> Result<Vec<Utxo>> {
        self.utxo.get_utxo(record, address, minimum_amount).await
    }
}
