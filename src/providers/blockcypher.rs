//! BlockCypher adapter: bulk UTXO retrieval and chain-info fee figures.

use serde::Deserialize;

use crate::error::Result;
use crate::network::record::NetworkRecord;
use crate::providers::ProviderClient;
use crate::utxo::Utxo;

const PROVIDER: &str = "blockcypher";

/// Coin/chain URL path segments for the networks BlockCypher carries.
pub fn chain_path(record: &NetworkRecord) -> Option<(&'static str, &'static str)> {
    match record.name {
        "bitcoin" => Some(("btc", "main")),
        "test-bitcoin" => Some(("btc", "test3")),
        "litecoin" => Some(("ltc", "main")),
        "dogecoin" => Some(("doge", "main")),
        "dash" => Some(("dash", "main")),
        _ => None,
    }
}

/// Whether BlockCypher serves this network at all.
pub fn supports(record: &NetworkRecord) -> bool {
    chain_path(record).is_some()
}

/// One unspent entry in an address payload. `value` is in the smallest
/// coin unit.
#[derive(Debug, Deserialize)]
struct TxRef {
    tx_hash: String,
    tx_output_n: u32,
    value: u64,
    #[serde(default)]
    script: String,
}

#[derive(Debug, Deserialize)]
struct AddressInfo {
    #[serde(default)]
    txrefs: Vec<TxRef>,
}

/// Chain summary; fee figures are smallest-unit per kilobyte.
#[derive(Debug, Deserialize)]
struct ChainInfo {
    high_fee_per_kb: u64,
}

/// BlockCypher API adapter.
#[derive(Debug, Clone)]
pub struct Blockcypher {
    client: ProviderClient,
    base_url: String,
}

impl Blockcypher {
    pub fn new(client: ProviderClient, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Unspent outputs for an address, normalized to coin units, in the
    /// order the provider returned them.
    pub async fn get_utxo(&self, record: &NetworkRecord, address: &str) -> Result<Vec<Utxo>> {
        let (coin, chain) = chain_path(record)
            .ok_or_else(|| crate::error::NetworkError::not_implemented(record.name, "UTXO retrieval"))?;
        let url = format!(
            "{}/{}/{}/addrs/{}?unspentOnly=true&includeScript=true&limit=2000",
            self.base_url, coin, chain, address
        );
        let info: AddressInfo = self.client.get_json(PROVIDER, &url).await?;
        Ok(info
            .txrefs
            .into_iter()
            .map(|entry| Utxo {
                tx_id: entry.tx_hash,
                vout: entry.tx_output_n,
                value: entry.value as f64 / record.subunit_factor,
                tx_script: entry.script,
            })
            .collect())
    }

    /// Current fee-per-kilobyte in coin units.
    pub async fn get_fee_per_kb(&self, record: &NetworkRecord) -> Result<f64> {
        let (coin, chain) = chain_path(record)
            .ok_or_else(|| crate::error::NetworkError::not_implemented(record.name, "fee estimation"))?;
        let url = format!("{}/{}/{}", self.base_url, coin, chain);
        let info: ChainInfo = self.client.get_json(PROVIDER, &url).await?;
        Ok(info.high_fee_per_kb as f64 / record.subunit_factor)
    }
}
