//! cryptoid.info adapter: per-explorer unspent outputs and a recent
//! transactions sample for the fee fallback.

use serde::Deserialize;

use crate::error::Result;
use crate::network::record::NetworkRecord;
use crate::providers::ProviderClient;
use crate::utxo::Utxo;

const PROVIDER: &str = "cryptoid";

/// Lowercase symbols the cryptoid explorer lists. Mainnets only; the
/// explorer has no testnet chains.
pub const SUPPORTED_SYMBOLS: &[&str] = &["btc", "ltc", "dash", "doge", "mona", "rvn"];

pub fn supports_symbol(symbol: &str) -> bool {
    SUPPORTED_SYMBOLS.contains(&symbol)
}

/// One unspent entry. `value` is a numeric string in the smallest unit,
/// and the output-index field is misspelled in the provider's payload.
#[derive(Debug, Deserialize)]
struct UnspentOutput {
    tx_hash: String,
    tx_ouput_n: u32,
    value: String,
    script: String,
}

#[derive(Debug, Deserialize)]
struct UnspentResponse {
    #[serde(default)]
    unspent_outputs: Vec<UnspentOutput>,
}

/// One recent confirmed transaction, for the fee-density fallback.
/// `fee` is in coin units, `size` in bytes.
#[derive(Debug, Deserialize)]
struct RecentTx {
    fee: f64,
    size: u64,
}

/// cryptoid explorer API adapter.
#[derive(Debug, Clone)]
pub struct Cryptoid {
    client: ProviderClient,
    base_url: String,
}

impl Cryptoid {
    pub fn new(client: ProviderClient, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Unspent outputs for an address, normalized to coin units, in the
    /// order the provider returned them. Entries with a non-numeric value
    /// field are dropped rather than failing the whole response.
    pub async fn get_utxo(&self, record: &NetworkRecord, address: &str) -> Result<Vec<Utxo>> {
        let symbol = record.default_symbol().unwrap_or_default().to_lowercase();
        let url = format!(
            "{}/{}/api.dws?q=unspent&active={}",
            self.base_url, symbol, address
        );
        let response: UnspentResponse = self.client.get_json(PROVIDER, &url).await?;
        Ok(response
            .unspent_outputs
            .into_iter()
            .filter_map(|entry| {
                let raw: u64 = entry.value.parse().ok()?;
                Some(Utxo {
                    tx_id: entry.tx_hash,
                    vout: entry.tx_ouput_n,
                    value: raw as f64 / record.subunit_factor,
                    tx_script: entry.script,
                })
            })
            .collect())
    }

    /// Average fee density (coin units per kilobyte) over the last
    /// `sample_size` confirmed transactions.
    pub async fn get_fee_from_last_transactions(
        &self,
        record: &NetworkRecord,
        sample_size: usize,
    ) -> Result<f64> {
        let symbol = record.default_symbol().unwrap_or_default().to_lowercase();
        let url = format!(
            "{}/{}/api.dws?q=lasttxs&count={}",
            self.base_url, symbol, sample_size
        );
        let transactions: Vec<RecentTx> = self.client.get_json(PROVIDER, &url).await?;

        let densities: Vec<f64> = transactions
            .iter()
            .filter(|tx| tx.size > 0)
            .map(|tx| tx.fee / tx.size as f64 * 1000.0)
            .collect();
        if densities.is_empty() {
            return Err(crate::error::NetworkError::ProviderUnavailable {
                provider: PROVIDER,
                reason: "no recent transactions in sample".to_string(),
            });
        }
        Ok(densities.iter().sum::<f64>() / densities.len() as f64)
    }
}
