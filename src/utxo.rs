//! Unspent-output retrieval.
//!
//! # Responsibilities
//! - Pick the right provider for a network
//! - Unify both providers' payload shapes into one `Utxo` representation
//! - Apply the greedy accumulation rule against the requested minimum

use crate::error::{NetworkError, Result};
use crate::network::record::NetworkRecord;
use crate::providers::{blockcypher, cryptoid, Blockcypher, Cryptoid};

/// One unspent transaction output, in coin units.
#[derive(Debug, Clone, PartialEq)]
pub struct Utxo {
    /// Hex transaction hash.
    pub tx_id: String,
    /// Output index.
    pub vout: u32,
    /// Value in coin units (provider smallest-unit value divided by the
    /// network's subunit factor).
    pub value: f64,
    /// Hex-encoded output script.
    pub tx_script: String,
}

/// Per-network UTXO retrieval policy.
#[derive(Debug, Clone)]
pub struct UtxoFetcher {
    blockcypher: Blockcypher,
    cryptoid: Cryptoid,
}

impl UtxoFetcher {
    pub fn new(blockcypher: Blockcypher, cryptoid: Cryptoid) -> Self {
        Self {
            blockcypher,
            cryptoid,
        }
    }

    /// Unspent outputs for `address`, selected greedily in provider order
    /// until their summed value covers `minimum_amount`.
    ///
    /// Zero provider entries yield an empty vec. When the accumulated
    /// value never reaches the minimum, everything retrieved is returned
    /// (best-effort selection). Networks without a UTXO provider fail with
    /// `NotImplemented`.
    pub async fn get_utxo(
        &self,
        record: &NetworkRecord,
        address: &str,
        minimum_amount: f64,
    ) -> Result<Vec<Utxo>> {
        let symbol = record.default_symbol().unwrap_or_default().to_lowercase();

        let fetched = if blockcypher::supports(record) {
            self.blockcypher.get_utxo(record, address).await
        } else if !record.is_testnet && cryptoid::supports_symbol(&symbol) {
            self.cryptoid.get_utxo(record, address).await
        } else {
            return Err(NetworkError::not_implemented(record.name, "UTXO retrieval"));
        };

        // A single provider backs each network, so its failure exhausts
        // the fallback chain.
        let entries = fetched.map_err(|err| match err {
            NetworkError::ProviderUnavailable { .. } => {
                NetworkError::UtxoUnavailable(record.name.to_string())
            }
            other => other,
        })?;

        Ok(select_until(entries, minimum_amount))
    }
}

/// Select entries in order while the running sum of already-selected
/// values stays below `minimum_amount`.
fn select_until(entries: Vec<Utxo>, minimum_amount: f64) -> Vec<Utxo> {
    let mut selected = Vec::new();
    let mut total = 0.0;
    for utxo in entries {
        if total >= minimum_amount {
            break;
        }
        total += utxo.value;
        selected.push(utxo);
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_entries() -> Vec<Utxo> {
        [
            (
                "e0832ca854e4577cab20413013d6251c4a426022112d9ff222067bb5d8b6b723",
                0,
                90000070u64,
            ),
            (
                "308b997d8583aa48a7b265246eb76e5d030495468bbb87989606aea769b03600",
                1,
                15500105,
            ),
            (
                "e7cc6e21b9f2d1d7bdc4fd40096ba74bc714f434c2dc5a5e414ad8c32235368a",
                1,
                10000000,
            ),
        ]
        .into_iter()
        .map(|(tx_id, vout, raw)| Utxo {
            tx_id: tx_id.to_string(),
            vout,
            value: raw as f64 / 1e8,
            tx_script: "76a9143804c5840717fb1c5c8ac0bd2726556a51e91fcd99ac".to_string(),
        })
        .collect()
    }

    #[test]
    fn test_accumulation_stops_once_covered() {
        let selected = select_until(sample_entries(), 1.0);
        assert_eq!(selected.len(), 2);
        assert_eq!(selected[0].value, 0.9000007);
        assert_eq!(selected[1].value, 0.15500105);
        assert!(selected[0].value + selected[1].value > 1.0);
    }

    #[test]
    fn test_insufficient_value_returns_everything() {
        let selected = select_until(sample_entries(), 50.0);
        assert_eq!(selected.len(), 3);
    }

    #[test]
    fn test_zero_entries_is_empty_not_error() {
        assert!(select_until(Vec::new(), 1.0).is_empty());
    }

    #[test]
    fn test_provider_order_is_preserved() {
        let selected = select_until(sample_entries(), 1.0);
        assert!(selected[0].tx_id.starts_with("e0832ca8"));
        assert!(selected[1].tx_id.starts_with("308b997d"));
    }

    #[test]
    fn test_value_round_trips_to_smallest_unit() {
        for (utxo, raw) in select_until(sample_entries(), 50.0)
            .into_iter()
            .zip([90000070u64, 15500105, 10000000])
        {
            assert_eq!((utxo.value * 1e8).round() as u64, raw);
        }
    }

    #[test]
    fn test_structural_equality() {
        let a = sample_entries();
        let b = sample_entries();
        assert_eq!(a, b);
    }
}
