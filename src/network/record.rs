//! Static per-network parameter records.
//!
//! # Responsibilities
//! - Hold the immutable parameter set identifying one coin/chain variant
//! - Build testnet variants by data composition (base record + overrides)
//! - Construct block-explorer transaction URLs

use std::collections::HashMap;

use crate::providers::cryptoid;

/// Kind of base58 address prefix carried by a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Base58Prefix {
    /// P2PKH address prefix.
    PubkeyHash,
    /// P2SH address prefix.
    ScriptHash,
    /// WIF private-key prefix.
    SecretKey,
}

/// How a network obtains its fee-per-kilobyte, when it has a source of its
/// own instead of the shared provider chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeeSource {
    /// Network-specific endpoint returning `{"fee_per_kb": <coin/kb>}`.
    Native { url: &'static str },
}

/// Immutable parameter set for one coin/chain variant.
///
/// Records are constructed once by the registry and never mutated; all
/// query-time access is read-only.
#[derive(Debug, Clone)]
pub struct NetworkRecord {
    /// Unique lowercase name, e.g. `"zcash"`, `"test-zcash"`.
    pub name: &'static str,
    /// Ticker symbols; the first is the default. Non-empty for active
    /// networks.
    pub symbols: &'static [&'static str],
    /// DNS seed hostnames.
    pub seeds: &'static [&'static str],
    /// Default P2P port.
    pub port: u16,
    /// Peer address -> observed failure count. Read-only at query time.
    pub blacklist_nodes: HashMap<String, u32>,
    /// Protocol message-start magic.
    pub message_start: &'static [u8],
    /// Base58 prefix bytes by kind.
    pub base58_prefixes: &'static [(Base58Prefix, u8)],
    /// Testnet flag; drives the `-TESTNET` symbol suffix convention.
    pub is_testnet: bool,
    /// Block-explorer transaction URL template with one `{}` placeholder.
    pub blockexplorer_tx: Option<&'static str>,
    /// Network-specific fee source, if any.
    pub fee_source: Option<FeeSource>,
    /// Conversion constant between the coin's smallest unit and its
    /// display unit (1e8 for satoshi-like coins, 1e18 for wei).
    pub subunit_factor: f64,
}

/// Fields a testnet variant replaces on its mainnet base record.
///
/// Anything not listed here is inherited from the base by plain copy;
/// there is no field-resolution hierarchy.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkOverrides {
    pub name: &'static str,
    pub seeds: &'static [&'static str],
    pub port: u16,
    pub message_start: Option<&'static [u8]>,
    pub base58_prefixes: Option<&'static [(Base58Prefix, u8)]>,
    pub blockexplorer_tx: Option<&'static str>,
}

impl NetworkRecord {
    /// Default (first) symbol. `None` only for placeholder records without
    /// declared symbols.
    pub fn default_symbol(&self) -> Option<&'static str> {
        self.symbols.first().copied()
    }

    /// Look up one base58 prefix byte.
    pub fn base58_prefix(&self, kind: Base58Prefix) -> Option<u8> {
        self.base58_prefixes
            .iter()
            .find(|(k, _)| *k == kind)
            .map(|(_, b)| *b)
    }

    /// Build the testnet variant of this record.
    pub fn testnet_variant(&self, overrides: NetworkOverrides) -> NetworkRecord {
        NetworkRecord {
            name: overrides.name,
            seeds: overrides.seeds,
            port: overrides.port,
            message_start: overrides.message_start.unwrap_or(self.message_start),
            base58_prefixes: overrides.base58_prefixes.unwrap_or(self.base58_prefixes),
            is_testnet: true,
            // Testnets have no fee source of their own.
            fee_source: None,
            blockexplorer_tx: overrides.blockexplorer_tx,
            symbols: self.symbols,
            blacklist_nodes: self.blacklist_nodes.clone(),
            subunit_factor: self.subunit_factor,
        }
    }

    /// Block-explorer URL for a transaction, or `None` when the network has
    /// no explorer. Declared templates win; cryptoid-listed symbols fall
    /// back to the cryptoid explorer.
    pub fn transaction_url(&self, tx_hash: &str) -> Option<String> {
        if let Some(template) = self.blockexplorer_tx {
            return Some(template.replacen("{}", tx_hash, 1));
        }
        let symbol = self.default_symbol()?.to_lowercase();
        if !self.is_testnet && cryptoid::supports_symbol(&symbol) {
            return Some(format!(
                "https://chainz.cryptoid.info/{}/tx.dws?{}.htm",
                symbol, tx_hash
            ));
        }
        None
    }
}
