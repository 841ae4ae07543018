//! Symbol-to-network resolution.
//!
//! # Responsibilities
//! - Build the symbol map once, lazily, from the registry
//! - Resolve case-insensitive symbols, honoring the `-TESTNET` suffix
//!   convention for test networks

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::error::{NetworkError, Result};
use crate::network::record::NetworkRecord;
use crate::network::registry;

static SYMBOL_MAP: OnceLock<HashMap<String, &'static NetworkRecord>> = OnceLock::new();

/// Resolve a network by symbol, case-insensitively.
///
/// Testnet records are keyed with a `-TESTNET` suffix, so `"btc"` resolves
/// to bitcoin and `"btc-testnet"` to its test network. Unknown symbols fail
/// with [`NetworkError::UnsupportedNetwork`].
pub fn resolve(symbol: &str) -> Result<&'static NetworkRecord> {
    let key = symbol.to_uppercase();
    symbol_map()
        .get(&key)
        .copied()
        .ok_or(NetworkError::UnsupportedNetwork(key))
}

/// The full symbol map, built at most once per process.
fn symbol_map() -> &'static HashMap<String, &'static NetworkRecord> {
    SYMBOL_MAP.get_or_init(|| {
        let mut map = HashMap::new();
        for record in registry::all() {
            for symbol in record.symbols {
                let key = if record.is_testnet {
                    format!("{}-TESTNET", symbol.to_uppercase())
                } else {
                    symbol.to_uppercase()
                };
                let previous = map.insert(key.clone(), record);
                debug_assert!(
                    previous.is_none(),
                    "symbol {} claimed by both {} and {}",
                    key,
                    previous.map(|r: &NetworkRecord| r.name).unwrap_or(""),
                    record.name
                );
            }
        }
        map
    })
}
