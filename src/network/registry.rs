//! The static set of supported networks.
//!
//! Records are built once on first access and live for the process
//! lifetime. Parameter values (ports, magics, prefixes, seeds) come from
//! each coin's reference chain parameters.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::network::record::Base58Prefix::{PubkeyHash, ScriptHash, SecretKey};
use crate::network::record::{FeeSource, NetworkOverrides, NetworkRecord};

static REGISTRY: OnceLock<Vec<NetworkRecord>> = OnceLock::new();

/// All known network records, mainnets and testnets.
pub fn all() -> &'static [NetworkRecord] {
    REGISTRY.get_or_init(build_records)
}

/// Look up a record by its unique lowercase name.
pub fn by_name(name: &str) -> Option<&'static NetworkRecord> {
    all().iter().find(|record| record.name == name)
}

fn build_records() -> Vec<NetworkRecord> {
    let bitcoin = NetworkRecord {
        name: "bitcoin",
        symbols: &["BTC", "XBT"],
        seeds: &[
            "seed.bitcoin.sipa.be",
            "dnsseed.bluematt.me",
            "dnsseed.bitcoin.dashjr.org",
            "seed.bitcoinstats.com",
        ],
        port: 8333,
        blacklist_nodes: HashMap::new(),
        message_start: &[0xf9, 0xbe, 0xb4, 0xd9],
        base58_prefixes: &[(PubkeyHash, 0x00), (ScriptHash, 0x05), (SecretKey, 0x80)],
        is_testnet: false,
        blockexplorer_tx: None,
        fee_source: None,
        subunit_factor: 1e8,
    };
    let test_bitcoin = bitcoin.testnet_variant(NetworkOverrides {
        name: "test-bitcoin",
        seeds: &[
            "testnet-seed.bitcoin.jonasschnelli.ch",
            "seed.tbtc.petertodd.org",
            "testnet-seed.bluematt.me",
        ],
        port: 18333,
        message_start: Some(&[0x0b, 0x11, 0x09, 0x07]),
        base58_prefixes: Some(&[(PubkeyHash, 0x6f), (ScriptHash, 0xc4), (SecretKey, 0xef)]),
        blockexplorer_tx: None,
    });

    let litecoin = NetworkRecord {
        name: "litecoin",
        symbols: &["LTC"],
        seeds: &[
            "seed-a.litecoin.loshan.co.uk",
            "dnsseed.thrasher.io",
            "dnsseed.litecointools.com",
        ],
        port: 9333,
        blacklist_nodes: HashMap::new(),
        message_start: &[0xfb, 0xc0, 0xb6, 0xdb],
        base58_prefixes: &[(PubkeyHash, 0x30), (ScriptHash, 0x32), (SecretKey, 0xb0)],
        is_testnet: false,
        blockexplorer_tx: None,
        fee_source: None,
        subunit_factor: 1e8,
    };

    let dogecoin = NetworkRecord {
        name: "dogecoin",
        symbols: &["DOGE"],
        seeds: &["seed.multidoge.org", "seed2.multidoge.org"],
        port: 22556,
        blacklist_nodes: HashMap::new(),
        message_start: &[0xc0, 0xc0, 0xc0, 0xc0],
        base58_prefixes: &[(PubkeyHash, 0x1e), (ScriptHash, 0x16), (SecretKey, 0x9e)],
        is_testnet: false,
        blockexplorer_tx: None,
        fee_source: None,
        subunit_factor: 1e8,
    };

    let dash = NetworkRecord {
        name: "dash",
        symbols: &["DASH"],
        seeds: &["dnsseed.dash.org", "dnsseed.dashdot.io"],
        port: 9999,
        blacklist_nodes: HashMap::new(),
        message_start: &[0xbf, 0x0c, 0x6b, 0xbd],
        base58_prefixes: &[(PubkeyHash, 0x4c), (ScriptHash, 0x10), (SecretKey, 0xcc)],
        is_testnet: false,
        blockexplorer_tx: None,
        fee_source: None,
        subunit_factor: 1e8,
    };

    let ravencoin = NetworkRecord {
        name: "raven",
        symbols: &["RVN"],
        seeds: &["seed-raven.ravencoin.org", "seed-raven.bitactivate.com"],
        port: 8767,
        blacklist_nodes: HashMap::new(),
        message_start: &[0x52, 0x41, 0x56, 0x4e],
        base58_prefixes: &[(PubkeyHash, 0x3c), (ScriptHash, 0x7a), (SecretKey, 0x80)],
        is_testnet: false,
        blockexplorer_tx: None,
        fee_source: Some(FeeSource::Native {
            url: "https://api.ravencoin.network/api/utils/estimatefee",
        }),
        subunit_factor: 1e8,
    };

    let monacoin = NetworkRecord {
        name: "monacoin",
        symbols: &["MONA"],
        seeds: &["dnsseed.monacoin.org"],
        port: 9401,
        blacklist_nodes: HashMap::new(),
        message_start: &[0xfb, 0xc0, 0xb6, 0xdb],
        base58_prefixes: &[(PubkeyHash, 0x32), (ScriptHash, 0x37), (SecretKey, 0xb0)],
        is_testnet: false,
        blockexplorer_tx: None,
        fee_source: None,
        subunit_factor: 1e8,
    };

    let zcash = NetworkRecord {
        name: "zcash",
        symbols: &["ZEC"],
        seeds: &["dnsseed.z.cash", "dnsseed.str4d.xyz", "dnsseed.znodes.org"],
        port: 18233,
        blacklist_nodes: HashMap::new(),
        message_start: &[0x24, 0xe9, 0x27, 0x64],
        base58_prefixes: &[(PubkeyHash, 0xb8), (ScriptHash, 0xbd), (SecretKey, 0x80)],
        is_testnet: false,
        blockexplorer_tx: None,
        fee_source: None,
        subunit_factor: 1e8,
    };
    let test_zcash = zcash.testnet_variant(NetworkOverrides {
        name: "test-zcash",
        seeds: &["dnsseed.testnet.z.cash"],
        port: 18344,
        message_start: Some(&[0xfa, 0x1a, 0xf9, 0xbf]),
        base58_prefixes: None,
        blockexplorer_tx: None,
    });

    let ethereum = NetworkRecord {
        name: "ethereum",
        symbols: &["ETH"],
        seeds: &[],
        port: 30303,
        blacklist_nodes: HashMap::new(),
        message_start: &[],
        base58_prefixes: &[],
        is_testnet: false,
        blockexplorer_tx: Some("https://etherscan.io/tx/{}"),
        fee_source: None,
        subunit_factor: 1e18,
    };
    let test_ethereum = ethereum.testnet_variant(NetworkOverrides {
        name: "test-ethereum",
        seeds: &[],
        port: 30303,
        message_start: None,
        base58_prefixes: None,
        blockexplorer_tx: Some("https://kovan.etherscan.io/tx/{}"),
    });

    let records = vec![
        bitcoin,
        test_bitcoin,
        litecoin,
        dogecoin,
        dash,
        ravencoin,
        monacoin,
        zcash,
        test_zcash,
        ethereum,
        test_ethereum,
    ];

    debug_assert!(
        records
            .iter()
            .map(|r| r.name)
            .collect::<std::collections::HashSet<_>>()
            .len()
            == records.len(),
        "duplicate network name in registry"
    );

    records
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_field_sanity() {
        for record in all() {
            assert!(!record.name.is_empty());
            assert!(record.name.chars().all(|c| c.is_ascii_lowercase() || c == '-'));
            assert!(!record.symbols.is_empty(), "{} has no symbols", record.name);
            assert!(record.port > 0);
            assert!(record.subunit_factor > 0.0);
            assert!(record.is_testnet == record.name.starts_with("test-"));
        }
    }

    #[test]
    fn test_names_are_unique() {
        let names: std::collections::HashSet<_> = all().iter().map(|r| r.name).collect();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn test_seeds_look_like_hostnames() {
        for record in all() {
            for seed in record.seeds {
                assert!(
                    seed.split('.').count() >= 2 && !seed.contains(' '),
                    "{} has a malformed seed: {}",
                    record.name,
                    seed
                );
            }
        }
    }

    #[test]
    fn test_by_name() {
        assert!(by_name("bitcoin").is_some());
        assert!(by_name("test-bitcoin").is_some());
        assert!(by_name("namecoin").is_none());
    }
}
