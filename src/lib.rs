//! Multi-chain network abstraction layer.
//!
//! Static per-network parameter records with symbol resolution, plus the
//! operations that need external chain-data providers: fee-per-kilobyte
//! estimation and UTXO retrieval, with fallback across providers.

pub mod client;
pub mod config;
pub mod error;
pub mod fees;
pub mod network;
pub mod observability;
pub mod providers;
pub mod utxo;

pub use client::NetworkClient;
pub use config::NetworkConfig;
pub use error::{NetworkError, Result};
pub use network::{resolve, NetworkRecord};
pub use utxo::Utxo;
