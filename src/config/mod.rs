//! Configuration schema and loading.

pub mod loader;
pub mod schema;

pub use loader::{load_config, validate_config};
pub use schema::{NetworkConfig, NodeConfig, ProviderConfig};
