//! Network records, symbol resolution and peer filtering.

pub mod context;
pub mod nodes;
pub mod record;
pub mod registry;
pub mod resolver;

pub use context::{with_active_params, ChainContext};
pub use record::{Base58Prefix, FeeSource, NetworkRecord};
pub use resolver::resolve;
