//! Scoped activation of the process-wide chain parameters.
//!
//! Address-encoding primitives in some upstream libraries are parameterized
//! by a global active-network setting instead of taking the network
//! explicitly. Everything in this crate threads `&NetworkRecord` through
//! as an argument; this module exists only for those external primitives,
//! wrapping the global behind an RAII guard that restores the previous
//! setting on every exit path, including unwinding.
//!
//! Activation is serialized by a mutex held for the guard's lifetime, so
//! concurrent switches cannot interleave. The guard is not reentrant:
//! activating a second context on the same thread while one is live will
//! deadlock.

use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::network::record::NetworkRecord;

/// Serializes switch -> call -> restore sections.
static SWITCH_LOCK: Mutex<()> = Mutex::new(());

/// The active chain-parameters name, readable while a switch is live.
static ACTIVE: Mutex<&'static str> = Mutex::new("mainnet");

/// Name of the currently active chain parameters.
pub fn active_params() -> &'static str {
    *lock(&ACTIVE)
}

/// RAII guard holding the active chain parameters switched to one network.
#[must_use = "the context is restored when the guard is dropped"]
pub struct ChainContext {
    prev: &'static str,
    _serial: MutexGuard<'static, ()>,
}

impl ChainContext {
    /// Switch the active chain parameters to match `record`, returning a
    /// guard that restores the previous setting on drop.
    pub fn activate(record: &NetworkRecord) -> Self {
        let serial = lock(&SWITCH_LOCK);
        let mut active = lock(&ACTIVE);
        let prev = *active;
        *active = params_name(record);
        drop(active);
        Self {
            prev,
            _serial: serial,
        }
    }
}

impl Drop for ChainContext {
    fn drop(&mut self) {
        *lock(&ACTIVE) = self.prev;
    }
}

/// Run `operation` with the active chain parameters switched to `record`.
pub fn with_active_params<T>(record: &NetworkRecord, operation: impl FnOnce() -> T) -> T {
    let _context = ChainContext::activate(record);
    operation()
}

/// Parameter-set name for a record, matching the naming used by the
/// globally-parameterized upstream primitives.
fn params_name(record: &NetworkRecord) -> &'static str {
    match record.name {
        "bitcoin" => "mainnet",
        "test-bitcoin" => "testnet",
        other => other,
    }
}

/// Lock that shrugs off poisoning: the protected values stay consistent
/// because restoration happens in `Drop` during unwinding.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
