//! Secure store backends.
//!
//! Abstracts the OS secret service behind a minimal get/set contract so the
//! reconciler never cares which backend is present — or whether one is
//! present at all. Absence is a capability downgrade, not an error: the
//! reconciler receives `Option<&dyn SecureStore>` and falls back to the env
//! file, generation, and prompting.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `SecureStore` trait
//! 2. Add the implementation in a new file (e.g., `wincred.rs`)
//! 3. Wire it into `discover()` for the platforms it serves

use crate::error::Result;

#[cfg(target_os = "macos")]
mod keychain;
#[cfg(target_os = "linux")]
mod keyutils;
#[cfg(test)]
mod memory;

#[cfg(target_os = "macos")]
pub use keychain::Keychain;
#[cfg(target_os = "linux")]
pub use keyutils::Keyutils;
#[cfg(test)]
pub use memory::Memory;

/// Minimal secure key/value contract.
///
/// Entries are namespaced under the application label so secrets stored by
/// other tools are never read or overwritten. `set` overwrites: calling it
/// twice with the same key/value is a no-op in effect.
pub trait SecureStore {
    /// Look up a secret, `None` if the backend has no entry for the key.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a secret, replacing any existing entry for the key.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Backend name for logs and status output.
    fn name(&self) -> &'static str;
}

/// Select the secure store backend for this host, if any responds.
///
/// Returns `None` on platforms with no adapter or when the backend probe
/// fails; callers treat that as a downgrade and continue.
pub fn discover() -> Option<Box<dyn SecureStore>> {
    platform_store()
}

#[cfg(target_os = "macos")]
fn platform_store() -> Option<Box<dyn SecureStore>> {
    Some(Box::new(Keychain::new()))
}

#[cfg(target_os = "linux")]
fn platform_store() -> Option<Box<dyn SecureStore>> {
    Keyutils::probe().map(|s| Box::new(s) as Box<dyn SecureStore>)
}

#[cfg(not(any(target_os = "macos", target_os = "linux")))]
fn platform_store() -> Option<Box<dyn SecureStore>> {
    None
}
