//! Linux kernel keyring backend.
//!
//! Uses the keyutils-backed `keyring` crate so no D-Bus session or desktop
//! secret service is required on a headless host. Entries are scoped to the
//! dockhand service name.

#![cfg(target_os = "linux")]

use keyring::Entry;
use tracing::debug;

use crate::core::constants::APP_LABEL;
use crate::core::store::SecureStore;
use crate::error::{DockhandError, Result};

pub struct Keyutils;

impl Keyutils {
    /// Check whether the kernel keyring responds on this host.
    ///
    /// A lookup for a sentinel key that answers `NoEntry` proves the
    /// backend works; any platform failure means no usable store.
    pub fn probe() -> Option<Self> {
        let entry = Entry::new(APP_LABEL, "dockhand-probe").ok()?;
        match entry.get_password() {
            Ok(_) | Err(keyring::Error::NoEntry) => {
                debug!("kernel keyring available");
                Some(Self)
            }
            Err(e) => {
                debug!(error = %e, "kernel keyring unavailable");
                None
            }
        }
    }

    fn entry(&self, key: &str) -> Result<Entry> {
        Entry::new(APP_LABEL, key)
            .map_err(|e| DockhandError::Store(format!("keyring entry for {}: {}", key, e)))
    }
}

impl SecureStore for Keyutils {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self.entry(key)?.get_password() {
            Ok(value) => {
                debug!(key, "keyring hit");
                Ok(Some(value))
            }
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => Err(DockhandError::Store(format!(
                "keyring read failed for {}: {}",
                key, e
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        // set_password replaces any existing entry
        self.entry(key)?
            .set_password(value)
            .map_err(|e| DockhandError::Store(format!("keyring write failed for {}: {}", key, e)))?;
        debug!(key, "keyring entry stored");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "Linux kernel keyring"
    }
}
