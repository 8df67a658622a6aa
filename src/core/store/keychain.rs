//! macOS Keychain backend.
//!
//! Stores each secret as a generic password under the dockhand service
//! label, so entries live alongside other app passwords in Keychain Access.

#![cfg(target_os = "macos")]

use tracing::debug;

use crate::core::constants::APP_LABEL;
use crate::core::store::SecureStore;
use crate::error::{DockhandError, Result};

/// errSecItemNotFound
const NOT_FOUND: i32 = -25300;

pub struct Keychain {
    service: String,
}

impl Keychain {
    pub fn new() -> Self {
        Self {
            service: format!("com.{}", APP_LABEL),
        }
    }
}

impl Default for Keychain {
    fn default() -> Self {
        Self::new()
    }
}

impl SecureStore for Keychain {
    fn get(&self, key: &str) -> Result<Option<String>> {
        use security_framework::passwords::get_generic_password;

        match get_generic_password(&self.service, key) {
            Ok(bytes) => {
                debug!(key, "keychain hit");
                let value = String::from_utf8(bytes).map_err(|e| {
                    DockhandError::Store(format!("invalid UTF-8 in keychain entry {}: {}", key, e))
                })?;
                Ok(Some(value))
            }
            Err(e) if e.code() == NOT_FOUND => Ok(None),
            Err(e) => Err(DockhandError::Store(format!(
                "keychain read failed for {}: {}",
                key, e
            ))),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        use security_framework::passwords::set_generic_password;

        // set_generic_password replaces an existing entry in place
        set_generic_password(&self.service, key, value.as_bytes()).map_err(|e| {
            DockhandError::Store(format!("keychain write failed for {}: {}", key, e))
        })?;
        debug!(key, "keychain entry stored");
        Ok(())
    }

    fn name(&self) -> &'static str {
        "macOS Keychain"
    }
}
