//! In-memory store for reconciler unit tests.

#![cfg(test)]

use std::cell::RefCell;
use std::collections::BTreeMap;

use crate::core::store::SecureStore;
use crate::error::Result;

#[derive(Default)]
pub struct Memory {
    entries: RefCell<BTreeMap<String, String>>,
}

impl Memory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(pairs: &[(&str, &str)]) -> Self {
        let store = Self::new();
        for (k, v) in pairs {
            store
                .entries
                .borrow_mut()
                .insert(k.to_string(), v.to_string());
        }
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }
}

impl SecureStore for Memory {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "in-memory"
    }
}
