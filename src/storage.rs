use std::cell::RefCell;
use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("storage is not available in this environment")]
    Unavailable,
    #[error("failed reading key `{key}`: {message}")]
    Read { key: String, message: String },
    #[error("failed writing key `{key}`: {message}")]
    Write { key: String, message: String },
}

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set(key, value)
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_returns_none_for_missing_key() {
        let store = MemoryStore::new();
        assert_eq!(store.get("theme").expect("memory reads succeed"), None);
    }

    #[test]
    fn memory_store_overwrites_existing_value() {
        let store = MemoryStore::with_entry("theme", "light");
        store.set("theme", "dark").expect("memory writes succeed");
        assert_eq!(
            store.get("theme").expect("memory reads succeed").as_deref(),
            Some("dark")
        );
    }

    #[test]
    fn borrowed_store_forwards_to_owner() {
        let store = MemoryStore::new();
        let borrowed = &store;
        borrowed.set("k", "v").expect("memory writes succeed");
        assert_eq!(store.get("k").expect("memory reads succeed").as_deref(), Some("v"));
    }
}
