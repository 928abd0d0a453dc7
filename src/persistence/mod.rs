//! Key-value persistence for values that outlive a session
//!
//! The game only needs integers (the high score). Stores never fail outward:
//! a read problem means "absent", a write problem is logged and dropped.

pub mod file;

use std::collections::BTreeMap;

pub use file::JsonFileStore;

/// Integer key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<i64>;
    fn set(&mut self, key: &str, value: i64);
}

/// In-memory store, lost when dropped
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: BTreeMap<String, i64>,
    writes: usize,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of `set` calls so far
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: i64) {
        self.writes += 1;
        self.values.insert(key.to_string(), value);
    }
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn get(&self, key: &str) -> Option<i64> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: i64) {
        (**self).set(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("pongHighScore"), None);

        store.set("pongHighScore", 12);
        assert_eq!(store.get("pongHighScore"), Some(12));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_boxed_store() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        store.set("a", 3);
        assert_eq!(store.get("a"), Some(3));
    }
}
