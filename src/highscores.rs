//! Best-score tracking
//!
//! A single integer kept in the key-value store. It only ever goes up, and
//! it is written only when a score strictly beats it.

use crate::persistence::KeyValueStore;

/// Best score seen across sessions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    /// Storage key
    pub const STORAGE_KEY: &'static str = "pongHighScore";

    pub fn new(best: u32) -> Self {
        Self { best }
    }

    /// Read the stored best; absent or nonsensical values count as zero
    pub fn load(store: &dyn KeyValueStore) -> Self {
        let best = store
            .get(Self::STORAGE_KEY)
            .and_then(|v| u32::try_from(v).ok())
            .unwrap_or(0);
        log::info!("High score: {}", best);
        Self { best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Check if a score would become the new best
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.best
    }

    /// Record a score, persisting it if it beats the best
    ///
    /// Returns true when the best changed.
    pub fn record(&mut self, score: u32, store: &mut dyn KeyValueStore) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        self.best = score;
        store.set(Self::STORAGE_KEY, i64::from(score));
        log::info!("New high score: {}", score);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::MemoryStore;

    #[test]
    fn test_absent_is_zero() {
        let store = MemoryStore::new();
        assert_eq!(HighScore::load(&store).best(), 0);
    }

    #[test]
    fn test_negative_is_zero() {
        let mut store = MemoryStore::new();
        store.set(HighScore::STORAGE_KEY, -4);
        assert_eq!(HighScore::load(&store).best(), 0);
    }

    #[test]
    fn test_loads_stored_value() {
        let mut store = MemoryStore::new();
        store.set(HighScore::STORAGE_KEY, 23);
        assert_eq!(HighScore::load(&store).best(), 23);
    }

    #[test]
    fn test_record_only_when_strictly_higher() {
        let mut store = MemoryStore::new();
        let mut high = HighScore::new(5);

        assert!(!high.record(3, &mut store));
        assert!(!high.record(5, &mut store));
        assert_eq!(store.writes(), 0);

        assert!(high.record(6, &mut store));
        assert_eq!(high.best(), 6);
        assert_eq!(store.get(HighScore::STORAGE_KEY), Some(6));
        assert_eq!(store.writes(), 1);

        assert!(!high.record(6, &mut store));
        assert_eq!(store.writes(), 1);
    }
}
