//! JSON file store
//!
//! Versioned envelope: `{ "version": 1, "values": { "key": 42 } }`. The file
//! is rewritten through a temp file and a rename on every `set`.

use std::collections::BTreeMap;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::KeyValueStore;

const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    #[serde(default)]
    values: BTreeMap<String, i64>,
}

/// Key-value store persisted as a JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, i64>,
}

impl JsonFileStore {
    /// Open a store at `path`
    ///
    /// A missing, unreadable or malformed file yields an empty store.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let values = match Self::read(&path) {
            Ok(values) => {
                log::info!("Loaded {} stored value(s) from {}", values.len(), path.display());
                values
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::info!("No store at {}, starting fresh", path.display());
                BTreeMap::new()
            }
            Err(e) => {
                log::warn!("Ignoring unreadable store {}: {}", path.display(), e);
                BTreeMap::new()
            }
        };
        Self { path, values }
    }

    fn read(path: &Path) -> io::Result<BTreeMap<String, i64>> {
        let json = std::fs::read_to_string(path)?;
        let envelope: Envelope = serde_json::from_str(&json)?;
        if envelope.version != FORMAT_VERSION {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("unsupported store version {}", envelope.version),
            ));
        }
        Ok(envelope.values)
    }

    fn write(&self) -> io::Result<()> {
        let envelope = Envelope {
            version: FORMAT_VERSION,
            values: self.values.clone(),
        };
        let json = serde_json::to_string_pretty(&envelope)?;
        let tmp = self.path.with_extension("tmp");
        std::fs::write(&tmp, json)?;
        std::fs::rename(&tmp, &self.path)
    }
}

impl KeyValueStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<i64> {
        self.values.get(key).copied()
    }

    fn set(&mut self, key: &str, value: i64) {
        self.values.insert(key.to_string(), value);
        if let Err(e) = self.write() {
            log::warn!("Failed to persist {} to {}: {}", key, self.path.display(), e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "paddle-duel-test-{}-{}",
            name,
            std::process::id()
        ));
        std::fs::create_dir_all(&dir).expect("temp dir");
        dir.join("store.json")
    }

    #[test]
    fn test_missing_file_is_empty() {
        let path = temp_path("missing");
        let _ = std::fs::remove_file(&path);
        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("pongHighScore"), None);
    }

    #[test]
    fn test_persists_across_opens() {
        let path = temp_path("persist");
        let _ = std::fs::remove_file(&path);

        let mut store = JsonFileStore::open(&path);
        store.set("pongHighScore", 17);

        let reopened = JsonFileStore::open(&path);
        assert_eq!(reopened.get("pongHighScore"), Some(17));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_malformed_file_is_empty() {
        let path = temp_path("malformed");
        std::fs::write(&path, "not json").expect("write");
        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("pongHighScore"), None);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_wrong_version_is_empty() {
        let path = temp_path("version");
        std::fs::write(&path, r#"{ "version": 9, "values": { "pongHighScore": 5 } }"#)
            .expect("write");
        let store = JsonFileStore::open(&path);
        assert_eq!(store.get("pongHighScore"), None);
        let _ = std::fs::remove_file(&path);
    }
}
