//! JSON file store
//!
//! Persists the saved game as a single pretty-printed JSON file. Unreadable
//! or unparseable files load as `None` so the game falls back to defaults.

use super::{SavedGame, Store, StoreError};
use std::fs;
use std::path::PathBuf;

/// File-backed store writing one JSON document
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path the store reads and writes
    #[must_use]
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl Store for JsonFileStore {
    fn load(&self) -> Option<SavedGame> {
        let content = fs::read_to_string(&self.path).ok()?;
        serde_json::from_str(&content).ok()
    }

    fn save(&mut self, saved: &SavedGame) -> Result<(), StoreError> {
        let content = serde_json::to_string_pretty(saved)?;
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::path::Path;

    fn temp_path(name: &str) -> PathBuf {
        env::temp_dir().join(format!("scramble_store_{}_{name}.json", std::process::id()))
    }

    fn cleanup(path: &Path) {
        let _ = fs::remove_file(path);
    }

    #[test]
    fn missing_file_loads_as_none() {
        let store = JsonFileStore::new(temp_path("missing"));
        assert!(store.load().is_none());
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = temp_path("round_trip");
        let mut store = JsonFileStore::new(&path);

        let saved = SavedGame {
            words: vec!["react".into(), "hooks".into()],
            points: 3,
            strikes: 2,
        };
        store.save(&saved).unwrap();

        assert_eq!(store.load(), Some(saved));
        cleanup(&path);
    }

    #[test]
    fn malformed_file_loads_as_none() {
        let path = temp_path("malformed");
        fs::write(&path, "{not valid json").unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load().is_none());

        cleanup(&path);
    }

    #[test]
    fn wrong_shape_loads_as_none() {
        let path = temp_path("wrong_shape");
        fs::write(&path, r#"{"points": "three"}"#).unwrap();

        let store = JsonFileStore::new(&path);
        assert!(store.load().is_none());

        cleanup(&path);
    }

    #[test]
    fn save_overwrites_previous_state() {
        let path = temp_path("overwrite");
        let mut store = JsonFileStore::new(&path);

        store
            .save(&SavedGame {
                words: vec!["react".into()],
                points: 1,
                strikes: 0,
            })
            .unwrap();
        store
            .save(&SavedGame {
                words: vec![],
                points: 2,
                strikes: 1,
            })
            .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.points, 2);
        assert!(loaded.words.is_empty());

        cleanup(&path);
    }
}
