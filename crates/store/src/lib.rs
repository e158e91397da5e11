//! File-backed high score store.
//!
//! Scores live in a small JSON document:
//!
//! ```json
//! { "version": 1, "scores": { "Tetris": 1200, "Snake": 40 } }
//! ```
//!
//! The whole document is rewritten on every `put_int`, via a temporary file
//! renamed over the original so a crash never leaves a truncated file.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use brick_surface_core::ScoreStore;

pub const SCORE_FILE_VERSION: u32 = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct ScoreFile {
    version: u32,
    #[serde(default)]
    scores: BTreeMap<String, u32>,
}

impl Default for ScoreFile {
    fn default() -> Self {
        Self {
            version: SCORE_FILE_VERSION,
            scores: BTreeMap::new(),
        }
    }
}

#[derive(Debug)]
pub struct JsonScoreStore {
    path: PathBuf,
    file: ScoreFile,
}

impl JsonScoreStore {
    /// Open `path`, starting empty when the file does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = match fs::read_to_string(&path) {
            Ok(text) => {
                let file: ScoreFile = serde_json::from_str(&text)
                    .with_context(|| format!("invalid score file {}", path.display()))?;
                if file.version != SCORE_FILE_VERSION {
                    bail!(
                        "unsupported score file version {} in {}",
                        file.version,
                        path.display()
                    );
                }
                file
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("no score file at {}, starting fresh", path.display());
                ScoreFile::default()
            }
            Err(e) => {
                return Err(e).with_context(|| format!("failed to read {}", path.display()));
            }
        };
        Ok(Self { path, file })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn len(&self) -> usize {
        self.file.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.file.scores.is_empty()
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.file)?;
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)
                .with_context(|| format!("failed to create {}", dir.display()))?;
        }
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json).with_context(|| format!("failed to write {}", tmp.display()))?;
        fs::rename(&tmp, &self.path)
            .with_context(|| format!("failed to replace {}", self.path.display()))?;
        Ok(())
    }
}

impl ScoreStore for JsonScoreStore {
    fn get_int(&self, key: &str, default: u32) -> u32 {
        self.file.scores.get(key).copied().unwrap_or(default)
    }

    fn put_int(&mut self, key: &str, value: u32) -> Result<()> {
        self.file.scores.insert(key.to_string(), value);
        self.save()?;
        log::debug!("stored {key}={value} in {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonScoreStore::open(dir.path().join("scores.json")).unwrap();
        assert!(store.is_empty());
        assert_eq!(store.get_int("Tetris", 0), 0);
        assert_eq!(store.get_int("Tetris", 9), 9);
    }

    #[test]
    fn put_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("scores.json");

        let mut store = JsonScoreStore::open(&path).unwrap();
        assert_eq!(store.path(), path.as_path());
        store.put_int("Tetris", 50).unwrap();
        store.put_int("Snake", 7).unwrap();
        drop(store);

        let store = JsonScoreStore::open(&path).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.get_int("Tetris", 0), 50);
        assert_eq!(store.get_int("Snake", 0), 7);
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, "{ not json").unwrap();
        let err = JsonScoreStore::open(&path).unwrap_err();
        assert!(format!("{err:#}").contains("invalid score file"));
    }

    #[test]
    fn unknown_version_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        fs::write(&path, r#"{"version":9,"scores":{}}"#).unwrap();
        assert!(JsonScoreStore::open(&path).is_err());
    }

    #[test]
    fn document_layout_is_versioned_map() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scores.json");
        let mut store = JsonScoreStore::open(&path).unwrap();
        store.put_int("Tetris", 1200).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["version"], 1);
        assert_eq!(value["scores"]["Tetris"], 1200);
    }
}
