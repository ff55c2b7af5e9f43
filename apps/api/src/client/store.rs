//! Single-key persistence for the most recent analysis.
//!
//! One entry, overwritten on every successful analysis, read once at startup.
//! Unreadable or unparsable data is logged and treated as "no previous result".

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

use crate::models::AnalysisResult;

/// Key under which the last result is stored.
pub const LAST_RESULT_KEY: &str = "psycheguide_last_result";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to write last result: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize last result: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub trait ResultStore: Send + Sync {
    /// Returns the stored result, or `None` when absent or corrupt.
    fn load(&self) -> Option<AnalysisResult>;
    fn save(&self, result: &AnalysisResult) -> Result<(), StoreError>;
}

/// Stores the entry as `<dir>/psycheguide_last_result.json`.
#[derive(Debug, Clone)]
pub struct FileResultStore {
    path: PathBuf,
}

impl FileResultStore {
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(format!("{LAST_RESULT_KEY}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ResultStore for FileResultStore {
    fn load(&self) -> Option<AnalysisResult> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read saved result at {}: {e}", self.path.display());
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(result) => Some(result),
            Err(e) => {
                warn!("Failed to parse saved result: {e}");
                None
            }
        }
    }

    fn save(&self, result: &AnalysisResult) -> Result<(), StoreError> {
        let json = serde_json::to_string(result)?;
        fs::write(&self.path, json)?;
        debug!("Saved last result to {}", self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::scorer::analyze;
    use crate::models::StudentInfo;

    fn sample_result(subjects: &str) -> AnalysisResult {
        let info = StudentInfo {
            favorite_subjects: subjects.to_string(),
            ..Default::default()
        };
        analyze(&info, &[])
    }

    #[test]
    fn test_missing_file_loads_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileResultStore::in_dir(dir.path()).load().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileResultStore::in_dir(dir.path());
        let result = sample_result("Music");
        store.save(&result).unwrap();
        assert_eq!(store.load(), Some(result));
    }

    #[test]
    fn test_save_overwrites_previous_entry() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileResultStore::in_dir(dir.path());
        store.save(&sample_result("Music")).unwrap();
        let latest = sample_result("Business");
        store.save(&latest).unwrap();
        assert_eq!(store.load(), Some(latest));
    }

    #[test]
    fn test_corrupt_entry_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileResultStore::in_dir(dir.path());
        fs::write(store.path(), "{ this is not json").unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_wrong_shape_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileResultStore::in_dir(dir.path());
        fs::write(store.path(), r#"{"summary": "only a summary"}"#).unwrap();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileResultStore::in_dir(dir.path().join("does-not-exist"));
        assert!(matches!(
            store.save(&sample_result("")),
            Err(StoreError::Io(_))
        ));
    }
}
