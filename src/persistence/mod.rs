//! Flat-file persistence for the high score, statistics and settings
//!
//! Reads never fail the caller: missing or corrupt files fall back to
//! defaults. Writes are best effort; errors are logged and the in-memory
//! state stays authoritative.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Default directory for data files, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "data";

/// Locations of the three persisted files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoragePaths {
    pub high_score: PathBuf,
    pub settings: PathBuf,
    pub statistics: PathBuf,
}

impl StoragePaths {
    /// Standard file names inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            high_score: dir.join("highscore.txt"),
            settings: dir.join("settings.json"),
            statistics: dir.join("statistics.json"),
        }
    }
}

impl Default for StoragePaths {
    fn default() -> Self {
        Self::in_dir(DEFAULT_DATA_DIR)
    }
}

/// Read a file, `Ok(None)` when it does not exist
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    Ok(Some(contents))
}

/// Write a file, creating parent directories as needed
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating directory {}", parent.display()))?;
    }

    // Write-then-rename
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents).with_context(|| format!("writing {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .with_context(|| format!("replacing {} with {}", path.display(), tmp.display()))?;
    Ok(())
}

/// Load a JSON record, falling back to `T::default()` on any problem.
/// Missing keys take their defaults when `T` is `#[serde(default)]`.
pub fn load_json_or_default<T>(path: &Path, what: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match read_optional(path) {
        Ok(Some(json)) => match serde_json::from_str(&json) {
            Ok(value) => {
                log::info!("Loaded {} from {}", what, path.display());
                value
            }
            Err(e) => {
                log::warn!("Failed to parse {} ({}): {}, using defaults", what, path.display(), e);
                T::default()
            }
        },
        Ok(None) => {
            log::info!("No {} found at {}, using defaults", what, path.display());
            T::default()
        }
        Err(e) => {
            log::warn!("Failed to read {}: {:#}, using defaults", what, e);
            T::default()
        }
    }
}

/// Serialize a record as pretty JSON
pub fn save_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("serializing record")?;
    write_atomic(path, &json)
}

/// Save and log instead of propagating; returns whether the write succeeded
pub fn save_json_logged<T: Serialize>(path: &Path, value: &T, what: &str) -> bool {
    match save_json(path, value) {
        Ok(()) => {
            log::debug!("Saved {} to {}", what, path.display());
            true
        }
        Err(e) => {
            log::error!("Error saving {}: {:#}", what, e);
            false
        }
    }
}


#[cfg(test)]
mod tests {
    use super::test_util::scratch_dir;
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default)]
    struct Record {
        a: u32,
        b: String,
    }

    #[test]
    fn test_missing_file_gives_default() {
        let dir = scratch_dir("missing");
        let r: Record = load_json_or_default(&dir.join("nope.json"), "record");
        assert_eq!(r, Record::default());
    }

    #[test]
    fn test_round_trip_creates_directories() {
        let dir = scratch_dir("roundtrip").join("nested");
        let path = dir.join("r.json");
        let r = Record {
            a: 7,
            b: "x".to_string(),
        };
        assert!(save_json_logged(&path, &r, "record"));
        let back: Record = load_json_or_default(&path, "record");
        assert_eq!(back, r);
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_corrupt_file_gives_default() {
        let dir = scratch_dir("corrupt");
        let path = dir.join("r.json");
        write_atomic(&path, "{ not json").unwrap();
        let r: Record = load_json_or_default(&path, "record");
        assert_eq!(r, Record::default());
    }

    #[test]
    fn test_storage_paths() {
        let paths = StoragePaths::in_dir("/tmp/x");
        assert!(paths.high_score.ends_with("highscore.txt"));
        assert!(paths.statistics.ends_with("statistics.json"));
        assert_eq!(StoragePaths::default().settings, PathBuf::from("data/settings.json"));
    }
}
