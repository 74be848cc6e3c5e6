//! Baseline file persistence
//!
//! The baseline is a pretty-printed JSON object keyed by absolute path. Files
//! written by earlier versions of the tool map each path straight to a digest
//! string; those are still accepted on load.

use crate::baseline::{Baseline, BaselineRecord};
use crate::error::{HashError, IntegrityError};
use crate::types::Digest;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Default baseline file name
pub const DEFAULT_BASELINE_FILE: &str = "hash.json";

/// Load a baseline from disk.
///
/// A missing file and a malformed file are reported as distinct errors.
pub fn load_baseline(path: &Path) -> Result<Baseline, IntegrityError> {
    if !path.exists() {
        return Err(IntegrityError::BaselineMissing(path.to_path_buf()));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        IntegrityError::Io(HashError::Read {
            path: path.to_path_buf(),
            source: e,
        })
    })?;

    let baseline = parse_baseline(&contents).map_err(|message| IntegrityError::BaselineParse {
        path: path.to_path_buf(),
        message,
    })?;

    debug!(path = %path.display(), records = baseline.len(), "Loaded baseline");
    Ok(baseline)
}

/// Parse baseline JSON in either the record shape or the legacy flat shape.
pub fn parse_baseline(contents: &str) -> Result<Baseline, String> {
    let value: serde_json::Value = serde_json::from_str(contents).map_err(|e| e.to_string())?;

    let flat = match value.as_object() {
        Some(map) => !map.is_empty() && map.values().all(|v| v.is_string()),
        None => return Err("expected a JSON object keyed by file path".to_string()),
    };

    if !flat {
        return serde_json::from_value::<Baseline>(value).map_err(|e| e.to_string());
    }

    let legacy = serde_json::from_value::<BTreeMap<String, Digest>>(value)
        .map_err(|e| e.to_string())?;
    info!(records = legacy.len(), "Upgrading legacy flat baseline");
    Ok(legacy
        .into_iter()
        .map(|(path, digest)| (path, BaselineRecord::new(digest)))
        .collect())
}

/// Write the baseline atomically: temporary sibling file, then rename.
///
/// A failure at any point leaves the previous baseline file untouched.
pub fn save_baseline(path: &Path, baseline: &Baseline) -> Result<(), IntegrityError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| {
                IntegrityError::Io(HashError::Write {
                    path: parent.to_path_buf(),
                    source: e,
                })
            })?;
        }
    }

    let mut serialized = serde_json::to_string_pretty(baseline).map_err(|e| {
        IntegrityError::Io(HashError::IoError(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("Failed to serialize baseline: {}", e),
        )))
    })?;
    serialized.push('\n');

    let temp_path = temp_path_for(path);
    fs::write(&temp_path, serialized.as_bytes()).map_err(|e| {
        IntegrityError::Io(HashError::Write {
            path: temp_path.clone(),
            source: e,
        })
    })?;

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        IntegrityError::Io(HashError::Write {
            path: path.to_path_buf(),
            source: e,
        })
    })?;

    info!(path = %path.display(), records = baseline.len(), "Baseline saved");
    Ok(())
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| DEFAULT_BASELINE_FILE.into());
    name.push(".tmp");
    path.with_file_name(name)
}
