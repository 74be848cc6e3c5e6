//! One-pass path→digest snapshots of a directory tree

use crate::error::HashError;
use crate::scan::hasher;
use crate::scan::path;
use crate::scan::walker::{Entry, Walker, WalkerConfig};
use crate::types::{Algorithm, Digest, FileFingerprint};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Scan behaviour shared by create and verify passes
#[derive(Debug, Clone, Default)]
pub struct ScanOptions {
    pub algorithm: Algorithm,
    pub walker: WalkerConfig,
}

/// A path that could not be fingerprinted during a scan
#[derive(Debug)]
pub struct ScanFailure {
    /// Path key, when the failing path is known and representable
    pub path: Option<String>,
    pub error: HashError,
}

/// In-memory result of one traversal.
///
/// `entries` holds exactly one digest per regular file hashed successfully;
/// paths that failed are listed in `failures` and absent from `entries`.
#[derive(Debug)]
pub struct Snapshot {
    root: PathBuf,
    algorithm: Algorithm,
    entries: BTreeMap<String, Digest>,
    failures: Vec<ScanFailure>,
}

impl Snapshot {
    /// Walk `root` and hash every file. Only an unusable root is an error.
    pub fn scan(root: &Path, options: &ScanOptions) -> Result<Self, HashError> {
        let root = path::canonicalize_root(root)?;
        let results = fingerprints(&root, options);
        Ok(Self::from_results(root, options.algorithm, results))
    }

    /// Aggregate per-path results: successes become entries, failures are kept aside.
    pub fn from_results(
        root: PathBuf,
        algorithm: Algorithm,
        results: impl IntoIterator<Item = Result<FileFingerprint, ScanFailure>>,
    ) -> Self {
        let mut entries = BTreeMap::new();
        let mut failures = Vec::new();
        for result in results {
            match result {
                Ok(fingerprint) => {
                    entries.insert(fingerprint.path, fingerprint.digest);
                }
                Err(failure) => failures.push(failure),
            }
        }
        debug!(
            root = %root.display(),
            files = entries.len(),
            failures = failures.len(),
            "Snapshot complete"
        );
        Self {
            root,
            algorithm,
            entries,
            failures,
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn entries(&self) -> &BTreeMap<String, Digest> {
        &self.entries
    }

    pub fn get(&self, path: &str) -> Option<&Digest> {
        self.entries.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.entries.contains_key(path)
    }

    pub fn failures(&self) -> &[ScanFailure] {
        &self.failures
    }

    /// Whether `path` was seen but could not be hashed
    pub fn failed(&self, path: &str) -> bool {
        self.failures
            .iter()
            .any(|f| f.path.as_deref() == Some(path))
    }

    pub fn into_failures(self) -> Vec<ScanFailure> {
        self.failures
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Fingerprint every file under an already-canonical `root`, one result per path.
///
/// Each file is opened, streamed and closed before the next one starts.
pub fn fingerprints(
    root: &Path,
    options: &ScanOptions,
) -> Vec<Result<FileFingerprint, ScanFailure>> {
    let walker = Walker::with_config(root.to_path_buf(), options.walker.clone());
    walker
        .walk()
        .into_iter()
        .map(|entry| match entry {
            Entry::File { path } => fingerprint_file(&path, options.algorithm),
            Entry::Failed { path, error } => {
                warn!(error = %error, "Skipping unreadable path");
                Err(ScanFailure {
                    path: path.as_deref().and_then(|p| path::path_key(p).ok()),
                    error,
                })
            }
        })
        .collect()
}

fn fingerprint_file(path: &Path, algorithm: Algorithm) -> Result<FileFingerprint, ScanFailure> {
    let key = path::path_key(path).map_err(|error| ScanFailure { path: None, error })?;
    match hasher::hash_file(path, algorithm) {
        Ok(digest) => Ok(FileFingerprint { path: key, digest }),
        Err(error) => {
            warn!(path = %key, error = %error, "Failed to hash file");
            Err(ScanFailure {
                path: Some(key),
                error,
            })
        }
    }
}
