//! Create and verify operations over a directory and a baseline file

use crate::baseline::{self, Baseline};
use crate::error::IntegrityError;
use crate::integrity::diff::{self, VerifyOutcome};
use crate::scan::path::resolve_file_path;
use crate::scan::{ScanFailure, ScanOptions, Snapshot};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Result of a baseline creation pass
#[derive(Debug)]
pub struct CreateOutcome {
    pub root: PathBuf,
    pub baseline_path: PathBuf,
    pub baseline: Baseline,
    /// Files that could not be hashed and are therefore absent from the baseline
    pub failures: Vec<ScanFailure>,
}

/// Entry point for the two integrity operations.
///
/// Takes all inputs explicitly; prompting and flag parsing live in the CLI layer.
pub struct IntegrityService {
    options: ScanOptions,
}

impl IntegrityService {
    pub fn new(options: ScanOptions) -> Self {
        Self { options }
    }

    /// Hash every file under `directory` and write the result as the new baseline,
    /// replacing whatever `baseline_path` held before.
    pub fn create_baseline(
        &self,
        directory: &Path,
        baseline_path: &Path,
    ) -> Result<CreateOutcome, IntegrityError> {
        ensure_directory(directory)?;
        let baseline_path = resolve_file_path(baseline_path)?;

        let snapshot = self.snapshot(directory, &baseline_path)?;
        let baseline = Baseline::from_snapshot(&snapshot);
        baseline::save_baseline(&baseline_path, &baseline)?;

        info!(
            root = %snapshot.root().display(),
            baseline = %baseline_path.display(),
            files = baseline.len(),
            algorithm = %self.options.algorithm,
            "Baseline created"
        );

        let root = snapshot.root().to_path_buf();
        let failures = snapshot.into_failures();
        Ok(CreateOutcome {
            root,
            baseline_path,
            baseline,
            failures,
        })
    }

    /// Re-scan `directory`, classify against the stored baseline and persist the
    /// updated baseline. Nothing is written if any precondition fails.
    pub fn verify_integrity(
        &self,
        directory: &Path,
        baseline_path: &Path,
    ) -> Result<VerifyOutcome, IntegrityError> {
        let (outcome, baseline_path) = self.compare(directory, baseline_path)?;
        baseline::save_baseline(&baseline_path, &outcome.updated)?;
        Ok(outcome)
    }

    /// Same classification as [`verify_integrity`](Self::verify_integrity) without
    /// touching the baseline file.
    pub fn check_integrity(
        &self,
        directory: &Path,
        baseline_path: &Path,
    ) -> Result<VerifyOutcome, IntegrityError> {
        self.compare(directory, baseline_path).map(|(outcome, _)| outcome)
    }

    fn compare(
        &self,
        directory: &Path,
        baseline_path: &Path,
    ) -> Result<(VerifyOutcome, PathBuf), IntegrityError> {
        let baseline_path = resolve_file_path(baseline_path)?;
        let stored = baseline::load_baseline(&baseline_path)?;
        ensure_directory(directory)?;

        let snapshot = self.snapshot(directory, &baseline_path)?;
        let outcome = diff::compare(&stored, &snapshot);

        let summary = outcome.report.summary();
        info!(
            root = %snapshot.root().display(),
            deleted = summary.deleted,
            modified = summary.modified,
            new = summary.new,
            errors = summary.errors,
            unchanged = summary.unchanged,
            "Integrity check complete"
        );
        Ok((outcome, baseline_path))
    }

    fn snapshot(&self, directory: &Path, baseline_path: &Path) -> Result<Snapshot, IntegrityError> {
        let mut options = self.options.clone();
        options.walker.exclude_paths.push(baseline_path.to_path_buf());

        let snapshot = Snapshot::scan(directory, &options)?;
        if !snapshot.failures().is_empty() {
            warn!(
                failures = snapshot.failures().len(),
                "Some paths could not be hashed"
            );
        }
        Ok(snapshot)
    }
}

impl Default for IntegrityService {
    fn default() -> Self {
        Self::new(ScanOptions::default())
    }
}

fn ensure_directory(directory: &Path) -> Result<(), IntegrityError> {
    if directory.is_dir() {
        Ok(())
    } else {
        Err(IntegrityError::InvalidDirectory(directory.to_path_buf()))
    }
}
