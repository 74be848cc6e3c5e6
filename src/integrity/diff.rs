//! Baseline diff: classify every path and derive the next baseline
//!
//! Baseline paths are visited first, then snapshot-only paths, then scan
//! failures. The first two loops cover disjoint membership conditions, so a
//! path never receives two verdicts.

use crate::baseline::{Baseline, BaselineRecord};
use crate::integrity::report::{Change, ChangeKind, Report};
use crate::scan::Snapshot;
use std::path::Path;
use tracing::debug;

/// Report plus the baseline to persist after a verification pass
#[derive(Debug, Clone)]
pub struct VerifyOutcome {
    pub report: Report,
    pub updated: Baseline,
}

/// Compare a fresh snapshot against the stored baseline.
///
/// Update rules:
/// - DELETED paths are dropped from the updated baseline.
/// - MODIFIED paths keep `old_hash` and take the snapshot digest as `new_hash`.
/// - UNCHANGED paths are carried forward as-is.
/// - NEW FILE paths start with `old_hash == new_hash`.
/// - Baseline paths that failed to hash this run, or that sit under a directory
///   that could not be read, are carried forward as-is and reported only as
///   ERROR (once, at the failing path).
pub fn compare(baseline: &Baseline, snapshot: &Snapshot) -> VerifyOutcome {
    let mut report = Report::new(snapshot.root().to_path_buf(), snapshot.algorithm());
    let mut updated = Baseline::new();

    let failed: Vec<&Path> = snapshot
        .failures()
        .iter()
        .filter_map(|f| f.path.as_deref().map(Path::new))
        .collect();

    for (path, record) in baseline.iter() {
        match snapshot.get(path) {
            None if covered_by_failure(path, &failed) => {
                updated.insert(path.clone(), record.clone());
            }
            None => {
                debug!(path = %path, "Deleted");
                report.changes.push(Change::new(path.clone(), ChangeKind::Deleted));
            }
            Some(digest) if *digest != record.new_hash => {
                debug!(path = %path, previous = %record.new_hash, current = %digest, "Modified");
                report.changes.push(Change::new(path.clone(), ChangeKind::Modified));
                updated.insert(path.clone(), record.with_latest(digest.clone()));
            }
            Some(_) => {
                report.unchanged += 1;
                updated.insert(path.clone(), record.clone());
            }
        }
    }

    for (path, digest) in snapshot.entries() {
        if !baseline.contains(path) {
            debug!(path = %path, "New file");
            report.changes.push(Change::new(path.clone(), ChangeKind::New));
            updated.insert(path.clone(), BaselineRecord::new(digest.clone()));
        }
    }

    for failure in snapshot.failures() {
        let path = failure.path.clone().unwrap_or_else(|| "<unknown>".to_string());
        report
            .changes
            .push(Change::error(path, failure.error.to_string()));
    }

    VerifyOutcome { report, updated }
}

/// Whether `path` is a failed path or lies beneath one (an unreadable directory).
fn covered_by_failure(path: &str, failed: &[&Path]) -> bool {
    let path = Path::new(path);
    failed.iter().any(|f| path.starts_with(f))
}
