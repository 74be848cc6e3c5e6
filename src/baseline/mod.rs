//! Baseline records: the persisted reference state of a directory

pub mod persistence;

use crate::scan::Snapshot;
use crate::types::Digest;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub use persistence::{load_baseline, save_baseline, DEFAULT_BASELINE_FILE};

/// Per-path pair of digests.
///
/// `old_hash` is the digest recorded when the path entered the baseline and
/// `new_hash` the digest observed by the latest verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaselineRecord {
    pub old_hash: Digest,
    pub new_hash: Digest,
}

impl BaselineRecord {
    /// Record for a path seen for the first time
    pub fn new(digest: Digest) -> Self {
        Self {
            old_hash: digest.clone(),
            new_hash: digest,
        }
    }

    /// Same origin, new latest digest
    pub fn with_latest(&self, digest: Digest) -> Self {
        Self {
            old_hash: self.old_hash.clone(),
            new_hash: digest,
        }
    }

    /// Whether the content differs from when the path entered the baseline
    pub fn changed_since_origin(&self) -> bool {
        self.old_hash != self.new_hash
    }
}

/// Absolute path → record. Keys serialize in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Baseline {
    records: BTreeMap<String, BaselineRecord>,
}

impl Baseline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh baseline where every path's origin and latest digest are the snapshot digest
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let records = snapshot
            .entries()
            .iter()
            .map(|(path, digest)| (path.clone(), BaselineRecord::new(digest.clone())))
            .collect();
        Self { records }
    }

    pub fn get(&self, path: &str) -> Option<&BaselineRecord> {
        self.records.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.records.contains_key(path)
    }

    pub fn insert(&mut self, path: String, record: BaselineRecord) -> Option<BaselineRecord> {
        self.records.insert(path, record)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &BaselineRecord)> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl FromIterator<(String, BaselineRecord)> for Baseline {
    fn from_iter<I: IntoIterator<Item = (String, BaselineRecord)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
