//! Verification report types

use crate::types::Algorithm;
use serde::Serialize;
use std::path::PathBuf;

/// Verdict for one path. Unchanged paths get no verdict and are only counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeKind {
    Deleted,
    Modified,
    New,
    Error,
}

impl ChangeKind {
    /// Bracketed tag used in the text report
    pub fn label(&self) -> &'static str {
        match self {
            ChangeKind::Deleted => "[DELETED]",
            ChangeKind::Modified => "[MODIFIED]",
            ChangeKind::New => "[NEW FILE]",
            ChangeKind::Error => "[ERROR]",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Change {
    pub path: String,
    #[serde(rename = "status")]
    pub kind: ChangeKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Change {
    pub fn new(path: impl Into<String>, kind: ChangeKind) -> Self {
        Self {
            path: path.into(),
            kind,
            detail: None,
        }
    }

    pub fn error(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            kind: ChangeKind::Error,
            detail: Some(detail.into()),
        }
    }
}

/// Per-kind counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub deleted: usize,
    pub modified: usize,
    pub new: usize,
    pub errors: usize,
    pub unchanged: usize,
}

/// Outcome of one verification pass, in classification order
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub root: PathBuf,
    pub algorithm: Algorithm,
    pub changes: Vec<Change>,
    pub unchanged: usize,
}

impl Report {
    pub fn new(root: PathBuf, algorithm: Algorithm) -> Self {
        Self {
            root,
            algorithm,
            changes: Vec::new(),
            unchanged: 0,
        }
    }

    /// True when any DELETED, MODIFIED, NEW FILE or ERROR verdict fired
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    pub fn count(&self, kind: ChangeKind) -> usize {
        self.changes.iter().filter(|c| c.kind == kind).count()
    }

    pub fn paths(&self, kind: ChangeKind) -> Vec<&str> {
        self.changes
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.path.as_str())
            .collect()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            deleted: self.count(ChangeKind::Deleted),
            modified: self.count(ChangeKind::Modified),
            new: self.count(ChangeKind::New),
            errors: self.count(ChangeKind::Error),
            unchanged: self.unchanged,
        }
    }
}
