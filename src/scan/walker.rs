//! Filesystem walker for enumerating the regular files under a scan root

use crate::error::HashError;
use std::path::{Component, Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Walk results
#[derive(Debug)]
pub enum Entry {
    /// A regular file (or a symlink resolving to one)
    File { path: PathBuf },
    /// A path that could not be enumerated; `path` is known when walkdir reports it
    Failed {
        path: Option<PathBuf>,
        error: HashError,
    },
}

impl Entry {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Entry::File { path } => Some(path),
            Entry::Failed { path, .. } => path.as_deref(),
        }
    }
}

/// Filesystem walker configuration
#[derive(Debug, Clone, Default)]
pub struct WalkerConfig {
    /// Whether to descend through symbolic links to directories (default: false)
    pub follow_symlinks: bool,
    /// Path components to skip, e.g. ".git"
    pub ignore_patterns: Vec<String>,
    /// Exact paths never reported, e.g. the baseline file itself
    pub exclude_paths: Vec<PathBuf>,
}

/// Filesystem walker
pub struct Walker {
    root: PathBuf,
    config: WalkerConfig,
}

impl Walker {
    /// Create a new walker for the given root path
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            config: WalkerConfig::default(),
        }
    }

    /// Create a walker with custom configuration
    pub fn with_config(root: PathBuf, config: WalkerConfig) -> Self {
        Self { root, config }
    }

    /// Walk the tree and collect every file entry and every failure.
    ///
    /// Directories are never returned. Entries are sorted by path.
    pub fn walk(&self) -> Vec<Entry> {
        let mut entries = Vec::new();

        let walker = WalkDir::new(&self.root)
            .follow_links(self.config.follow_symlinks)
            .into_iter()
            .filter_entry(|e| !self.should_ignore(e));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf);
                    entries.push(Entry::Failed {
                        path,
                        error: HashError::Walk(e.to_string()),
                    });
                    continue;
                }
            };

            if entry.depth() == 0 {
                continue;
            }

            let path = entry.path().to_path_buf();
            if self.config.exclude_paths.iter().any(|p| p == &path) {
                continue;
            }

            let file_type = entry.file_type();
            if file_type.is_file() {
                entries.push(Entry::File { path });
            } else if file_type.is_symlink() {
                // Unfollowed link: report it when it resolves to a regular file.
                match std::fs::metadata(&path) {
                    Ok(meta) if meta.is_file() => entries.push(Entry::File { path }),
                    Ok(_) => {}
                    Err(e) => entries.push(Entry::Failed {
                        path: Some(path.clone()),
                        error: HashError::Read { path, source: e },
                    }),
                }
            }
        }

        entries.sort_by(|a, b| a.path().cmp(&b.path()));
        entries
    }

    fn should_ignore(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || self.config.ignore_patterns.is_empty() {
            return false;
        }
        let relative = entry.path().strip_prefix(&self.root).unwrap_or(entry.path());
        relative.components().any(|component| match component {
            Component::Normal(name) => {
                let name = name.to_string_lossy();
                self.config
                    .ignore_patterns
                    .iter()
                    .any(|pattern| name == pattern.as_str())
            }
            _ => false,
        })
    }
}
