//! Shared helpers: build small directory trees and compute their path keys.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A scratch directory holding a `data/` tree and a baseline path outside it.
pub struct Fixture {
    pub temp_dir: TempDir,
    pub data: PathBuf,
    pub baseline: PathBuf,
}

impl Fixture {
    pub fn with_files(files: &[(&str, &str)]) -> Self {
        let temp_dir = TempDir::new().unwrap();
        let data = temp_dir.path().join("data");
        fs::create_dir(&data).unwrap();
        for (name, content) in files {
            write(&data.join(name), content);
        }
        let baseline = temp_dir.path().join("hash.json");
        Self {
            temp_dir,
            data,
            baseline,
        }
    }

    /// Absolute path key for a file under `data/`, as stored in the baseline.
    pub fn key(&self, name: &str) -> String {
        dunce::canonicalize(&self.data)
            .unwrap()
            .join(name)
            .to_str()
            .unwrap()
            .to_string()
    }

    pub fn write(&self, name: &str, content: &str) {
        write(&self.data.join(name), content);
    }

    pub fn remove(&self, name: &str) {
        fs::remove_file(self.data.join(name)).unwrap();
    }
}

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
