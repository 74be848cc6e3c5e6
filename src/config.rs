//! Configuration System
//!
//! Layered configuration: built-in defaults, the global config file (or an
//! explicit `--config` file), then `FIXITY__*` environment variables. CLI flags
//! are applied on top by the route layer.

use crate::baseline::DEFAULT_BASELINE_FILE;
use crate::logging::LoggingConfig;
use crate::scan::walker::WalkerConfig;
use crate::scan::ScanOptions;
use crate::types::Algorithm;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixityConfig {
    /// Baseline file settings
    #[serde(default)]
    pub baseline: BaselineConfig,

    /// Scan settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BaselineConfig {
    /// Baseline file location (relative paths resolve against the working directory)
    #[serde(default = "default_baseline_path")]
    pub path: PathBuf,
}

fn default_baseline_path() -> PathBuf {
    PathBuf::from(DEFAULT_BASELINE_FILE)
}

impl Default for BaselineConfig {
    fn default() -> Self {
        Self {
            path: default_baseline_path(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Digest algorithm: sha256 (default) or blake3
    #[serde(default)]
    pub algorithm: Algorithm,

    /// Descend through symlinked directories
    #[serde(default)]
    pub follow_symlinks: bool,

    /// Path components to skip while walking
    #[serde(default)]
    pub ignore_patterns: Vec<String>,
}

impl ScanConfig {
    pub fn to_scan_options(&self) -> ScanOptions {
        ScanOptions {
            algorithm: self.algorithm,
            walker: WalkerConfig {
                follow_symlinks: self.follow_symlinks,
                ignore_patterns: self.ignore_patterns.clone(),
                exclude_paths: Vec::new(),
            },
        }
    }
}

impl FixityConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.baseline.path.as_os_str().is_empty() {
            return Err("Baseline path cannot be empty".to_string());
        }
        if self.scan.ignore_patterns.iter().any(|p| p.trim().is_empty()) {
            return Err("Ignore patterns cannot be empty".to_string());
        }
        Ok(())
    }
}
