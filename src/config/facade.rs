//! ConfigLoader facade delegating to the merge service.

use super::merge::service::MergeService;
use super::FixityConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the global config file and environment.
    pub fn load() -> Result<FixityConfig, ConfigError> {
        MergeService::load()
    }

    /// Load configuration from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<FixityConfig, ConfigError> {
        MergeService::load_from_file(path)
    }
}
