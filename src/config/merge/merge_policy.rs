//! Merge rules: defaults applied beneath every other source.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("baseline.path", crate::baseline::DEFAULT_BASELINE_FILE)?
        .set_default("scan.algorithm", "sha256")?
        .set_default("scan.follow_symlinks", false)
}
