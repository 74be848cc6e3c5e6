//! Environment variable source: FIXITY_ prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// `FIXITY__BASELINE__PATH=/tmp/b.json` sets `baseline.path`;
/// `FIXITY__SCAN__IGNORE_PATTERNS=.git,target` sets the ignore list.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Ok(builder.add_source(
        Environment::with_prefix("FIXITY")
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("scan.ignore_patterns"),
    ))
}
