//! Baseline presentation for `fixity list`.

use crate::baseline::Baseline;
use crate::error::IntegrityError;
use comfy_table::Table;

/// Digest characters shown per column in the table view.
const SHORT_DIGEST: usize = 16;

pub fn format_baseline_table(baseline: &Baseline) -> String {
    if baseline.is_empty() {
        return "Baseline is empty.".to_string();
    }
    let mut table = Table::new();
    table.load_preset(comfy_table::presets::UTF8_FULL);
    table.set_header(vec!["Path", "Origin", "Latest", "Changed"]);
    for (path, record) in baseline.iter() {
        table.add_row(vec![
            path.clone(),
            record.old_hash.short(SHORT_DIGEST).to_string(),
            record.new_hash.short(SHORT_DIGEST).to_string(),
            if record.changed_since_origin() {
                "yes".to_string()
            } else {
                "no".to_string()
            },
        ]);
    }
    format!("{}\n{} records", table, baseline.len())
}

pub fn format_baseline_json(baseline: &Baseline) -> Result<String, IntegrityError> {
    serde_json::to_string_pretty(baseline)
        .map_err(|e| IntegrityError::ConfigError(format!("Failed to render baseline: {}", e)))
}
