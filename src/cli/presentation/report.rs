//! Report presentation: create summaries and verify reports.

use crate::error::IntegrityError;
use crate::integrity::{ChangeKind, CreateOutcome, Report};
use owo_colors::OwoColorize;

/// Width of the bracketed verdict column, e.g. "[NEW FILE]  ".
const LABEL_WIDTH: usize = 12;

fn styled_label(kind: ChangeKind, color: bool) -> String {
    let padded = format!("{:<width$}", kind.label(), width = LABEL_WIDTH);
    if !color {
        return padded;
    }
    match kind {
        ChangeKind::Deleted => padded.red().to_string(),
        ChangeKind::Modified => padded.yellow().to_string(),
        ChangeKind::New => padded.green().to_string(),
        ChangeKind::Error => padded.magenta().bold().to_string(),
    }
}

/// One line per verdict, in classification order, then a summary line.
/// When nothing fired, a single confirmation line.
pub fn format_verify_report_text(report: &Report, color: bool) -> String {
    if !report.has_changes() {
        return format!(
            "No changes detected ({} files checked).",
            report.unchanged
        );
    }

    let mut out = format!("Integrity check results for {}:\n\n", report.root.display());
    for change in &report.changes {
        out.push_str(&styled_label(change.kind, color));
        out.push_str(&change.path);
        if let Some(detail) = &change.detail {
            out.push_str(&format!(": {}", detail));
        }
        out.push('\n');
    }

    let summary = report.summary();
    out.push_str(&format!(
        "\nSummary: {} deleted, {} modified, {} new, {} errors ({} unchanged)",
        summary.deleted, summary.modified, summary.new, summary.errors, summary.unchanged
    ));
    out
}

pub fn format_verify_report_json(report: &Report) -> Result<String, IntegrityError> {
    let out = serde_json::json!({
        "root": report.root,
        "checked_at": chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        "algorithm": report.algorithm,
        "changes": report.changes,
        "summary": report.summary(),
    });
    serde_json::to_string_pretty(&out)
        .map_err(|e| IntegrityError::ConfigError(format!("Failed to render report: {}", e)))
}

pub fn format_create_summary(outcome: &CreateOutcome, color: bool) -> String {
    let mut out = format!(
        "Baseline hashes saved in '{}' ({} files).",
        outcome.baseline_path.display(),
        outcome.baseline.len()
    );
    if !outcome.failures.is_empty() {
        out.push_str(&format!(
            "\n\n{} files could not be hashed and were left out:\n",
            outcome.failures.len()
        ));
        for failure in &outcome.failures {
            out.push_str(&styled_label(ChangeKind::Error, color));
            out.push_str(failure.path.as_deref().unwrap_or("<unknown>"));
            out.push_str(&format!(": {}\n", failure.error));
        }
    }
    out
}
