//! CLI presentation: text and json formatters per command family.

mod baseline;
mod report;

pub use baseline::{format_baseline_json, format_baseline_table};
pub use report::{format_create_summary, format_verify_report_json, format_verify_report_text};
