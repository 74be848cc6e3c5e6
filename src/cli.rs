//! CLI domain: parse, route, prompt, output, and presentation only.
//! Integrity logic lives in `integrity`; the route table only dispatches.

mod help;
mod output;
mod parse;
mod presentation;
mod prompt;
mod route;

pub use help::command_name;
pub use output::{map_error, CommandOutput, EXIT_CHANGES_DETECTED, EXIT_SUCCESS};
pub use parse::{Cli, Commands};
pub use presentation::{
    format_baseline_json, format_baseline_table, format_create_summary,
    format_verify_report_json, format_verify_report_text,
};
pub use prompt::{parse_mode_choice, Mode};
pub use route::RunContext;
