//! Command-name contract for log fields.

use crate::cli::parse::Commands;

/// Stable command name (e.g. "verify") recorded with every command log line.
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Create { .. } => "create",
        Commands::Verify { .. } => "verify",
        Commands::List { .. } => "list",
        Commands::Interactive { .. } => "interactive",
    }
}
