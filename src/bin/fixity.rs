//! fixity CLI Binary
//!
//! Command-line interface for creating and verifying file integrity baselines.

use clap::Parser;
use fixity::cli::{Cli, RunContext};
use fixity::config::FixityConfig;
use fixity::logging::{init_logging, LoggingConfig};
use std::io::IsTerminal;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let config = match RunContext::load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", fixity::cli::map_error(&e));
            process::exit(e.exit_code());
        }
    };

    // Initialize logging early
    let logging_config = build_logging_config(&cli, &config);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("fixity starting");

    let color = !cli.no_color
        && std::env::var_os("NO_COLOR").is_none()
        && std::io::stdout().is_terminal();
    let context = RunContext::from_config(config).with_color(color);

    match context.execute(&cli.command) {
        Ok(output) => {
            info!(exit_code = output.exit_code, "Command completed");
            if !cli.quiet {
                println!("{}", output.text);
            }
            process::exit(output.exit_code);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", fixity::cli::map_error(&e));
            process::exit(e.exit_code());
        }
    }
}

/// Build logging configuration: logging stays off unless --verbose; CLI flags
/// override the config file.
fn build_logging_config(cli: &Cli, config: &FixityConfig) -> LoggingConfig {
    if !cli.verbose {
        return LoggingConfig {
            level: "off".to_string(),
            ..LoggingConfig::default()
        };
    }

    let mut config = config.logging.clone();
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }
    if cli.no_color {
        config.color = false;
    }
    config
}
