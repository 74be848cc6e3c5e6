//! CLI parse: clap types for fixity. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// fixity - file integrity baselines and verification
#[derive(Parser)]
#[command(name = "fixity")]
#[command(about = "Record content fingerprints for a directory tree and report what changed")]
#[command(after_help = "Exit codes:\n  \
    0  success\n  \
    1  I/O or runtime failure\n  \
    2  configuration or usage error (invalid mode, missing or non-directory target)\n  \
    3  baseline file not found\n  \
    4  baseline file could not be parsed\n  \
    5  changes detected (only with --fail-on-change)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (overrides the global config file)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable logging to stderr (default: off)
    #[arg(long)]
    pub verbose: bool,

    /// Suppress the report on stdout; rely on the exit code
    #[arg(long, short = 'q')]
    pub quiet: bool,

    /// Disable colored report output
    #[arg(long)]
    pub no_color: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Hash every file under a directory and write a fresh baseline
    Create {
        /// Directory to fingerprint
        directory: PathBuf,
        /// Baseline file to write (default: hash.json or config baseline.path)
        #[arg(long)]
        baseline: Option<PathBuf>,
        /// Digest algorithm (sha256, blake3)
        #[arg(long)]
        algorithm: Option<String>,
    },
    /// Re-scan a directory, report changes against the baseline and update it
    Verify {
        /// Directory to check
        directory: PathBuf,
        /// Baseline file to compare against and update
        #[arg(long)]
        baseline: Option<PathBuf>,
        /// Digest algorithm (must match the one used to create the baseline)
        #[arg(long)]
        algorithm: Option<String>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Report without updating the baseline file
        #[arg(long)]
        dry_run: bool,
        /// Exit with code 5 when any change or error is reported
        #[arg(long)]
        fail_on_change: bool,
    },
    /// Show the records stored in a baseline file
    List {
        /// Baseline file to read
        #[arg(long)]
        baseline: Option<PathBuf>,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Prompt for a directory and an action (create or verify)
    Interactive {
        /// Baseline file to use
        #[arg(long)]
        baseline: Option<PathBuf>,
    },
}
