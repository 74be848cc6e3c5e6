//! CLI route: single route table and run context. Dispatches to the integrity
//! service and presentation.

use crate::baseline;
use crate::cli::output::{CommandOutput, EXIT_CHANGES_DETECTED};
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_baseline_json, format_baseline_table, format_create_summary,
    format_verify_report_json, format_verify_report_text,
};
use crate::cli::prompt::{self, Mode};
use crate::cli::command_name;
use crate::config::{ConfigLoader, FixityConfig};
use crate::error::IntegrityError;
use crate::integrity::IntegrityService;
use crate::scan::path::resolve_file_path;
use crate::types::Algorithm;
use std::path::{Path, PathBuf};
use tracing::info;

/// Runtime context for CLI execution: merged configuration and output settings.
pub struct RunContext {
    config: FixityConfig,
    color: bool,
}

impl RunContext {
    /// Create run context from an optional config path. Uses ConfigLoader only.
    pub fn new(config_path: Option<PathBuf>) -> Result<Self, IntegrityError> {
        Ok(Self::from_config(Self::load_config(config_path.as_deref())?))
    }

    pub fn from_config(config: FixityConfig) -> Self {
        Self {
            config,
            color: false,
        }
    }

    /// Load and validate configuration.
    pub fn load_config(config_path: Option<&Path>) -> Result<FixityConfig, IntegrityError> {
        let config = match config_path {
            Some(path) => ConfigLoader::load_from_file(path)?,
            None => ConfigLoader::load()?,
        };
        config.validate().map_err(IntegrityError::ConfigError)?;
        Ok(config)
    }

    /// Enable or disable colored report labels.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn config(&self) -> &FixityConfig {
        &self.config
    }

    /// Execute a command and return its rendered output.
    pub fn execute(&self, command: &Commands) -> Result<CommandOutput, IntegrityError> {
        info!(command = command_name(command), "Command starting");
        match command {
            Commands::Create {
                directory,
                baseline,
                algorithm,
            } => self.handle_create(directory, baseline.as_deref(), algorithm.as_deref()),
            Commands::Verify {
                directory,
                baseline,
                algorithm,
                format,
                dry_run,
                fail_on_change,
            } => self.handle_verify(
                directory,
                baseline.as_deref(),
                algorithm.as_deref(),
                format,
                *dry_run,
                *fail_on_change,
            ),
            Commands::List { baseline, format } => self.handle_list(baseline.as_deref(), format),
            Commands::Interactive { baseline } => {
                let (directory, mode) = prompt::prompt_request()?;
                self.execute_mode(mode, &directory, baseline.as_deref())
            }
        }
    }

    /// Run the action picked at the interactive menu.
    pub fn execute_mode(
        &self,
        mode: Mode,
        directory: &Path,
        baseline: Option<&Path>,
    ) -> Result<CommandOutput, IntegrityError> {
        match mode {
            Mode::Create => self.handle_create(directory, baseline, None),
            Mode::Verify => self.handle_verify(directory, baseline, None, "text", false, false),
        }
    }

    fn handle_create(
        &self,
        directory: &Path,
        baseline: Option<&Path>,
        algorithm: Option<&str>,
    ) -> Result<CommandOutput, IntegrityError> {
        let service = self.service(algorithm)?;
        let outcome = service.create_baseline(directory, &self.baseline_path(baseline))?;
        Ok(CommandOutput::success(format_create_summary(
            &outcome, self.color,
        )))
    }

    fn handle_verify(
        &self,
        directory: &Path,
        baseline: Option<&Path>,
        algorithm: Option<&str>,
        format: &str,
        dry_run: bool,
        fail_on_change: bool,
    ) -> Result<CommandOutput, IntegrityError> {
        check_format(format)?;
        let service = self.service(algorithm)?;
        let baseline_path = self.baseline_path(baseline);

        let outcome = if dry_run {
            service.check_integrity(directory, &baseline_path)?
        } else {
            service.verify_integrity(directory, &baseline_path)?
        };

        let text = if format == "json" {
            format_verify_report_json(&outcome.report)?
        } else {
            format_verify_report_text(&outcome.report, self.color)
        };
        let exit_code = if fail_on_change && outcome.report.has_changes() {
            EXIT_CHANGES_DETECTED
        } else {
            0
        };
        Ok(CommandOutput { text, exit_code })
    }

    fn handle_list(
        &self,
        baseline: Option<&Path>,
        format: &str,
    ) -> Result<CommandOutput, IntegrityError> {
        check_format(format)?;
        let path = resolve_file_path(&self.baseline_path(baseline))?;
        let stored = baseline::load_baseline(&path)?;
        let text = if format == "json" {
            format_baseline_json(&stored)?
        } else {
            format_baseline_table(&stored)
        };
        Ok(CommandOutput::success(text))
    }

    /// CLI flag wins over config.
    fn baseline_path(&self, flag: Option<&Path>) -> PathBuf {
        flag.map(Path::to_path_buf)
            .unwrap_or_else(|| self.config.baseline.path.clone())
    }

    fn service(&self, algorithm: Option<&str>) -> Result<IntegrityService, IntegrityError> {
        let mut options = self.config.scan.to_scan_options();
        if let Some(name) = algorithm {
            options.algorithm = name
                .parse::<Algorithm>()
                .map_err(IntegrityError::ConfigError)?;
        }
        Ok(IntegrityService::new(options))
    }
}

fn check_format(format: &str) -> Result<(), IntegrityError> {
    match format {
        "text" | "json" => Ok(()),
        other => Err(IntegrityError::ConfigError(format!(
            "Invalid format: {} (must be 'text' or 'json')",
            other
        ))),
    }
}
