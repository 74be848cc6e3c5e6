//! Interactive prompt adapter: asks for a directory and an action, nothing more.

use crate::error::IntegrityError;
use dialoguer::Input;
use std::path::PathBuf;

/// Action chosen at the interactive menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Create,
    Verify,
}

/// Map the menu answer to a mode. Anything but "1" or "2" is rejected.
pub fn parse_mode_choice(choice: &str) -> Result<Mode, IntegrityError> {
    match choice.trim() {
        "1" => Ok(Mode::Create),
        "2" => Ok(Mode::Verify),
        other => Err(IntegrityError::ConfigError(format!(
            "Invalid input: '{}' (enter 1 or 2)",
            other
        ))),
    }
}

/// Prompt for the directory and the mode on the terminal.
pub fn prompt_request() -> Result<(PathBuf, Mode), IntegrityError> {
    eprintln!("File Integrity Checker");

    let directory: String = Input::new()
        .with_prompt("Enter the directory path")
        .interact_text()
        .map_err(|e| IntegrityError::ConfigError(format!("Failed to get user input: {}", e)))?;

    eprintln!("\nChoose an option:");
    eprintln!("1. Create baseline");
    eprintln!("2. Verify integrity");

    let choice: String = Input::new()
        .with_prompt("Enter 1 or 2")
        .allow_empty(true)
        .interact_text()
        .map_err(|e| IntegrityError::ConfigError(format!("Failed to get user input: {}", e)))?;

    let mode = parse_mode_choice(&choice)?;
    Ok((PathBuf::from(directory.trim()), mode))
}
