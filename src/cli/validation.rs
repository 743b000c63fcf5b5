//! CLI argument validation functions
//!
//! Custom value parsers for arguments that need more than clap's
//! built-in checks.

use std::fs;
use std::path::PathBuf;

use crate::clock::Weekday;

/// Validate that a file path is accessible (exists and is readable)
pub fn validate_config_file_path(path_str: &str) -> Result<PathBuf, String> {
    let path = PathBuf::from(path_str);

    if !path.exists() {
        return Err(format!("Configuration file does not exist: '{}'", path_str));
    }

    if !path.is_file() {
        return Err(format!("Configuration path is not a file: '{}'", path_str));
    }

    match fs::File::open(&path) {
        Ok(_) => Ok(path),
        Err(e) => Err(format!("Cannot read configuration file '{}': {}", path_str, e)),
    }
}

/// Parse a weekday name or three-letter abbreviation
pub fn validate_weekday(day_str: &str) -> Result<Weekday, String> {
    day_str.parse()
}

/// Validate a log file destination
///
/// The file itself may not exist yet, but it cannot be a directory and its
/// parent directory must exist.
pub fn validate_log_path(path_str: &str) -> Result<PathBuf, String> {
    if path_str.trim().is_empty() {
        return Err("Log file path cannot be empty".to_string());
    }

    let path = PathBuf::from(path_str);
    if path.is_dir() {
        return Err(format!("Log file path is a directory: '{}'", path_str));
    }

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.is_dir()
    {
        return Err(format!(
            "Directory for log file does not exist: '{}'",
            parent.display()
        ));
    }

    Ok(path)
}
