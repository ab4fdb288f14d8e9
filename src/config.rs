//! Configuration file loader
//!
//! Reads a line-oriented `key=value` file and applies recognised keys to
//! the registry. The grammar is deliberately small: the first `=` splits
//! key from value, nothing is trimmed, unknown keys are ignored.

use crate::core::error::{LoggerError, Result};
use crate::core::log_level::LogLevel;
use crate::registry;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Load `path` and apply its settings.
///
/// Recognised keys:
///
/// | key           | effect                                               |
/// |---------------|------------------------------------------------------|
/// | `verbosity`   | threshold for the default logger (DEBUG on bad value)|
/// | `logFilePath` | registry default path prefix                         |
///
/// # Errors
///
/// Returns an error when the file cannot be opened or read, or when
/// applying `verbosity` has to create the default logger and its sink
/// cannot be opened.
pub fn load_configuration(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| LoggerError::config_open(path.display().to_string(), e))?;

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| LoggerError::config_read(path.display().to_string(), e))?;
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        match key {
            "verbosity" => {
                let level = value.parse().unwrap_or(LogLevel::Debug);
                registry::set_default_verbosity(level)?;
            }
            "logFilePath" => registry::set_log_file_path(value),
            _ => {}
        }
    }
    Ok(())
}
