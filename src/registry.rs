//! Process-wide logger registry
//!
//! Maps full log-file paths to shared engine handles, keeps the default log
//! directory and filename, and owns the console logger singleton. All state
//! is lazily initialised and lives for the whole process; engines inside the
//! map are kept alive by shared ownership and shut down when the last holder
//! drops them.

use crate::core::{Engine, LogLevel, Result};
use crate::sinks::ConsoleSink;
use once_cell::sync::Lazy;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

static FILE_LOGGERS: Lazy<Mutex<HashMap<String, Arc<Engine>>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

static LOG_FILE_PATH: Lazy<Mutex<String>> = Lazy::new(|| Mutex::new("./".to_string()));

static LOG_FILE_NAME: Lazy<Mutex<String>> =
    Lazy::new(|| Mutex::new("global_logfile.log".to_string()));

static CONSOLE_LOGGER: Lazy<Arc<Engine>> = Lazy::new(|| {
    Arc::new(Engine::builder().build_with_sink("console", Box::new(ConsoleSink::new())))
});

/// Set the directory prefix prepended to logger names. The prefix is used
/// verbatim, so it normally ends with `/`.
pub fn set_log_file_path(path: impl Into<String>) {
    *LOG_FILE_PATH.lock() = path.into();
}

/// Current directory prefix.
pub fn log_file_path() -> String {
    LOG_FILE_PATH.lock().clone()
}

/// Set the filename used when a logger is requested with an empty name.
pub fn set_log_file_name(name: impl Into<String>) {
    *LOG_FILE_NAME.lock() = name.into();
}

/// Current default filename.
pub fn log_file_name() -> String {
    LOG_FILE_NAME.lock().clone()
}

fn full_path(name: &str) -> String {
    let prefix = LOG_FILE_PATH.lock();
    if name.is_empty() {
        format!("{}{}", prefix, LOG_FILE_NAME.lock())
    } else {
        format!("{}{}", prefix, name)
    }
}

/// Shared engine for `name`, creating it on first use. An empty name
/// resolves to the default filename.
///
/// # Errors
///
/// Returns an error when a new engine's sink cannot be opened.
pub fn file_logger(name: &str) -> Result<Arc<Engine>> {
    let path = full_path(name);
    let mut map = FILE_LOGGERS.lock();
    if let Some(engine) = map.get(&path) {
        return Ok(Arc::clone(engine));
    }
    let engine = Arc::new(Engine::new(&path)?);
    map.insert(path, Arc::clone(&engine));
    Ok(engine)
}

/// Remove the registry's entry for `name`. If nothing else holds the
/// handle, the engine shuts down and its sink closes.
pub fn reset_file_logger(name: &str) {
    let path = full_path(name);
    FILE_LOGGERS.lock().remove(&path);
}

/// Console logger singleton (its own engine on a console sink).
pub fn console_logger() -> Arc<Engine> {
    Arc::clone(&CONSOLE_LOGGER)
}

/// Apply a severity threshold to the default file logger.
///
/// # Errors
///
/// Returns an error when the default logger does not exist yet and cannot
/// be created.
pub fn set_default_verbosity(level: LogLevel) -> Result<()> {
    file_logger("")?.set_log_level(level);
    Ok(())
}

/// Route one record to the default file logger.
///
/// The payload is only rendered when the record passes the logger's filter.
/// A missing default logger is reported on stderr rather than surfaced, so
/// call sites stay infallible.
pub fn log(level: LogLevel, source_file: &'static str, source_line: u32, args: fmt::Arguments<'_>) {
    match file_logger("") {
        Ok(engine) => {
            if engine.enabled(level) {
                engine.log(level, source_file, source_line, args.to_string());
            }
        }
        Err(e) => eprintln!("[ringlog] default logger unavailable: {}", e),
    }
}

/// Route one record to the named file logger instead of the default.
pub fn log_with_file(
    level: LogLevel,
    logger_file: &str,
    source_file: &'static str,
    source_line: u32,
    args: fmt::Arguments<'_>,
) {
    match file_logger(logger_file) {
        Ok(engine) => {
            if engine.enabled(level) {
                engine.log(level, source_file, source_line, args.to_string());
            }
        }
        Err(e) => eprintln!("[ringlog] logger '{}' unavailable: {}", logger_file, e),
    }
}

/// Serialises tests that touch the process-global registry state.
#[cfg(test)]
pub(crate) static REGISTRY_TEST_LOCK: Mutex<()> = Mutex::new(());
