//! Logging macros.
//!
//! The engine-directed macros capture the call site's `file!()`/`line!()`
//! and only format the payload when the record passes the engine's filter.
//! The `glog*` family routes through the process-wide registry instead of a
//! named engine.
//!
//! # Examples
//!
//! ```no_run
//! use ringlog::{info, Engine};
//!
//! let engine = Engine::new("app.log").unwrap();
//! info!(engine, "listening on port {}", 8080);
//! ```

/// Log a message to an engine at an explicit level.
///
/// ```no_run
/// # use ringlog::{log, Engine, LogLevel};
/// # let engine = Engine::new("app.log").unwrap();
/// log!(engine, LogLevel::Info, "simple message");
/// log!(engine, LogLevel::Error, "error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($engine:expr, $level:expr, $($arg:tt)+) => {{
        let engine = &$engine;
        let level = $level;
        if engine.enabled(level) {
            engine.log(level, file!(), line!(), format!($($arg)+));
        }
    }};
}

/// Log a debug-level message to an engine.
#[macro_export]
macro_rules! debug {
    ($engine:expr, $($arg:tt)+) => {
        $crate::log!($engine, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message to an engine.
#[macro_export]
macro_rules! info {
    ($engine:expr, $($arg:tt)+) => {
        $crate::log!($engine, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message to an engine.
#[macro_export]
macro_rules! warn {
    ($engine:expr, $($arg:tt)+) => {
        $crate::log!($engine, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message to an engine.
#[macro_export]
macro_rules! error {
    ($engine:expr, $($arg:tt)+) => {
        $crate::log!($engine, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message to an engine.
#[macro_export]
macro_rules! fatal {
    ($engine:expr, $($arg:tt)+) => {
        $crate::log!($engine, $crate::LogLevel::Fatal, $($arg)+)
    };
}

/// Log to the registry's default file logger.
///
/// ```no_run
/// use ringlog::{glog, LogLevel};
///
/// glog!(LogLevel::Info, "started worker {}", 3);
/// ```
#[macro_export]
macro_rules! glog {
    ($level:expr, $($arg:tt)+) => {
        $crate::registry::log($level, file!(), line!(), format_args!($($arg)+))
    };
}

/// Log to a named file logger through the registry.
///
/// ```no_run
/// use ringlog::{glog_to, LogLevel};
///
/// glog_to!(LogLevel::Warn, "audit.log", "slow request: {}ms", 1500);
/// ```
#[macro_export]
macro_rules! glog_to {
    ($level:expr, $logger_file:expr, $($arg:tt)+) => {
        $crate::registry::log_with_file(
            $level,
            $logger_file,
            file!(),
            line!(),
            format_args!($($arg)+),
        )
    };
}

/// Log to the console logger singleton.
#[macro_export]
macro_rules! glog_console {
    ($level:expr, $($arg:tt)+) => {{
        let engine = $crate::registry::console_logger();
        $crate::log!(engine, $level, $($arg)+)
    }};
}
