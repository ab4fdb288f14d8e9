//! # ringlog
//!
//! An asynchronous, low-latency logging library for multi-threaded
//! processes.
//!
//! Producers on any thread hand records to a bounded lock-free MPMC ring;
//! a single background worker per engine drains them to a file or console
//! sink with size-bounded truncate-and-reopen rotation.
//!
//! ## Features
//!
//! - **Non-blocking producers**: `log` never waits on the queue; a full
//!   ring drops the record rather than stalling the caller
//! - **Lock-free hand-off**: turn-sequenced MPMC ring with cache-line
//!   isolated cursors
//! - **Pluggable sinks**: buffered file output or raw console output
//! - **Process-wide registry**: shared engines addressed by file name, plus
//!   a `key=value` configuration loader
//!
//! ## Example
//!
//! ```no_run
//! use ringlog::{info, Engine, LogLevel};
//!
//! let engine = Engine::builder()
//!     .level(LogLevel::Debug)
//!     .build("app.log")
//!     .unwrap();
//!
//! info!(engine, "listening on port {}", 8080);
//! engine.sync();
//! ```

pub mod config;
pub mod core;
pub mod macros;
pub mod registry;
pub mod sinks;

pub mod prelude {
    pub use crate::config::load_configuration;
    pub use crate::core::{
        Engine, EngineBuilder, LogLevel, LoggerError, Record, Result, RingQueue, Sink,
        DEFAULT_MAX_FILE_SIZE, DEFAULT_RING_CAPACITY,
    };
    pub use crate::sinks::{ConsoleSink, FileSink};
}

pub use crate::config::load_configuration;
pub use crate::core::{
    Engine, EngineBuilder, LogLevel, LoggerError, Record, Result, RingQueue, Sink,
    DEFAULT_MAX_FILE_SIZE, DEFAULT_RING_CAPACITY,
};
pub use crate::sinks::{ConsoleSink, FileSink};
