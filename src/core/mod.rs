//! Core logger types and traits

pub mod engine;
pub mod error;
pub mod log_level;
pub mod record;
pub mod ring;
pub mod sink;

pub use engine::{Engine, EngineBuilder, DEFAULT_MAX_FILE_SIZE, DEFAULT_RING_CAPACITY};
pub use error::{LoggerError, Result};
pub use log_level::LogLevel;
pub use record::Record;
pub use ring::RingQueue;
pub use sink::Sink;
